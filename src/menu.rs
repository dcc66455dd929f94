//! interactive menu around a single current maze.

use anyhow::Context;
use maze_runner::{build_maze_with_rng, solve, text, MazeMatrix};
use rand::rngs::StdRng;
use std::{
    fs,
    io::{BufRead, Write},
    path::Path,
};

const INCORRECT_OPTION: &str = "Incorrect option. Please try again";

/// Largest side accepted for a new maze.
pub const MAX_SIZE: usize = 1000;

/// The maze the user is working on, and the generator for new ones.
pub struct Session {
    maze: Option<MazeMatrix>,
    rng: StdRng,
}

impl Session {
    pub fn new(rng: StdRng) -> Self {
        Session { maze: None, rng }
    }

    #[inline]
    pub fn maze(&self) -> Option<&MazeMatrix> {
        self.maze.as_ref()
    }

    /// Replace the current maze with a new `size × size` one.
    ///
    /// Sizes above [MAX_SIZE] are refused.
    pub fn generate(&mut self, size: usize) -> anyhow::Result<&MazeMatrix> {
        anyhow::ensure!(
            size <= MAX_SIZE,
            "maze size {size} is too large; the largest size is {MAX_SIZE}"
        );

        let maze = build_maze_with_rng(size, size, &mut self.rng)?;
        tracing::info!(size, "generated a new maze");
        Ok(&*self.maze.insert(maze))
    }

    /// Replace the current maze with the one stored at `path`.
    pub fn load(&mut self, path: impl AsRef<Path>) -> anyhow::Result<&MazeMatrix> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let maze = text::decode(&contents)
            .with_context(|| format!("{} does not hold a maze", path.display()))?;

        tracing::info!(
            path = %path.display(),
            rows = maze.rows(),
            cols = maze.cols(),
            "loaded maze"
        );
        Ok(&*self.maze.insert(maze))
    }

    /// Write the current maze to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let maze = self.maze.as_ref().context("there is no maze to save")?;
        fs::write(path, text::encode(maze))
            .with_context(|| format!("failed to write {}", path.display()))?;

        tracing::info!(path = %path.display(), "saved maze");
        Ok(())
    }

    /// Solve a copy of the current maze, leaving the current one without a route.
    pub fn escape(&self) -> anyhow::Result<MazeMatrix> {
        let mut maze = self.maze.clone().context("there is no maze to solve")?;
        solve(&mut maze)?;
        Ok(maze)
    }
}

/// Run the menu loop until the user picks `0` or the input ends.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut out: W,
) -> anyhow::Result<()> {
    loop {
        print_menu(&mut out, session.maze().is_some())?;

        let Some(line) = read_line(&mut input)? else {
            return Ok(());
        };

        let has_maze = session.maze().is_some();
        match line.parse::<u8>() {
            Ok(1) => {
                writeln!(out, "Enter the size of a new maze")?;
                let Some(size) = read_line(&mut input)? else {
                    return Ok(());
                };
                match size.parse::<usize>() {
                    Ok(size) => match session.generate(size) {
                        Ok(maze) => write!(out, "{maze}")?,
                        Err(err) => writeln!(out, "{err:#}")?,
                    },
                    Err(_) => writeln!(out, "{INCORRECT_OPTION}")?,
                }
            }
            Ok(2) => {
                writeln!(out, "Enter the file name")?;
                let Some(path) = read_line(&mut input)? else {
                    return Ok(());
                };
                if let Err(err) = session.load(&path) {
                    tracing::warn!(%path, "could not load maze: {err:#}");
                    writeln!(out, "Cannot load the maze: {err:#}")?;
                }
            }
            Ok(3) if has_maze => {
                writeln!(out, "Enter the file name")?;
                let Some(path) = read_line(&mut input)? else {
                    return Ok(());
                };
                if let Err(err) = session.save(&path) {
                    tracing::warn!(%path, "could not save maze: {err:#}");
                    writeln!(out, "Cannot save the maze: {err:#}")?;
                }
            }
            Ok(4) if has_maze => {
                if let Some(maze) = session.maze() {
                    write!(out, "{maze}")?;
                }
            }
            Ok(5) if has_maze => match session.escape() {
                Ok(solved) => write!(out, "{solved}")?,
                Err(err) => writeln!(out, "Cannot find the escape: {err:#}")?,
            },
            Ok(0) => {
                writeln!(out, "Bye!")?;
                return Ok(());
            }
            _ => writeln!(out, "{INCORRECT_OPTION}")?,
        }
    }
}

fn print_menu(out: &mut impl Write, has_maze: bool) -> std::io::Result<()> {
    writeln!(out, "=== Menu ===")?;
    writeln!(out, "1. Generate a new maze")?;
    writeln!(out, "2. Load a maze")?;
    if has_maze {
        writeln!(out, "3. Save the maze")?;
        writeln!(out, "4. Display the maze")?;
        writeln!(out, "5. Find the escape")?;
    }
    writeln!(out, "0. Exit")?;
    write!(out, ">")?;
    out.flush()
}

/// Read one trimmed line, or `None` at the end of input.
fn read_line(input: &mut impl BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_runner::{Cell, MazeError, Pos};
    use rand::SeedableRng;
    use std::io::Cursor;

    fn session() -> Session {
        Session::new(StdRng::seed_from_u64(17))
    }

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        run(session, Cursor::new(script.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_menu_before_maze() {
        let mut session = session();
        let out = run_script(&mut session, "4\nfoo\n0\n");

        assert!(!out.contains("3. Save the maze"));
        assert_eq!(out.matches(INCORRECT_OPTION).count(), 2);
        assert!(out.ends_with("Bye!\n"));
        assert!(session.maze().is_none());
    }

    #[test]
    fn test_generate_and_escape() {
        let mut session = session();
        let out = run_script(&mut session, "1\n7\n5\n");

        assert!(out.contains("5. Find the escape"));
        assert!(out.contains("//"));

        // escaping leaves the current maze untouched
        let maze = session.maze().unwrap();
        assert_eq!((maze.rows(), maze.cols()), (7, 7));
        assert_eq!(maze.count(Cell::Route), 0);
    }

    #[test]
    fn test_invalid_size() {
        let mut session = session();
        let out = run_script(&mut session, "1\n0\n1\nabc\n0\n");

        assert!(out.contains("invalid maze size 0x0"));
        assert!(out.contains(INCORRECT_OPTION));
        assert!(session.maze().is_none());

        let out = run_script(&mut session, &format!("1\n{}\n1\n100000\n0\n", MAX_SIZE + 1));
        assert_eq!(out.matches("is too large").count(), 2);
        assert!(session.maze().is_none());

        assert!(session.generate(usize::MAX).is_err());
        assert!(session.maze().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("maze_runner_menu_{}.txt", std::process::id()));
        let path_str = path.to_str().unwrap();

        let mut session = session();
        run_script(&mut session, &format!("1\n9\n3\n{path_str}\n0\n"));
        let saved = session.maze().unwrap().clone();

        let mut other = Session::new(StdRng::seed_from_u64(99));
        let out = run_script(&mut other, &format!("2\n{path_str}\n4\n0\n"));
        assert_eq!(other.maze(), Some(&saved));
        assert!(out.contains(&saved.to_string()));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_errors() {
        let mut session = session();
        let out = run_script(&mut session, "2\n/definitely/not/a/maze.txt\n0\n");
        assert!(out.contains("Cannot load the maze"));
        assert!(session.maze().is_none());
    }

    #[test]
    fn test_escape_without_route() {
        let mut session = session();
        session.maze = Some(MazeMatrix::walls(3, 3));
        let err = session.escape().unwrap_err();
        assert!(err.to_string().contains("no openings"));

        let mut maze = MazeMatrix::walls(3, 3);
        maze.set(Pos::new(1, 0), Cell::Open);
        maze.set(Pos::new(1, 2), Cell::Open);
        session.maze = Some(maze);
        let err = session.escape().unwrap_err();
        assert_eq!(
            err.downcast_ref::<MazeError>(),
            Some(&MazeError::NoRouteFound {
                entrance: Pos::new(1, 0),
                exit: Pos::new(1, 2),
            })
        );
    }

    #[test]
    fn test_end_of_input() {
        let mut session = session();
        let out = run_script(&mut session, "1\n");
        assert!(out.ends_with("Enter the size of a new maze\n"));
    }
}
