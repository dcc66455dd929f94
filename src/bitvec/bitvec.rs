use super::digit::{Digit, BITS};

/// A growable set of node indices, one bit per node.
///
/// Uses `u64` digits on 64-bit architectures and `u32` digits elsewhere.
/// Reading a bit past the end of the vector is always `false`.
#[derive(Debug, Clone, Default)]
pub struct BitVec(Vec<Digit>);

impl BitVec {
    /// Initialize with enough capacity to hold `bits` bits without reallocating.
    #[inline]
    pub fn with_capacity(bits: usize) -> Self {
        Self(Vec::with_capacity(bits / BITS + (bits % BITS > 0) as usize))
    }

    /// Set the bit at the given index, returning `true` if it was previously unset.
    ///
    /// If the bit index is out of range, it will resize the array.
    #[inline]
    pub fn insert(&mut self, bit_index: usize) -> bool {
        let (i, j) = (bit_index / BITS, bit_index % BITS);
        if i >= self.0.len() {
            self.0.resize(i + 1, 0);
        }

        let mask: Digit = 1 << j;
        let was_unset = self.0[i] & mask == 0;
        self.0[i] |= mask;
        was_unset
    }

    /// Get the bit at the given index.
    ///
    /// If the bit index is out of range, it will return `false`.
    #[inline]
    pub fn get_bit(&self, bit_index: usize) -> bool {
        let (i, j) = (bit_index / BITS, bit_index % BITS);
        self.0.get(i).is_some_and(|digit| digit & (1 << j) != 0)
    }

    /// Count the number of 1's in the bit vector.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.0.iter().map(|x| x.count_ones() as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_count() {
        let mut bv = BitVec::with_capacity(200);
        assert_eq!(bv.count_ones(), 0);

        assert!(bv.insert(3));
        assert!(bv.insert(130));
        assert!(!bv.insert(3));
        assert!(bv.insert(BITS - 1));
        assert!(bv.insert(BITS));

        assert!(bv.get_bit(3));
        assert!(bv.get_bit(130));
        assert!(bv.get_bit(BITS - 1));
        assert!(bv.get_bit(BITS));
        assert!(!bv.get_bit(4));
        assert!(!bv.get_bit(10_000));
        assert_eq!(bv.count_ones(), 4);
    }
}
