//! Truth table algebra.
//!
//! A [`TruthTable`] is a completely-specified Boolean function stored as a
//! bit vector of length `2^n`: bit `a` is the function value under the
//! assignment `a`, with `x_0` at the least-significant assignment bit.
//! `n` is the *representation* size, not the support size --- two tables of
//! different length can denote the same function after [`TruthTable::align`].
//!
//! All operations are `O(2^n)` and pure, except [`TruthTable::extend`] and
//! [`TruthTable::align`] which are explicitly in-place. The canonical
//! single-variable tables for `x_0 .. x_5` live in the process-wide
//! [`ProjectionStore`].

use std::fmt::{Display, Formatter};
use std::ops::{BitAnd, BitOr, BitXor, Not};

use once_cell::sync::Lazy;

use crate::bits::Bits;
use crate::error::{Error, Result};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// The canonical width-64 projection patterns for `x_0 .. x_5`.
const PROJECTION_MASKS: [u64; 6] = [
    0xaaaa_aaaa_aaaa_aaaa,
    0xcccc_cccc_cccc_cccc,
    0xf0f0_f0f0_f0f0_f0f0,
    0xff00_ff00_ff00_ff00,
    0xffff_0000_ffff_0000,
    0xffff_ffff_0000_0000,
];

/// Process-wide store of the precomputed projection tables.
///
/// Lazily initialized on first use, immutable afterwards, safe to share
/// across threads read-only. Variables `>= WIDTH` are synthesized on
/// demand by [`TruthTable::nth_var`] instead of being stored.
pub struct ProjectionStore {
    tables: Vec<TruthTable>,
}

impl ProjectionStore {
    /// Number of precomputed projection variables.
    pub const WIDTH: u32 = 6;

    /// Returns the singleton instance.
    pub fn instance() -> &'static ProjectionStore {
        static STORE: Lazy<ProjectionStore> = Lazy::new(ProjectionStore::build);
        &STORE
    }

    fn build() -> Self {
        let tables = PROJECTION_MASKS
            .iter()
            .map(|&mask| {
                let mut bits = Bits::new(64);
                for b in 0..64 {
                    if (mask >> b) & 1 != 0 {
                        bits.set(b);
                    }
                }
                TruthTable { bits }
            })
            .collect();
        Self { tables }
    }

    /// Returns the canonical width-64 table for `x_i`, `i < WIDTH`.
    pub fn get(&self, i: u32) -> &TruthTable {
        assert!(i < Self::WIDTH, "projection x{} is not stored", i);
        &self.tables[i as usize]
    }
}

/// A completely-specified Boolean function as a packed bit vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    bits: Bits,
}

// Constructors
impl TruthTable {
    /// The constant-0 function, length `2^0`.
    pub fn const0() -> Self {
        Self { bits: Bits::new(1) }
    }

    /// The constant-1 function, length `2^0`.
    pub fn const1() -> Self {
        let mut bits = Bits::new(1);
        bits.set(0);
        Self { bits }
    }

    /// The projection `x_i`, length `2^(i+1)`.
    ///
    /// For `i < 6` the table is cut from the stored canonical pattern; for
    /// larger variables it is synthesized (low half 0, high half 1).
    pub fn nth_var(i: u32) -> Self {
        let len = 1usize << (i + 1);
        let mut bits = Bits::new(len);
        if i < ProjectionStore::WIDTH {
            let stored = ProjectionStore::instance().get(i);
            for a in 0..len {
                if stored.bit(a) {
                    bits.set(a);
                }
            }
        } else {
            for a in len / 2..len {
                bits.set(a);
            }
        }
        Self { bits }
    }

    /// Wraps a raw bit vector; the length must be a power of two.
    pub fn from_bits(bits: Bits) -> Result<Self> {
        if !bits.len().is_power_of_two() {
            return Err(Error::InvalidLength(bits.len()));
        }
        Ok(Self { bits })
    }

    /// Parses the hexadecimal form produced by [`TruthTable::to_hex`].
    ///
    /// The digit count fixes the length and must be a power of two. Tables
    /// shorter than one nibble have no distinct hex form of their own; their
    /// one-character serialization parses back as a 4-bit table, which keeps
    /// `to_hex` round-trip stable.
    pub fn from_hex(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::InvalidArgument("empty hex string".into()));
        }
        let nibbles = s.len();
        if !nibbles.is_power_of_two() {
            return Err(Error::InvalidLength(nibbles * 4));
        }
        let mut bits = Bits::new(nibbles * 4);
        for (j, ch) in s.chars().enumerate() {
            let v = ch
                .to_digit(16)
                .ok_or_else(|| Error::InvalidArgument(format!("invalid hex digit {:?}", ch)))?;
            let base = (nibbles - 1 - j) * 4;
            for b in 0..4 {
                if (v >> b) & 1 != 0 {
                    bits.set(base + b);
                }
            }
        }
        Ok(Self { bits })
    }
}

// Getters
impl TruthTable {
    /// Returns the length of the bit vector (`2^n`).
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns true if the table has no bits (never holds for a valid table).
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the function value under assignment `a`.
    #[inline]
    pub fn bit(&self, a: usize) -> bool {
        self.bits.get(a)
    }

    /// Sets the function value under assignment `a`.
    pub fn set_bit(&mut self, a: usize, value: bool) {
        self.bits.assign(a, value);
    }

    /// Returns `n` such that `len() == 2^n`.
    ///
    /// This is the representation size, not the support size. Fails with
    /// [`Error::InvalidLength`] when the length is not a power of two,
    /// which cannot happen for tables built through this module.
    pub fn num_vars(&self) -> Result<u32> {
        let len = self.len();
        if !len.is_power_of_two() {
            return Err(Error::InvalidLength(len));
        }
        Ok(len.trailing_zeros())
    }

    fn check_var(&self, i: u32) -> Result<u32> {
        let n = self.num_vars()?;
        if i >= n {
            return Err(Error::InvalidArgument(format!(
                "variable x{} out of range for a table on {} variables",
                i, n
            )));
        }
        Ok(n)
    }
}

// Resizing
impl TruthTable {
    /// Extends the table in place to `2^to` bits by tiling the pattern.
    ///
    /// No-op when `to <= num_vars()`; the operation never shrinks.
    pub fn extend(&mut self, to: u32) -> Result<()> {
        let n = self.num_vars()?;
        if to <= n {
            return Ok(());
        }
        let old_len = self.len();
        let new_len = 1usize << to;
        let mut bits = Bits::new(new_len);
        let mask = old_len - 1;
        for a in 0..new_len {
            if self.bit(a & mask) {
                bits.set(a);
            }
        }
        self.bits = bits;
        Ok(())
    }

    /// Extends whichever of the two tables is smaller to match the other.
    pub fn align(t1: &mut TruthTable, t2: &mut TruthTable) -> Result<()> {
        let n1 = t1.num_vars()?;
        let n2 = t2.num_vars()?;
        if n1 < n2 {
            t1.extend(n2)
        } else {
            t2.extend(n1)
        }
    }
}

// Support
impl TruthTable {
    /// Checks whether the function is sensitive to `x_i`.
    pub fn has_var(&self, i: u32) -> Result<bool> {
        self.check_var(i)?;
        let step = 1usize << i;
        let mut base = 0;
        while base < self.len() {
            for a in base..base + step {
                if self.bit(a) != self.bit(a + step) {
                    return Ok(true);
                }
            }
            base += 2 * step;
        }
        Ok(false)
    }

    /// Returns the support as a bit vector of length `num_vars()`.
    pub fn support(&self) -> Result<Bits> {
        let n = self.num_vars()?;
        let mut support = Bits::new(n as usize);
        for i in 0..n {
            if self.has_var(i)? {
                support.set(i as usize);
            }
        }
        Ok(support)
    }

    /// Returns the number of variables in the support.
    pub fn support_size(&self) -> Result<u32> {
        Ok(self.support()?.count() as u32)
    }
}

// Cofactors and quantification
impl TruthTable {
    fn cof(&self, i: u32, value: bool) -> Result<TruthTable> {
        self.check_var(i)?;
        let half = self.len() / 2;
        let low_mask = (1usize << i) - 1;
        let mut bits = Bits::new(half);
        for ap in 0..half {
            let a = ((ap & !low_mask) << 1) | (ap & low_mask) | ((value as usize) << i);
            if self.bit(a) {
                bits.set(ap);
            }
        }
        Ok(TruthTable { bits })
    }

    /// The cofactor with `x_i = 0`, re-indexed with bit `i` removed.
    pub fn cof0(&self, i: u32) -> Result<TruthTable> {
        self.cof(i, false)
    }

    /// The cofactor with `x_i = 1`, re-indexed with bit `i` removed.
    pub fn cof1(&self, i: u32) -> Result<TruthTable> {
        self.cof(i, true)
    }

    fn cof_is_const(&self, i: u32, side: bool, constant: bool) -> Result<bool> {
        self.check_var(i)?;
        let step = 1usize << i;
        let mut base = if side { step } else { 0 };
        while base < self.len() {
            for a in base..base + step {
                if self.bit(a) != constant {
                    return Ok(false);
                }
            }
            base += 2 * step;
        }
        Ok(true)
    }

    /// Checks `cof0(i) == 0` without materializing the cofactor.
    pub fn cof0_is_const0(&self, i: u32) -> Result<bool> {
        self.cof_is_const(i, false, false)
    }

    /// Checks `cof0(i) == 1` without materializing the cofactor.
    pub fn cof0_is_const1(&self, i: u32) -> Result<bool> {
        self.cof_is_const(i, false, true)
    }

    /// Checks `cof1(i) == 0` without materializing the cofactor.
    pub fn cof1_is_const0(&self, i: u32) -> Result<bool> {
        self.cof_is_const(i, true, false)
    }

    /// Checks `cof1(i) == 1` without materializing the cofactor.
    pub fn cof1_is_const1(&self, i: u32) -> Result<bool> {
        self.cof_is_const(i, true, true)
    }

    /// Checks whether the two cofactors on `x_i` are bitwise complements.
    pub fn cofs_opposite(&self, i: u32) -> Result<bool> {
        self.check_var(i)?;
        let step = 1usize << i;
        let mut base = 0;
        while base < self.len() {
            for a in base..base + step {
                if self.bit(a) == self.bit(a + step) {
                    return Ok(false);
                }
            }
            base += 2 * step;
        }
        Ok(true)
    }

    /// Existential quantification of `x_i`: `cof0 | cof1`, half length.
    pub fn exists(&self, i: u32) -> Result<TruthTable> {
        let mut result = self.cof0(i)?;
        result.bits.or_assign(&self.cof1(i)?.bits);
        Ok(result)
    }

    /// Universal quantification of `x_i`: `cof0 & cof1`, half length.
    pub fn forall(&self, i: u32) -> Result<TruthTable> {
        let mut result = self.cof0(i)?;
        result.bits.and_assign(&self.cof1(i)?.bits);
        Ok(result)
    }
}

// Variable manipulation
impl TruthTable {
    /// Swaps the roles of `x_i` and `x_j`; identity when `i == j`.
    pub fn permute(&self, i: u32, j: u32) -> Result<TruthTable> {
        self.check_var(i)?;
        self.check_var(j)?;
        if i == j {
            return Ok(self.clone());
        }
        let mi = 1usize << i;
        let mj = 1usize << j;
        let mut bits = Bits::new(self.len());
        for a in 0..self.len() {
            let bi = a & mi != 0;
            let bj = a & mj != 0;
            let b = if bi != bj { a ^ (mi | mj) } else { a };
            if self.bit(b) {
                bits.set(a);
            }
        }
        Ok(TruthTable { bits })
    }

    /// Removes `x_i` from the representation.
    ///
    /// Fails with [`Error::PreconditionViolated`] when the function still
    /// depends on `x_i`; otherwise both cofactors agree and the result is
    /// their common half-length table.
    pub fn remove_var(&self, i: u32) -> Result<TruthTable> {
        if self.has_var(i)? {
            return Err(Error::PreconditionViolated(format!(
                "variable x{} is still in the support",
                i
            )));
        }
        self.cof0(i)
    }

    /// The table for `f(x_0, ..., !x_i, ...)`: the two cofactor blocks on
    /// `x_i` exchanged positionally.
    pub fn flip(&self, i: u32) -> Result<TruthTable> {
        self.check_var(i)?;
        let m = 1usize << i;
        let mut bits = Bits::new(self.len());
        for a in 0..self.len() {
            if self.bit(a ^ m) {
                bits.set(a);
            }
        }
        Ok(TruthTable { bits })
    }
}

// Minbase
impl TruthTable {
    /// Compacts the table to its minimal base.
    ///
    /// Support variables are permuted to the front positions (their
    /// relative order preserved) and all non-support variables are removed.
    /// Returns the compacted table together with the support vector over
    /// the original variable space. Idempotent.
    pub fn to_minbase(&self) -> Result<(TruthTable, Bits)> {
        let n = self.num_vars()?;
        let support = self.support()?;
        let k = support.count() as u32;

        let mut t = self.clone();
        let mut next = 0;
        for i in 0..n {
            if support.get(i as usize) {
                if i != next {
                    t = t.permute(i, next)?;
                }
                next += 1;
            }
        }
        while t.num_vars()? > k {
            t = t.remove_var(k)?;
        }
        Ok((t, support))
    }

    /// Like [`TruthTable::to_minbase`], but caps the result at `max_size`
    /// variables.
    ///
    /// When the support is larger than `max_size`, the compacted table is
    /// *truncated* to `2^max_size` bits: the function's dependency on the
    /// excess support variables is discarded, not quantified out. This is
    /// lossy and changes the function, not just its representation.
    pub fn to_minbase_and_discard(&self, max_size: u32) -> Result<(TruthTable, Bits)> {
        let (mut t, support) = self.to_minbase()?;
        if t.num_vars()? > max_size {
            let new_len = 1usize << max_size;
            let mut bits = Bits::new(new_len);
            for a in 0..new_len {
                if t.bit(a) {
                    bits.set(a);
                }
            }
            t = TruthTable { bits };
        }
        Ok((t, support))
    }

    /// Expands a minbase table back into a larger variable space.
    ///
    /// `pattern` ranges over the target space; set positions receive the
    /// table's variables in order, clear positions become don't-care
    /// (replicated) variables. The pattern must select exactly
    /// `num_vars()` positions.
    pub fn from_minbase(&self, pattern: &Bits) -> Result<TruthTable> {
        let n = self.num_vars()?;
        if pattern.count() != n as usize {
            return Err(Error::InvalidArgument(format!(
                "pattern selects {} positions for a table on {} variables",
                pattern.count(),
                n
            )));
        }
        let m = pattern.len();
        let mut bits = Bits::new(1usize << m);
        for a in 0..bits.len() {
            let mut ap = 0usize;
            let mut k = 0;
            for p in 0..m {
                if pattern.get(p) {
                    if a & (1 << p) != 0 {
                        ap |= 1 << k;
                    }
                    k += 1;
                }
            }
            if self.bit(ap) {
                bits.set(a);
            }
        }
        Ok(TruthTable { bits })
    }
}

// Serialization
impl TruthTable {
    /// Deterministic lowercase hex form, most-significant nibble first,
    /// `max(1, len/4)` characters. Used as a cross-process canonical key.
    pub fn to_hex(&self) -> String {
        let nibbles = std::cmp::max(1, self.len() / 4);
        let mut s = String::with_capacity(nibbles);
        for idx in (0..nibbles).rev() {
            let mut v = 0usize;
            for b in 0..4 {
                if self.bit(idx * 4 + b) {
                    v |= 1 << b;
                }
            }
            s.push(HEX_DIGITS[v] as char);
        }
        s
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Not for &TruthTable {
    type Output = TruthTable;

    fn not(self) -> Self::Output {
        let mut result = self.clone();
        result.bits.invert();
        result
    }
}

impl Not for TruthTable {
    type Output = TruthTable;

    fn not(mut self) -> Self::Output {
        self.bits.invert();
        self
    }
}

impl BitAnd for &TruthTable {
    type Output = TruthTable;

    fn bitand(self, rhs: Self) -> Self::Output {
        assert_eq!(self.len(), rhs.len(), "truth tables must be aligned");
        let mut result = self.clone();
        result.bits.and_assign(&rhs.bits);
        result
    }
}

impl BitOr for &TruthTable {
    type Output = TruthTable;

    fn bitor(self, rhs: Self) -> Self::Output {
        assert_eq!(self.len(), rhs.len(), "truth tables must be aligned");
        let mut result = self.clone();
        result.bits.or_assign(&rhs.bits);
        result
    }
}

impl BitXor for &TruthTable {
    type Output = TruthTable;

    fn bitxor(self, rhs: Self) -> Self::Output {
        assert_eq!(self.len(), rhs.len(), "truth tables must be aligned");
        let mut result = self.clone();
        result.bits.xor_assign(&rhs.bits);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(TruthTable::const0().len(), 1);
        assert_eq!(TruthTable::const1().len(), 1);
        assert_eq!(TruthTable::const0().to_hex(), "0");
        assert_eq!(TruthTable::const1().to_hex(), "1");
        assert_eq!(TruthTable::const0().num_vars().unwrap(), 0);
    }

    #[test]
    fn test_projection_store() {
        let store = ProjectionStore::instance();
        for i in 0..ProjectionStore::WIDTH {
            assert_eq!(store.get(i).len(), 64);
            for a in 0..64 {
                assert_eq!(store.get(i).bit(a), a & (1 << i) != 0);
            }
        }
    }

    #[test]
    fn test_nth_var() {
        // x_0 is [0, 1], x_1 is [0, 0, 1, 1], matching the store patterns
        let x0 = TruthTable::nth_var(0);
        assert_eq!(x0.len(), 2);
        assert!(!x0.bit(0));
        assert!(x0.bit(1));
        assert_eq!(x0.to_hex(), "2");

        assert_eq!(TruthTable::nth_var(1).to_hex(), "c");
        assert_eq!(TruthTable::nth_var(2).to_hex(), "f0");
        assert_eq!(TruthTable::nth_var(5).to_hex(), "ffffffff00000000");

        // beyond the store, synthesized on demand
        let x6 = TruthTable::nth_var(6);
        assert_eq!(x6.len(), 128);
        for a in 0..128 {
            assert_eq!(x6.bit(a), a >= 64);
        }
    }

    #[test]
    fn test_from_bits_validates_length() {
        assert_eq!(
            TruthTable::from_bits(Bits::new(6)),
            Err(Error::InvalidLength(6))
        );
        assert!(TruthTable::from_bits(Bits::new(8)).is_ok());
    }

    #[test]
    fn test_extend_tiles() {
        let mut t = TruthTable::nth_var(0);
        t.extend(2).unwrap();
        assert_eq!(t.to_hex(), "a");
        t.extend(3).unwrap();
        assert_eq!(t.to_hex(), "aa");
        // extend never shrinks
        t.extend(1).unwrap();
        assert_eq!(t.to_hex(), "aa");
    }

    #[test]
    fn test_align() {
        let mut t1 = TruthTable::nth_var(0);
        let mut t2 = TruthTable::nth_var(2);
        TruthTable::align(&mut t1, &mut t2).unwrap();
        assert_eq!(t1.num_vars().unwrap(), t2.num_vars().unwrap());
        assert_eq!(t1.to_hex(), "aa");
    }

    #[test]
    fn test_has_var_and_support() {
        // x_0 & x_1 on three variables
        let mut t = TruthTable::from_hex("8").unwrap();
        t.extend(3).unwrap();
        assert_eq!(t.to_hex(), "88");
        assert!(t.has_var(0).unwrap());
        assert!(t.has_var(1).unwrap());
        assert!(!t.has_var(2).unwrap());

        let support = t.support().unwrap();
        assert_eq!(support.len(), 3);
        assert!(support.get(0));
        assert!(support.get(1));
        assert!(!support.get(2));
        assert_eq!(t.support_size().unwrap(), 2);

        assert!(t.has_var(3).is_err());
    }

    #[test]
    fn test_cofactors() {
        // x_0 & x_1
        let t = TruthTable::from_hex("8").unwrap();
        let c0 = t.cof0(0).unwrap();
        let c1 = t.cof1(0).unwrap();
        assert_eq!(c0.len(), 2);
        assert_eq!(c1.len(), 2);
        assert_eq!(c0.to_hex(), "0");
        // restricting x_0 = 1 leaves x_1, re-indexed to position 0
        assert_eq!(c1.to_hex(), "2");

        assert!(t.cof0_is_const0(0).unwrap());
        assert!(!t.cof0_is_const1(0).unwrap());
        assert!(!t.cof1_is_const0(0).unwrap());
        assert!(!t.cof1_is_const1(0).unwrap());
    }

    #[test]
    fn test_cofs_opposite() {
        let xor = TruthTable::from_hex("6").unwrap();
        assert!(xor.cofs_opposite(0).unwrap());
        assert!(xor.cofs_opposite(1).unwrap());
        let and = TruthTable::from_hex("8").unwrap();
        assert!(!and.cofs_opposite(0).unwrap());
    }

    #[test]
    fn test_quantification_identities() {
        let t = TruthTable::from_hex("6a").unwrap();
        for i in 0..3 {
            let c0 = t.cof0(i).unwrap();
            let c1 = t.cof1(i).unwrap();
            assert_eq!(t.exists(i).unwrap(), &c0 | &c1);
            assert_eq!(t.forall(i).unwrap(), &c0 & &c1);
            assert_eq!(t.exists(i).unwrap().len(), t.len() / 2);
        }
    }

    #[test]
    fn test_permute() {
        let x0 = {
            let mut t = TruthTable::nth_var(0);
            t.extend(2).unwrap();
            t
        };
        let x1 = TruthTable::nth_var(1);
        assert_eq!(x0.permute(0, 1).unwrap(), x1);
        assert_eq!(x0.permute(0, 0).unwrap(), x0);

        // self-inverse
        let t = TruthTable::from_hex("6a").unwrap();
        assert_eq!(t.permute(0, 2).unwrap().permute(0, 2).unwrap(), t);
        assert_eq!(t.permute(1, 2).unwrap().permute(1, 2).unwrap(), t);
    }

    #[test]
    fn test_flip() {
        let x0 = TruthTable::nth_var(0);
        let flipped = x0.flip(0).unwrap();
        assert!(flipped.bit(0));
        assert!(!flipped.bit(1));
        assert_eq!(flipped.flip(0).unwrap(), x0);
    }

    #[test]
    fn test_remove_var() {
        let mut t = TruthTable::from_hex("8").unwrap();
        t.extend(3).unwrap();
        let removed = t.remove_var(2).unwrap();
        assert_eq!(removed.to_hex(), "8");

        let err = t.remove_var(0);
        assert!(matches!(err, Err(Error::PreconditionViolated(_))));
    }

    #[test]
    fn test_remove_var_preserves_dependencies() {
        // x_0 ^ x_2 on three variables does not depend on x_1
        let x0 = {
            let mut t = TruthTable::nth_var(0);
            t.extend(3).unwrap();
            t
        };
        let x2 = TruthTable::nth_var(2);
        let f = &x0 ^ &x2;
        assert!(!f.has_var(1).unwrap());

        let g = f.remove_var(1).unwrap();
        assert_eq!(g.num_vars().unwrap(), 2);
        assert!(g.has_var(0).unwrap());
        assert!(g.has_var(1).unwrap());
        assert_eq!(g.to_hex(), "6");
    }

    #[test]
    fn test_minbase_scenario() {
        // two-input function extended to three variables comes back intact
        let mut t = TruthTable::from_hex("8").unwrap();
        t.extend(3).unwrap();
        let (compact, support) = t.to_minbase().unwrap();
        assert_eq!(compact.to_hex(), "8");
        assert_eq!(compact.num_vars().unwrap(), 2);
        assert!(support.get(0));
        assert!(support.get(1));
        assert!(!support.get(2));
    }

    #[test]
    fn test_minbase_scattered_support() {
        // f = x_1 on three variables compacts to the projection x_0
        let mut t = TruthTable::nth_var(1);
        t.extend(3).unwrap();
        let (compact, support) = t.to_minbase().unwrap();
        assert_eq!(compact, TruthTable::nth_var(0));
        assert!(!support.get(0));
        assert!(support.get(1));
        assert!(!support.get(2));
    }

    #[test]
    fn test_minbase_preserves_relative_order() {
        // f = x_1 & x_3 on four variables becomes x_0 & x_1
        let x1 = {
            let mut t = TruthTable::nth_var(1);
            t.extend(4).unwrap();
            t
        };
        let x3 = TruthTable::nth_var(3);
        let f = &x1 & &x3;
        let (compact, _) = f.to_minbase().unwrap();
        assert_eq!(compact.to_hex(), "8");
    }

    #[test]
    fn test_minbase_idempotent() {
        let mut t = TruthTable::from_hex("6").unwrap();
        t.extend(4).unwrap();
        let (once, _) = t.to_minbase().unwrap();
        let (twice, support) = once.to_minbase().unwrap();
        assert_eq!(once, twice);
        assert_eq!(support.count(), support.len());
    }

    #[test]
    fn test_minbase_constant() {
        let mut t = TruthTable::const1();
        t.extend(3).unwrap();
        let (compact, support) = t.to_minbase().unwrap();
        assert_eq!(compact, TruthTable::const1());
        assert_eq!(support.count(), 0);
    }

    #[test]
    fn test_minbase_and_discard_truncates() {
        // x_0 & x_1 & x_2, capped at two variables: the x_2 = 1 half is cut
        // away, so the result is constant 0 --- truncation, not quantification
        let x0 = {
            let mut t = TruthTable::nth_var(0);
            t.extend(3).unwrap();
            t
        };
        let x1 = {
            let mut t = TruthTable::nth_var(1);
            t.extend(3).unwrap();
            t
        };
        let x2 = TruthTable::nth_var(2);
        let f = &(&x0 & &x1) & &x2;

        let (t, support) = f.to_minbase_and_discard(2).unwrap();
        assert_eq!(t.len(), 4);
        assert_eq!(t.to_hex(), "0");
        assert_eq!(support.count(), 3);

        // a small enough support is untouched
        let (full, _) = f.to_minbase_and_discard(6).unwrap();
        assert_eq!(full.to_hex(), "80");
    }

    #[test]
    fn test_from_minbase() {
        // x_0 & x_1 expanded over positions {0, 2} gives x_0 & x_2
        let t = TruthTable::from_hex("8").unwrap();
        let mut pattern = Bits::new(3);
        pattern.set(0);
        pattern.set(2);
        let expanded = t.from_minbase(&pattern).unwrap();
        assert_eq!(expanded.to_hex(), "a0");
        assert!(expanded.has_var(0).unwrap());
        assert!(!expanded.has_var(1).unwrap());
        assert!(expanded.has_var(2).unwrap());

        let bad = Bits::new(3);
        assert!(matches!(
            t.from_minbase(&bad),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_minbase_roundtrip() {
        // expanding a minbase table over its own support recovers the original
        let x0 = {
            let mut t = TruthTable::nth_var(0);
            t.extend(3).unwrap();
            t
        };
        let x2 = TruthTable::nth_var(2);
        let f = &x0 ^ &x2;
        let (compact, support) = f.to_minbase().unwrap();
        assert_eq!(compact.from_minbase(&support).unwrap(), f);
    }

    #[test]
    fn test_hex_roundtrip() {
        for hex in ["0", "1", "2", "6", "96", "e8", "deadbeefdeadbeef"] {
            let t = TruthTable::from_hex(hex).unwrap();
            assert_eq!(t.to_hex(), hex);
            assert_eq!(TruthTable::from_hex(&t.to_hex()).unwrap().to_hex(), hex);
        }
        // sub-nibble tables re-parse onto their 4-bit padding, hex-stable
        let small = TruthTable::nth_var(0);
        let reparsed = TruthTable::from_hex(&small.to_hex()).unwrap();
        assert_eq!(reparsed.to_hex(), small.to_hex());
    }

    #[test]
    fn test_from_hex_errors() {
        assert!(matches!(
            TruthTable::from_hex(""),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            TruthTable::from_hex("xyz1"),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(TruthTable::from_hex("abc"), Err(Error::InvalidLength(12)));
    }

    #[test]
    fn test_operators() {
        let x0 = {
            let mut t = TruthTable::nth_var(0);
            t.extend(2).unwrap();
            t
        };
        let x1 = TruthTable::nth_var(1);
        assert_eq!((&x0 & &x1).to_hex(), "8");
        assert_eq!((&x0 | &x1).to_hex(), "e");
        assert_eq!((&x0 ^ &x1).to_hex(), "6");
        assert_eq!((!&x0).to_hex(), "5");
        assert_eq!(!!x0.clone(), x0);
    }

    #[test]
    fn test_display_is_hex() {
        let t = TruthTable::from_hex("e8").unwrap();
        assert_eq!(format!("{}", t), "e8");
    }
}
