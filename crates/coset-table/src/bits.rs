//! Conversions between integers and GF(2) rows, plus fixed-weight pattern
//! enumeration used to walk candidate coset leaders.

use alloc::vec::Vec;
use coset_math::{Gf2, Matrix};

/// `num` as a 1 x `length` row, most significant bit first.
/// Bits above `length` are dropped, so callers keep `num < 2^length`.
pub fn num2word(num: usize, length: usize) -> Matrix<Gf2> {
    let bits: Vec<Gf2> = (0..length)
        .rev()
        .map(|i| Gf2::from_bool(i < usize::BITS as usize && (num >> i) & 1 == 1))
        .collect();
    Matrix::row_vector(&bits)
}

/// Inverse of [`num2word`]: folds the row left to right into an integer.
pub fn word2num(row: &[Gf2]) -> usize {
    row.iter().fold(0usize, |acc, bit| (acc << 1) | bit.value() as usize)
}

pub fn hamming_weight(row: &[Gf2]) -> usize {
    row.iter().filter(|b| b.is_one()).count()
}

/// Rearranges `v` into the next lexicographically greater permutation.
/// Returns false (leaving `v` sorted ascending) once the last one is passed.
fn next_permutation(v: &mut [Gf2]) -> bool {
    if v.len() < 2 {
        return false;
    }
    let mut i = v.len() - 1;
    while i > 0 && v[i - 1] >= v[i] {
        i -= 1;
    }
    if i == 0 {
        v.reverse();
        return false;
    }
    let mut j = v.len() - 1;
    while v[j] <= v[i - 1] {
        j -= 1;
    }
    v.swap(i - 1, j);
    v[i..].reverse();
    true
}

/// Every `len`-bit row of Hamming weight `weight`, in increasing numeric order.
pub struct FixedWeight {
    current: Option<Vec<Gf2>>,
}

impl FixedWeight {
    pub fn new(len: usize, weight: usize) -> Self {
        if weight > len {
            return Self { current: None };
        }
        let mut first = alloc::vec![Gf2::ZERO; len - weight];
        first.resize(len, Gf2::ONE);
        Self { current: Some(first) }
    }
}

impl Iterator for FixedWeight {
    type Item = Vec<Gf2>;

    fn next(&mut self) -> Option<Vec<Gf2>> {
        let out = self.current.take()?;
        let mut succ = out.clone();
        if next_permutation(&mut succ) {
            self.current = Some(succ);
        }
        Some(out)
    }
}
