use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use coset_core::{CosetError, CosetResult, MAX_MESSAGE_BITS};
use coset_math::{Gf2, Matrix};
use log::{debug, trace, warn};

use crate::bits::{hamming_weight, num2word, word2num, FixedWeight};

/// Syndrome decoder for a rate-1/2 systematic binary code.
/// e_H: B^M -> B^N
///
/// Built once from the parity submatrix `h` (M x M). The parity-check matrix
/// is `H = [h ; I_M]`, so a codeword is `[m | m*h]` and `c*H = 0`.
/// All tables are computed in [`CosetLeader::new`] and never change.
#[derive(Debug, Clone)]
pub struct CosetLeader {
    message_len: usize,    // M
    redundancy_len: usize, // R
    block_len: usize,      // N = M + R

    parity_check: Matrix<Gf2>,
    codewords: Matrix<Gf2>,
    cosets: Vec<Matrix<Gf2>>,
    leaders: Matrix<Gf2>,
    // Syndrome key of leaders[i], same order.
    leader_syndromes: Vec<usize>,
}

impl CosetLeader {
    pub fn new(h: &Matrix<Gf2>) -> CosetResult<Self> {
        let m = h.rows();
        if m == 0 {
            return Err(CosetError::InvalidShape { expected: (1, 1), found: h.shape() });
        }
        // H = [h ; I] needs h square for the identity block to line up.
        if h.cols() != m {
            return Err(CosetError::InvalidShape { expected: (m, m), found: h.shape() });
        }
        if m > MAX_MESSAGE_BITS {
            return Err(CosetError::InvalidShape {
                expected: (MAX_MESSAGE_BITS, MAX_MESSAGE_BITS),
                found: h.shape(),
            });
        }

        let r = m;
        let n = m + r;
        debug!("Building coset table: M = {}, R = {}, N = {}", m, r, n);

        // 1. Parity-check matrix
        let mut parity_check = Matrix::new(n, r);
        for i in 0..m {
            parity_check.row_mut(i)?.copy_from_slice(h.row(i)?);
        }
        let identity = Matrix::<Gf2>::identity(r);
        for i in 0..r {
            parity_check.row_mut(m + i)?.copy_from_slice(identity.row(i)?);
        }

        let mut table = Self {
            message_len: m,
            redundancy_len: r,
            block_len: n,
            parity_check,
            codewords: Matrix::new(1 << m, n),
            cosets: Vec::with_capacity(1 << r),
            leaders: Matrix::new(1 << r, n),
            leader_syndromes: Vec::with_capacity(1 << r),
        };

        // 2. Codewords, row i = encode(i)
        for i in 0..(1usize << m) {
            let cw = table.encode(&num2word(i, m))?;
            table.codewords.row_mut(i)?.copy_from_slice(cw.row(0)?);
        }

        // 3. Leaders, lightest first. The first candidate to reach an unseen
        //    syndrome owns that coset.
        let coset_count = 1usize << r;
        let mut visited = BTreeSet::new();
        'weights: for weight in 0..=n {
            for candidate in FixedWeight::new(n, weight) {
                let syndrome = table.syndrome_key(&candidate)?;
                if !visited.insert(syndrome) {
                    continue;
                }
                table.push_coset(&candidate, syndrome)?;
                if table.leader_syndromes.len() == coset_count {
                    break 'weights;
                }
            }
        }
        // The identity block makes every syndrome reachable by weight <= R.
        debug_assert_eq!(table.leader_syndromes.len(), coset_count);

        debug!(
            "Coset table ready: {} codewords, {} cosets, d_min = {:?}",
            table.codewords.rows(),
            table.cosets.len(),
            table.min_distance()
        );
        Ok(table)
    }

    fn push_coset(&mut self, leader: &[Gf2], syndrome: usize) -> CosetResult<()> {
        let slot = self.leader_syndromes.len();
        trace!("Coset {}: leader weight {}, syndrome {:#b}", slot, hamming_weight(leader), syndrome);

        self.leaders.row_mut(slot)?.copy_from_slice(leader);

        let mut coset = Matrix::new(self.codewords.rows(), self.block_len);
        for (i, cw) in self.codewords.iter_rows().enumerate() {
            for ((dst, &c), &e) in coset.row_mut(i)?.iter_mut().zip(cw).zip(leader) {
                *dst = c + e;
            }
        }
        self.cosets.push(coset);
        self.leader_syndromes.push(syndrome);
        Ok(())
    }

    /// word * H, folded to an integer.
    fn syndrome_key(&self, word: &[Gf2]) -> CosetResult<usize> {
        let s = Matrix::row_vector(word).mul(&self.parity_check)?;
        Ok(word2num(s.row(0)?))
    }

    fn check_received(&self, received: &Matrix<Gf2>) -> CosetResult<()> {
        if received.shape() != (1, self.block_len) {
            return Err(CosetError::InvalidShape {
                expected: (1, self.block_len),
                found: received.shape(),
            });
        }
        Ok(())
    }

    /// Systematic encoding: `[word | word * h]`. `word` must be 1 x M.
    pub fn encode(&self, word: &Matrix<Gf2>) -> CosetResult<Matrix<Gf2>> {
        if word.shape() != (1, self.message_len) {
            return Err(CosetError::InvalidShape {
                expected: (1, self.message_len),
                found: word.shape(),
            });
        }
        let msg = word.row(0)?;

        let mut parity = alloc::vec![Gf2::ZERO; self.redundancy_len];
        // Top M rows of H are h.
        for (&bit, h_row) in msg.iter().zip(self.parity_check.iter_rows()) {
            for (acc, &coeff) in parity.iter_mut().zip(h_row) {
                *acc = *acc + bit * coeff;
            }
        }

        let mut out = Vec::with_capacity(self.block_len);
        out.extend_from_slice(msg);
        out.extend_from_slice(&parity);
        Ok(Matrix::row_vector(&out))
    }

    /// `received * H` as a 1 x R row.
    pub fn syndrome(&self, received: &Matrix<Gf2>) -> CosetResult<Matrix<Gf2>> {
        self.check_received(received)?;
        received.mul(&self.parity_check)
    }

    /// Adds the leader of `received`'s coset, giving the nearest codeword.
    pub fn correct(&self, received: &Matrix<Gf2>) -> CosetResult<Matrix<Gf2>> {
        self.check_received(received)?;
        let syndrome = self.syndrome_key(received.row(0)?)?;

        let slot = match self.leader_syndromes.iter().position(|&s| s == syndrome) {
            Some(slot) => slot,
            None => {
                warn!("No coset leader for syndrome {:#b}", syndrome);
                return Err(CosetError::NoMatchingCosetLeader { syndrome });
            }
        };

        Matrix::row_vector(self.leaders.row(slot)?).add(received)
    }

    /// Corrects `received` (1 x N) and returns its first M symbols.
    pub fn decode(&self, received: &Matrix<Gf2>) -> CosetResult<Matrix<Gf2>> {
        let corrected = self.correct(received)?;
        Ok(Matrix::row_vector(&corrected.row(0)?[..self.message_len]))
    }

    /// Lowest weight among the non-zero codewords.
    pub fn min_distance(&self) -> Option<usize> {
        self.codewords.iter_rows().skip(1).map(hamming_weight).min()
    }

    pub fn parity_check_matrix(&self) -> &Matrix<Gf2> { &self.parity_check }

    pub fn codewords(&self) -> &Matrix<Gf2> { &self.codewords }

    /// One 2^M x N block per coset, in leader order.
    pub fn coset_table(&self) -> &[Matrix<Gf2>] { &self.cosets }

    pub fn coset_leaders(&self) -> &Matrix<Gf2> { &self.leaders }

    pub fn message_len(&self) -> usize { self.message_len }

    pub fn redundancy_len(&self) -> usize { self.redundancy_len }

    pub fn block_len(&self) -> usize { self.block_len }
}
