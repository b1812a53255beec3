#![no_std]
#![forbid(unsafe_code)]
extern crate alloc;

pub mod bits;
pub mod leader;

pub use bits::{hamming_weight, num2word, word2num, FixedWeight};
pub use leader::CosetLeader;
