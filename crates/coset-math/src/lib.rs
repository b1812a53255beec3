#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod field;
pub mod matrix;

pub use field::{Field, Gf2};
pub use matrix::Matrix;
