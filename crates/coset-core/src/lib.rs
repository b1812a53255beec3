#![no_std]
#[cfg(feature = "std")]
extern crate std;

/// Largest accepted message length M. The table build enumerates 2^(2M)
/// vectors, so anything past this is refused up front.
pub const MAX_MESSAGE_BITS: usize = 10;

/// (rows, cols)
pub type Shape = (usize, usize);

pub type CosetResult<T> = Result<T, CosetError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CosetError {
    /// Field element built from something other than 0 or 1.
    InvalidFieldValue(u8),
    /// Operand shapes of add/multiply (or rows of a grid) disagree.
    ShapeMismatch { left: Shape, right: Shape },
    IndexOutOfRange { index: usize, len: usize },
    /// Argument of the wrong shape for encode/decode/table construction.
    InvalidShape { expected: Shape, found: Shape },
    /// No coset leader carries this syndrome.
    NoMatchingCosetLeader { syndrome: usize },
}

impl core::fmt::Display for CosetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CosetError::InvalidFieldValue(v) => {
                write!(f, "field value must be 0 or 1 but got {}", v)
            }
            CosetError::ShapeMismatch { left, right } => write!(
                f,
                "shape mismatch: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            CosetError::IndexOutOfRange { index, len } => {
                write!(f, "row index {} out of range (rows = {})", index, len)
            }
            CosetError::InvalidShape { expected, found } => write!(
                f,
                "invalid shape: expected {}x{}, found {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
            CosetError::NoMatchingCosetLeader { syndrome } => {
                write!(f, "no coset leader for syndrome {:#b}", syndrome)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CosetError {}
