use coset_core::{CosetError, CosetResult};
use zeroize::Zeroize;

/// Scalar type a [`Matrix`](crate::Matrix) can be built over.
///
/// Only addition, multiplication and their identities are required; the
/// matrix code never divides or negates.
pub trait Field:
    Copy + PartialEq + core::ops::Add<Output = Self> + core::ops::Mul<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
}

/// Element of GF(2): `+` is XOR, `*` is AND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Zeroize)]
#[repr(transparent)]
pub struct Gf2(u8);

impl Gf2 {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);

    /// Fails with `InvalidFieldValue` for anything outside {0, 1}.
    pub fn new(val: u8) -> CosetResult<Self> {
        if val > 1 {
            return Err(CosetError::InvalidFieldValue(val));
        }
        Ok(Self(val))
    }

    #[inline(always)]
    pub fn from_bool(bit: bool) -> Self { Self(bit as u8) }

    #[inline(always)]
    pub fn value(self) -> u8 { self.0 }

    #[inline(always)]
    pub fn is_one(self) -> bool { self.0 == 1 }

    #[inline(always)]
    pub fn add(self, rhs: Self) -> Self { Self(self.0 ^ rhs.0) }

    #[inline(always)]
    pub fn mul(self, rhs: Self) -> Self { Self(self.0 & rhs.0) }
}

impl Field for Gf2 {
    const ZERO: Self = Gf2::ZERO;
    const ONE: Self = Gf2::ONE;
}

impl TryFrom<u8> for Gf2 {
    type Error = CosetError;
    fn try_from(val: u8) -> CosetResult<Self> { Self::new(val) }
}

impl From<Gf2> for u8 {
    fn from(bit: Gf2) -> u8 { bit.0 }
}

impl core::fmt::Display for Gf2 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Operator Overloads
impl core::ops::Add for Gf2 { type Output = Self; fn add(self, rhs: Self) -> Self { Gf2::add(self, rhs) } }
impl core::ops::Mul for Gf2 { type Output = Self; fn mul(self, rhs: Self) -> Self { Gf2::mul(self, rhs) } }
