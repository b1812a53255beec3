use coset_core::CosetError;
use coset_math::{Field, Gf2};

fn bit(v: u8) -> Gf2 {
    Gf2::new(v).unwrap()
}

#[test]
fn test_add_is_xor() {
    for a in 0..2u8 {
        for b in 0..2u8 {
            assert_eq!(bit(a) + bit(b), bit(a ^ b));
            assert_eq!(bit(a).add(bit(b)), bit(a ^ b));
        }
    }
}

#[test]
fn test_mul_is_and() {
    for a in 0..2u8 {
        for b in 0..2u8 {
            assert_eq!(bit(a) * bit(b), bit(a & b));
            assert_eq!(bit(a).mul(bit(b)), bit(a & b));
        }
    }
}

#[test]
fn test_rejects_out_of_range() {
    assert_eq!(Gf2::new(2), Err(CosetError::InvalidFieldValue(2)));
    assert_eq!(Gf2::try_from(255u8), Err(CosetError::InvalidFieldValue(255)));
    for v in 2..=255u8 {
        assert!(Gf2::new(v).is_err(), "{} accepted", v);
    }
}

#[test]
fn test_identities() {
    assert_eq!(<Gf2 as Field>::ZERO, Gf2::default());
    assert_eq!(<Gf2 as Field>::ONE, bit(1));
    assert_eq!(<Gf2 as Field>::ZERO, Gf2::ZERO);
    assert_eq!(<Gf2 as Field>::ONE, Gf2::ONE);
    for a in [Gf2::ZERO, Gf2::ONE] {
        assert_eq!(a + Gf2::ZERO, a);
        assert_eq!(a * Gf2::ONE, a);
        // Every element is its own additive inverse.
        assert_eq!(a + a, Gf2::ZERO);
    }
}

#[test]
fn test_display_and_conversions() {
    assert_eq!(format!("{}", Gf2::ONE), "1");
    assert_eq!(format!("{}", Gf2::ZERO), "0");
    assert_eq!(u8::from(Gf2::ONE), 1);
    assert_eq!(Gf2::from_bool(true), Gf2::ONE);
    assert!(!Gf2::from_bool(false).is_one());
}
