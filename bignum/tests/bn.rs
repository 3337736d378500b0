//! `Bn` arithmetic tests.

use bignum::{Bn, Error};
use hex_literal::hex;
use proptest::{prelude::any, prop_assert, prop_assert_eq, prop_compose, proptest};

/// BLS12-381 base field modulus.
const P_HEX: &str = "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab";

/// BLS12-381 subgroup order.
const R_BYTES: [u8; 32] = hex!("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001");

prop_compose! {
    fn bn()(bytes in any::<[u8; 40]>(), negative in any::<bool>()) -> Bn {
        let n = Bn::from_bytes_be(&bytes);
        if negative { -n } else { n }
    }
}

prop_compose! {
    fn modulus()(bytes in any::<[u8; 24]>()) -> Bn {
        Bn::from_bytes_be(&bytes) + 2
    }
}

#[test]
fn curve_constants_are_prime() {
    let p = Bn::from_hex(P_HEX).unwrap();
    let r = Bn::from_bytes_be(&R_BYTES);
    assert_eq!(p.num_bits(), 381);
    assert_eq!(r.num_bits(), 255);
    assert!(p.is_prime());
    assert!(r.is_prime());
    assert!(!(&p * &r).is_prime());
}

#[test]
fn fermat_little_theorem() {
    let p = Bn::from_hex(P_HEX).unwrap();
    let a = Bn::from(123456789);
    assert_eq!(a.mod_pow(&(&p - 1), &p).unwrap(), 1);
    assert_eq!(a.mod_pow(&(&p - 2), &p).unwrap(), a.mod_inverse(&p).unwrap());
}

#[test]
fn zero_has_no_inverse() {
    assert_eq!(Bn::zero().mod_inverse(&Bn::from(13)), Err(Error::NoInverse));
    assert_eq!(Bn::from(5).mod_inverse(&Bn::zero()), Err(Error::NoInverse));
}

#[test]
fn native_promotion() {
    assert_eq!(Bn::from(u64::MAX) + 1, Bn::from(1u128 << 64));
    assert_eq!(Bn::from(i64::MIN).to_i64(), Some(i64::MIN));
    assert_eq!((Bn::from(i64::MAX) + 1).to_i64(), None);
    assert!(Bn::from(3) > 2);
    assert_eq!("-17".parse::<Bn>().unwrap(), -17);
}

#[test]
fn in_place_mutators() {
    let mut n = Bn::from(-30);
    n.negate_in_place();
    assert_eq!(n, 30);
    n.mod_in_place(&Bn::from(7)).unwrap();
    assert_eq!(n, 2);
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    for n in [Bn::zero(), Bn::from(255), Bn::from(-65536)] {
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(serde_json::from_str::<Bn>(&json).unwrap(), n);
    }
    assert_eq!(serde_json::to_string(&Bn::from(-255)).unwrap(), "\"01FF\"");
}

proptest! {
    #[test]
    fn hex_and_decimal_round_trip(n in bn()) {
        prop_assert_eq!(Bn::from_hex(&n.to_hex()).unwrap(), n.clone());
        prop_assert_eq!(Bn::from_decimal(&n.to_decimal()).unwrap(), n.clone());
        prop_assert_eq!(Bn::from_radix(&n.to_radix(7).unwrap(), 7).unwrap(), n);
    }

    #[test]
    fn bytes_round_trip(n in bn()) {
        let magnitude = n.abs();
        prop_assert_eq!(Bn::from_bytes_be(&magnitude.to_bytes_be().unwrap()), magnitude);
    }

    #[test]
    fn div_rem_identity(a in bn(), b in bn()) {
        if !b.is_zero() {
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(&q * &b + &r, a.clone());
            prop_assert!(r.abs() < b.abs());
            prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
        }
    }

    #[test]
    fn modulo_range(a in bn(), m in modulus()) {
        let r = a.modulo(&m).unwrap();
        prop_assert!(!r.is_negative() && r < m);
        prop_assert_eq!((&a - &r).modulo(&m).unwrap(), Bn::zero());
    }

    #[test]
    fn modular_ops_agree(a in bn(), b in bn(), m in modulus()) {
        prop_assert_eq!(a.mod_add(&b, &m).unwrap(), (&a + &b) % &m);
        prop_assert_eq!(a.mod_sub(&b, &m).unwrap(), (&a - &b) % &m);
        prop_assert_eq!(a.mod_mul(&b, &m).unwrap(), (&a * &b) % &m);
    }

    #[test]
    fn inverse_when_coprime(a in bn(), m in modulus()) {
        match a.mod_inverse(&m) {
            Ok(inv) => prop_assert_eq!((inv * &a).modulo(&m).unwrap(), Bn::one().modulo(&m).unwrap()),
            Err(e) => {
                prop_assert_eq!(e, Error::NoInverse);
                prop_assert!(!a.gcd(&m).is_one());
            }
        }
    }

    #[test]
    fn pow_adds_exponents(a in bn(), e1 in 0u32..64, e2 in 0u32..64, m in modulus()) {
        let x = a.mod_pow(&Bn::from(e1), &m).unwrap();
        let y = a.mod_pow(&Bn::from(e2), &m).unwrap();
        prop_assert_eq!(x.mod_mul(&y, &m).unwrap(), a.mod_pow(&Bn::from(e1 + e2), &m).unwrap());
    }
}
