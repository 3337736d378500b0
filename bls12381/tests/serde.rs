//! serde round trips.

#![cfg(feature = "serde")]

use bls12381::{Bn, G1Affine, G1Projective, G2Projective, Gt};

#[test]
fn g1_json() {
    let p = G1Projective::mul_by_generator(&Bn::from(9));
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, format!("\"{}\"", hex::encode(p.to_bytes(true))));
    assert_eq!(serde_json::from_str::<G1Projective>(&json).unwrap(), p);

    let affine = p.to_affine();
    let json = serde_json::to_string(&affine).unwrap();
    assert_eq!(serde_json::from_str::<G1Affine>(&json).unwrap(), affine);
}

#[test]
fn g2_json() {
    let p = G2Projective::mul_by_generator(&Bn::from(9));
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(serde_json::from_str::<G2Projective>(&json).unwrap(), p);
}

#[test]
fn gt_json() {
    let x = Gt::generator().pow(&Bn::from(9));
    let json = serde_json::to_string(&x).unwrap();
    assert_eq!(serde_json::from_str::<Gt>(&json).unwrap(), x);
}

#[test]
fn rejects_invalid_point() {
    let mut bytes = G1Projective::generator().to_bytes(true);
    bytes[1..].fill(0xff);
    let json = format!("\"{}\"", hex::encode(bytes));
    assert!(serde_json::from_str::<G1Projective>(&json).is_err());
}
