#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Usage
//!
//! ```
//! use bls12381::{pairing, Bn, G1Projective, G2Projective, Gt};
//!
//! let a = Bn::from(5);
//! let b = Bn::from(7);
//! let p = G1Projective::mul_by_generator(&a);
//! let q = G2Projective::mul_by_generator(&b);
//!
//! let e = pairing(&p.to_affine(), &q.to_affine());
//! assert_eq!(e, Gt::generator().pow(&Bn::from(35)));
//! ```
//!
//! ## `serde` support
//!
//! When the `serde` feature of this crate is enabled, `Serialize` and
//! `Deserialize` are impl'd for the following types:
//!
//! - [`G1Affine`], [`G1Projective`] (compressed encoding)
//! - [`G2Affine`], [`G2Projective`] (compressed encoding)
//! - [`Gt`]
//! - [`Bn`]

#[macro_use]
mod macros;

pub mod arithmetic;
pub mod element;
mod error;
mod g1;
mod g2;
mod gt;
mod hash2curve;
mod pairing;
mod params;

pub use crate::{
    arithmetic::{
        CurveParams,
        affine::AffinePoint,
        fp::Fp,
        fp2::Fp2,
        fp6::Fp6,
        fp12::Fp12,
        projective::ProjectivePoint,
    },
    element::{GroupElement, GroupKind},
    error::{Error, Result},
    g1::{G1Affine, G1Params, G1Projective},
    g2::{G2Affine, G2Params, G2Projective},
    gt::Gt,
    pairing::{MillerLoopResult, multi_miller_loop, pairing},
    params::{Params, init, params},
};
pub use bignum::{self, Bn};
pub use elliptic_curve::{self, ff::Field, subtle};
