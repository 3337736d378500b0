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

//! ## `serde` support
//!
//! When the `serde` feature of this crate is enabled, [`Bn`] implements
//! `Serialize` and `Deserialize`. The value is written as a sign byte
//! (`0x00` or `0x01` for negative values) followed by the big-endian
//! magnitude, hex encoded for human readable formats.

mod bn;
mod error;
mod modular;
mod ops;
mod prime;
mod random;

pub use crate::{
    bn::Bn,
    error::{Error, Result},
};
