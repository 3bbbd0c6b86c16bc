//! brine-enumer
//!
//! Runtime support for code generated by `brine-enumer-compiler`.
//!
//! - `EnumError`, returned by every generated lookup and decode function
//! - `Enumer` trait, implemented by every generated enum
//! - Re-exports of the crates generated code names (`serde`, `serde_json`,
//!   `lazy_static`), so a consumer only depends on this crate.

pub mod error;
pub mod traits;

pub use error::EnumError;
pub use traits::Enumer;

#[doc(hidden)]
pub use lazy_static::lazy_static;
pub use serde;
pub use serde_json;
