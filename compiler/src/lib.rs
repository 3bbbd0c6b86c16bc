//! brine-enumer-compiler
//!
//! This crate implements:
//!  1) Run partitioning of declaration-ordered enum members,
//!  2) Compact string tables with per-member byte offsets,
//!  3) A reverse lookup keyed by slices of those same tables,
//!  4) Method emitters: canonical accessor, JSON, text and serde scalar adapters,
//!  5) Manifest parsing and verification (`compile_manifest` → `String`),
//!  6) Error types (`EnumerError`).

pub mod error;
pub mod types;
pub mod utils;
pub mod partition;
pub mod table;
pub mod lookup;
pub mod emit;
pub mod verifier;
pub mod compiler;
pub mod gen_rust;

pub use compiler::{compile_manifest, parse_manifest, summarize_manifest, TypeSummary};
pub use error::EnumerError;
pub use gen_rust::{compile_manifest_to_rust, generate_enum};
pub use brine_enumer_schema as schema;
