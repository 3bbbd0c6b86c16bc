//! Shared model for the brine-enumer generator.
//!
//! A [Manifest] lists enumerated types and their members the way a collector
//! would hand them over: names, numeric values and optional display strings.
//! [EnumDecl::resolve] turns a declaration into an [EnumDef] whose members all
//! carry their final display string.
//!
//! ```
//! use brine_enumer_schema::*;
//!
//! let decl = EnumDecl::new("Level", vec![
//!     MemberDecl::new("LevelDebug", 0),
//!     MemberDecl::new("LevelWarnOnly", 1),
//! ]);
//!
//! let config = Config {
//!     trim_prefix: "Level".to_owned(),
//!     transform:   Transform::Snake,
//!     ..Config::default()
//! };
//!
//! let def = decl.resolve(&config);
//! assert_eq!(def.members[0].display, "debug");
//! assert_eq!(def.members[1].display, "warn_only");
//! ```

pub mod case;
pub mod schema;

pub use case::*;
pub use schema::*;
