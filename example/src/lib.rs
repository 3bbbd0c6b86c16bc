//! Types generated from `enums.json` by `build.rs`.

pub mod generated {
    include!(concat!(env!("OUT_DIR"), "/enums.rs"));
}
