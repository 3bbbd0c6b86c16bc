use std::env;
use std::fs;
use std::path::PathBuf;

use brine_enumer_compiler::{compile_manifest, EnumerError};

fn main() -> Result<(), EnumerError> {
    println!("cargo:rerun-if-changed=enums.json");

    let text = fs::read_to_string("enums.json")?;
    let (_manifest, rust_code) = compile_manifest(&text)?;

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").unwrap_or_default());
    fs::write(out_dir.join("enums.rs"), rust_code)?;
    Ok(())
}
