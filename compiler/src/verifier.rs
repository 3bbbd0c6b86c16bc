use brine_enumer_schema::{to_snake_case, EnumDef, Manifest};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use crate::{
    emit::Idents,
    error::EnumerError,
    utils::{quote, NON_RAW_KEYWORDS, RUST_KEYWORDS},
};

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    static ref PREFIX:     Regex = Regex::new(r"^[A-Za-z0-9_]*$").unwrap();
    static ref PATH:       Regex = Regex::new(r"^(::)?[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*$").unwrap();
}

/// Names the generated code already uses at module level, plus the primitive
/// types it names unqualified.
pub const RESERVED_NAMES: [&str; 12] = [
    "Enumer", "EnumError", "HashMap", "String", "Result", "Vec",
    "str", "u8", "u16", "u32", "usize", "i64",
];

fn verifier_error(msg: String) -> EnumerError {
    EnumerError::VerifierError(msg)
}

/// Returns `Ok(())` if the manifest can be generated, or `Err(EnumerError::VerifierError(_))` otherwise.
pub fn verify_manifest(manifest: &Manifest) -> Result<(), EnumerError> {
    let config = &manifest.config;

    // The module is emitted under its snake-cased name
    if let Some(package) = &manifest.package {
        let module = to_snake_case(package);
        if !IDENTIFIER.is_match(&module) || RUST_KEYWORDS.contains(&module.as_str()) {
            return Err(verifier_error(format!(
                "The package name {} is not a valid module name",
                quote(package)
            )));
        }
    }
    if !PREFIX.is_match(&config.prefix) {
        return Err(verifier_error(format!(
            "The prefix {} may only contain letters, digits and underscores",
            quote(&config.prefix)
        )));
    }
    if !PATH.is_match(&config.runtime) {
        return Err(verifier_error(format!(
            "The runtime path {} is not a Rust path",
            quote(&config.runtime)
        )));
    }

    // 1) Check duplicate type names, and names that collapse to the same
    //    generated identifiers
    let mut type_names = HashSet::new();
    let mut stems: HashMap<String, &str> = HashMap::new();
    for decl in &manifest.enums {
        if !type_names.insert(decl.name.as_str()) {
            return Err(verifier_error(format!(
                "The type {} is defined twice",
                quote(&decl.name)
            )));
        }
        let stem = Idents::new(&config.prefix, &decl.name).stem;
        if let Some(other) = stems.insert(stem, decl.name.as_str()) {
            return Err(verifier_error(format!(
                "The types {} and {} generate the same identifiers",
                quote(other),
                quote(&decl.name)
            )));
        }
    }

    // 2) Check each type's members once display names are resolved
    for def in manifest.definitions() {
        verify_enum(&def)?;
    }

    Ok(())
}

/// Checks one type: identifiers, and uniqueness of names, values and display strings.
pub fn verify_enum(def: &EnumDef) -> Result<(), EnumerError> {
    verify_identifier(&def.name, "type")?;
    if RESERVED_NAMES.contains(&def.name.as_str()) {
        return Err(verifier_error(format!(
            "The type name {} is reserved",
            quote(&def.name)
        )));
    }

    let mut names:    HashSet<&str>         = HashSet::new();
    let mut values:   HashMap<i64, &str>    = HashMap::new();
    let mut displays: HashMap<&str, &str>   = HashMap::new();

    for member in &def.members {
        verify_identifier(&member.name, "member")?;

        if !names.insert(member.name.as_str()) {
            return Err(verifier_error(format!(
                "The member {} is declared twice in {}",
                quote(&member.name),
                quote(&def.name)
            )));
        }
        if let Some(other) = values.insert(member.value, member.name.as_str()) {
            return Err(verifier_error(format!(
                "The value {} of member {} is already used by {} in {}",
                member.value,
                quote(&member.name),
                quote(other),
                quote(&def.name)
            )));
        }
        if let Some(other) = displays.insert(member.display.as_str(), member.name.as_str()) {
            return Err(verifier_error(format!(
                "The string {} of member {} is already used by {} in {}",
                quote(&member.display),
                quote(&member.name),
                quote(other),
                quote(&def.name)
            )));
        }
    }

    Ok(())
}

fn verify_identifier(name: &str, what: &str) -> Result<(), EnumerError> {
    if !IDENTIFIER.is_match(name) || NON_RAW_KEYWORDS.contains(&name) {
        return Err(verifier_error(format!(
            "The {} name {} is not a valid identifier",
            what,
            quote(name)
        )));
    }
    Ok(())
}
