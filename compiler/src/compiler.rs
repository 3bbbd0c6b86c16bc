use brine_enumer_schema::Manifest;
use serde::Serialize;
use tracing::info;
use crate::{
    error::EnumerError,
    gen_rust::compile_manifest_to_rust,
    partition::partition,
    types::Layout,
    verifier::verify_manifest,
};

/// Parse a JSON manifest. Returns `Err(EnumerError::Manifest)` on malformed input.
pub fn parse_manifest(text: &str) -> Result<Manifest, EnumerError> {
    Ok(serde_json::from_str(text)?)
}

/// Compile a JSON manifest into `(Manifest, generated Rust source)`.
/// Returns `Err(EnumerError)` if parsing or verification fails.
pub fn compile_manifest(text: &str) -> Result<(Manifest, String), EnumerError> {
    let manifest = parse_manifest(text)?;
    verify_manifest(&manifest)?;
    let code = compile_manifest_to_rust(&manifest);
    info!(types = manifest.enums.len(), bytes = code.len(), "compiled manifest");
    Ok((manifest, code))
}

/// What the generator will do with one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeSummary {
    pub name:    String,
    pub members: usize,
    pub runs:    usize,
    pub layout:  Layout,
}

pub fn summarize_manifest(manifest: &Manifest) -> Vec<TypeSummary> {
    manifest
        .definitions()
        .iter()
        .map(|def| {
            let runs = partition(&def.members).len();
            TypeSummary {
                name:    def.name.clone(),
                members: def.members.len(),
                runs,
                layout:  Layout::choose(runs, manifest.config.runs_threshold),
            }
        })
        .collect()
}
