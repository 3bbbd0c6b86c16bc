use brine_enumer_schema::{to_snake_case, Config, EnumDef, Manifest};
use tracing::debug;
use crate::{
    emit::{canonical, json, text, yaml, Contract, Idents},
    lookup::{self, LookupMap},
    partition::partition,
    table::{build_tables, emit_tables, emit_values},
    types::Layout,
    utils::{int_literal, rust_ident},
};

pub const HEADER: &str = "// Code generated by brine-enumer. DO NOT EDIT.";

/// Compiles every type of the manifest into one Rust source file.
/// Types are emitted in manifest order, each one independently.
pub fn compile_manifest_to_rust(manifest: &Manifest) -> String {
    let mut rust_code: Vec<String> = Vec::new();

    rust_code.push(HEADER.to_string());
    rust_code.push("".to_string());

    // Start module
    if let Some(name) = &manifest.package {
        rust_code.push(format!("pub mod {} {{", to_snake_case(name)));
        rust_code.push("".to_string());
    }

    for definition in manifest.definitions() {
        rust_code.push(generate_enum(&definition, &manifest.config));
    }

    if manifest.package.is_some() {
        rust_code.push("}".to_string());
    }

    rust_code.join("\n")
}

/// Runs the whole pipeline for one type: runs, tables, canonical accessor,
/// lookup, then the adapters enabled in `config`.
///
/// An empty member list still produces a complete, compilable block whose
/// lookup function always fails.
pub fn generate_enum(definition: &EnumDef, config: &Config) -> String {
    let idents   = Idents::new(&config.prefix, &definition.name);
    let runs     = partition(&definition.members);
    let layout   = Layout::choose(runs.len(), config.runs_threshold);
    let tables   = build_tables(&definition.members, &runs, layout);
    let lookup   = LookupMap::build(&tables);
    let contract = Contract::new(&idents, &config.runtime);

    debug!(
        type_name = %definition.name,
        members   = definition.members.len(),
        runs      = runs.len(),
        layout    = ?layout,
        "generating enum"
    );

    let mut sections = Vec::new();
    if config.declare {
        sections.push(generate_declaration(definition));
    }
    sections.push(emit_tables(&tables, layout, &idents));
    sections.push(emit_values(&tables, &idents));
    sections.push(canonical::emit(&tables, layout, &idents, &contract));
    sections.push(lookup::emit(&lookup, &idents, &contract));
    if config.json {
        sections.push(json::emit(&contract));
    }
    if config.text {
        sections.push(text::emit(&contract));
    }
    if config.yaml {
        sections.push(yaml::emit(&contract));
    }

    sections.join("\n")
}

/// Generates the enum itself, with explicit discriminants.
fn generate_declaration(definition: &EnumDef) -> String {
    let mut variants = Vec::new();
    for member in &definition.members {
        variants.push(format!(
            "    {} = {},",
            rust_ident(&member.name),
            int_literal(member.value)
        ));
    }

    let mut attributes = vec!["#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]"];
    // A zero-variant enum cannot carry a primitive representation.
    if !definition.members.is_empty() {
        attributes.push("#[repr(i64)]");
    }

    let body = if variants.is_empty() {
        String::new()
    } else {
        format!("\n{}\n", variants.join("\n"))
    };

    format!(
        "{}\npub enum {} {{{}}}\n",
        attributes.join("\n"),
        rust_ident(&definition.name),
        body
    )
}
