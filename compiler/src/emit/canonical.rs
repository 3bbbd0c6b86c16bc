use crate::{
    emit::{Contract, Idents},
    types::{Layout, StringTable},
    utils::{int_literal, rust_ident},
};

/// Name of the canonical accessor every other emitter relies on.
pub const ACCESSOR: &str = "as_str";

/// Emits `as_str` and `Display` for the type.
///
/// - `Single`: index arithmetic off the run's first value.
/// - `PerRun`: a match picks the run, then index arithmetic into its table.
/// - `Flat`:   one arm per variant, slicing the flat string directly.
pub fn emit(tables: &[StringTable], layout: Layout, idents: &Idents, contract: &Contract) -> String {
    let type_name = rust_ident(&contract.type_name);
    let body = match layout {
        _ if tables.iter().all(StringTable::is_empty) => "        match *self {}".to_string(),
        Layout::Single => indexed_slice(&tables[0], idents, "        "),
        Layout::PerRun => {
            let mut lines = vec!["        match *self {".to_string()];
            for table in tables {
                let pattern = table
                    .values
                    .iter()
                    .map(|m| format!("{}::{}", type_name, rust_ident(&m.name)))
                    .collect::<Vec<_>>()
                    .join(" | ");
                lines.push(format!("            {} => {{", pattern));
                lines.push(indexed_slice(table, idents, "                "));
                lines.push("            }".to_string());
            }
            lines.push("        }".to_string());
            lines.join("\n")
        }
        Layout::Flat => {
            let table = &tables[0];
            let repr = idents.repr(table.run_id);
            let mut lines = vec!["        match *self {".to_string()];
            for (offset, member) in table.entries() {
                lines.push(format!(
                    "            {}::{} => &{}[{}..{}],",
                    type_name,
                    rust_ident(&member.name),
                    repr,
                    offset.start,
                    offset.end
                ));
            }
            lines.push("        }".to_string());
            lines.join("\n")
        }
    };

    format!(
        r#"impl {ty} {{
    /// Returns the canonical string of this `{name}`.
    pub fn {accessor}(&self) -> &'static str {{
{body}
    }}
}}

impl ::std::fmt::Display for {ty} {{
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {{
        f.write_str(self.{accessor}())
    }}
}}
"#,
        ty       = type_name,
        name     = contract.type_name,
        accessor = contract.accessor,
        body     = body,
    )
}

/// `&REPR[INDEX[i]..INDEX[i + 1]]`, with `i` the value's position in its run.
fn indexed_slice(table: &StringTable, idents: &Idents, indent: &str) -> String {
    let position = match table.base_value() {
        Some(0) | None => "*self as usize".to_string(),
        Some(base)     => format!("(*self as i64).wrapping_sub({}) as usize", int_literal(base)),
    };
    let index = idents.index(table.run_id);
    format!(
        "{indent}let i = {position};\n{indent}&{repr}[{index}[i] as usize..{index}[i + 1] as usize]",
        indent   = indent,
        position = position,
        repr     = idents.repr(table.run_id),
        index    = index,
    )
}
