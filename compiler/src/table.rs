use brine_enumer_schema::Member;
use crate::{
    emit::Idents,
    types::{Layout, Offset, Run, StringTable},
    utils::{index_type, rust_ident, rust_string_literal},
};

impl<'a> StringTable<'a> {
    /// Concatenates the display strings of `members`, in order and without
    /// separators, recording where each one starts and ends.
    pub fn build(members: &'a [Member], run_id: Option<usize>) -> StringTable<'a> {
        let mut repr    = String::with_capacity(members.iter().map(|m| m.display.len()).sum());
        let mut offsets = Vec::with_capacity(members.len());
        let mut values  = Vec::with_capacity(members.len());

        for member in members {
            let start = repr.len();
            repr.push_str(&member.display);
            offsets.push(Offset { start, end: repr.len() });
            values.push(member);
        }

        StringTable { run_id, repr, offsets, values }
    }
}

/// Builds the tables for one type according to `layout`.
///
/// `Single` and `Flat` both produce one unsuffixed table over every member;
/// they differ only in how the accessor indexes into it.
pub fn build_tables<'a>(members: &'a [Member], runs: &[Run<'a>], layout: Layout) -> Vec<StringTable<'a>> {
    match layout {
        Layout::Single | Layout::Flat => vec![StringTable::build(members, None)],
        Layout::PerRun => runs
            .iter()
            .enumerate()
            .map(|(i, run)| StringTable::build(run.members, Some(i)))
            .collect(),
    }
}

/// Emits the `REPR` constant of every table, plus its `INDEX` array when
/// the layout is indexed.
pub fn emit_tables(tables: &[StringTable], layout: Layout, idents: &Idents) -> String {
    let mut lines = Vec::new();

    for table in tables {
        let repr = idents.repr(table.run_id);
        if table.is_empty() {
            lines.push("#[allow(dead_code)]".to_string());
        }
        lines.push(format!(
            "const {}: &str = {};",
            repr,
            rust_string_literal(&table.repr)
        ));

        if layout.is_indexed() && !table.is_empty() {
            let mut bounds: Vec<String> = table.offsets.iter().map(|o| o.start.to_string()).collect();
            bounds.push(table.repr.len().to_string());
            lines.push(format!(
                "const {}: [{}; {}] = [{}];",
                idents.index(table.run_id),
                index_type(table.repr.len()),
                bounds.len(),
                bounds.join(", ")
            ));
        }
    }

    lines.push(String::new());
    lines.join("\n")
}

/// Emits the values array: every member, across all tables, in table order.
pub fn emit_values(tables: &[StringTable], idents: &Idents) -> String {
    let type_name = rust_ident(&idents.type_name);
    let values: Vec<String> = tables
        .iter()
        .flat_map(|t| t.values.iter())
        .map(|m| format!("{}::{}", type_name, rust_ident(&m.name)))
        .collect();

    format!(
        "const {}: [{}; {}] = [{}];\n",
        idents.values,
        type_name,
        values.len(),
        values.join(", ")
    )
}
