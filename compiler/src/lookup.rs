use brine_enumer_schema::Member;
use std::collections::HashMap;
use crate::{
    emit::{Contract, Idents},
    types::{Offset, StringTable},
    utils::{rust_ident, rust_string_literal},
};

/// One key of the reverse map: which table it slices, where, and the member
/// it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEntry<'a> {
    pub run_id: Option<usize>,
    pub offset: Offset,
    pub member: &'a Member,
}

/// Name → member index over every table of a type.
///
/// Keys are slices of the tables' `repr` strings, never separate copies, so
/// a key always equals what the canonical accessor returns for its member.
#[derive(Debug, Clone)]
pub struct LookupMap<'t, 'a> {
    pub entries: Vec<MapEntry<'a>>,
    index:       HashMap<&'t str, &'a Member>,
}

impl<'t, 'a> LookupMap<'t, 'a> {
    /// Flattens the `(Offset, Member)` pairs of every table, in table order.
    /// A later duplicate display string replaces an earlier one.
    pub fn build(tables: &'t [StringTable<'a>]) -> LookupMap<'t, 'a> {
        let mut entries = Vec::new();
        let mut index   = HashMap::new();

        for table in tables {
            for (offset, member) in table.entries() {
                index.insert(&table.repr[offset.range()], member);
                entries.push(MapEntry {
                    run_id: table.run_id,
                    offset,
                    member,
                });
            }
        }

        LookupMap { entries, index }
    }

    pub fn get(&self, name: &str) -> Option<&'a Member> {
        self.index.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterates the keys; each borrows from a table's `repr`.
    pub fn keys(&self) -> impl Iterator<Item = &'t str> + '_ {
        self.index.keys().copied()
    }
}

/// Emits the lazily built map, the lookup function and the `Enumer` impl.
pub fn emit(lookup: &LookupMap, idents: &Idents, contract: &Contract) -> String {
    let type_name = rust_ident(&contract.type_name);
    let runtime   = &contract.runtime;
    let hash_map  = "::std::collections::HashMap";

    let init = if lookup.entries.is_empty() {
        format!("{}::new()", hash_map)
    } else {
        let mut lines = vec![
            "{".to_string(),
            format!("        let mut map = {}::with_capacity({});", hash_map, lookup.entries.len()),
        ];
        for entry in &lookup.entries {
            lines.push(format!(
                "        map.insert(&{}[{}..{}], {}::{});",
                idents.repr(entry.run_id),
                entry.offset.start,
                entry.offset.end,
                type_name,
                rust_ident(&entry.member.name)
            ));
        }
        lines.push("        map".to_string());
        lines.push("    }".to_string());
        lines.join("\n")
    };

    format!(
        r#"{runtime}::lazy_static! {{
    static ref {map}: {hash_map}<&'static str, {ty}> = {init};
}}

/// Returns the `{name}` whose canonical string is `name`.
pub fn {lookup}(name: &str) -> Result<{ty}, {error}> {{
    match {map}.get(name) {{
        Some(value) => Ok(*value),
        None => Err({error}::not_found(name, {name_literal})),
    }}
}}

impl {runtime}::Enumer for {ty} {{
    const TYPE_NAME: &'static str = {name_literal};
    const VALUES: &'static [Self] = &{values};

    fn name(&self) -> &'static str {{
        self.{accessor}()
    }}

    fn from_name(name: &str) -> Result<Self, {error}> {{
        {lookup}(name)
    }}
}}
"#,
        runtime      = runtime,
        map          = idents.map,
        hash_map     = hash_map,
        ty           = type_name,
        init         = init,
        name         = contract.type_name,
        name_literal = rust_string_literal(&contract.type_name),
        lookup       = contract.lookup,
        error        = contract.error_path(),
        values       = idents.values,
        accessor     = contract.accessor,
    )
}
