use crate::{emit::Contract, utils::rust_ident};

/// Emits serde `Serialize` / `Deserialize` as a string scalar. YAML (and any
/// other serde format) drives these impls.
///
/// The deserializer's own error comes back as-is; a failed lookup goes
/// through `de::Error::custom` with its message unchanged.
pub fn emit(contract: &Contract) -> String {
    format!(
        r#"impl {runtime}::serde::Serialize for {ty} {{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: {runtime}::serde::Serializer,
    {{
        serializer.serialize_str(self.{accessor}())
    }}
}}

impl<'de> {runtime}::serde::Deserialize<'de> for {ty} {{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: {runtime}::serde::Deserializer<'de>,
    {{
        let name = <::std::string::String as {runtime}::serde::Deserialize<'de>>::deserialize(deserializer)?;
        {lookup}(&name).map_err(<D::Error as {runtime}::serde::de::Error>::custom)
    }}
}}
"#,
        runtime  = contract.runtime,
        ty       = rust_ident(&contract.type_name),
        accessor = contract.accessor,
        lookup   = contract.lookup,
    )
}
