use crate::{emit::Contract, utils::{rust_ident, rust_string_literal}};

/// Emits `to_json` / `from_json`.
///
/// `from_json` reports a payload that is not a JSON string as
/// `TypeMismatch`, and passes lookup failures through untouched.
pub fn emit(contract: &Contract) -> String {
    format!(
        r#"impl {ty} {{
    /// Encodes this `{name}` as a JSON string.
    pub fn to_json(&self) -> Result<Vec<u8>, {error}> {{
        Ok({runtime}::serde_json::to_vec(self.{accessor}())?)
    }}

    /// Decodes a `{name}` from a JSON string.
    pub fn from_json(data: &[u8]) -> Result<Self, {error}> {{
        let name: String = {runtime}::serde_json::from_slice(data)
            .map_err(|_| {error}::type_mismatch({name_literal}, data))?;
        {lookup}(&name)
    }}
}}
"#,
        ty           = rust_ident(&contract.type_name),
        name         = contract.type_name,
        name_literal = rust_string_literal(&contract.type_name),
        runtime      = contract.runtime,
        error        = contract.error_path(),
        accessor     = contract.accessor,
        lookup       = contract.lookup,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_only_the_contract() {
        let contract = Contract {
            type_name: "Shade".to_string(),
            accessor:  "label".to_string(),
            lookup:    "shade_from".to_string(),
            runtime:   "crate::rt".to_string(),
        };
        let code = emit(&contract);
        assert!(code.contains("Ok(crate::rt::serde_json::to_vec(self.label())?)"));
        assert!(code.contains(".map_err(|_| crate::rt::EnumError::type_mismatch(\"Shade\", data))?;"));
        assert!(code.contains("shade_from(&name)"));
    }
}
