use crate::{emit::Contract, utils::{rust_ident, rust_string_literal}};

/// Emits `FromStr` plus `to_text` / `from_text` over raw UTF-8 bytes.
pub fn emit(contract: &Contract) -> String {
    format!(
        r#"impl ::std::str::FromStr for {ty} {{
    type Err = {error};

    fn from_str(s: &str) -> Result<Self, Self::Err> {{
        {lookup}(s)
    }}
}}

impl {ty} {{
    /// Encodes this `{name}` as UTF-8 text.
    pub fn to_text(&self) -> Vec<u8> {{
        self.{accessor}().as_bytes().to_vec()
    }}

    /// Decodes a `{name}` from UTF-8 text. Bytes that are not UTF-8 never
    /// match a member.
    pub fn from_text(text: &[u8]) -> Result<Self, {error}> {{
        match ::std::str::from_utf8(text) {{
            Ok(name) => {lookup}(name),
            Err(_) => Err({error}::not_found(&::std::string::String::from_utf8_lossy(text), {name_literal})),
        }}
    }}
}}
"#,
        ty           = rust_ident(&contract.type_name),
        name         = contract.type_name,
        name_literal = rust_string_literal(&contract.type_name),
        error        = contract.error_path(),
        accessor     = contract.accessor,
        lookup       = contract.lookup,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::Idents;

    #[test]
    fn delegates_to_lookup() {
        let code = emit(&Contract::new(&Idents::new("enum", "Color"), "::brine_enumer"));
        assert!(code.contains("impl ::std::str::FromStr for Color {"));
        assert!(code.contains("type Err = ::brine_enumer::EnumError;"));
        assert!(code.contains("enum_color_of(s)"));
        assert!(code.contains("self.as_str().as_bytes().to_vec()"));
        assert!(code.contains("match ::std::str::from_utf8(text) {"));
        assert!(code.contains("Ok(name) => enum_color_of(name),"));
        assert!(code.contains("Err(_) => Err(::brine_enumer::EnumError::not_found(&::std::string::String::from_utf8_lossy(text), \"Color\")),"));
    }
}
