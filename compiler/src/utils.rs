pub const RUST_KEYWORDS: [&str; 38] = [
    "as", "async", "await", "break", "const", "continue", "crate", "dyn",
    "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in",
    "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
];

/// Keywords that cannot be written as raw identifiers.
pub const NON_RAW_KEYWORDS: [&str; 5] = ["crate", "self", "Self", "super", "_"];

/// JSON-style quoting, for error messages.
pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}

/// A Rust string literal whose value is exactly `text`.
pub fn rust_string_literal(text: &str) -> String {
    format!("{:?}", text)
}

/// A Rust expression for `value` that is valid in any `i64` context.
pub fn int_literal(value: i64) -> String {
    if value == i64::MIN {
        "i64::MIN".to_string()
    } else {
        value.to_string()
    }
}

/// Escapes Rust reserved keywords as raw identifiers.
pub fn rust_ident(s: &str) -> String {
    if RUST_KEYWORDS.contains(&s) && !NON_RAW_KEYWORDS.contains(&s) {
        format!("r#{}", s)
    } else {
        s.to_string()
    }
}

/// Smallest unsigned integer type that can hold `max`.
pub fn index_type(max: usize) -> &'static str {
    if max <= u8::MAX as usize {
        "u8"
    } else if max <= u16::MAX as usize {
        "u16"
    } else if max <= u32::MAX as usize {
        "u32"
    } else {
        "usize"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_literals_escape() {
        assert_eq!(rust_string_literal("Red"), "\"Red\"");
        assert_eq!(rust_string_literal("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(rust_string_literal("tab\there"), "\"tab\\there\"");
    }

    #[test]
    fn identifiers() {
        assert_eq!(rust_ident("Red"), "Red");
        assert_eq!(rust_ident("match"), "r#match");
        assert_eq!(rust_ident("Self"), "Self");
    }

    #[test]
    fn index_types() {
        assert_eq!(index_type(12), "u8");
        assert_eq!(index_type(255), "u8");
        assert_eq!(index_type(256), "u16");
        assert_eq!(index_type(70_000), "u32");
    }

    #[test]
    fn int_literals() {
        assert_eq!(int_literal(-3), "-3");
        assert_eq!(int_literal(i64::MIN), "i64::MIN");
    }
}
