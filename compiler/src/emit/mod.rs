//! Method emitters.
//!
//! Every emitter is a pure function from explicit metadata to Rust source.
//! The protocol adapters only see a [Contract]: the type name plus the names
//! of the canonical accessor and the lookup function they call into.

pub mod canonical;
pub mod json;
pub mod text;
pub mod yaml;

use brine_enumer_schema::to_snake_case;

/// Generated identifiers for one type. `prefix` and the type name are
/// snake-cased and joined, e.g. `enum` + `HTTPStatus` gives
/// `ENUM_HTTP_STATUS_REPR` and `enum_http_status_of`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Idents {
    pub type_name: String,
    pub stem:      String,
    pub values:    String,
    pub map:       String,
    pub lookup:    String,
}

impl Idents {
    pub fn new(prefix: &str, type_name: &str) -> Idents {
        let stem = [to_snake_case(prefix), to_snake_case(type_name)]
            .iter()
            .map(|part| part.trim_matches('_'))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("_");
        let upper = stem.to_uppercase();

        Idents {
            type_name: type_name.to_string(),
            values:    format!("{}_VALUES", upper),
            map:       format!("{}_MAP", upper),
            lookup:    format!("{}_of", stem),
            stem,
        }
    }

    /// `<STEM>_REPR`, or `<STEM>_REPR_<run>` for per-run tables.
    pub fn repr(&self, run_id: Option<usize>) -> String {
        self.suffixed("REPR", run_id)
    }

    pub fn index(&self, run_id: Option<usize>) -> String {
        self.suffixed("INDEX", run_id)
    }

    fn suffixed(&self, kind: &str, run_id: Option<usize>) -> String {
        match run_id {
            Some(id) => format!("{}_{}_{}", self.stem.to_uppercase(), kind, id),
            None     => format!("{}_{}", self.stem.to_uppercase(), kind),
        }
    }
}

/// What an adapter may assume already exists in the generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contract {
    pub type_name: String,
    /// Inherent method `fn(&self) -> &'static str`.
    pub accessor:  String,
    /// Free function `fn(&str) -> Result<Type, EnumError>`.
    pub lookup:    String,
    /// Path of the runtime crate.
    pub runtime:   String,
}

impl Contract {
    pub fn new(idents: &Idents, runtime: &str) -> Contract {
        Contract {
            type_name: idents.type_name.clone(),
            accessor:  canonical::ACCESSOR.to_string(),
            lookup:    idents.lookup.clone(),
            runtime:   runtime.to_string(),
        }
    }

    pub fn error_path(&self) -> String {
        format!("{}::EnumError", self.runtime)
    }
}
