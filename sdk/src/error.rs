use thiserror::Error;

/// Errors surfaced by generated enum code at runtime.
#[derive(Debug, Error)]
pub enum EnumError {
    /// A name has no matching member.
    #[error("{name} does not belong to {type_name} values")]
    NotFound {
        name:      String,
        type_name: &'static str,
    },

    /// A structured-text payload did not hold a string.
    #[error("{type_name} should be a string, got {payload}")]
    TypeMismatch {
        type_name: &'static str,
        payload:   String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EnumError {
    pub fn not_found(name: &str, type_name: &'static str) -> EnumError {
        EnumError::NotFound {
            name: name.to_owned(),
            type_name,
        }
    }

    /// Keeps the raw payload, lossily decoded, for the error message.
    pub fn type_mismatch(type_name: &'static str, payload: &[u8]) -> EnumError {
        EnumError::TypeMismatch {
            type_name,
            payload: String::from_utf8_lossy(payload).into_owned(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, EnumError::NotFound { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, EnumError::TypeMismatch { .. })
    }
}
