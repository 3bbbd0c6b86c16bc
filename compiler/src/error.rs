use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnumerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("Verifier error: {0}")]
    VerifierError(String),

    /// Failure while writing a report, as opposed to reading the manifest.
    #[error("Output error: {0}")]
    Output(serde_json::Error),
}
