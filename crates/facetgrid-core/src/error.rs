//! Error types and exit codes for facetgrid
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing catalog, invalid JSON/TOML, etc.)
//!
//! The engine itself never fails: unknown slugs, malformed query
//! parameters, and over-long pagination all degrade silently. Errors
//! only arise at the I/O edge (catalog/config loading) and in CLI
//! argument handling.

use thiserror::Error;

/// Exit codes reported by the facetgrid CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error (2)
    Usage = 2,
    /// Data error (3)
    Data = 3,
}

/// Errors surfaced by catalog/config loading and the CLI
#[derive(Error, Debug)]
pub enum FacetgridError {
    /// Catalog JSON could not be parsed
    #[error("invalid catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Configuration TOML could not be parsed
    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A redirect URL could not be constructed
    #[error("invalid redirect URL: {0}")]
    RedirectUrl(#[from] url::ParseError),

    /// Unrecognized output format name
    #[error("unknown output format: {0}")]
    UnknownFormat(String),

    /// Bad flags or arguments
    #[error("usage error: {0}")]
    UsageError(String),

    /// Underlying I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors without a dedicated variant
    #[error("{0}")]
    Other(String),
}

impl FacetgridError {
    /// Map the error to its CLI exit code
    pub fn exit_code(&self) -> ExitCode {
        match self {
            FacetgridError::CatalogParse(_)
            | FacetgridError::ConfigParse(_)
            | FacetgridError::Io(_) => ExitCode::Data,
            FacetgridError::UnknownFormat(_) | FacetgridError::UsageError(_) => ExitCode::Usage,
            FacetgridError::RedirectUrl(_) | FacetgridError::Other(_) => ExitCode::Failure,
        }
    }

    /// Short identifier for the error variant, used in JSON envelopes
    pub fn error_type(&self) -> &'static str {
        match self {
            FacetgridError::CatalogParse(_) => "catalog_parse",
            FacetgridError::ConfigParse(_) => "config_parse",
            FacetgridError::RedirectUrl(_) => "redirect_url",
            FacetgridError::UnknownFormat(_) => "unknown_format",
            FacetgridError::UsageError(_) => "usage",
            FacetgridError::Io(_) => "io",
            FacetgridError::Other(_) => "other",
        }
    }

    /// Structured JSON error envelope for machine-readable output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result alias used throughout facetgrid
pub type Result<T> = std::result::Result<T, FacetgridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_exit_2() {
        let err = FacetgridError::UsageError("bad flag".into());
        assert_eq!(err.exit_code(), ExitCode::Usage);
        assert_eq!(ExitCode::Usage as u8, 2);
    }

    #[test]
    fn data_errors_exit_3() {
        let err = FacetgridError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing catalog",
        ));
        assert_eq!(err.exit_code(), ExitCode::Data);
    }

    #[test]
    fn json_envelope_shape() {
        let err = FacetgridError::UnknownFormat("xml".into());
        let value = err.to_json();
        assert_eq!(value["error"]["code"], 2);
        assert_eq!(value["error"]["type"], "unknown_format");
        assert!(value["error"]["message"]
            .as_str()
            .unwrap()
            .contains("xml"));
    }
}
