use std::path::PathBuf;

use model_helper_syntax::SyntaxError;
use strum::IntoStaticStr;
use thiserror::Error;

pub type ModelHelperResult<T> = Result<T, ModelHelperError>;

/// Failures of a single extraction run. All of them leave the caller free to
/// retry with another file.
#[derive(Error, Debug, IntoStaticStr)]
pub enum ModelHelperError {
    #[error("No file has been selected - please choose a file before continuing")]
    #[strum(serialize = "no-file-chosen")]
    NoFileSelected,

    #[error("Failed to read {}: {source}", path.display())]
    #[strum(serialize = "io-error")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse source: {0}")]
    #[strum(serialize = "parse-error")]
    Parse(#[from] SyntaxError),

    #[error("No top-level type declaration found")]
    #[strum(serialize = "no-primary-type")]
    NoPrimaryType,
}

impl ModelHelperError {
    /// Short symbolic key identifying the kind of error, e.g. `no-file-chosen`.
    pub fn key(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_keys() {
        assert_eq!(ModelHelperError::NoFileSelected.key(), "no-file-chosen");
        assert_eq!(ModelHelperError::NoPrimaryType.key(), "no-primary-type");
        assert_eq!(
            ModelHelperError::Parse(SyntaxError::Parse { line: 3, column: 7 }).key(),
            "parse-error"
        );
        let io = ModelHelperError::Io {
            path: PathBuf::from("Missing.java"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(io.key(), "io-error");
    }

    #[test]
    fn test_no_file_message() {
        assert_eq!(
            ModelHelperError::NoFileSelected.to_string(),
            "No file has been selected - please choose a file before continuing"
        );
    }
}
