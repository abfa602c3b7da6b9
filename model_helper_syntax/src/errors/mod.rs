use thiserror::Error;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

#[derive(Error, Debug)]
pub enum SyntaxError {
    /// The source is not valid Java. Positions are 1-based.
    #[error("Invalid Java source at line {line}, column {column}")]
    Parse { line: usize, column: usize },
    #[error("Failed to load the Java grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    #[error("The parser did not produce a syntax tree")]
    Cancelled,
}
