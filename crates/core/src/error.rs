use thiserror::Error;

#[derive(Error, Debug)]
pub enum CppStringsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Template error: {0}")]
    Template(String),
}

pub type Result<T> = std::result::Result<T, CppStringsError>;
