use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Cannot add book from category '{book}' to shelf of category '{shelf}'")]
    CategoryMismatch { shelf: String, book: String },
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Parse error: {message}")]
    Parse { message: String, line: Option<usize>, col: Option<usize> },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

// Helper conversions
impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self { Self::Io(e.to_string()) }
}
impl From<config::ConfigError> for CatalogError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        let (line, col) = if e.line() > 0 { (Some(e.line()), Some(e.column())) } else { (None, None) };
        Self::Parse { message: e.to_string(), line, col }
    }
}
