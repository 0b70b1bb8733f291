use thiserror::Error;

/// Errors raised by domain type constructors and parsers.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Invalid bar: {0}")]
    InvalidBar(String),

    #[error("Invalid instrument: {0}")]
    InvalidInstrument(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
