/// Error types for the CESR primitive layer
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CesrError {
    #[error("unknown derivation code: {0}")]
    UnknownCode(String),

    #[error("unknown code selector: '{0}'")]
    UnknownSelector(char),

    #[error("invalid code size for '{code}': expected hard+soft size {expected}, code is {actual} chars")]
    InvalidCodeSize {
        code: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid code '{0}' for this primitive")]
    InvalidCode(String),

    #[error("raw material size mismatch for code '{code}': expected {expected} bytes, got {actual}")]
    RawMaterialSize {
        code: String,
        expected: usize,
        actual: usize,
    },

    #[error("qualified material too short: need {expected} chars, got {actual}")]
    ShortMaterial { expected: usize, actual: usize },

    #[error("non-zero padding bits in qualified material for code '{0}'")]
    NonZeroPadding(String),

    #[error("value overflow: {0}")]
    ValueOverflow(String),

    #[error("no constructor input supplied (need one of code+raw, qb64, qb64b, qb2)")]
    EmptyMaterial,

    #[error("invalid soft (size) field for code '{0}': {1}")]
    InvalidSoft(String, String),

    #[error("cryptographic operation failed: {0}")]
    CryptoFailure(String),

    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("invalid SAD/event payload: {0}")]
    InvalidEvent(String),

    #[error("base64 decode error: {0}")]
    Base64Error(#[from] base64::DecodeError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("invalid UTF-8 in qualified material: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, CesrError>;
