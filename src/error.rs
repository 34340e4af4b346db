use thiserror::Error;

/// Why a color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex color “{0}”")]
    InvalidHex(String),

    #[error("malformed color function “{0}”")]
    InvalidFunction(String),

    #[error("color component out of range in “{0}”")]
    OutOfRange(String),

    #[error("unknown color name “{0}”")]
    UnknownName(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("unable to encode palette image: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid settings: {0}")]
    Config(#[from] toml::de::Error),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}
