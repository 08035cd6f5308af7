use thiserror::Error;

/// RFC parsing and expansion errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error(transparent)]
    ExpansionError(#[from] crate::rfc::ical::expand::ExpansionError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
