use thiserror::Error;

pub mod core_config;


#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Parsing error: {0}")]
    GeneralParsingError(String),
}

#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Host pool must contain at least one entry")]
    EmptyHostPool,

    #[error("DID domain must not be empty")]
    EmptyDidDomain,
}
