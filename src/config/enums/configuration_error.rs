use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    ParseError(#[from] toml::de::Error),
    #[error("{0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("invalid configuration: {0}")]
    ValidationError(String),
    #[error("unable to initialize logging: {0}")]
    LoggerError(#[from] log::SetLoggerError),
    #[error("will not create {0} automatically")]
    NotCreated(String),
    #[error("default configuration written to {0}")]
    Created(String),
}
