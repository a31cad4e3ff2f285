use thiserror::Error;

pub type ListingResult<T> = Result<T, ListingError>;

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Input format error: {0}")]
    InputFormat(String),

    #[error("Template missing: {0}")]
    TemplateMissing(String),

    #[error("Write failure: {0}")]
    WriteFailure(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
