use filter_engine::FilterError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse filter file {path}: {source}")]
    FilterParse {
        path: String,
        source: serde_json::Error,
    },

    #[error("Failed to parse records file {path}: {source}")]
    RecordsParse {
        path: String,
        source: serde_json::Error,
    },

    #[error("Failed to compile filter: {0}")]
    Compile(#[from] FilterError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),
}
