use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("could not open rental dataset: {0}")]
    FileError(#[from] std::io::Error),
    #[error("could not parse CSV rows to rental records: {0}")]
    CsvError(#[from] csv::Error),
    #[error("rental dataset is missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("row {row}: `{column}` has invalid value {value}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, DatasetError>;
