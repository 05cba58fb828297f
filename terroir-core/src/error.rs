use terroir_scanner::ScanError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
