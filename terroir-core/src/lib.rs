pub mod error;
pub mod harvest;
pub mod model;
pub mod report;
pub mod store;

pub use error::{HarvestError, StoreError};
pub use harvest::{HarvestConfig, HarvestProgressCallback, HarvestSummary, execute_harvest};
pub use model::ProfileRecord;
pub use report::{extract_url_path, generate_store_report};
pub use store::{DEFAULT_STORE_FILE, ProfileStore};
