pub mod commands;
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use commands::command_argument_builder;
pub use handlers::{
    expand_store_path, harvest_config_from_args, load_store_report, translate_endpoint_from_args,
};

// Re-export harvest functionality from terroir-core
pub use terroir_core::harvest::{HarvestConfig, HarvestSummary, execute_harvest};
