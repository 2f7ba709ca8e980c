pub mod error;
pub mod operations;
pub mod plan;
pub mod types;

pub use error::RenameError;
pub use operations::{
    run, run_with_options, RunOptions, RunSummary, COMPLETION_MESSAGE, DRY_RUN_COMPLETION_MESSAGE,
};
pub use plan::{builtin_plan, DEFAULT_BASE_DIR};
pub use types::{RenameEntry, RenamePlan};
