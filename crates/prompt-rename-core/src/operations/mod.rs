pub mod file_operations;
pub mod renamer;

pub use renamer::{
    run, run_with_options, RunOptions, RunSummary, COMPLETION_MESSAGE, DRY_RUN_COMPLETION_MESSAGE,
};
