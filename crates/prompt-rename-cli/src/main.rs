use anyhow::Result;
use clap::Parser;
use log::info;
use prompt_rename_core::{builtin_plan, run_with_options, RunOptions, DEFAULT_BASE_DIR};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Rename the prompt collection in its default location
    prompt-rename

    # Preview the renames against a copy of the collection
    prompt-rename --base-dir ~/backup/prompts --dry-run

LOGGING:
    Set RUST_LOG=debug to trace each entry on stderr."#)]
struct Args {
    #[arg(
        short,
        long,
        value_name = "DIR",
        help = "Directory holding the prompt collection [default: built-in path]"
    )]
    base_dir: Option<PathBuf>,

    #[arg(long, help = "Report what would be renamed without touching the filesystem")]
    dry_run: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let base_dir = args
        .base_dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BASE_DIR));
    info!("Using base directory {:?}", base_dir);

    let plan = builtin_plan(&base_dir);
    let options = RunOptions {
        dry_run: args.dry_run,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_options(&plan, options, &mut out)?;

    Ok(())
}
