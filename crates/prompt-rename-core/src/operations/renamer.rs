use crate::operations::file_operations::{path_exists, rename_path};
use crate::types::{display_name, RenameEntry, RenamePlan};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::Write;

pub const COMPLETION_MESSAGE: &str = "All files and directories renamed successfully!";
pub const DRY_RUN_COMPLETION_MESSAGE: &str = "Dry run complete. No files were modified.";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunOptions {
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub renamed: usize,
    pub not_found: usize,
}

pub fn run<W: Write>(plan: &RenamePlan, out: &mut W) -> Result<RunSummary> {
    run_with_options(plan, RunOptions::default(), out)
}

/// Walks the plan in order. A missing source is reported and skipped; a
/// failed rename is returned immediately and the remaining entries are left
/// untouched.
pub fn run_with_options<W: Write>(
    plan: &RenamePlan,
    options: RunOptions,
    out: &mut W,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for (i, entry) in plan.iter().enumerate() {
        debug!(
            "Entry #{}: {:?} -> {:?}",
            i + 1,
            entry.source,
            entry.destination
        );

        if !path_exists(&entry.source) {
            warn!("Source not found: {:?}", entry.source);
            writeln!(out, "Not found: {}", entry.source.display())
                .context("Failed to write status line")?;
            summary.not_found += 1;
            continue;
        }

        if options.dry_run {
            write_rename_line(out, "Would rename", entry)?;
        } else {
            rename_path(&entry.source, &entry.destination)?;
            write_rename_line(out, "Renamed", entry)?;
        }
        summary.renamed += 1;
    }

    let completion = if options.dry_run {
        DRY_RUN_COMPLETION_MESSAGE
    } else {
        COMPLETION_MESSAGE
    };
    writeln!(out, "\n{}", completion).context("Failed to write completion line")?;

    info!(
        "Processed {} entries: {} renamed, {} not found",
        plan.len(),
        summary.renamed,
        summary.not_found
    );
    Ok(summary)
}

fn write_rename_line<W: Write>(out: &mut W, label: &str, entry: &RenameEntry) -> Result<()> {
    writeln!(
        out,
        "{}: {} -> {}",
        label,
        display_name(&entry.source),
        display_name(&entry.destination)
    )
    .context("Failed to write status line")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenameError;
    use std::fs;
    use tempfile::tempdir;

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_run_renames_existing_file() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("a.txt");
        let dst = dir.path().join("A.txt");
        fs::write(&src, "hello").unwrap();

        let plan = RenamePlan::new(vec![RenameEntry::new(&src, &dst)]);
        let mut buf = Vec::new();
        let summary = run(&plan, &mut buf).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                renamed: 1,
                not_found: 0
            }
        );
        assert!(!src.exists());
        assert_eq!(fs::read_to_string(&dst).unwrap(), "hello");
        assert_eq!(
            output(buf),
            format!("Renamed: a.txt -> A.txt\n\n{}\n", COMPLETION_MESSAGE)
        );
    }

    #[test]
    fn test_run_reports_missing_source() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("missing.txt");
        let dst = dir.path().join("M.txt");

        let plan = RenamePlan::new(vec![RenameEntry::new(&src, &dst)]);
        let mut buf = Vec::new();
        let summary = run(&plan, &mut buf).unwrap();

        assert_eq!(summary.not_found, 1);
        assert!(!src.exists());
        assert!(!dst.exists());
        let out = output(buf);
        assert!(out.starts_with(&format!("Not found: {}\n", src.display())));
        assert!(out.ends_with(&format!("{}\n", COMPLETION_MESSAGE)));
    }

    #[test]
    fn test_run_empty_plan_only_prints_completion() {
        let mut buf = Vec::new();
        let summary = run(&RenamePlan::default(), &mut buf).unwrap();

        assert_eq!(summary, RunSummary::default());
        assert_eq!(output(buf), format!("\n{}\n", COMPLETION_MESSAGE));
    }

    #[test]
    fn test_run_stops_at_first_rename_failure() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        fs::write(&first, "1").unwrap();
        fs::write(&second, "2").unwrap();

        let plan = RenamePlan::new(vec![
            RenameEntry::new(&first, dir.path().join("no_such_dir").join("First.txt")),
            RenameEntry::new(&second, dir.path().join("Second.txt")),
        ]);
        let mut buf = Vec::new();
        let err = run(&plan, &mut buf).unwrap_err();

        assert!(err.downcast_ref::<RenameError>().is_some());
        assert!(first.exists());
        assert!(second.exists());
        assert!(!dir.path().join("Second.txt").exists());
        assert!(!output(buf).contains(COMPLETION_MESSAGE));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_replaces_existing_destination_file() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("a.txt");
        let dst = dir.path().join("A.txt");
        fs::write(&src, "new").unwrap();
        fs::write(&dst, "old").unwrap();

        let plan = RenamePlan::new(vec![RenameEntry::new(&src, &dst)]);
        let mut buf = Vec::new();
        run(&plan, &mut buf).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read_to_string(&dst).unwrap(), "new");
    }

    #[test]
    fn test_dry_run_leaves_filesystem_untouched() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("续写(1).txt");
        let dst = dir.path().join("Continue(1).txt");
        fs::write(&src, "content").unwrap();

        let plan = RenamePlan::new(vec![
            RenameEntry::new(&src, &dst),
            RenameEntry::new(dir.path().join("gone.txt"), dir.path().join("Gone.txt")),
        ]);
        let mut buf = Vec::new();
        let summary = run_with_options(&plan, RunOptions { dry_run: true }, &mut buf).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                renamed: 1,
                not_found: 1
            }
        );
        assert!(src.exists());
        assert!(!dst.exists());
        let out = output(buf);
        assert!(out.contains("Would rename: 续写(1).txt -> Continue(1).txt\n"));
        assert!(out.contains("Not found: "));
        assert!(out.ends_with(&format!("\n{}\n", DRY_RUN_COMPLETION_MESSAGE)));
    }
}
