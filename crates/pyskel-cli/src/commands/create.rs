//! Implementation of the `pyskel create` command.
//!
//! Responsibility: translate CLI arguments into a `ProjectRequest`, call the
//! core generator, and display results. No business logic lives here.

use tracing::{debug, info, instrument, warn};

use pyskel_adapters::{HttpFetcher, LocalFilesystem, MemoryFetcher};
use pyskel_core::{
    application::{GenerationReport, ProjectGenerator, ports::TextFetcher},
    domain::{LayoutEntry, Override, ProjectLayout, ProjectRequest},
    error::{PyskelError, PyskelResult},
};

use crate::{cli::CreateArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Execute the `pyskel create` command.
///
/// Dispatch sequence:
/// 1. Parse `--data` overrides (a malformed token aborts before any I/O)
/// 2. Build the request and pick adapters
/// 3. Early-exit with the planned tree if `--dry-run`
/// 4. Generate and report
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: CreateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let CreateArgs {
        name,
        dir,
        force,
        dry_run,
        offline,
        templates,
        data,
        files,
    } = args;

    // 1. Overrides
    let overrides = Override::parse_all(&data).map_err(PyskelError::from)?;
    debug!(count = overrides.len(), "Parsed overrides");

    // 2. Request + adapters
    let request = ProjectRequest::new(name, dir)
        .with_files(files)
        .with_overrides(overrides)
        .with_identity(config.identity())
        .with_force(force);

    let store = super::template_store(templates.as_deref(), &config)?;
    let fetcher = text_fetcher(offline, dry_run);
    let generator = ProjectGenerator::new(store, fetcher, Box::new(LocalFilesystem::new()));

    // 3. Dry run: describe but do not write.
    if dry_run {
        let layout = generator.plan(&request)?;
        return show_plan(&layout, &request, &output);
    }

    // 4. Generate
    output.header(&format!(
        "Creating project {} in directory {}",
        request.name(),
        request.root().display()
    ))?;

    let report = generator.generate(&request)?;

    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }

    show_report(&report, &output)?;
    Ok(())
}

/// Pick the fetcher for LICENSE and .gitignore. A dry run never downloads.
fn text_fetcher(offline: bool, dry_run: bool) -> Box<dyn TextFetcher> {
    if dry_run {
        return Box::new(MemoryFetcher::offline());
    }
    if offline {
        info!("Offline: LICENSE and .gitignore will be skipped");
        return Box::new(MemoryFetcher::offline());
    }
    http_or_offline(HttpFetcher::new())
}

/// Without an HTTP client the downloads are skipped like any failed fetch.
fn http_or_offline(client: PyskelResult<HttpFetcher>) -> Box<dyn TextFetcher> {
    match client {
        Ok(http) => Box::new(http),
        Err(e) => {
            warn!(error = %e, "HTTP client unavailable; LICENSE and .gitignore will be skipped");
            Box::new(MemoryFetcher::offline())
        }
    }
}

fn show_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    for file in &report.files {
        output.print(&format!("  {}", file.display()))?;
    }
    for skipped in &report.skipped {
        output.warning(&format!(
            "Skipped {}: {}",
            skipped.path.display(),
            skipped.reason
        ))?;
    }

    output.success(&format!(
        "Project created at {} ({} files)",
        report.root.display(),
        report.files.len()
    ))?;
    Ok(())
}

fn show_plan(
    layout: &ProjectLayout,
    request: &ProjectRequest,
    output: &OutputManager,
) -> CliResult<()> {
    if output.is_json() {
        let planned = GenerationReport {
            root: layout.root().to_path_buf(),
            directories: layout.directories().map(|d| d.to_path_buf()).collect(),
            files: layout.files().map(|f| f.path.clone()).collect(),
            skipped: Vec::new(),
        };
        output.json(&planned)?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would create '{}' at {}",
        request.name(),
        layout.root().display()
    ))?;

    if layout.root().exists() {
        if request.force() {
            output.warning("Existing directory would be removed first (--force)")?;
        } else {
            output.warning("Directory already exists; the real run would fail without --force")?;
        }
    }

    for entry in layout.entries() {
        let line = match entry {
            LayoutEntry::Directory(dir) => format!("  {}/", dir.display()),
            LayoutEntry::File(file) if file.content.is_remote() => {
                format!("  {} (downloaded)", file.path.display())
            }
            LayoutEntry::File(file) => format!("  {}", file.path.display()),
        };
        output.print(&line)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyskel_core::{application::ApplicationError, domain::MIT_LICENSE_URL};

    #[test]
    fn broken_http_client_degrades_to_skipped_downloads() {
        let broken: PyskelResult<HttpFetcher> = Err(ApplicationError::Fetch {
            url: String::new(),
            reason: "failed to create HTTP client: no TLS backend".into(),
        }
        .into());

        let err = http_or_offline(broken).fetch(MIT_LICENSE_URL).unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn dry_run_never_downloads() {
        let err = text_fetcher(false, true).fetch(MIT_LICENSE_URL).unwrap_err();
        assert!(err.is_recoverable());
    }
}
