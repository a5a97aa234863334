//! Implementation of the single `koa [DIR]` generation command.
//!
//! Responsibility: merge CLI flags with configured defaults into
//! `ProjectOptions`, call the core scaffold service, and print the next
//! steps. No generation rules live here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use koagen_adapters::{EmbeddedRenderer, LocalFilesystem};
use koagen_core::{
    application::ScaffoldService,
    domain::{ProjectOptions, ViewEngine},
    error::KoagenError,
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliResult, ResultExt},
    output::OutputManager,
};

/// Execute a generation run.
///
/// 1. Resolve the destination against the working directory
/// 2. Merge flags over configured defaults
/// 3. Run `ScaffoldService` (progress lines are printed as it goes)
/// 4. Print next-steps guidance
#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir().during("reading the working directory")?;
    let (shown, destination) = resolve_destination(args.destination.as_deref(), &cwd);

    let options = build_options(&args, &config, destination)?;
    debug!(%options, "Options resolved");

    let service = ScaffoldService::new(
        Box::new(EmbeddedRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );
    let report = service.scaffold(&options, &output)?;
    info!(
        app = %report.app_name,
        artifacts = report.created.len(),
        "Project generated"
    );

    output.next_steps(&shown, &report.app_name)?;
    Ok(())
}

/// Returns the destination as the user should see it in the `cd` hint and
/// the absolute path to generate into.
fn resolve_destination(raw: Option<&Path>, cwd: &Path) -> (String, PathBuf) {
    match raw.filter(|p| !p.as_os_str().is_empty()) {
        Some(p) => (p.display().to_string(), cwd.join(p)),
        None => (".".to_string(), cwd.to_path_buf()),
    }
}

fn build_options(
    args: &GenerateArgs,
    config: &AppConfig,
    destination: PathBuf,
) -> CliResult<ProjectOptions> {
    let view_engine: ViewEngine = match args.view.selected() {
        Some(engine) => engine,
        None => config.default_view()?,
    };
    let framework = match args.framework() {
        Some(framework) => framework,
        None => config.default_framework()?,
    };

    let options = ProjectOptions::builder(destination)
        .view_engine(view_engine)
        .framework(framework)
        .include_git(args.git || config.defaults.git)
        .force(args.force)
        .build()
        .map_err(KoagenError::from)?;
    Ok(options)
}
