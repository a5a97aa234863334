//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};
use koagen_core::domain::{FrameworkVersion, ViewEngine};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "koa",
    bin_name = "koa",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate a ready-to-run Koa application",
    long_about = "koa creates a Koa web application skeleton: launcher script, \
                  app entry point, routes, views, static assets and a \
                  package.json ready for `npm install`.",
    after_help = "EXAMPLES:\n\
        \x20 koa                     # generate into the current directory\n\
        \x20 koa blog --hbs --git    # handlebars views plus a .gitignore\n\
        \x20 koa legacy-api --koa1   # generator-based Koa 1 middleware\n\
        \x20 koa . --force           # generate into a non-empty directory",
)]
pub struct Cli {
    #[command(flatten)]
    pub generate: GenerateArgs,

    #[command(flatten)]
    pub global: GlobalArgs,
}

// ── Generation ────────────────────────────────────────────────────────────────

/// What to generate and where.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Destination directory.  Defaults to the current directory; the
    /// application name is taken from its last path segment.
    #[arg(value_name = "DIR", help = "Destination directory [default: .]")]
    pub destination: Option<PathBuf>,

    #[command(flatten)]
    pub view: ViewArgs,

    /// Add a `.gitignore`.
    #[arg(long = "git", help = "Add .gitignore")]
    pub git: bool,

    /// Generate into a directory that already has entries.
    #[arg(short = 'f', long = "force", help = "Force on non-empty directory")]
    pub force: bool,

    /// Use the Koa 1 (generator middleware) API.
    #[arg(long = "koa1", help = "Use koa 1 (generator middleware) instead of koa 2")]
    pub koa1: bool,
}

impl GenerateArgs {
    /// Framework requested on the command line, if any.
    pub fn framework(&self) -> Option<FrameworkVersion> {
        self.koa1.then_some(FrameworkVersion::Legacy)
    }
}

/// View engine selector.  At most one flag may be given.
#[derive(Debug, Args)]
#[group(id = "view", multiple = false)]
pub struct ViewArgs {
    /// Jade templates (the default engine).
    #[arg(long = "jade", help = "Add jade engine support (default)")]
    pub jade: bool,

    #[arg(short = 'e', long = "ejs", help = "Add ejs engine support")]
    pub ejs: bool,

    #[arg(long = "hbs", help = "Add handlebars engine support")]
    pub hbs: bool,

    #[arg(short = 'H', long = "hogan", help = "Add hogan.js engine support")]
    pub hogan: bool,

    /// Skip view templates; `views/` is created empty.
    #[arg(long = "no-view", help = "Generate without view engine")]
    pub no_view: bool,
}

impl ViewArgs {
    /// Engine requested on the command line, if any.
    pub fn selected(&self) -> Option<ViewEngine> {
        [
            (self.jade, ViewEngine::Jade),
            (self.ejs, ViewEngine::Ejs),
            (self.hbs, ViewEngine::Handlebars),
            (self.hogan, ViewEngine::Hogan),
            (self.no_view, ViewEngine::None),
        ]
        .into_iter()
        .find_map(|(set, engine)| set.then_some(engine))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("koa").chain(args.iter().copied()))
    }

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_defaults() {
        let cli = parse(&[]).unwrap();
        assert!(cli.generate.destination.is_none());
        assert_eq!(cli.generate.view.selected(), None);
        assert_eq!(cli.generate.framework(), None);
        assert!(!cli.generate.git && !cli.generate.force);
    }

    #[test]
    fn short_flags_select_engines() {
        let cli = parse(&["app", "-e"]).unwrap();
        assert_eq!(cli.generate.view.selected(), Some(ViewEngine::Ejs));

        let cli = parse(&["-H", "app"]).unwrap();
        assert_eq!(cli.generate.view.selected(), Some(ViewEngine::Hogan));
        assert_eq!(cli.generate.destination, Some(PathBuf::from("app")));
    }

    #[test]
    fn no_view_selects_none() {
        let cli = parse(&["--no-view"]).unwrap();
        assert_eq!(cli.generate.view.selected(), Some(ViewEngine::None));
    }

    #[test]
    fn engines_are_mutually_exclusive() {
        let err = parse(&["--hbs", "--ejs"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn koa1_and_generation_flags() {
        let cli = parse(&["out", "--koa1", "--git", "-f"]).unwrap();
        assert_eq!(cli.generate.framework(), Some(FrameworkVersion::Legacy));
        assert!(cli.generate.git && cli.generate.force);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = parse(&["--jsx"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn help_mentions_usage_markers() {
        let help = Cli::command().render_help().to_string();
        for marker in ["Usage: koa", "--help", "--version", "--koa1"] {
            assert!(help.contains(marker), "missing {marker}");
        }
    }

    #[test]
    fn version_matches_cargo() {
        assert_eq!(Cli::command().get_version(), Some(env!("CARGO_PKG_VERSION")));
    }
}
