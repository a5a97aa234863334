//! Domain value objects: ViewEngine, FrameworkVersion.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Each one maps to a fixed set of facts (file extension, layout support,
//! rendering package) through `match` tables so that every choice the
//! generator makes is visible in one place.
//!
//! # Adding a view engine
//!
//! 1. Add the variant here
//! 2. Fill in the `as_str`, `extension`, `uses_layout` and `package` arms
//! 3. Add the view bodies in `koagen-adapters/templates/views/`
//! 4. Map the new `ContentKey::View` combinations in the renderer

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ViewEngine ────────────────────────────────────────────────────────────────

/// The markup-templating technology used by the generated application.
///
/// Exactly one engine is active per project. `None` generates no view files
/// and adds no engine package to `package.json`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewEngine {
    None,
    #[default]
    Jade,
    Ejs,
    Handlebars,
    Hogan,
}

impl ViewEngine {
    pub const ALL: [ViewEngine; 5] = [
        Self::None,
        Self::Jade,
        Self::Ejs,
        Self::Handlebars,
        Self::Hogan,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Jade => "jade",
            Self::Ejs => "ejs",
            Self::Handlebars => "hbs",
            Self::Hogan => "hogan",
        }
    }

    /// File extension of the view files, also passed to `koa-views`.
    ///
    /// `None` falls back to `html`, which `koa-views` serves without an
    /// engine.
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::None => "html",
            Self::Jade => "jade",
            Self::Ejs => "ejs",
            Self::Handlebars => "hbs",
            Self::Hogan => "hjs",
        }
    }

    /// Whether the engine renders pages inside a shared `layout` view.
    pub const fn uses_layout(&self) -> bool {
        matches!(self, Self::Jade | Self::Handlebars)
    }

    /// The npm package providing the engine and its version range.
    pub const fn package(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::None => None,
            Self::Jade => Some(("jade", "~1.11.0")),
            Self::Ejs => Some(("ejs", "~2.3.3")),
            Self::Handlebars => Some(("hbs", "~4.0.0")),
            Self::Hogan => Some(("hogan.js", "~3.0.2")),
        }
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for ViewEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewEngine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "no-view" => Ok(Self::None),
            "jade" => Ok(Self::Jade),
            "ejs" => Ok(Self::Ejs),
            "hbs" | "handlebars" => Ok(Self::Handlebars),
            "hogan" | "hjs" => Ok(Self::Hogan),
            other => Err(DomainError::InvalidOption(format!(
                "unknown view engine: {other}"
            ))),
        }
    }
}

// ── FrameworkVersion ──────────────────────────────────────────────────────────

/// Which Koa API shape the generated application targets.
///
/// Only content selection depends on this; the manifest shape never does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkVersion {
    /// Koa 1: generator middleware, `require('koa')()`.
    Legacy,
    /// Koa 2: `new Koa()`, legacy middleware wrapped with `koa-convert`.
    #[default]
    Current,
}

impl FrameworkVersion {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "koa1",
            Self::Current => "koa2",
        }
    }
}

impl fmt::Display for FrameworkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrameworkVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "koa1" | "1" | "legacy" => Ok(Self::Legacy),
            "koa2" | "2" | "current" => Ok(Self::Current),
            other => Err(DomainError::InvalidOption(format!(
                "unknown framework version: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_engine_parses_aliases() {
        assert_eq!(ViewEngine::from_str("EJS").unwrap(), ViewEngine::Ejs);
        assert_eq!(
            ViewEngine::from_str("handlebars").unwrap(),
            ViewEngine::Handlebars
        );
        assert_eq!(ViewEngine::from_str("hjs").unwrap(), ViewEngine::Hogan);
        assert!(ViewEngine::from_str("pug").is_err());
    }

    #[test]
    fn only_jade_and_hbs_use_layouts() {
        let with_layout: Vec<_> = ViewEngine::ALL
            .iter()
            .filter(|e| e.uses_layout())
            .collect();
        assert_eq!(with_layout, [&ViewEngine::Jade, &ViewEngine::Handlebars]);
    }

    #[test]
    fn every_engine_but_none_has_a_package() {
        for engine in ViewEngine::ALL {
            assert_eq!(engine.package().is_none(), engine.is_none(), "{engine}");
        }
    }

    #[test]
    fn default_is_jade_on_koa2() {
        assert_eq!(ViewEngine::default(), ViewEngine::Jade);
        assert_eq!(FrameworkVersion::default(), FrameworkVersion::Current);
    }

    #[test]
    fn framework_version_round_trips_through_display() {
        for v in [FrameworkVersion::Legacy, FrameworkVersion::Current] {
            assert_eq!(FrameworkVersion::from_str(&v.to_string()).unwrap(), v);
        }
    }
}
