//! Dependency resolution for the generated `package.json`.
//!
//! The output order is compared byte-for-byte by consumers of the generated
//! manifest, so nothing here sorts. Each framework version owns one fixed
//! table; the table carries an explicit [`Slot::ViewEngine`] marking where the
//! selected engine's package goes.

use std::collections::HashSet;
use std::fmt;

use crate::domain::{
    entities::options::ProjectOptions,
    error::DomainError,
    value_objects::{FrameworkVersion, ViewEngine},
};

/// Which object of `package.json` a fragment lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencySection {
    Dependencies,
    DevDependencies,
}

impl DependencySection {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dependencies => "dependencies",
            Self::DevDependencies => "devDependencies",
        }
    }
}

impl fmt::Display for DependencySection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `"name": "range"` pair of the dependency manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyFragment {
    pub name: &'static str,
    pub version: &'static str,
    pub section: DependencySection,
}

/// Both dependency lists in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependencies {
    pub dependencies: Vec<DependencyFragment>,
    pub dev_dependencies: Vec<DependencyFragment>,
}

impl ResolvedDependencies {
    pub fn validate(&self) -> Result<(), DomainError> {
        for list in [&self.dependencies, &self.dev_dependencies] {
            let mut seen = HashSet::new();
            for fragment in list {
                if !seen.insert(fragment.name) {
                    return Err(DomainError::DuplicatePackage {
                        name: fragment.name.to_string(),
                        section: fragment.section.as_str(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&DependencyFragment> {
        self.dependencies
            .iter()
            .chain(&self.dev_dependencies)
            .find(|f| f.name == name)
    }
}

// ── Tables ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Slot {
    Package(&'static str, &'static str),
    ViewEngine,
}

const KOA1_DEPENDENCIES: &[Slot] = &[
    Slot::Package("co", "^4.6.0"),
    Slot::ViewEngine,
    Slot::Package("koa", "^1.1.2"),
    Slot::Package("koa-bodyparser", "^2.0.1"),
    Slot::Package("koa-json", "^1.1.1"),
    Slot::Package("koa-log4", "^1.0.1"),
    Slot::Package("koa-onerror", "^1.2.1"),
    Slot::Package("koa-router", "^5.3.0"),
    Slot::Package("koa-static", "^1.5.2"),
    Slot::Package("koa-views", "^3.1.0"),
];

const KOA2_DEPENDENCIES: &[Slot] = &[
    Slot::Package("co", "^4.6.0"),
    Slot::ViewEngine,
    Slot::Package("koa", "^2.0.0"),
    Slot::Package("koa-bodyparser", "^2.0.1"),
    Slot::Package("koa-convert", "^1.2.0"),
    Slot::Package("koa-json", "^1.1.1"),
    Slot::Package("koa-log4", "^1.0.1"),
    Slot::Package("koa-onerror", "^1.2.1"),
    Slot::Package("koa-router", "^7.0.1"),
    Slot::Package("koa-static", "^2.0.0"),
    Slot::Package("koa-views", "^5.0.1"),
];

const DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("del", "^2.2.0"),
    ("gulp", "^3.9.1"),
    ("gulp-concat", "^2.6.0"),
    ("gulp-cssmin", "^0.1.7"),
    ("gulp-nodemon", "^2.0.6"),
    ("gulp-sourcemaps", "^1.6.0"),
    ("gulp-uglify", "^1.5.3"),
];

/// Resolve both dependency lists for `options`. Pure data assembly.
pub fn resolve_dependencies(options: &ProjectOptions) -> ResolvedDependencies {
    let table = match options.framework() {
        FrameworkVersion::Legacy => KOA1_DEPENDENCIES,
        FrameworkVersion::Current => KOA2_DEPENDENCIES,
    };

    ResolvedDependencies {
        dependencies: expand(table, options.view_engine()),
        dev_dependencies: DEV_DEPENDENCIES
            .iter()
            .map(|&(name, version)| DependencyFragment {
                name,
                version,
                section: DependencySection::DevDependencies,
            })
            .collect(),
    }
}

fn expand(table: &[Slot], engine: ViewEngine) -> Vec<DependencyFragment> {
    table
        .iter()
        .filter_map(|slot| match *slot {
            Slot::Package(name, version) => Some((name, version)),
            Slot::ViewEngine => engine.package(),
        })
        .map(|(name, version)| DependencyFragment {
            name,
            version,
            section: DependencySection::Dependencies,
        })
        .collect()
}
