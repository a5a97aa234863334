//! Template bodies compiled into the binary.
//!
//! Paths are relative to this file. Keep them in sync with the files under
//! `crates/koagen-adapters/templates/`.

use koagen_core::domain::{ContentKey, FrameworkVersion, ViewEngine, ViewPage};

pub const LAUNCHER: &str = include_str!("../../templates/www");

pub const APP_KOA1: &str = include_str!("../../templates/koa1/app.js");
pub const APP_KOA2: &str = include_str!("../../templates/koa2/app.js");

pub const ROUTE_INDEX_KOA1: &str = include_str!("../../templates/koa1/index.js");
pub const ROUTE_USERS_KOA1: &str = include_str!("../../templates/koa1/users.js");
pub const ROUTE_INDEX_KOA2: &str = include_str!("../../templates/koa2/index.js");
pub const ROUTE_PLAIN_INDEX_KOA1: &str = include_str!("../../templates/koa1/index-plain.js");
pub const ROUTE_PLAIN_INDEX_KOA2: &str = include_str!("../../templates/koa2/index-plain.js");
pub const ROUTE_USERS_KOA2: &str = include_str!("../../templates/koa2/users.js");

pub const GULPFILE: &str = include_str!("../../templates/gulpfile.js");
pub const LOG4JS: &str = include_str!("../../templates/log4js.json");
pub const STYLESHEET: &str = include_str!("../../templates/style.css");
pub const GITIGNORE: &str = include_str!("../../templates/gitignore");

pub const JADE_INDEX: &str = include_str!("../../templates/views/index.jade");
pub const JADE_ERROR: &str = include_str!("../../templates/views/error.jade");
pub const JADE_LAYOUT: &str = include_str!("../../templates/views/layout.jade");

pub const EJS_INDEX: &str = include_str!("../../templates/views/index.ejs");
pub const EJS_ERROR: &str = include_str!("../../templates/views/error.ejs");

pub const HBS_INDEX: &str = include_str!("../../templates/views/index.hbs");
pub const HBS_ERROR: &str = include_str!("../../templates/views/error.hbs");
pub const HBS_LAYOUT: &str = include_str!("../../templates/views/layout.hbs");

pub const HOGAN_INDEX: &str = include_str!("../../templates/views/index.hjs");
pub const HOGAN_ERROR: &str = include_str!("../../templates/views/error.hjs");

/// Body copied verbatim for `key`, if it has one.
pub fn static_body(key: ContentKey) -> Option<&'static str> {
    use FrameworkVersion::{Current, Legacy};

    Some(match key {
        ContentKey::BuildFile => GULPFILE,
        ContentKey::LoggingConfig => LOG4JS,
        ContentKey::Stylesheet => STYLESHEET,
        ContentKey::GitIgnore => GITIGNORE,
        ContentKey::IndexRoute(Legacy, ViewEngine::None) => ROUTE_PLAIN_INDEX_KOA1,
        ContentKey::IndexRoute(Current, ViewEngine::None) => ROUTE_PLAIN_INDEX_KOA2,
        ContentKey::IndexRoute(Legacy, _) => ROUTE_INDEX_KOA1,
        ContentKey::IndexRoute(Current, _) => ROUTE_INDEX_KOA2,
        ContentKey::UsersRoute(Legacy) => ROUTE_USERS_KOA1,
        ContentKey::UsersRoute(Current) => ROUTE_USERS_KOA2,
        ContentKey::View(engine, page) => view_body(engine, page)?,
        ContentKey::Launcher | ContentKey::AppEntry(_) | ContentKey::PackageManifest => {
            return None;
        }
    })
}

/// Body with `{{VARIABLE}}` placeholders for `key`, if it has one.
///
/// `PackageManifest` is serialized rather than templated and has no body.
pub fn template_body(key: ContentKey) -> Option<&'static str> {
    match key {
        ContentKey::Launcher => Some(LAUNCHER),
        ContentKey::AppEntry(FrameworkVersion::Legacy) => Some(APP_KOA1),
        ContentKey::AppEntry(FrameworkVersion::Current) => Some(APP_KOA2),
        _ => None,
    }
}

fn view_body(engine: ViewEngine, page: ViewPage) -> Option<&'static str> {
    match (engine, page) {
        (ViewEngine::Jade, ViewPage::Index) => Some(JADE_INDEX),
        (ViewEngine::Jade, ViewPage::Error) => Some(JADE_ERROR),
        (ViewEngine::Jade, ViewPage::Layout) => Some(JADE_LAYOUT),
        (ViewEngine::Ejs, ViewPage::Index) => Some(EJS_INDEX),
        (ViewEngine::Ejs, ViewPage::Error) => Some(EJS_ERROR),
        (ViewEngine::Handlebars, ViewPage::Index) => Some(HBS_INDEX),
        (ViewEngine::Handlebars, ViewPage::Error) => Some(HBS_ERROR),
        (ViewEngine::Handlebars, ViewPage::Layout) => Some(HBS_LAYOUT),
        (ViewEngine::Hogan, ViewPage::Index) => Some(HOGAN_INDEX),
        (ViewEngine::Hogan, ViewPage::Error) => Some(HOGAN_ERROR),
        _ => None,
    }
}
