//! The `package.json` descriptor of the generated project.
//!
//! Field order of the struct is the key order of the serialized object, and
//! [`OrderedMap`] serializes its pairs in insertion order. Together they make
//! the serialized descriptor reproducible byte-for-byte.

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::domain::dependencies::{DependencyFragment, ResolvedDependencies};

const PACKAGE_VERSION: &str = "0.0.0";

/// String map that keeps insertion order when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedMap(Vec<(String, String)>);

impl OrderedMap {
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<&'a DependencyFragment> for OrderedMap {
    fn from_iter<I: IntoIterator<Item = &'a DependencyFragment>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|f| (f.name.to_string(), f.version.to_string()))
                .collect(),
        )
    }
}

impl Serialize for OrderedMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// The rendered dependency manifest. Constructed once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageDescriptor {
    name: String,
    version: &'static str,
    private: bool,
    scripts: OrderedMap,
    dependencies: OrderedMap,
    #[serde(rename = "devDependencies")]
    dev_dependencies: OrderedMap,
}

impl PackageDescriptor {
    pub fn new(app_name: impl Into<String>, resolved: &ResolvedDependencies) -> Self {
        let mut scripts = OrderedMap::default();
        scripts.insert("start", "node ./bin/www");
        scripts.insert("test", "gulp");

        Self {
            name: app_name.into(),
            version: PACKAGE_VERSION,
            private: true,
            scripts,
            dependencies: resolved.dependencies.iter().collect(),
            dev_dependencies: resolved.dev_dependencies.iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn scripts(&self) -> &OrderedMap {
        &self.scripts
    }
    pub fn dependencies(&self) -> &OrderedMap {
        &self.dependencies
    }
    pub fn dev_dependencies(&self) -> &OrderedMap {
        &self.dev_dependencies
    }
}
