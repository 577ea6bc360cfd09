//! The level registry: compile a catalog once, serve read-only lookups.

use crate::builtin;
use brier_core::MapError;
use brier_map::{compile, CompiledMap};
use indexmap::IndexMap;

/// A catalog of named levels, compiled once at construction.
///
/// Construction runs the full compiler pipeline over every entry exactly
/// once. An entry that fails to compile is logged at `warn`, recorded,
/// and skipped — one malformed level never prevents the rest from
/// loading — but looking it up later reports [`MapError::UnknownLevelName`]
/// like any name that was never in the catalog.
///
/// After construction the registry is never mutated; the whole API takes
/// `&self`, so sharing it across threads needs no locking.
#[derive(Clone, Debug)]
pub struct LevelRegistry {
    compiled: IndexMap<String, CompiledMap>,
    failed: IndexMap<String, MapError>,
}

impl LevelRegistry {
    /// Compile every `(name, source)` entry of an ordered catalog.
    pub fn from_catalog<'a, I>(catalog: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut compiled = IndexMap::new();
        let mut failed = IndexMap::new();
        for (name, source) in catalog {
            match compile(source) {
                Ok(map) => {
                    compiled.insert(name.to_string(), map);
                }
                Err(err) => {
                    log::warn!("level '{name}' failed to compile: {err}");
                    failed.insert(name.to_string(), err);
                }
            }
        }
        Self { compiled, failed }
    }

    /// The registry of shipped levels, `Level0` through `Level4`.
    pub fn builtin() -> Self {
        Self::from_catalog(builtin::CATALOG)
    }

    /// Look up a successfully compiled level by name.
    pub fn get_by_name(&self, name: &str) -> Result<&CompiledMap, MapError> {
        self.compiled.get(name).ok_or_else(|| MapError::UnknownLevelName {
            name: name.to_string(),
            available: self.level_names().map(str::to_string).collect(),
        })
    }

    /// Names of successfully compiled levels, in catalog order.
    pub fn level_names(&self) -> impl Iterator<Item = &str> {
        self.compiled.keys().map(String::as_str)
    }

    /// Number of successfully compiled levels.
    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    /// Whether no level compiled successfully.
    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    /// Why a catalog entry was rejected, if it was.
    pub fn compile_failure(&self, name: &str) -> Option<&MapError> {
        self.failed.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = "####\n#SE#\n####";
    const BAD: &str = "####\n#S #\n####"; // no end

    #[test]
    fn lookup_by_name_returns_the_compiled_map() {
        let reg = LevelRegistry::from_catalog([("Plain", GOOD)]);
        let map = reg.get_by_name("Plain").unwrap();
        assert_eq!(map.pickup_count(), 0);
    }

    #[test]
    fn unknown_name_lists_what_is_available() {
        let reg = LevelRegistry::from_catalog([("A", GOOD), ("B", GOOD)]);
        assert_eq!(
            reg.get_by_name("C"),
            Err(MapError::UnknownLevelName {
                name: "C".into(),
                available: vec!["A".into(), "B".into()],
            })
        );
    }

    #[test]
    fn malformed_entry_is_skipped_not_fatal() {
        let reg = LevelRegistry::from_catalog([("Good", GOOD), ("Bad", BAD)]);
        assert_eq!(reg.len(), 1);
        assert!(reg.get_by_name("Good").is_ok());
        // The bad entry looks unknown to callers...
        assert!(matches!(
            reg.get_by_name("Bad"),
            Err(MapError::UnknownLevelName { .. })
        ));
        // ...but the cause stays inspectable.
        assert_eq!(reg.compile_failure("Bad"), Some(&MapError::NoEndPosition));
    }

    #[test]
    fn names_keep_catalog_order() {
        let reg = LevelRegistry::from_catalog([("Z", GOOD), ("A", GOOD), ("M", GOOD)]);
        let names: Vec<_> = reg.level_names().collect();
        assert_eq!(names, vec!["Z", "A", "M"]);
    }

    #[test]
    fn empty_catalog_yields_an_empty_registry() {
        let reg = LevelRegistry::from_catalog(Vec::<(&str, &str)>::new());
        assert!(reg.is_empty());
        assert_eq!(
            reg.get_by_name("anything"),
            Err(MapError::UnknownLevelName {
                name: "anything".into(),
                available: vec![],
            })
        );
    }
}
