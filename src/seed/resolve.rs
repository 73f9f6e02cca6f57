//! Canonical display-name resolution
//!
//! Cross-references between datasets use internal keys; the graph is
//! keyed by display names. Resolving a key through the same table its
//! node was built from guarantees both sides agree on the canonical
//! name, which is what makes name-keyed upserts line up without a
//! separate id-to-name index.

use indexmap::IndexMap;

use super::normalize::title_case;
use crate::dataset::{AbilityRecord, ItemRecord};

/// A dataset record that may carry a display name.
pub trait HasDisplayName {
    fn display_name(&self) -> Option<&str>;
}

impl HasDisplayName for AbilityRecord {
    fn display_name(&self) -> Option<&str> {
        self.dname.as_deref().filter(|s| !s.is_empty())
    }
}

impl HasDisplayName for ItemRecord {
    fn display_name(&self) -> Option<&str> {
        self.dname.as_deref().filter(|s| !s.is_empty())
    }
}

/// Resolve an internal key to its canonical display name.
///
/// Falls back to a name derived from the key itself when the table has
/// no usable entry, so unresolved references still map deterministically.
pub fn resolve_name<T: HasDisplayName>(key: &str, table: &IndexMap<String, T>) -> String {
    match table.get(key).and_then(HasDisplayName::display_name) {
        Some(name) => name.to_string(),
        None => display_name_from_key(key),
    }
}

/// Derive a display name from an internal key, e.g.
/// "storm_bolt" -> "Storm Bolt".
pub fn display_name_from_key(key: &str) -> String {
    title_case(&key.replace(['_', '-'], " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ability(dname: Option<&str>) -> AbilityRecord {
        AbilityRecord {
            dname: dname.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_lookup_hit_returns_verbatim() {
        let mut table = IndexMap::new();
        table.insert("axe_culling_blade".to_string(), ability(Some("Culling Blade")));
        assert_eq!(resolve_name("axe_culling_blade", &table), "Culling Blade");
    }

    #[test]
    fn test_missing_key_derives_from_key() {
        let table: IndexMap<String, AbilityRecord> = IndexMap::new();
        assert_eq!(resolve_name("storm_bolt", &table), "Storm Bolt");
    }

    #[test]
    fn test_empty_display_name_falls_back() {
        let mut table = IndexMap::new();
        table.insert("storm_bolt".to_string(), ability(Some("")));
        assert_eq!(resolve_name("storm_bolt", &table), "Storm Bolt");
    }
}
