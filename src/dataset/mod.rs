//! Loading of the four source datasets
//!
//! Missing or unparseable files are fatal: nothing has been written yet,
//! so the run aborts before the graph is touched. Per-record quality
//! problems are NOT handled here: the raw types accept them and the
//! pipeline skips what it cannot use.

pub mod raw;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use raw::{
    AbilityRecord, FacetSpec, GrantedAbility, HeroRecord, ItemRecord, SkillSpec, StatValue,
    StringOrList,
};

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type DatasetResult<T> = Result<T, DatasetError>;

/// All four datasets, fully loaded.
///
/// Maps keep file order so the pipeline walks records deterministically.
#[derive(Debug, Clone, Default)]
pub struct GameData {
    /// Internal hero id -> hero record
    pub heroes: IndexMap<String, HeroRecord>,
    /// Ability key -> ability record
    pub abilities: IndexMap<String, AbilityRecord>,
    /// Item key -> item record
    pub items: IndexMap<String, ItemRecord>,
    /// Internal hero name -> skill layout
    pub skill_specs: IndexMap<String, SkillSpec>,
}

impl GameData {
    /// Load `heroes.json`, `abilities.json`, `items.json` and
    /// `hero_abilities.json` from a directory.
    pub fn load_dir(dir: impl AsRef<Path>) -> DatasetResult<Self> {
        let dir = dir.as_ref();
        Ok(Self {
            heroes: load_json(&dir.join("heroes.json"))?,
            abilities: load_json(&dir.join("abilities.json"))?,
            items: load_json(&dir.join("items.json"))?,
            skill_specs: load_json(&dir.join("hero_abilities.json"))?,
        })
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> DatasetResult<T> {
    let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_minimal_files(dir: &Path) {
        fs::write(
            dir.join("heroes.json"),
            r#"{"1": {"name": "npc_dota_hero_axe", "localized_name": "Axe",
                     "primary_attr": "str", "attack_type": "Melee",
                     "roles": ["Initiator"], "base_health": 120,
                     "move_speed": 310, "legs": 2}}"#,
        )
        .unwrap();
        fs::write(
            dir.join("abilities.json"),
            r#"{"axe_culling_blade": {"dname": "Culling Blade",
                 "behavior": "Unit Target", "dmg_type": "magical",
                 "mc": [60, 120, 180], "cd": "75"}}"#,
        )
        .unwrap();
        fs::write(
            dir.join("items.json"),
            r#"{"blade_mail": {"dname": "Blade Mail", "cost": 2100,
                 "components": ["broadsword", "chainmail"]}}"#,
        )
        .unwrap();
        fs::write(
            dir.join("hero_abilities.json"),
            r#"{"npc_dota_hero_axe": {"abilities": ["axe_culling_blade"],
                 "facets": [{"name": "axe_one", "title": "One Man Army",
                             "description": "Goes it alone."}]}}"#,
        )
        .unwrap();
    }

    #[test]
    fn test_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        write_minimal_files(dir.path());

        let data = GameData::load_dir(dir.path()).unwrap();
        assert_eq!(data.heroes.len(), 1);
        assert_eq!(data.abilities.len(), 1);
        assert_eq!(data.items.len(), 1);
        assert_eq!(data.skill_specs.len(), 1);

        let hero = &data.heroes["1"];
        assert_eq!(hero.localized_name.as_deref(), Some("Axe"));
        assert_eq!(hero.legs, Some(2));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameData::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_minimal_files(dir.path());
        fs::write(dir.path().join("items.json"), "{not json").unwrap();

        let err = GameData::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, DatasetError::Parse { .. }));
    }
}
