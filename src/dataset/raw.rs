//! Raw dataset record types
//!
//! These mirror the upstream JSON shapes verbatim, including their
//! inconsistencies: a stat may be a number, a numeric string, a list of
//! per-level values, or a bare `false`; a behavior may be a string or a
//! list. The unions are collapsed to canonical scalars by
//! `seed::normalize`; consumers never branch on raw shape themselves.

use serde::{Deserialize, Serialize};

/// A stat field as it appears in the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
    /// Some records use `false` to mean "not applicable" (e.g. an ability
    /// with no mana cost).
    Toggle(bool),
    Many(Vec<StatValue>),
    Absent,
}

impl Default for StatValue {
    fn default() -> Self {
        StatValue::Absent
    }
}

/// A field that is sometimes a single string, sometimes a list of them,
/// and occasionally a bare `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    One(String),
    Many(Vec<String>),
    Flag(bool),
}

impl StringOrList {
    /// Collapse to a list of non-empty strings.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            StringOrList::One(s) if !s.is_empty() => vec![s],
            StringOrList::One(_) => Vec::new(),
            StringOrList::Many(items) => items.into_iter().filter(|s| !s.is_empty()).collect(),
            StringOrList::Flag(_) => Vec::new(),
        }
    }
}

/// One entry of the hero dataset, keyed by internal numeric id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeroRecord {
    /// Internal key, e.g. "npc_dota_hero_axe"
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub localized_name: Option<String>,
    #[serde(default)]
    pub primary_attr: Option<String>,
    #[serde(default)]
    pub attack_type: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub base_health: StatValue,
    #[serde(default)]
    pub base_mana: StatValue,
    #[serde(default)]
    pub base_armor: StatValue,
    #[serde(default)]
    pub move_speed: StatValue,
    #[serde(default)]
    pub attack_range: StatValue,
    #[serde(default)]
    pub legs: Option<i64>,
}

/// One entry of the ability dataset, keyed by ability key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbilityRecord {
    #[serde(default)]
    pub dname: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub behavior: Option<StringOrList>,
    #[serde(default)]
    pub dmg_type: Option<String>,
    /// Mana cost: scalar or per-level list
    #[serde(default)]
    pub mc: StatValue,
    /// Cooldown: scalar or per-level list
    #[serde(default)]
    pub cd: StatValue,
    #[serde(default)]
    pub img: Option<String>,
}

/// An active/passive granted by an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrantedAbility {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One entry of the item dataset, keyed by item key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(default)]
    pub dname: Option<String>,
    #[serde(default)]
    pub cost: StatValue,
    #[serde(default)]
    pub lore: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub tier: Option<i64>,
    #[serde(default)]
    pub behavior: Option<StringOrList>,
    /// Item keys this item is assembled from
    #[serde(default)]
    pub components: Option<Vec<String>>,
    #[serde(default)]
    pub abilities: Vec<GrantedAbility>,
    /// Free-form attribute blocks, stored serialized on the node
    #[serde(default)]
    pub attrib: Vec<serde_json::Value>,
}

/// An alternate-kit facet of a hero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacetSpec {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Skill layout for one hero, keyed by internal hero name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillSpec {
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub facets: Vec<FacetSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_value_shapes() {
        let n: StatValue = serde_json::from_str("110").unwrap();
        assert_eq!(n, StatValue::Number(110.0));

        let s: StatValue = serde_json::from_str("\"4.5\"").unwrap();
        assert_eq!(s, StatValue::Text("4.5".to_string()));

        let f: StatValue = serde_json::from_str("false").unwrap();
        assert_eq!(f, StatValue::Toggle(false));

        let list: StatValue = serde_json::from_str("[30, 50, 70]").unwrap();
        assert!(matches!(list, StatValue::Many(ref v) if v.len() == 3));

        let absent: StatValue = serde_json::from_str("null").unwrap();
        assert_eq!(absent, StatValue::Absent);
    }

    #[test]
    fn test_behavior_shapes() {
        let one: StringOrList = serde_json::from_str("\"Passive\"").unwrap();
        assert_eq!(one.into_vec(), vec!["Passive"]);

        let many: StringOrList =
            serde_json::from_str("[\"Unit Target\", \"Channeled\"]").unwrap();
        assert_eq!(many.into_vec(), vec!["Unit Target", "Channeled"]);

        let flag: StringOrList = serde_json::from_str("false").unwrap();
        assert!(flag.into_vec().is_empty());
    }

    #[test]
    fn test_ability_record_partial_fields() {
        let json = r#"{"dname": "Berserker's Call", "mc": [80, 90, 100, 110], "cd": 16}"#;
        let record: AbilityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.dname.as_deref(), Some("Berserker's Call"));
        assert!(matches!(record.mc, StatValue::Many(_)));
        assert_eq!(record.cd, StatValue::Number(16.0));
        assert!(record.behavior.is_none());
    }
}
