//! Node labels, relationship types and the static vocabularies
//!
//! The static vocabularies (attributes, roles, attack types) are fixed
//! enums of the game, independent of the input files, and are seeded
//! once per run before any data-driven node exists.

use crate::graph::{GraphResult, GraphStore, NodeRef, PropertyMap, PropertyValue};

/// Node labels used across the graph.
pub mod label {
    pub const HERO: &str = "Hero";
    pub const ABILITY: &str = "Ability";
    pub const ITEM: &str = "Item";
    pub const ATTRIBUTE: &str = "Attribute";
    pub const ROLE: &str = "Role";
    pub const ATTACK_TYPE: &str = "AttackType";
    pub const BEHAVIOR: &str = "Behavior";
    pub const DAMAGE_TYPE: &str = "DamageType";
    pub const FACET: &str = "Facet";
    pub const ITEM_ABILITY: &str = "ItemAbility";
}

/// Relationship types used across the graph.
pub mod rel {
    pub const HAS_PRIMARY_ATTR: &str = "HAS_PRIMARY_ATTR";
    pub const HAS_ROLE: &str = "HAS_ROLE";
    pub const HAS_ATTACK_TYPE: &str = "HAS_ATTACK_TYPE";
    pub const HAS_ABILITY: &str = "HAS_ABILITY";
    pub const HAS_ULTIMATE: &str = "HAS_ULTIMATE";
    pub const HAS_FACET: &str = "HAS_FACET";
    pub const HAS_BEHAVIOR: &str = "HAS_BEHAVIOR";
    pub const DEALS_DAMAGE_TYPE: &str = "DEALS_DAMAGE_TYPE";
    pub const REQUIRES_COMPONENT: &str = "REQUIRES_COMPONENT";
}

/// Primary attribute codes as they appear in hero records, with their
/// display names.
pub const ATTRIBUTES: [(&str, &str); 4] = [
    ("str", "Strength"),
    ("agi", "Agility"),
    ("int", "Intelligence"),
    ("all", "Universal"),
];

/// The fixed set of hero roles.
pub const ROLES: [&str; 9] = [
    "Carry",
    "Support",
    "Nuker",
    "Disabler",
    "Jungler",
    "Durable",
    "Escape",
    "Pusher",
    "Initiator",
];

pub const ATTACK_TYPES: [&str; 2] = ["Melee", "Ranged"];

/// Hidden/base entries deliberately excluded from node creation.
pub const PLACEHOLDER_KEYS: [&str; 2] = ["generic_hidden", "dota_base_ability"];

pub fn is_placeholder(key: &str) -> bool {
    PLACEHOLDER_KEYS.contains(&key)
}

/// Display name for a primary-attribute code, if the code is known.
pub fn attribute_name(code: &str) -> Option<&'static str> {
    ATTRIBUTES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Upsert the static vocabulary nodes.
pub async fn seed_static_vocab<S: GraphStore>(store: &S) -> GraphResult<()> {
    for (code, name) in ATTRIBUTES {
        let mut props = PropertyMap::new();
        props.insert("key".to_string(), PropertyValue::from(code));
        store
            .upsert_node(&NodeRef::new(label::ATTRIBUTE, name), props)
            .await?;
    }

    for role in ROLES {
        let mut props = PropertyMap::new();
        props.insert("key".to_string(), PropertyValue::from(role));
        store.upsert_node(&NodeRef::new(label::ROLE, role), props).await?;
    }

    for attack_type in ATTACK_TYPES {
        let mut props = PropertyMap::new();
        props.insert("key".to_string(), PropertyValue::from(attack_type));
        store
            .upsert_node(&NodeRef::new(label::ATTACK_TYPE, attack_type), props)
            .await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::MemoryStore;

    #[test]
    fn test_attribute_name() {
        assert_eq!(attribute_name("str"), Some("Strength"));
        assert_eq!(attribute_name("all"), Some("Universal"));
        assert_eq!(attribute_name("luck"), None);
    }

    #[test]
    fn test_placeholders() {
        assert!(is_placeholder("generic_hidden"));
        assert!(is_placeholder("dota_base_ability"));
        assert!(!is_placeholder("axe_culling_blade"));
    }

    #[tokio::test]
    async fn test_seed_static_vocab_counts() {
        let store = MemoryStore::new();
        seed_static_vocab(&store).await.unwrap();

        assert_eq!(store.nodes_with_label(label::ATTRIBUTE).await, 4);
        assert_eq!(store.nodes_with_label(label::ROLE).await, 9);
        assert_eq!(store.nodes_with_label(label::ATTACK_TYPE).await, 2);

        // Re-seeding must not duplicate
        seed_static_vocab(&store).await.unwrap();
        assert_eq!(store.stats().await.unwrap().nodes, 15);
    }
}
