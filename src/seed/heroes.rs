//! Hero node builder and hero-side relationship linkers

use tracing::debug;

use super::img_url;
use super::normalize::normalize_stat;
use super::resolve::resolve_name;
use super::vocab::{attribute_name, is_placeholder, label, rel};
use crate::config::SeedConfig;
use crate::dataset::GameData;
use crate::graph::{EdgeSpec, GraphResult, GraphStore, NodeRef, PropertyMap, PropertyValue};

/// Build every Hero node and link attributes, roles, attack type,
/// abilities/ultimate and facets.
pub async fn build_heroes<S: GraphStore>(
    store: &S,
    data: &GameData,
    config: &SeedConfig,
) -> GraphResult<()> {
    for (id, record) in &data.heroes {
        let Some(localized) = record.localized_name.as_deref().filter(|s| !s.is_empty())
        else {
            debug!(%id, "skipping hero without localized name");
            continue;
        };

        let hero = NodeRef::new(label::HERO, localized);

        let mut props = PropertyMap::new();
        props.insert("id".to_string(), PropertyValue::from(id.as_str()));
        props.insert(
            "baseHealth".to_string(),
            PropertyValue::from(normalize_stat(&record.base_health)),
        );
        props.insert(
            "baseMana".to_string(),
            PropertyValue::from(normalize_stat(&record.base_mana)),
        );
        props.insert(
            "baseArmor".to_string(),
            PropertyValue::from(normalize_stat(&record.base_armor)),
        );
        props.insert(
            "moveSpeed".to_string(),
            PropertyValue::from(normalize_stat(&record.move_speed)),
        );
        props.insert(
            "attackRange".to_string(),
            PropertyValue::from(normalize_stat(&record.attack_range)),
        );
        if let Some(legs) = record.legs {
            props.insert("legs".to_string(), PropertyValue::from(legs));
        }
        if let Some(img) = img_url(record.img.as_deref()) {
            props.insert("img".to_string(), PropertyValue::from(img));
        }
        store.upsert_node(&hero, props).await?;

        if let Some(attr_name) = record
            .primary_attr
            .as_deref()
            .and_then(attribute_name)
        {
            store
                .upsert_edge(&EdgeSpec::new(
                    hero.clone(),
                    rel::HAS_PRIMARY_ATTR,
                    NodeRef::new(label::ATTRIBUTE, attr_name),
                ))
                .await?;
        }

        for role in &record.roles {
            // Unknown role labels fail the endpoint match and drop out.
            store
                .upsert_edge(&EdgeSpec::new(
                    hero.clone(),
                    rel::HAS_ROLE,
                    NodeRef::new(label::ROLE, role.as_str()),
                ))
                .await?;
        }

        if let Some(attack_type) = record.attack_type.as_deref().filter(|s| !s.is_empty()) {
            store
                .upsert_edge(&EdgeSpec::new(
                    hero.clone(),
                    rel::HAS_ATTACK_TYPE,
                    NodeRef::new(label::ATTACK_TYPE, attack_type),
                ))
                .await?;
        }

        if let Some(spec) = data.skill_specs.get(&record.name) {
            link_skills(store, &hero, spec, data, config).await?;
        }
    }
    Ok(())
}

async fn link_skills<S: GraphStore>(
    store: &S,
    hero: &NodeRef,
    spec: &crate::dataset::SkillSpec,
    data: &GameData,
    config: &SeedConfig,
) -> GraphResult<()> {
    if spec.abilities.len() <= config.ultimate_slot {
        // Short kits get no ultimate; the slot convention does not apply.
        debug!(hero = %hero.name, slots = spec.abilities.len(), "ability list shorter than ultimate slot");
    }

    for (slot, ability_key) in spec.abilities.iter().enumerate() {
        if is_placeholder(ability_key) {
            continue;
        }
        // Slot position in the raw sequence decides the relationship type.
        // The "ultimate lives in slot 5" rule is a convention of the source
        // dataset, kept configurable rather than assumed universal.
        let rel_type = if slot == config.ultimate_slot {
            rel::HAS_ULTIMATE
        } else {
            rel::HAS_ABILITY
        };
        let ability = NodeRef::new(label::ABILITY, resolve_name(ability_key, &data.abilities));
        store
            .upsert_edge(&EdgeSpec::new(hero.clone(), rel_type, ability))
            .await?;
    }

    for facet in &spec.facets {
        let Some(title) = facet.title.as_deref().filter(|s| !s.is_empty()) else {
            continue;
        };
        let node = NodeRef::new(label::FACET, title);
        let mut props = PropertyMap::new();
        props.insert(
            "key".to_string(),
            PropertyValue::from(facet.name.clone().unwrap_or_default()),
        );
        props.insert(
            "description".to_string(),
            PropertyValue::from(facet.description.clone().unwrap_or_default()),
        );
        store.upsert_node(&node, props).await?;
        store
            .upsert_edge(&EdgeSpec::new(hero.clone(), rel::HAS_FACET, node))
            .await?;
    }

    Ok(())
}
