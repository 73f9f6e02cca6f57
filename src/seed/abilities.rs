//! Ability node builder and its derived-vocabulary linkers

use tracing::debug;

use super::normalize::{normalize_behaviors, normalize_stat, title_case};
use super::vocab::{is_placeholder, label, rel};
use super::img_url;
use crate::dataset::GameData;
use crate::graph::{EdgeSpec, GraphResult, GraphStore, NodeRef, PropertyMap, PropertyValue};

/// Build every Ability node and link its behaviors and damage type.
pub async fn build_abilities<S: GraphStore>(store: &S, data: &GameData) -> GraphResult<()> {
    for (key, record) in &data.abilities {
        if is_placeholder(key) {
            continue;
        }
        let Some(dname) = record.dname.as_deref().filter(|s| !s.is_empty()) else {
            debug!(%key, "skipping ability without display name");
            continue;
        };

        let ability = NodeRef::new(label::ABILITY, dname);

        let mut props = PropertyMap::new();
        props.insert("key".to_string(), PropertyValue::from(key.as_str()));
        props.insert(
            "description".to_string(),
            PropertyValue::from(record.desc.clone().unwrap_or_default()),
        );
        props.insert(
            "manaCost".to_string(),
            PropertyValue::from(normalize_stat(&record.mc)),
        );
        props.insert(
            "cooldown".to_string(),
            PropertyValue::from(normalize_stat(&record.cd)),
        );
        if let Some(img) = img_url(record.img.as_deref()) {
            props.insert("img".to_string(), PropertyValue::from(img));
        }
        store.upsert_node(&ability, props).await?;

        link_behaviors(store, &ability, normalize_behaviors(&record.behavior)).await?;

        if let Some(dmg_type) = record.dmg_type.as_deref().filter(|s| !s.is_empty()) {
            let damage = NodeRef::new(label::DAMAGE_TYPE, title_case(dmg_type));
            let mut props = PropertyMap::new();
            props.insert("key".to_string(), PropertyValue::from(dmg_type));
            store.upsert_node(&damage, props).await?;
            store
                .upsert_edge(&EdgeSpec::new(
                    ability.clone(),
                    rel::DEALS_DAMAGE_TYPE,
                    damage,
                ))
                .await?;
        }
    }
    Ok(())
}

/// Lazily upsert Behavior nodes and link the owner to each. Shared by the
/// ability and item builders; two owners with the same behavior label
/// merge into one node.
pub(super) async fn link_behaviors<S: GraphStore>(
    store: &S,
    owner: &NodeRef,
    behaviors: Vec<String>,
) -> GraphResult<()> {
    for behavior in behaviors {
        let node = NodeRef::new(label::BEHAVIOR, behavior.as_str());
        let mut props = PropertyMap::new();
        props.insert("key".to_string(), PropertyValue::from(behavior.as_str()));
        store.upsert_node(&node, props).await?;
        store
            .upsert_edge(&EdgeSpec::new(owner.clone(), rel::HAS_BEHAVIOR, node))
            .await?;
    }
    Ok(())
}
