//! Item node builder, granted-ability linkers and component linking

use tracing::debug;

use super::abilities::link_behaviors;
use super::normalize::{normalize_behaviors, normalize_stat};
use super::resolve::resolve_name;
use super::vocab::{label, rel};
use crate::dataset::GameData;
use crate::graph::{EdgeSpec, GraphResult, GraphStore, NodeRef, PropertyMap, PropertyValue};

/// Build every Item node and link its behaviors and granted abilities.
pub async fn build_items<S: GraphStore>(store: &S, data: &GameData) -> GraphResult<()> {
    for (key, record) in &data.items {
        let Some(dname) = record.dname.as_deref().filter(|s| !s.is_empty()) else {
            debug!(%key, "skipping item without display name");
            continue;
        };

        let item = NodeRef::new(label::ITEM, dname);

        let mut props = PropertyMap::new();
        props.insert("key".to_string(), PropertyValue::from(key.as_str()));
        props.insert(
            "cost".to_string(),
            PropertyValue::from(normalize_stat(&record.cost)),
        );
        props.insert(
            "lore".to_string(),
            PropertyValue::from(record.lore.clone().unwrap_or_default()),
        );
        props.insert(
            "notes".to_string(),
            PropertyValue::from(record.notes.clone().unwrap_or_default()),
        );
        if let Some(tier) = record.tier {
            props.insert("tier".to_string(), PropertyValue::from(tier));
        }
        if !record.attrib.is_empty() {
            props.insert(
                "attributes".to_string(),
                PropertyValue::from(
                    serde_json::to_string(&record.attrib).unwrap_or_default(),
                ),
            );
        }
        store.upsert_node(&item, props).await?;

        link_behaviors(store, &item, normalize_behaviors(&record.behavior)).await?;

        for granted in &record.abilities {
            let Some(title) = granted.title.as_deref().filter(|s| !s.is_empty()) else {
                continue;
            };
            let node = NodeRef::new(label::ITEM_ABILITY, title);
            let mut props = PropertyMap::new();
            props.insert("key".to_string(), PropertyValue::from(key.as_str()));
            props.insert(
                "description".to_string(),
                PropertyValue::from(granted.description.clone().unwrap_or_default()),
            );
            props.insert(
                "type".to_string(),
                PropertyValue::from(granted.kind.clone().unwrap_or_default()),
            );
            store.upsert_node(&node, props).await?;
            store
                .upsert_edge(&EdgeSpec::new(item.clone(), rel::HAS_ABILITY, node))
                .await?;
        }
    }
    Ok(())
}

/// Link every item to its components. Runs only after all Item nodes
/// exist, since any item may reference any other.
pub async fn link_components<S: GraphStore>(store: &S, data: &GameData) -> GraphResult<()> {
    for (key, record) in &data.items {
        let Some(dname) = record.dname.as_deref().filter(|s| !s.is_empty()) else {
            continue;
        };
        let Some(components) = &record.components else {
            continue;
        };
        for component_key in components {
            let component = resolve_name(component_key, &data.items);
            let edge = EdgeSpec::new(
                NodeRef::new(label::ITEM, dname),
                rel::REQUIRES_COMPONENT,
                NodeRef::new(label::ITEM, component),
            );
            // A component key that resolved to nothing in the graph makes
            // this a no-op inside the store.
            store.upsert_edge(&edge).await?;
        }
    }
    Ok(())
}
