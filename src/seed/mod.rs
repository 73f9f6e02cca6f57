//! Graph ingestion pipeline
//!
//! Rebuilds the whole graph from the loaded datasets in a strict phase
//! order: clear, static vocabulary, abilities, items, item components,
//! heroes. Each phase fully completes before the next begins, since edge
//! creation assumes its endpoint node types are already fully populated.
//! A failed database write aborts the run; a re-run always starts from a
//! clean graph, so no partial-state repair is attempted.

pub mod abilities;
pub mod heroes;
pub mod items;
pub mod normalize;
pub mod resolve;
pub mod vocab;

use tracing::info;

use crate::config::SeedConfig;
use crate::dataset::GameData;
use crate::graph::{GraphResult, GraphStats, GraphStore};

const IMG_BASE_URL: &str = "https://api.opendota.com";

/// Absolute image URL for a dataset-relative image path.
pub(crate) fn img_url(path: Option<&str>) -> Option<String> {
    path.filter(|p| !p.is_empty())
        .map(|p| format!("{IMG_BASE_URL}{p}"))
}

/// The pipeline orchestrator.
pub struct Seeder<'a, S: GraphStore> {
    store: &'a S,
    config: SeedConfig,
}

impl<'a, S: GraphStore> Seeder<'a, S> {
    pub fn new(store: &'a S, config: SeedConfig) -> Self {
        Self { store, config }
    }

    /// Destroy and rebuild the graph from `data` in one pass.
    pub async fn run(&self, data: &GameData) -> GraphResult<GraphStats> {
        info!("clearing graph");
        self.store.clear().await?;

        info!("seeding static vocabulary");
        vocab::seed_static_vocab(self.store).await?;

        info!(count = data.abilities.len(), "building abilities");
        abilities::build_abilities(self.store, data).await?;

        info!(count = data.items.len(), "building items");
        items::build_items(self.store, data).await?;

        info!("linking item components");
        items::link_components(self.store, data).await?;

        info!(count = data.heroes.len(), "building heroes");
        heroes::build_heroes(self.store, data, &self.config).await?;

        let stats = self.store.stats().await?;
        info!(nodes = stats.nodes, edges = stats.edges, "graph rebuilt");
        Ok(stats)
    }
}
