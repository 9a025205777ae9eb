//! In-memory component store
//!
//! Holds parsed design components in ingestion order. Nothing is persisted;
//! the store lives as long as the process.

use std::path::PathBuf;

use tokio::sync::RwLock;

use crate::netlist::{self, ParsedNetlist};
use crate::types::{Component, ComponentKind};
use crate::{Error, Result};

/// Ordered, append-only collection of components
#[derive(Debug, Default)]
pub struct ComponentStore {
    components: RwLock<Vec<Component>>,
}

impl ComponentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, component: Component) {
        self.components.write().await.push(component);
    }

    pub async fn extend(&self, components: impl IntoIterator<Item = Component>) {
        self.components.write().await.extend(components);
    }

    /// Snapshot of all components in ingestion order
    pub async fn all(&self) -> Vec<Component> {
        self.components.read().await.clone()
    }

    pub async fn of_kind(&self, kind: ComponentKind) -> Vec<Component> {
        self.components
            .read()
            .await
            .iter()
            .filter(|c| c.kind == kind)
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.components.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.components.read().await.is_empty()
    }

    pub async fn clear(&self) {
        self.components.write().await.clear();
    }
}

/// Outcome of a multi-file ingestion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub files_loaded: usize,
    pub files_failed: usize,
    pub components: usize,
    pub unrecognized_lines: usize,
}

/// Parse every file concurrently and append the results to `store`.
///
/// Results are appended in the order of `paths`, regardless of which parse
/// finishes first. Unreadable files are logged and skipped.
pub async fn ingest_files(store: &ComponentStore, paths: &[PathBuf]) -> Result<IngestSummary> {
    let handles: Vec<_> = paths
        .iter()
        .cloned()
        .map(|path| tokio::spawn(async move { netlist::parse_file(path).await }))
        .collect();

    let mut summary = IngestSummary::default();

    for (path, handle) in paths.iter().zip(handles) {
        let parsed: Result<ParsedNetlist> = handle
            .await
            .map_err(|e| Error::internal(format!("netlist parse task failed: {}", e)))?;

        match parsed {
            Ok(parsed) => {
                tracing::info!(
                    path = %path.display(),
                    components = parsed.components.len(),
                    unrecognized = parsed.unrecognized.len(),
                    "Parsed netlist",
                );
                summary.files_loaded += 1;
                summary.components += parsed.components.len();
                summary.unrecognized_lines += parsed.unrecognized.len();
                store.extend(parsed.components).await;
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "Skipping netlist");
                summary.files_failed += 1;
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_preserves_order() {
        let store = ComponentStore::new();
        assert!(store.is_empty().await);

        store
            .insert(Component::new(ComponentKind::Module, "top"))
            .await;
        store
            .extend(vec![
                Component::new(ComponentKind::Wire, "a"),
                Component::new(ComponentKind::Input, "clk"),
                Component::new(ComponentKind::Wire, "b"),
            ])
            .await;

        assert_eq!(store.len().await, 4);
        let names: Vec<String> = store.all().await.into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["top", "a", "clk", "b"]);

        let wires: Vec<String> = store
            .of_kind(ComponentKind::Wire)
            .await
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(wires, vec!["a", "b"]);

        store.clear().await;
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_ingest_skips_unreadable_files() {
        let store = ComponentStore::new();
        let summary = ingest_files(&store, &[PathBuf::from("/nonexistent/top.v")])
            .await
            .unwrap();

        assert_eq!(summary.files_failed, 1);
        assert_eq!(summary.files_loaded, 0);
        assert!(store.is_empty().await);
    }
}
