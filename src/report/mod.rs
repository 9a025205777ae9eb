//! Report sources
//!
//! The report route depends only on [`ReportSource`], so the static sample
//! data can be swapped for parsed netlists without touching the HTTP layer.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::store::{self, ComponentStore};
use crate::types::ReportRecord;
use crate::{Error, Result};

/// Produces the ordered records served by `GET /report`
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Fetch the current report
    async fn fetch(&self) -> Result<Vec<ReportRecord>>;

    /// Short name used in logs and the health endpoint
    fn kind(&self) -> &'static str;
}

/// Fixed sample report
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticReportSource;

impl StaticReportSource {
    pub fn records() -> Vec<ReportRecord> {
        vec![
            ReportRecord::new("Module", "example"),
            ReportRecord::new("Input", "clk"),
            ReportRecord::new("Output", "reset"),
            ReportRecord::new("Wire", "data"),
            ReportRecord::new("Assign", "data = clk & reset"),
        ]
    }
}

#[async_trait]
impl ReportSource for StaticReportSource {
    async fn fetch(&self) -> Result<Vec<ReportRecord>> {
        Ok(Self::records())
    }

    fn kind(&self) -> &'static str {
        "static"
    }
}

/// Report over components held in a [`ComponentStore`]
pub struct NetlistReportSource {
    store: Arc<ComponentStore>,
}

impl NetlistReportSource {
    pub fn new(store: Arc<ComponentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReportSource for NetlistReportSource {
    async fn fetch(&self) -> Result<Vec<ReportRecord>> {
        let components = self.store.all().await;
        Ok(components.iter().map(ReportRecord::from).collect())
    }

    fn kind(&self) -> &'static str {
        "netlist"
    }
}

/// Report source configuration
#[derive(Debug, Clone, Default)]
pub enum ReportSourceConfig {
    #[default]
    Static,
    Netlist {
        files: Vec<PathBuf>,
    },
}

/// Create report source from config
pub async fn create_source(config: ReportSourceConfig) -> Result<Arc<dyn ReportSource>> {
    match config {
        ReportSourceConfig::Static => Ok(Arc::new(StaticReportSource)),
        ReportSourceConfig::Netlist { files } => {
            if files.is_empty() {
                return Err(Error::config("netlist report source needs at least one file"));
            }

            let store = Arc::new(ComponentStore::new());
            let summary = store::ingest_files(&store, &files).await?;
            tracing::info!(
                files_loaded = summary.files_loaded,
                files_failed = summary.files_failed,
                components = summary.components,
                unrecognized_lines = summary.unrecognized_lines,
                "Netlist ingestion complete",
            );

            Ok(Arc::new(NetlistReportSource::new(store)))
        }
    }
}
