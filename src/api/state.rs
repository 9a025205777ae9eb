//! API server state

use std::sync::Arc;

use crate::report::{ReportSource, StaticReportSource};

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Where report records come from
    pub source: Arc<dyn ReportSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn ReportSource>) -> Self {
        Self { source }
    }

    /// State serving the fixed sample report
    pub fn static_report() -> Self {
        Self::new(Arc::new(StaticReportSource))
    }

    pub fn source_kind(&self) -> &'static str {
        self.source.kind()
    }
}
