//! Wire optimization hints

use crate::types::{ComponentKind, ReportRecord, Suggestion};

pub const WIRE_HINT: &str = "check for redundancy or improve timing";

/// One suggestion per wire in the report, in report order
pub fn suggest_optimizations(records: &[ReportRecord]) -> Vec<Suggestion> {
    records
        .iter()
        .filter(|r| r.is_kind(ComponentKind::Wire))
        .map(|r| Suggestion {
            wire: r.name.clone(),
            hint: WIRE_HINT.to_string(),
        })
        .collect()
}
