//! Core types for chipreport

use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of a design report.
///
/// `Type` is an open set; the report never validates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportRecord {
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "Name")]
    pub name: String,
}

impl ReportRecord {
    pub fn new(record_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            record_type: record_type.into(),
            name: name.into(),
        }
    }

    pub fn is_kind(&self, kind: ComponentKind) -> bool {
        self.record_type == kind.as_str()
    }
}

/// Kind of a parsed netlist component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Module,
    Input,
    Output,
    Wire,
    Assign,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Module => "Module",
            ComponentKind::Input => "Input",
            ComponentKind::Output => "Output",
            ComponentKind::Wire => "Wire",
            ComponentKind::Assign => "Assign",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A design component recovered from a netlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub kind: ComponentKind,
    pub name: String,
    /// Right-hand side of an assignment
    pub details: Option<String>,
}

impl Component {
    pub fn new(kind: ComponentKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            details: None,
        }
    }

    pub fn assign(target: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            kind: ComponentKind::Assign,
            name: target.into(),
            details: Some(expr.into()),
        }
    }

    /// Render as a report entry. Assignments show as `target = expr`.
    pub fn to_record(&self) -> ReportRecord {
        let name = match (&self.kind, &self.details) {
            (ComponentKind::Assign, Some(expr)) => format!("{} = {}", self.name, expr),
            _ => self.name.clone(),
        };
        ReportRecord::new(self.kind.as_str(), name)
    }
}

impl From<&Component> for ReportRecord {
    fn from(component: &Component) -> Self {
        component.to_record()
    }
}

/// Wire optimization hint
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Suggestion {
    pub wire: String,
    pub hint: String,
}
