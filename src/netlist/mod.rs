//! Verilog netlist parsing
//!
//! Understands a line-oriented subset of Verilog: one declaration per line,
//! `module`, `input`, `output`, `wire`, `assign` and `endmodule`. Every other
//! non-empty line is reported as unrecognized and skipped.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Component, ComponentKind};
use crate::{Error, Result};

pub mod optimize;

pub use optimize::suggest_optimizations;

static MODULE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^module\s+(\w+)\s*;$").expect("Invalid module regex pattern")
});

static WIRE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^wire\s+(\w+)\s*;$").expect("Invalid wire regex pattern"));

static INPUT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^input\s+(\w+)\s*;$").expect("Invalid input regex pattern"));

static OUTPUT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^output\s+(\w+)\s*;$").expect("Invalid output regex pattern")
});

static ASSIGN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^assign\s+(\w+)\s*=\s*(.+?)\s*;$").expect("Invalid assign regex pattern")
});

/// Classification of a single netlist line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Component(Component),
    EndModule,
    Blank,
    Unrecognized,
}

/// Line that matched none of the known declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedLine {
    /// 1-based line number
    pub line: usize,
    pub text: String,
}

/// Result of parsing one netlist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedNetlist {
    /// Components in declaration order
    pub components: Vec<Component>,
    pub unrecognized: Vec<UnrecognizedLine>,
    pub modules_closed: usize,
}

/// Classify a single line. Surrounding whitespace is ignored.
pub fn parse_line(line: &str) -> Line {
    let line = line.trim();
    if line.is_empty() {
        return Line::Blank;
    }
    if line == "endmodule" {
        return Line::EndModule;
    }

    let simple = [
        (&*MODULE_RE, ComponentKind::Module),
        (&*WIRE_RE, ComponentKind::Wire),
        (&*INPUT_RE, ComponentKind::Input),
        (&*OUTPUT_RE, ComponentKind::Output),
    ];
    for (re, kind) in simple {
        if let Some(caps) = re.captures(line) {
            return Line::Component(Component::new(kind, &caps[1]));
        }
    }

    if let Some(caps) = ASSIGN_RE.captures(line) {
        return Line::Component(Component::assign(&caps[1], &caps[2]));
    }

    Line::Unrecognized
}

/// Parse netlist source text
pub fn parse_source(source: &str) -> ParsedNetlist {
    let mut parsed = ParsedNetlist::default();

    for (idx, text) in source.lines().enumerate() {
        match parse_line(text) {
            Line::Component(component) => {
                tracing::debug!(kind = %component.kind, name = %component.name, "Component found");
                parsed.components.push(component);
            }
            Line::EndModule => parsed.modules_closed += 1,
            Line::Blank => {}
            Line::Unrecognized => {
                tracing::warn!(line = idx + 1, text, "Unrecognized netlist line");
                parsed.unrecognized.push(UnrecognizedLine {
                    line: idx + 1,
                    text: text.to_string(),
                });
            }
        }
    }

    parsed
}

/// Read and parse a netlist file
pub async fn parse_file(path: impl AsRef<Path>) -> Result<ParsedNetlist> {
    let path = path.as_ref();
    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::read_netlist(path, e))?;

    Ok(parse_source(&source))
}
