//! chipreport - HTTP report service for chip design components
//!
//! Serves a report of design components (modules, ports, wires and
//! assignments) as JSON:
//! - A static sample report by default
//! - Optionally, components parsed from simple Verilog netlists
//! - Wire optimization hints derived from the report
//! - Permissive CORS so browser front-ends can read it

pub mod api;
pub mod config;
pub mod error;
pub mod netlist;
pub mod report;
pub mod store;
pub mod types;

pub use error::{Error, Result};
