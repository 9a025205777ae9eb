//! End-to-end tests for the netlist-backed report source

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chipreport::api::{create_router, AppState};
use chipreport::report::{create_source, ReportSource, ReportSourceConfig, StaticReportSource};
use chipreport::store::{ingest_files, ComponentStore};
use chipreport::types::ComponentKind;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

const SAMPLE_NETLIST: &str = "\
module example;
input clk;
output reset;
wire data;
assign data = clk & reset;
endmodule
";

fn write_netlist(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Parsing the sample design yields exactly the static report
#[tokio::test]
async fn sample_netlist_matches_static_report() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_netlist(&temp_dir, "example.v", SAMPLE_NETLIST);

    let source = create_source(ReportSourceConfig::Netlist { files: vec![path] })
        .await
        .unwrap();
    assert_eq!(source.kind(), "netlist");

    let records = source.fetch().await.unwrap();
    assert_eq!(records, StaticReportSource::records());
}

#[tokio::test]
async fn ingestion_preserves_file_order() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_netlist(&temp_dir, "a.v", "module alpha;\nwire a1;\nendmodule\n");
    let second = write_netlist(&temp_dir, "b.v", "module beta;\nwire b1;\nendmodule\n");
    let third = write_netlist(&temp_dir, "c.v", "module gamma;\nendmodule\n");

    let store = Arc::new(ComponentStore::new());
    let summary = ingest_files(&store, &[first, second, third]).await.unwrap();

    assert_eq!(summary.files_loaded, 3);
    assert_eq!(summary.files_failed, 0);
    assert_eq!(summary.components, 5);

    let modules: Vec<String> = store
        .of_kind(ComponentKind::Module)
        .await
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(modules, vec!["alpha", "beta", "gamma"]);
}

#[tokio::test]
async fn ingestion_tolerates_bad_lines_and_missing_files() {
    let temp_dir = TempDir::new().unwrap();
    let noisy = write_netlist(
        &temp_dir,
        "noisy.v",
        "module top;\nreg [7:0] count;\nwire w;\nalways @(posedge clk) begin\nendmodule\n",
    );
    let missing = temp_dir.path().join("missing.v");

    let store = Arc::new(ComponentStore::new());
    let summary = ingest_files(&store, &[missing, noisy]).await.unwrap();

    assert_eq!(summary.files_loaded, 1);
    assert_eq!(summary.files_failed, 1);
    assert_eq!(summary.unrecognized_lines, 2);
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn netlist_report_served_over_http() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_netlist(
        &temp_dir,
        "adder.v",
        "module adder;\ninput a;\ninput b;\noutput sum;\nwire carry;\nwire partial;\nassign sum = a ^ b;\nendmodule\n",
    );

    let source = create_source(ReportSourceConfig::Netlist { files: vec![path] })
        .await
        .unwrap();
    let app = create_router(AppState::new(source));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/report")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let report: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(report.as_array().unwrap().len(), 7);
    assert_eq!(report[6]["Type"], "Assign");
    assert_eq!(report[6]["Name"], "sum = a ^ b");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/report/optimizations")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let hints: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let wires: Vec<&str> = hints
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["wire"].as_str().unwrap())
        .collect();
    assert_eq!(wires, vec!["carry", "partial"]);
}
