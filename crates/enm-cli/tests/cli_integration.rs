//! Integration tests for the hitcommute CLI
//!
//! - Kirchhoff matrix input writes hit/commute files in the text format
//! - Edge-list input writes node labels alongside the matrices
//! - Disconnected networks exit non-zero without writing results
use std::fs;
use std::path::Path;
use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_hitcommute");

fn read_rows(path: &Path) -> Vec<Vec<f64>> {
    fs::read_to_string(path)
        .expect("output file")
        .lines()
        .map(|line| {
            line.split_whitespace()
                .map(|v| v.parse::<f64>().expect("float"))
                .collect()
        })
        .collect()
}

#[test]
fn test_kirchhoff_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("kirchhoff.txt");
    fs::write(&input, "1 -1 0\n-1 2 -1\n0 -1 1\n").unwrap();
    let out = dir.path().join("OUTPUTS");

    let output = Command::new(BIN)
        .arg("--kirchhoff")
        .arg(&input)
        .arg("--output-dir")
        .arg(&out)
        .arg("--save-pinv")
        .output()
        .expect("Failed to execute hitcommute");

    assert!(
        output.status.success(),
        "hitcommute failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let hit = read_rows(&out.join("hit_df.txt"));
    let commute = read_rows(&out.join("commute_df.txt"));
    assert_eq!(hit.len(), 3);
    assert_eq!(commute.len(), 3);
    assert!((hit[0][1] - 1.0).abs() < 1e-9);
    assert!((hit[1][0] - 3.0).abs() < 1e-9);
    assert!((commute[0][2] - 8.0).abs() < 1e-9);
    assert!(out.join("pinv_df.txt").exists());
    assert!(!out.join("nodes.txt").exists());

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("run_summary.json")).unwrap()).unwrap();
    assert_eq!(summary["spectrum"]["n_nodes"], 3);
    assert_eq!(summary["spectrum"]["null_dimension"], 1);
    assert_eq!(summary["volume"].as_f64(), Some(4.0));
}

#[test]
fn test_network_input_with_only_commute() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("test_PPIN.txt");
    fs::write(&input, "P04637\tP24941\nP24941\tQ00987\t2.0\nQ00987\tP04637\n").unwrap();
    let out = dir.path().join("results");

    let output = Command::new(BIN)
        .arg("--network")
        .arg(&input)
        .arg("--output-dir")
        .arg(&out)
        .arg("--only")
        .arg("commute")
        .output()
        .expect("Failed to execute hitcommute");

    assert!(
        output.status.success(),
        "hitcommute failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(!out.join("hit_df.txt").exists());
    let commute = read_rows(&out.join("commute_df.txt"));
    assert_eq!(commute.len(), 3);
    for i in 0..3 {
        assert_eq!(commute[i][i], 0.0);
        for j in 0..3 {
            assert_eq!(commute[i][j], commute[j][i]);
        }
    }

    let labels = fs::read_to_string(out.join("nodes.txt")).unwrap();
    assert_eq!(labels.lines().collect::<Vec<_>>(), vec!["P04637", "P24941", "Q00987"]);
}

#[test]
fn test_disconnected_network_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("split.txt");
    fs::write(&input, "A\tB\nB\tC\nC\tA\nD\tE\nE\tF\nF\tD\n").unwrap();
    let out = dir.path().join("OUTPUTS");

    let output = Command::new(BIN)
        .arg("--network")
        .arg(&input)
        .arg("--output-dir")
        .arg(&out)
        .output()
        .expect("Failed to execute hitcommute");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Disconnected graph"), "stderr: {}", stderr);
    assert!(!out.join("commute_df.txt").exists());
}

#[test]
fn test_requires_an_input() {
    let output = Command::new(BIN).output().expect("Failed to execute hitcommute");
    assert!(!output.status.success());
}
