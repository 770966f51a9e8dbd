#![allow(clippy::expect_used, clippy::unwrap_used)]
//! End-to-end tests of the `pdata` commands against a pdata directory.

use clap::Parser;
use pdata_cli::{Cli, run};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn pdata_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        dir.path().join("procs"),
        "##TITLE= Parameter file\n$$ comment\n##$BYTORDP= 0\n##$DTYPP= 0\n##$NC_proc= 2\n##END=\n",
    )
    .unwrap();
    let data: Vec<u8> = [400i32, -8, 12, 7].iter().flat_map(|v| v.to_le_bytes()).collect();
    fs::write(dir.path().join("1r"), data).unwrap();
    dir
}

fn run_args(args: &[&str]) -> String {
    let cli = Cli::try_parse_from(args).expect("parse args");
    let mut out = Vec::new();
    run(&cli, &mut out).expect("run command");
    String::from_utf8(out).unwrap()
}

#[test]
fn members_lists_directory() {
    let dir = pdata_dir();
    let path = dir.path().to_str().unwrap();
    assert_eq!(run_args(&["pdata", "members", path]), "1r\nprocs\n");
}

#[test]
fn params_prints_sorted_parameters() {
    let dir = pdata_dir();
    let path = dir.path().to_str().unwrap();
    assert_eq!(
        run_args(&["pdata", "params", path]),
        "BYTORDP = 0\nDTYPP = 0\nNC_proc = 2\nsettings: int32, little-endian, scale 2^-2\n"
    );
}

#[test]
fn decode_previews_scaled_integers() {
    let dir = pdata_dir();
    let path = dir.path().to_str().unwrap();
    assert_eq!(
        run_args(&["pdata", "decode", path, "--limit", "3"]),
        "1r: 4 int32 samples (little-endian, scaled by 2^-2)\n100, -2, 3, ...\n"
    );
}

#[test]
fn decode_json_unscaled() {
    let dir = pdata_dir();
    let path = dir.path().to_str().unwrap();
    let output = run_args(&["pdata", "decode", path, "--no-scale", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["samples"]["int32"], serde_json::json!([400, -8, 12, 7]));
}

#[test]
fn decode_missing_member_prints_nothing() {
    let dir = pdata_dir();
    let path = dir.path().to_str().unwrap();
    assert_eq!(run_args(&["pdata", "decode", path, "-m", "1i"]), "");
}

#[test]
fn open_rejects_non_zip_file() {
    let dir = pdata_dir();
    let path = dir.path().join("procs");
    let cli = Cli::try_parse_from(["pdata", "members", path.to_str().unwrap()]).unwrap();
    let mut out = Vec::new();
    let err = run(&cli, &mut out).unwrap_err();
    assert!(err.to_string().contains("Cannot open ZIP archive"));
}
