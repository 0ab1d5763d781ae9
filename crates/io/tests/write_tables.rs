//! Integration test: writing CSV tables and JSON.

use clima_io::{format_opt, write_csv_records, write_csv_rows, write_json};
use serde::Serialize;

#[derive(Serialize)]
struct YearRow {
    year: i32,
    su30: Option<u32>,
    dtr_mean: Option<f64>,
}

fn rows() -> Vec<YearRow> {
    vec![
        YearRow {
            year: 1978,
            su30: Some(12),
            dtr_mean: Some(9.25),
        },
        YearRow {
            year: 1979,
            su30: None,
            dtr_mean: None,
        },
    ]
}

#[test]
fn serialized_rows_have_header_and_empty_missing_fields() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("annual_metrics.csv");

    write_csv_rows(&path, &rows()).expect("write succeeds");

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["year,su30,dtr_mean", "1978,12,9.25", "1979,,"]);
}

#[test]
fn explicit_header_table() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("decadal_metrics.csv");
    let header = vec!["decade".to_string(), "su30".to_string()];
    let records = vec![
        vec!["1970".to_string(), format_opt(Some(5.5))],
        vec!["1980".to_string(), format_opt(None)],
    ];

    write_csv_records(&path, &header, &records).expect("write succeeds");

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    assert_eq!(rdr.headers().unwrap().len(), 2);
    let records: Vec<csv::StringRecord> = rdr.records().map(Result::unwrap).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(&records[0][1], "5.5");
    assert_eq!(&records[1][1], "");
}

#[test]
fn json_keeps_missing_as_null() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("report.json");

    write_json(&path, &rows()).expect("write succeeds");

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[0]["su30"], 12);
    assert!(value[1]["su30"].is_null());
}

#[test]
fn write_into_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("no_such_dir").join("annual.csv");
    assert!(write_csv_rows(&path, &rows()).is_err());
    assert!(write_json(&path, &rows()).is_err());
}
