//! Layout of the output tables whose columns are not a fixed struct.

use std::path::Path;

use clima_aggregate::{DecadalMetricRow, Metric};
use clima_baseline::CalendarThreshold;
use clima_io::{IoError, format_opt, write_csv_records};

/// Header and records of the decadal table: `decade`, `n_years`, then one
/// column per [`Metric::DECADAL`] metric.
pub fn decadal_records(rows: &[DecadalMetricRow]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut header = vec!["decade".to_string(), "n_years".to_string()];
    header.extend(Metric::DECADAL.iter().map(|m| m.name().to_string()));

    let records = rows
        .iter()
        .map(|row| {
            let mut record = vec![row.decade.to_string(), row.n_years.to_string()];
            record.extend(Metric::DECADAL.iter().map(|&m| format_opt(row.mean(m))));
            record
        })
        .collect();
    (header, records)
}

/// Header and records of a threshold table: `day_of_year`, `<variable>_p<pct>`.
pub fn threshold_records(threshold: &CalendarThreshold) -> (Vec<String>, Vec<Vec<String>>) {
    let header = vec![
        "day_of_year".to_string(),
        format!("{}_p{}", threshold.variable(), threshold.percentile()),
    ];
    let records = threshold
        .iter()
        .map(|(doy, value)| vec![doy.to_string(), format_opt(value)])
        .collect();
    (header, records)
}

pub fn write_decadal_csv(path: &Path, rows: &[DecadalMetricRow]) -> Result<(), IoError> {
    let (header, records) = decadal_records(rows);
    write_csv_records(path, &header, &records)
}

pub fn write_thresholds_csv(path: &Path, threshold: &CalendarThreshold) -> Result<(), IoError> {
    let (header, records) = threshold_records(threshold);
    write_csv_records(path, &header, &records)
}
