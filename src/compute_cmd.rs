//! Compute command: daily CSV in, index tables out.

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span, warn};

use clima_aggregate::compute_report;
use clima_io::{read_daily_csv, write_csv_rows, write_json};

use crate::cli::ComputeArgs;
use crate::config::ClimaConfig;
use crate::convert;
use crate::tables::write_decadal_csv;

/// Run the full index pipeline and write every table.
pub fn run(args: ComputeArgs) -> Result<()> {
    let _cmd = info_span!("compute").entered();

    // 1. Load config
    let config = ClimaConfig::load(args.config.as_deref())?;
    let aggregate_cfg = convert::build_aggregate_config(&config)?;
    let reader_cfg = convert::build_reader_config(&config.io);

    // 2. Read cleaned daily data
    let input = args
        .input
        .as_ref()
        .or(config.io.input.as_ref())
        .ok_or_else(|| anyhow!("no input path: set [io].input in config or use --input"))?;
    let series = read_daily_csv(input, &reader_cfg)
        .with_context(|| format!("failed to read daily CSV: {}", input.display()))?;
    if series.is_empty() {
        warn!(path = %input.display(), "input has no rows, tables will be empty");
    }

    // 3. Compute
    let report = compute_report(&series, &aggregate_cfg).context("failed to compute indices")?;

    // 4. Write tables
    let out_dir = args.output.unwrap_or(config.io.output_dir);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output directory: {}", out_dir.display()))?;

    let annual_path = out_dir.join("annual_metrics.csv");
    write_csv_rows(&annual_path, report.annual())
        .with_context(|| format!("failed to write {}", annual_path.display()))?;
    let decadal_path = out_dir.join("decadal_metrics.csv");
    write_decadal_csv(&decadal_path, report.decadal())
        .with_context(|| format!("failed to write {}", decadal_path.display()))?;
    let trend_path = out_dir.join("trend_results.csv");
    write_csv_rows(&trend_path, report.trends())
        .with_context(|| format!("failed to write {}", trend_path.display()))?;
    let monthly_path = out_dir.join("monthly_rain_metrics.csv");
    write_csv_rows(&monthly_path, report.monthly_rain())
        .with_context(|| format!("failed to write {}", monthly_path.display()))?;

    if args.json || config.io.json {
        let json_path = out_dir.join("report.json");
        write_json(&json_path, &report)
            .with_context(|| format!("failed to write {}", json_path.display()))?;
    }

    // 5. Summary
    let s = report.summary();
    info!(
        first_year = ?s.first_year,
        last_year = ?s.last_year,
        hottest = ?s.hottest_day.map(|d| (d.date, d.value)),
        wettest = ?s.wettest_day.map(|d| (d.date, d.value)),
        su30_per_decade = ?s.su30_slope_per_decade,
        reference_mean = ?s.anomaly_reference_mean,
        "summary"
    );
    info!(out_dir = %out_dir.display(), "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write as _;

    fn write_input(path: &std::path::Path) {
        let mut csv = String::from("date,temp_max,temp_min,temp_mean,precipitation\n");
        for year in 1978..1984 {
            for day in 1..=28 {
                let t = 25.0 + f64::from(day % 9) + f64::from(year - 1978);
                let p = if day % 4 == 0 { "12.5" } else { "0" };
                writeln!(csv, "{year}-07-{day:02},{t},{},{},{p}", t - 12.0, t - 6.0).unwrap();
            }
        }
        std::fs::write(path, csv).unwrap();
    }

    #[test]
    fn compute_writes_every_table() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("daily.csv");
        let out = dir.path().join("out");
        write_input(&input);

        run(ComputeArgs {
            config: None,
            input: Some(input),
            output: Some(out.clone()),
            json: true,
        })
        .expect("compute succeeds");

        let annual = std::fs::read_to_string(out.join("annual_metrics.csv")).unwrap();
        assert!(annual.starts_with("year,decade,n_days,"));
        assert_eq!(annual.lines().count(), 7);

        let trends = std::fs::read_to_string(out.join("trend_results.csv")).unwrap();
        assert_eq!(
            trends.lines().next().unwrap(),
            "metric,n,tau,rank_p_value,direction,slope,intercept,r_squared,linear_p_value,slope_per_decade"
        );

        let decadal = std::fs::read_to_string(out.join("decadal_metrics.csv")).unwrap();
        assert_eq!(decadal.lines().count(), 3);
        assert!(decadal.starts_with("decade,n_years,su25,"));

        let monthly = std::fs::read_to_string(out.join("monthly_rain_metrics.csv")).unwrap();
        assert!(monthly.starts_with("year,month,precip_total,r10mm,wet_days"));

        let json = std::fs::read_to_string(out.join("report.json")).unwrap();
        assert!(json.contains("\"summary\""));
    }

    #[test]
    fn compute_without_input_fails() {
        let err = run(ComputeArgs {
            config: None,
            input: None,
            output: None,
            json: false,
        })
        .unwrap_err();
        assert!(err.to_string().contains("no input path"));
    }
}
