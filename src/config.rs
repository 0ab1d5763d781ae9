use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

/// Top-level clima configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ClimaConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Calendar baseline settings.
    #[serde(default)]
    pub baseline: BaselineToml,

    /// Annual index thresholds.
    #[serde(default)]
    pub indices: IndicesToml,

    /// Anomaly, trend and summary settings.
    #[serde(default)]
    pub aggregate: AggregateToml,
}

impl ClimaConfig {
    /// Reads the TOML file at `path`, or returns defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            info!("no config file given, using defaults");
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            input: None,
            output_dir: default_output_dir(),
            date_format: default_date_format(),
            json: false,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaselineToml {
    #[serde(default = "default_start_year")]
    pub start_year: i32,
    #[serde(default = "default_end_year")]
    pub end_year: i32,
    #[serde(default = "default_percentile")]
    pub percentile: f64,
    #[serde(default = "default_window_radius")]
    pub window_radius: u16,
    #[serde(default = "default_min_pool")]
    pub min_pool: usize,
}

impl Default for BaselineToml {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            end_year: default_end_year(),
            percentile: default_percentile(),
            window_radius: default_window_radius(),
            min_pool: default_min_pool(),
        }
    }
}

fn default_start_year() -> i32 {
    1961
}
fn default_end_year() -> i32 {
    1990
}
fn default_percentile() -> f64 {
    90.0
}
fn default_window_radius() -> u16 {
    2
}
fn default_min_pool() -> usize {
    10
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndicesToml {
    #[serde(default = "default_summer_day")]
    pub summer_day: f64,
    #[serde(default = "default_hot_day")]
    pub hot_day: f64,
    #[serde(default = "default_tropical_night")]
    pub tropical_night: f64,
    #[serde(default = "default_wet_day")]
    pub wet_day: f64,
    #[serde(default = "default_heavy_precip")]
    pub heavy_precip: f64,
    #[serde(default = "default_very_heavy_precip")]
    pub very_heavy_precip: f64,
    #[serde(default = "default_gdd_base")]
    pub gdd_base: f64,
    #[serde(default = "default_wsdi_min_duration")]
    pub wsdi_min_duration: usize,
}

impl Default for IndicesToml {
    fn default() -> Self {
        Self {
            summer_day: default_summer_day(),
            hot_day: default_hot_day(),
            tropical_night: default_tropical_night(),
            wet_day: default_wet_day(),
            heavy_precip: default_heavy_precip(),
            very_heavy_precip: default_very_heavy_precip(),
            gdd_base: default_gdd_base(),
            wsdi_min_duration: default_wsdi_min_duration(),
        }
    }
}

fn default_summer_day() -> f64 {
    25.0
}
fn default_hot_day() -> f64 {
    30.0
}
fn default_tropical_night() -> f64 {
    20.0
}
fn default_wet_day() -> f64 {
    1.0
}
fn default_heavy_precip() -> f64 {
    10.0
}
fn default_very_heavy_precip() -> f64 {
    20.0
}
fn default_gdd_base() -> f64 {
    10.0
}
fn default_wsdi_min_duration() -> usize {
    6
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AggregateToml {
    #[serde(default = "default_hot_percentile")]
    pub hot_percentile: f64,
    #[serde(default)]
    pub anomaly_start: Option<i32>,
    #[serde(default = "default_anomaly_end")]
    pub anomaly_end: i32,
    #[serde(default = "default_trend_metrics")]
    pub trend_metrics: Vec<String>,
}

impl Default for AggregateToml {
    fn default() -> Self {
        Self {
            hot_percentile: default_hot_percentile(),
            anomaly_start: None,
            anomaly_end: default_anomaly_end(),
            trend_metrics: default_trend_metrics(),
        }
    }
}

fn default_hot_percentile() -> f64 {
    95.0
}
fn default_anomaly_end() -> i32 {
    1980
}
fn default_trend_metrics() -> Vec<String> {
    ["su30", "tr20", "dtr_mean", "wsdi_days"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: ClimaConfig = toml::from_str("").unwrap();
        assert_eq!(config.baseline.start_year, 1961);
        assert_eq!(config.baseline.end_year, 1990);
        assert_eq!(config.indices.wsdi_min_duration, 6);
        assert_eq!(config.aggregate.anomaly_end, 1980);
        assert_eq!(config.aggregate.trend_metrics.len(), 4);
        assert_eq!(config.io.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: ClimaConfig = toml::from_str(
            r#"
            [io]
            input = "data/clean.csv"

            [baseline]
            percentile = 95.0

            [aggregate]
            trend_metrics = ["cdd"]
            "#,
        )
        .unwrap();
        assert_eq!(config.io.input, Some(PathBuf::from("data/clean.csv")));
        assert_eq!(config.baseline.percentile, 95.0);
        assert_eq!(config.baseline.window_radius, 2);
        assert_eq!(config.aggregate.trend_metrics, vec!["cdd".to_string()]);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<ClimaConfig, _> = toml::from_str("[baseline]\nradius = 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clima.toml");
        std::fs::write(&path, "[indices]\nhot_day = 35.0\n").unwrap();
        let config = ClimaConfig::load(Some(&path)).unwrap();
        assert_eq!(config.indices.hot_day, 35.0);
        assert!(ClimaConfig::load(Some(&dir.path().join("missing.toml"))).is_err());
    }
}
