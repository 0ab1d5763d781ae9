//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use crate::config::*;

use clima_aggregate::{AggregateConfig, AnomalyWindow, Metric};
use clima_baseline::BaselineConfig;
use clima_indices::IndexConfig;
use clima_io::ReaderConfig;
use clima_series::Variable;

/// Parses a variable column name into the corresponding enum variant.
pub fn parse_variable(s: &str) -> Result<Variable> {
    match Variable::from_name(&s.to_lowercase()) {
        Some(v) => Ok(v),
        None => bail!(
            "unknown variable: {s:?} (expected one of temp_max, temp_min, temp_mean, precipitation)"
        ),
    }
}

/// Parses a metric column name into the corresponding enum variant.
pub fn parse_metric(s: &str) -> Result<Metric> {
    match Metric::from_name(&s.to_lowercase()) {
        Some(m) => Ok(m),
        None => bail!("unknown metric: {s:?}"),
    }
}

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoToml) -> ReaderConfig {
    ReaderConfig::default().with_date_format(&io.date_format)
}

/// Builds a [`BaselineConfig`] from the TOML baseline section.
pub fn build_baseline_config(b: &BaselineToml) -> BaselineConfig {
    BaselineConfig::new()
        .with_year_range(b.start_year, b.end_year)
        .with_percentile(b.percentile)
        .with_window_radius(b.window_radius)
        .with_min_pool(b.min_pool)
}

/// Builds an [`IndexConfig`] from the TOML indices section.
pub fn build_index_config(i: &IndicesToml) -> IndexConfig {
    IndexConfig::new()
        .with_summer_day(i.summer_day)
        .with_hot_day(i.hot_day)
        .with_tropical_night(i.tropical_night)
        .with_wet_day(i.wet_day)
        .with_heavy_precip(i.heavy_precip)
        .with_very_heavy_precip(i.very_heavy_precip)
        .with_gdd_base(i.gdd_base)
        .with_wsdi_min_duration(i.wsdi_min_duration)
}

/// Builds the full [`AggregateConfig`] and validates it.
pub fn build_aggregate_config(config: &ClimaConfig) -> Result<AggregateConfig> {
    let a = &config.aggregate;
    let trend_metrics = a
        .trend_metrics
        .iter()
        .map(|s| parse_metric(s))
        .collect::<Result<Vec<_>>>()?;
    let anomaly_window = match a.anomaly_start {
        Some(start) => AnomalyWindow::between(start, a.anomaly_end),
        None => AnomalyWindow::up_to(a.anomaly_end),
    };

    let cfg = AggregateConfig::new()
        .with_baseline(build_baseline_config(&config.baseline))
        .with_indices(build_index_config(&config.indices))
        .with_hot_percentile(a.hot_percentile)
        .with_anomaly_window(anomaly_window)
        .with_trend_metrics(trend_metrics);
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_variable_names() {
        assert_eq!(parse_variable("temp_max").unwrap(), Variable::TempMax);
        assert_eq!(parse_variable("PRECIPITATION").unwrap(), Variable::Precipitation);
        assert!(parse_variable("humidity").is_err());
    }

    #[test]
    fn parse_metric_names() {
        assert_eq!(parse_metric("su30").unwrap(), Metric::Su30);
        assert_eq!(parse_metric("WSDI_DAYS").unwrap(), Metric::WsdiDays);
        let err = parse_metric("year").unwrap_err();
        assert!(err.to_string().contains("unknown metric"));
    }

    #[test]
    fn default_config_converts() {
        let cfg = build_aggregate_config(&ClimaConfig::default()).unwrap();
        assert_eq!(cfg, AggregateConfig::default());
    }

    #[test]
    fn anomaly_window_from_toml() {
        let mut config = ClimaConfig::default();
        config.aggregate.anomaly_start = Some(1951);
        config.aggregate.anomaly_end = 1980;
        let cfg = build_aggregate_config(&config).unwrap();
        assert_eq!(cfg.anomaly_window(), &AnomalyWindow::between(1951, 1980));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut config = ClimaConfig::default();
        config.baseline.start_year = 2000;
        assert!(build_aggregate_config(&config).is_err());

        let mut config = ClimaConfig::default();
        config.aggregate.trend_metrics = vec!["su30".into(), "bogus".into()];
        assert!(build_aggregate_config(&config).is_err());
    }
}
