//! Thresholds command: dump one calendar-day percentile table.

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use clima_baseline::build_calendar_threshold;
use clima_io::read_daily_csv;

use crate::cli::ThresholdsArgs;
use crate::config::ClimaConfig;
use crate::convert;
use crate::tables::write_thresholds_csv;

/// Estimate and write the threshold table of the requested variable.
pub fn run(args: ThresholdsArgs) -> Result<()> {
    let _cmd = info_span!("thresholds").entered();

    let mut config = ClimaConfig::load(args.config.as_deref())?;
    if let Some(p) = args.percentile {
        config.baseline.percentile = p;
    }
    let variable = convert::parse_variable(&args.variable)?;
    let baseline_cfg = convert::build_baseline_config(&config.baseline);
    baseline_cfg.validate()?;

    let input = args
        .input
        .as_ref()
        .or(config.io.input.as_ref())
        .ok_or_else(|| anyhow!("no input path: set [io].input in config or use --input"))?;
    let series = read_daily_csv(input, &convert::build_reader_config(&config.io))
        .with_context(|| format!("failed to read daily CSV: {}", input.display()))?;

    let threshold = build_calendar_threshold(&series, variable, &baseline_cfg)
        .context("failed to build calendar threshold")?;
    write_thresholds_csv(&args.output, &threshold)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!(
        variable = %variable,
        n_defined = threshold.n_defined(),
        path = %args.output.display(),
        "thresholds written"
    );
    Ok(())
}
