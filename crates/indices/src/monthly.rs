//! Monthly precipitation breakdown.

use std::collections::BTreeMap;

use clima_series::DailyObservation;

use crate::config::IndexConfig;
use crate::row::MonthlyRainRow;

/// Precipitation total, heavy-rain days and wet days for every month of
/// `year` that has at least one record, in month order.
///
/// A month with records but no valid precipitation reports `None` in every
/// value column.
pub fn compute_monthly_rain(
    year: i32,
    observations: &[DailyObservation],
    config: &IndexConfig,
) -> Vec<MonthlyRainRow> {
    let mut by_month: BTreeMap<u8, Vec<f64>> = BTreeMap::new();
    for o in observations {
        let values = by_month.entry(o.month()).or_default();
        if let Some(p) = o.precipitation {
            values.push(p);
        }
    }

    by_month
        .into_iter()
        .map(|(month, values)| {
            let valid = !values.is_empty();
            let count = |pred: &dyn Fn(f64) -> bool| {
                valid.then(|| values.iter().filter(|&&p| pred(p)).count() as u32)
            };
            MonthlyRainRow {
                year,
                month,
                precip_total: valid.then(|| values.iter().sum::<f64>()),
                r10mm: count(&|p| p >= config.heavy_precip()),
                wet_days: count(&|p| p >= config.wet_day()),
            }
        })
        .collect()
}
