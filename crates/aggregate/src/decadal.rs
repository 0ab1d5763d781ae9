//! Decadal means of the annual rows.

use std::collections::BTreeMap;

use clima_indices::AnnualMetricRow;
use clima_stats::{mean_present, round_opt};
use serde::{Deserialize, Serialize};

use crate::metric::Metric;

/// Mean of every [`Metric::DECADAL`] metric over the years of one decade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecadalMetricRow {
    pub decade: i32,
    pub n_years: usize,
    #[serde(flatten)]
    pub means: BTreeMap<Metric, Option<f64>>,
}

impl DecadalMetricRow {
    /// Mean of `metric`, or `None` if no year of the decade defines it.
    pub fn mean(&self, metric: Metric) -> Option<f64> {
        self.means.get(&metric).copied().flatten()
    }
}

/// Groups `rows` by decade and averages each decadal metric over its defined
/// values, rounded to 2 decimals. Decades are ascending.
pub fn decadal_means(rows: &[AnnualMetricRow]) -> Vec<DecadalMetricRow> {
    let mut by_decade: BTreeMap<i32, Vec<&AnnualMetricRow>> = BTreeMap::new();
    for row in rows {
        by_decade.entry(row.decade).or_default().push(row);
    }

    by_decade
        .into_iter()
        .map(|(decade, rows)| {
            let means = Metric::DECADAL
                .into_iter()
                .map(|m| {
                    let mean = mean_present(rows.iter().map(|r| m.value(r)));
                    (m, round_opt(mean, 2))
                })
                .collect();
            DecadalMetricRow {
                decade,
                n_years: rows.len(),
                means,
            }
        })
        .collect()
}
