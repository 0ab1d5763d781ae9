//! Names of the numeric annual columns.

use clima_indices::AnnualMetricRow;
use serde::{Deserialize, Serialize};

/// A numeric column of [`AnnualMetricRow`].
///
/// The snake-case name of each variant equals the row field and the output
/// column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    NDays,
    Su25,
    Su30,
    Tr20,
    DtrMean,
    TempMaxMean,
    TempMinMean,
    TempMeanAnnual,
    PrecipTotal,
    PrecipDays,
    R10mm,
    R20mm,
    Sdii,
    Rx1day,
    WsdiDays,
    Tx90p,
    Tn90p,
    Cdd,
    Cwd,
    Gdd,
    GddMissingDays,
    P95Days,
    FirstHotDay,
    LastHotDay,
    HotSeasonLength,
    Anomaly,
}

impl Metric {
    /// Every metric in column order.
    pub const ALL: [Metric; 26] = [
        Metric::NDays,
        Metric::Su25,
        Metric::Su30,
        Metric::Tr20,
        Metric::DtrMean,
        Metric::TempMaxMean,
        Metric::TempMinMean,
        Metric::TempMeanAnnual,
        Metric::PrecipTotal,
        Metric::PrecipDays,
        Metric::R10mm,
        Metric::R20mm,
        Metric::Sdii,
        Metric::Rx1day,
        Metric::WsdiDays,
        Metric::Tx90p,
        Metric::Tn90p,
        Metric::Cdd,
        Metric::Cwd,
        Metric::Gdd,
        Metric::GddMissingDays,
        Metric::P95Days,
        Metric::FirstHotDay,
        Metric::LastHotDay,
        Metric::HotSeasonLength,
        Metric::Anomaly,
    ];

    /// Metrics averaged per decade: every index except the record
    /// bookkeeping columns and the hot-day bounds.
    pub const DECADAL: [Metric; 22] = [
        Metric::Su25,
        Metric::Su30,
        Metric::Tr20,
        Metric::DtrMean,
        Metric::TempMaxMean,
        Metric::TempMinMean,
        Metric::TempMeanAnnual,
        Metric::PrecipTotal,
        Metric::PrecipDays,
        Metric::R10mm,
        Metric::R20mm,
        Metric::Sdii,
        Metric::Rx1day,
        Metric::WsdiDays,
        Metric::Tx90p,
        Metric::Tn90p,
        Metric::Cdd,
        Metric::Cwd,
        Metric::Gdd,
        Metric::P95Days,
        Metric::HotSeasonLength,
        Metric::Anomaly,
    ];

    /// Column name.
    pub fn name(self) -> &'static str {
        match self {
            Metric::NDays => "n_days",
            Metric::Su25 => "su25",
            Metric::Su30 => "su30",
            Metric::Tr20 => "tr20",
            Metric::DtrMean => "dtr_mean",
            Metric::TempMaxMean => "temp_max_mean",
            Metric::TempMinMean => "temp_min_mean",
            Metric::TempMeanAnnual => "temp_mean_annual",
            Metric::PrecipTotal => "precip_total",
            Metric::PrecipDays => "precip_days",
            Metric::R10mm => "r10mm",
            Metric::R20mm => "r20mm",
            Metric::Sdii => "sdii",
            Metric::Rx1day => "rx1day",
            Metric::WsdiDays => "wsdi_days",
            Metric::Tx90p => "tx90p",
            Metric::Tn90p => "tn90p",
            Metric::Cdd => "cdd",
            Metric::Cwd => "cwd",
            Metric::Gdd => "gdd",
            Metric::GddMissingDays => "gdd_missing_days",
            Metric::P95Days => "p95_days",
            Metric::FirstHotDay => "first_hot_day",
            Metric::LastHotDay => "last_hot_day",
            Metric::HotSeasonLength => "hot_season_length",
            Metric::Anomaly => "anomaly",
        }
    }

    /// Looks a metric up by column name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Extracts this metric from `row`.
    pub fn value(self, row: &AnnualMetricRow) -> Option<f64> {
        let count = |v: Option<u32>| v.map(f64::from);
        match self {
            Metric::NDays => Some(row.n_days as f64),
            Metric::Su25 => count(row.su25),
            Metric::Su30 => count(row.su30),
            Metric::Tr20 => count(row.tr20),
            Metric::DtrMean => row.dtr_mean,
            Metric::TempMaxMean => row.temp_max_mean,
            Metric::TempMinMean => row.temp_min_mean,
            Metric::TempMeanAnnual => row.temp_mean_annual,
            Metric::PrecipTotal => row.precip_total,
            Metric::PrecipDays => count(row.precip_days),
            Metric::R10mm => count(row.r10mm),
            Metric::R20mm => count(row.r20mm),
            Metric::Sdii => row.sdii,
            Metric::Rx1day => row.rx1day,
            Metric::WsdiDays => count(row.wsdi_days),
            Metric::Tx90p => row.tx90p,
            Metric::Tn90p => row.tn90p,
            Metric::Cdd => count(row.cdd),
            Metric::Cwd => count(row.cwd),
            Metric::Gdd => row.gdd,
            Metric::GddMissingDays => Some(f64::from(row.gdd_missing_days)),
            Metric::P95Days => count(row.p95_days),
            Metric::FirstHotDay => row.first_hot_day.map(f64::from),
            Metric::LastHotDay => row.last_hot_day.map(f64::from),
            Metric::HotSeasonLength => Some(f64::from(row.hot_season_length)),
            Metric::Anomaly => row.anomaly,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique_and_round_trip() {
        let mut names: Vec<&str> = Metric::ALL.iter().map(|m| m.name()).collect();
        for m in Metric::ALL {
            assert_eq!(Metric::from_name(m.name()), Some(m));
        }
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Metric::ALL.len());
        assert_eq!(Metric::from_name("year"), None);
    }

    #[test]
    fn serde_name_matches_column_name() {
        for m in Metric::ALL {
            let json = serde_json::to_string(&m).unwrap();
            assert_eq!(json, format!("\"{}\"", m.name()));
        }
    }

    #[test]
    fn all_is_in_declaration_order() {
        let mut sorted = Metric::ALL;
        sorted.sort();
        assert_eq!(sorted, Metric::ALL);
    }

    #[test]
    fn decadal_excludes_bookkeeping_and_hot_day_bounds() {
        for m in [
            Metric::NDays,
            Metric::GddMissingDays,
            Metric::FirstHotDay,
            Metric::LastHotDay,
        ] {
            assert!(!Metric::DECADAL.contains(&m));
        }
        assert!(Metric::DECADAL.contains(&Metric::HotSeasonLength));
        assert!(Metric::DECADAL.iter().all(|m| Metric::ALL.contains(m)));
        let mut sorted = Metric::DECADAL;
        sorted.sort();
        assert_eq!(sorted, Metric::DECADAL);
    }
}
