//! Kendall rank correlation against time.

use serde::{Deserialize, Serialize};
use statrs::function::erf::erfc;

use crate::MIN_POINTS;

/// Largest sample size for which the exact null distribution is used.
const EXACT_MAX_N: usize = 33;

/// Direction of a monotonic trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    NoTrend,
    InsufficientData,
}

impl TrendDirection {
    /// Snake-case label used in output tables.
    pub fn as_str(self) -> &'static str {
        match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::NoTrend => "no_trend",
            TrendDirection::InsufficientData => "insufficient_data",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`rank_trend`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankTrend {
    coefficient: Option<f64>,
    p_value: Option<f64>,
    direction: TrendDirection,
    n: usize,
}

impl RankTrend {
    fn insufficient(n: usize) -> Self {
        Self {
            coefficient: None,
            p_value: None,
            direction: TrendDirection::InsufficientData,
            n,
        }
    }

    /// Kendall's tau-b, or `None` when undefined.
    pub fn coefficient(&self) -> Option<f64> {
        self.coefficient
    }

    /// Two-sided p-value, or `None` when undefined.
    pub fn p_value(&self) -> Option<f64> {
        self.p_value
    }

    /// Sign of the coefficient.
    pub fn direction(&self) -> TrendDirection {
        self.direction
    }

    /// Number of non-missing points used.
    pub fn n(&self) -> usize {
        self.n
    }
}

/// Kendall's tau-b between position in `series` and value.
///
/// Missing values are dropped first and the remaining points are indexed
/// 0, 1, 2, ... in order. Fewer than three points yields
/// [`TrendDirection::InsufficientData`]. A constant series has an undefined
/// coefficient and is reported as [`TrendDirection::NoTrend`].
pub fn rank_trend(series: &[Option<f64>]) -> RankTrend {
    let y: Vec<f64> = series.iter().flatten().copied().collect();
    let n = y.len();
    if n < MIN_POINTS {
        return RankTrend::insufficient(n);
    }

    // Time is strictly increasing, so every pair is concordant, discordant
    // or tied in value only.
    let mut con = 0u64;
    let mut dis = 0u64;
    for i in 0..n {
        for j in (i + 1)..n {
            match y[j].partial_cmp(&y[i]) {
                Some(std::cmp::Ordering::Greater) => con += 1,
                Some(std::cmp::Ordering::Less) => dis += 1,
                _ => {}
            }
        }
    }

    let ties = TieCounts::of(&y);
    let tot = (n * (n - 1) / 2) as u64;
    if ties.pairs == tot {
        return RankTrend {
            coefficient: None,
            p_value: None,
            direction: TrendDirection::NoTrend,
            n,
        };
    }

    let s = con as f64 - dis as f64;
    let tau = (s / ((tot as f64) * (tot - ties.pairs) as f64).sqrt()).clamp(-1.0, 1.0);

    let c = dis.min(tot - dis);
    let p = if ties.pairs == 0 && (n <= EXACT_MAX_N || c <= 1) {
        exact_p_value(n, c as usize)
    } else {
        let m = (n * (n - 1)) as f64;
        let var = (m * (2 * n + 5) as f64 - ties.cubic) / 18.0;
        erfc((s / var.sqrt()).abs() / std::f64::consts::SQRT_2)
    };

    let direction = if tau > 0.0 {
        TrendDirection::Increasing
    } else if tau < 0.0 {
        TrendDirection::Decreasing
    } else {
        TrendDirection::NoTrend
    };

    RankTrend {
        coefficient: Some(tau),
        p_value: Some(p),
        direction,
        n,
    }
}

/// Tie statistics of one variable.
struct TieCounts {
    /// Σ t(t−1)/2 over tie groups of size t.
    pairs: u64,
    /// Σ t(t−1)(2t+5) over tie groups.
    cubic: f64,
}

impl TieCounts {
    fn of(values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mut pairs = 0u64;
        let mut cubic = 0.0;
        for group in sorted.chunk_by(|a, b| a == b) {
            let t = group.len() as u64;
            if t > 1 {
                pairs += t * (t - 1) / 2;
                cubic += (t * (t - 1) * (2 * t + 5)) as f64;
            }
        }
        Self { pairs, cubic }
    }
}

/// Two-sided p-value of `c = min(discordant, total - discordant)` under the
/// exact null distribution of inversion counts for `n` untied points.
fn exact_p_value(n: usize, c: usize) -> f64 {
    let tot = n * (n - 1) / 2;
    let p = if n <= 2 {
        1.0
    } else if c == 0 {
        2.0 / factorial(n)
    } else if c == 1 {
        2.0 / factorial(n - 1)
    } else if 2 * c == tot {
        1.0
    } else {
        // counts[k] = number of permutations of j elements with k inversions,
        // truncated at k = c.
        let mut counts = vec![0.0; c + 1];
        counts[0] = 1.0;
        counts[1] = 1.0;
        for j in 3..=n {
            for k in 1..=c {
                counts[k] += counts[k - 1];
            }
            if j <= c {
                let prev = counts.clone();
                for k in j..=c {
                    counts[k] -= prev[k - j];
                }
            }
        }
        2.0 * counts.iter().sum::<f64>() / factorial(n)
    };
    p.clamp(0.0, 1.0)
}

fn factorial(n: usize) -> f64 {
    (2..=n).map(|k| k as f64).product()
}
