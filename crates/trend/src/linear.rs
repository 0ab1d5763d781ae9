//! Ordinary least squares trend against the year.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::MIN_POINTS;

/// Guards the t statistic against division by zero for a perfect fit.
const TINY: f64 = 1.0e-20;

/// Result of [`linear_trend`]. Every field is `None` when the fit is
/// undefined.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearTrend {
    slope: Option<f64>,
    intercept: Option<f64>,
    r_squared: Option<f64>,
    p_value: Option<f64>,
    slope_per_decade: Option<f64>,
    n: usize,
}

impl LinearTrend {
    /// Change in value per year.
    pub fn slope(&self) -> Option<f64> {
        self.slope
    }

    /// Fitted value at year 0.
    pub fn intercept(&self) -> Option<f64> {
        self.intercept
    }

    /// Coefficient of determination.
    pub fn r_squared(&self) -> Option<f64> {
        self.r_squared
    }

    /// Two-sided p-value of the slope.
    pub fn p_value(&self) -> Option<f64> {
        self.p_value
    }

    /// Change in value per ten years.
    pub fn slope_per_decade(&self) -> Option<f64> {
        self.slope_per_decade
    }

    /// Number of points used.
    pub fn n(&self) -> usize {
        self.n
    }
}

/// Fits `value = intercept + slope * year` by least squares.
///
/// Pairs whose value is missing are excluded. Fewer than three remaining
/// points, or remaining years that are all identical, leave every field
/// `None`. The p-value tests a zero slope against Student's t with `n - 2`
/// degrees of freedom.
pub fn linear_trend(years: &[i32], values: &[Option<f64>]) -> LinearTrend {
    let (x, y): (Vec<f64>, Vec<f64>) = years
        .iter()
        .zip(values)
        .filter_map(|(&yr, v)| v.map(|v| (f64::from(yr), v)))
        .unzip();
    let n = x.len();
    let undefined = LinearTrend {
        n,
        ..LinearTrend::default()
    };
    if n < MIN_POINTS {
        return undefined;
    }

    let nf = n as f64;
    let x_mean = x.iter().sum::<f64>() / nf;
    let y_mean = y.iter().sum::<f64>() / nf;
    let mut ssxm = 0.0;
    let mut ssym = 0.0;
    let mut ssxym = 0.0;
    for (xi, yi) in x.iter().zip(&y) {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        ssxm += dx * dx;
        ssym += dy * dy;
        ssxym += dx * dy;
    }
    if ssxm == 0.0 {
        return undefined;
    }

    let slope = ssxym / ssxm;
    let intercept = y_mean - slope * x_mean;
    let r_den = (ssxm * ssym).sqrt();
    let r = if r_den == 0.0 {
        0.0
    } else {
        (ssxym / r_den).clamp(-1.0, 1.0)
    };

    let df = nf - 2.0;
    let t = r * (df / ((1.0 - r + TINY) * (1.0 + r + TINY))).sqrt();
    let p_value = StudentsT::new(0.0, 1.0, df)
        .ok()
        .map(|dist| (2.0 * dist.cdf(-t.abs())).min(1.0));

    LinearTrend {
        slope: Some(slope),
        intercept: Some(intercept),
        r_squared: Some(r * r),
        p_value,
        slope_per_decade: Some(slope * 10.0),
        n,
    }
}
