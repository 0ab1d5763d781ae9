//! Trend estimators on hand-checked annual series.

use approx::assert_relative_eq;
use clima_trend::{TrendDirection, linear_trend, rank_trend};

fn some(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

#[test]
fn fewer_than_three_points_is_insufficient() {
    for series in [vec![], some(&[1.0]), some(&[1.0, 2.0]), vec![Some(1.0), None, Some(2.0)]] {
        let r = rank_trend(&series);
        assert_eq!(r.direction(), TrendDirection::InsufficientData);
        assert_eq!(r.coefficient(), None);
        assert_eq!(r.p_value(), None);

        let years: Vec<i32> = (2000..).take(series.len()).collect();
        let l = linear_trend(&years, &series);
        assert_eq!(l.slope(), None);
        assert_eq!(l.r_squared(), None);
    }
}

#[test]
fn monotonic_increase_uses_exact_distribution() {
    let r = rank_trend(&some(&[1.0, 2.0, 3.0]));
    assert_eq!(r.direction(), TrendDirection::Increasing);
    assert_relative_eq!(r.coefficient().unwrap(), 1.0);
    assert_relative_eq!(r.p_value().unwrap(), 1.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn monotonic_decrease() {
    let values: Vec<f64> = (0..10).map(|i| 50.0 - f64::from(i)).collect();
    let r = rank_trend(&some(&values));
    assert_eq!(r.direction(), TrendDirection::Decreasing);
    assert_relative_eq!(r.coefficient().unwrap(), -1.0);
    // 2 / 10!
    assert_relative_eq!(r.p_value().unwrap(), 2.0 / 3_628_800.0, max_relative = 1e-12);
}

#[test]
fn exact_p_value_with_three_inversions() {
    let r = rank_trend(&some(&[1.0, 3.0, 2.0, 5.0, 4.0, 7.0, 6.0, 8.0]));
    assert_relative_eq!(r.coefficient().unwrap(), 22.0 / 28.0, epsilon = 1e-12);
    // (1 + 7 + 27 + 76) permutations of eight with at most three inversions.
    assert_relative_eq!(r.p_value().unwrap(), 222.0 / 40_320.0, epsilon = 1e-12);
}

#[test]
fn ties_use_corrected_normal_approximation() {
    let r = rank_trend(&some(&[1.0, 2.0, 2.0, 3.0, 4.0]));
    assert_relative_eq!(r.coefficient().unwrap(), 0.948_683_298_050_513_8, epsilon = 1e-12);
    assert_relative_eq!(r.p_value().unwrap(), 0.022_977_401_503_206_086, epsilon = 1e-9);
}

#[test]
fn large_untied_sample_uses_normal_approximation() {
    let values: Vec<f64> = (0..40).map(|i| f64::from((i * 7) % 40)).collect();
    let r = rank_trend(&some(&values));
    assert_eq!(r.n(), 40);
    assert_relative_eq!(r.coefficient().unwrap(), 114.0 / 780.0, epsilon = 1e-12);
    assert_relative_eq!(r.p_value().unwrap(), 0.184_106_119_496_079_75, epsilon = 1e-9);
}

#[test]
fn constant_series_has_no_coefficient() {
    let r = rank_trend(&some(&[5.0; 12]));
    assert_eq!(r.direction(), TrendDirection::NoTrend);
    assert_eq!(r.coefficient(), None);
    assert_eq!(r.p_value(), None);
    assert_eq!(r.n(), 12);
}

#[test]
fn missing_values_are_dropped_before_indexing() {
    let r = rank_trend(&[Some(1.0), None, None, Some(2.0), Some(3.0)]);
    assert_eq!(r.n(), 3);
    assert_relative_eq!(r.p_value().unwrap(), 1.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn linear_trend_of_noisy_warming() {
    let years: Vec<i32> = (1961..=1970).collect();
    let values = some(&[10.0, 12.0, 11.0, 13.0, 12.0, 14.0, 13.0, 15.0, 14.0, 16.0]);
    let fit = linear_trend(&years, &values);
    assert_eq!(fit.n(), 10);
    assert!(fit.slope().unwrap() > 0.0);
    assert_relative_eq!(
        fit.slope_per_decade().unwrap(),
        fit.slope().unwrap() * 10.0,
        epsilon = 1e-12
    );
    let p = fit.p_value().unwrap();
    assert!(p > 0.0 && p < 0.01, "p = {p}");
    let r2 = fit.r_squared().unwrap();
    assert!(r2 > 0.5 && r2 < 1.0);
}
