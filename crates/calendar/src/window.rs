//! Circular calendar windows for pooled percentile estimation.

use crate::doy::{DAYS_IN_LEAP_YEAR, Doy};
use crate::error::CalendarError;

/// Exclusive upper bound on a window radius; a wider window would wrap onto itself.
pub const MAX_WINDOW_RADIUS: u16 = DAYS_IN_LEAP_YEAR / 2;

/// Returns the days within `radius` of `center`, wrapping across the 366/1
/// boundary.
///
/// Day `d` maps to `{(d - radius + k - 1) mod 366 + 1 | k in 0..=2*radius}`,
/// so the window around January 1 with radius 2 is `{365, 366, 1, 2, 3}`.
/// The result is sorted ascending.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidWindowRadius`] if `radius >= 183`.
pub fn circular_window(center: Doy, radius: u16) -> Result<Vec<Doy>, CalendarError> {
    if radius >= MAX_WINDOW_RADIUS {
        return Err(CalendarError::InvalidWindowRadius {
            radius,
            max: MAX_WINDOW_RADIUS,
        });
    }
    let n = i32::from(DAYS_IN_LEAP_YEAR);
    let start = i32::from(center.get()) - i32::from(radius) - 1;
    let mut days: Vec<Doy> = (0..=2 * i32::from(radius))
        .map(|k| {
            let doy = (start + k).rem_euclid(n) + 1;
            Doy::new(doy as u16)
        })
        .collect::<Result<_, _>>()?;
    days.sort_unstable();
    Ok(days)
}
