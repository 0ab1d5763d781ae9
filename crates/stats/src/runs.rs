//! Run-length queries over boolean day flags.
//!
//! A run is a maximal stretch of consecutive `true` flags. Spell indices
//! (warm spells, dry and wet spells) are all expressed as queries over runs.

/// Lengths of every maximal `true` run, in order of occurrence.
pub fn run_lengths(flags: &[bool]) -> Vec<usize> {
    let mut runs = Vec::new();
    let mut current = 0usize;
    for &flag in flags {
        if flag {
            current += 1;
        } else if current > 0 {
            runs.push(current);
            current = 0;
        }
    }
    if current > 0 {
        runs.push(current);
    }
    runs
}

/// Length of the longest run of `true`; 0 for empty or all-`false` input.
pub fn longest_run(flags: &[bool]) -> usize {
    let mut longest = 0usize;
    let mut current = 0usize;
    for &flag in flags {
        if flag {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Total days belonging to runs of at least `min_length` days.
///
/// Runs are maximal, so a 7-day run contributes 7, never 6 + 1. A
/// `min_length` of 0 or 1 counts every `true` day.
pub fn days_in_qualifying_runs(flags: &[bool], min_length: usize) -> usize {
    run_lengths(flags)
        .into_iter()
        .filter(|&len| len >= min_length)
        .sum()
}
