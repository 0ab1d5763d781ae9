//! Exhaustive checks of the run-length laws over every short flag sequence.

use clima_stats::{days_in_qualifying_runs, longest_run, run_lengths};

fn all_sequences(len: usize) -> impl Iterator<Item = Vec<bool>> {
    (0u32..(1 << len)).map(move |bits| (0..len).map(|i| bits & (1 << i) != 0).collect())
}

#[test]
fn longest_run_bounded_by_length() {
    for len in 0..=10 {
        for seq in all_sequences(len) {
            assert!(longest_run(&seq) <= seq.len());
        }
    }
}

#[test]
fn longest_run_equals_length_when_all_true() {
    for len in 0..=50 {
        assert_eq!(longest_run(&vec![true; len]), len);
    }
}

#[test]
fn min_length_one_counts_true_days() {
    for len in 0..=10 {
        for seq in all_sequences(len) {
            let n_true = seq.iter().filter(|&&b| b).count();
            assert_eq!(days_in_qualifying_runs(&seq, 1), n_true);
        }
    }
}

#[test]
fn run_lengths_partition_true_days() {
    for len in 0..=10 {
        for seq in all_sequences(len) {
            let n_true = seq.iter().filter(|&&b| b).count();
            let runs = run_lengths(&seq);
            assert_eq!(runs.iter().sum::<usize>(), n_true);
            assert_eq!(runs.iter().copied().max().unwrap_or(0), longest_run(&seq));
        }
    }
}

#[test]
fn qualifying_days_never_exceed_true_days() {
    for len in 0..=10 {
        for seq in all_sequences(len) {
            let n_true = seq.iter().filter(|&&b| b).count();
            for min in 0..=len + 1 {
                assert!(days_in_qualifying_runs(&seq, min) <= n_true);
            }
        }
    }
}
