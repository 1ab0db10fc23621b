/// Loop summation of 1..=n
use std::hint::black_box;

/// Sum the integers from 1 to `n` inclusive, one addition per iteration.
///
/// Overflow wraps silently. `n` goes through `black_box` so the loop is not
/// folded into the closed form at compile time.
pub fn sum_to_n(n: u64) -> u64 {
    let n = black_box(n);
    let mut total: u64 = 0;
    for i in 1..=n {
        total = total.wrapping_add(i);
    }
    total
}

/// n(n+1)/2, computed wide enough to never overflow for any u64 `n`
pub fn closed_form(n: u64) -> u128 {
    let n = n as u128;
    n * (n + 1) / 2
}
