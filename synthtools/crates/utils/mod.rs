mod random;

pub use random::RandomChoice;

/// Rounds to two decimals, the precision every `double` literal is rendered with.
#[inline(always)]
pub fn round_cents(value: f64) -> f64 {
    // `+ 0.0` folds a negative zero into `0.0`
    (value * 100.0).round() / 100.0 + 0.0
}
