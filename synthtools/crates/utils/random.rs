use rand::Rng;

/// A trait for random sources that can pick items and flip biased coins.
pub trait RandomChoice {
    /// Picks one random element from a slice.
    /// **NOTE**: This function does not check if the slice is empty. If the slice is empty, it will
    /// panic.
    fn choice<'a, T>(&mut self, items: &'a [T]) -> &'a T;

    /// Returns `true` with probability `prob`, clamping out-of-range probabilities.
    fn chance(&mut self, prob: f64) -> bool;
}

impl<R: Rng + ?Sized> RandomChoice for R {
    fn choice<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let idx = self.random_range(0..items.len());
        &items[idx]
    }

    fn chance(&mut self, prob: f64) -> bool {
        if prob <= 0.0 {
            return false;
        }
        if prob >= 1.0 {
            return true;
        }

        self.random_range(0.0..1.0) < prob
    }
}
