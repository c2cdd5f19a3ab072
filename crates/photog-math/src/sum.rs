//! Compensated summation.
//!
//! Averaging a multi-megapixel image by naive `f32` accumulation loses most
//! of the low bits once the running total dwarfs each sample. [`KahanSum`]
//! accumulates in `f64` with Neumaier's variant of Kahan compensation, and
//! partial sums over disjoint ranges can be merged without losing the
//! compensation term.

/// Neumaier-compensated running sum.
///
/// # Example
///
/// ```rust
/// use photog_math::KahanSum;
///
/// let mut left = KahanSum::new();
/// let mut right = KahanSum::new();
/// for _ in 0..1000 {
///     left.add(0.1);
///     right.add(0.1);
/// }
/// left.merge(&right);
/// assert!((left.value() - 200.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KahanSum {
    sum: f64,
    compensation: f64,
}

impl KahanSum {
    /// Empty sum.
    #[inline]
    pub const fn new() -> Self {
        Self {
            sum: 0.0,
            compensation: 0.0,
        }
    }

    /// Adds one term.
    #[inline]
    pub fn add(&mut self, value: f64) {
        let t = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - t) + value;
        } else {
            self.compensation += (value - t) + self.sum;
        }
        self.sum = t;
    }

    /// Folds another partial sum into this one.
    #[inline]
    pub fn merge(&mut self, other: &KahanSum) {
        self.add(other.sum);
        self.add(other.compensation);
    }

    /// Compensated total.
    #[inline]
    pub fn value(&self) -> f64 {
        self.sum + self.compensation
    }
}

impl FromIterator<f64> for KahanSum {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = KahanSum::new();
        for v in iter {
            acc.add(v);
        }
        acc
    }
}
