use thiserror::Error;

/// Fraction of a step below which a remainder is treated as floating-point noise
/// when deciding whether `stop` itself is a sample point.
const SAMPLE_TOLERANCE: f64 = 1e-6;

/// Upper bound on the number of sample points along a single distance.
pub const MAX_SAMPLES: usize = 10_000_000;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RangeError {
    #[error("Scan {field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("Scan start ({start}) must be smaller than stop ({stop})")]
    EmptyInterval { start: f64, stop: f64 },
    #[error("Scan step must be positive, got {0}")]
    NonPositiveStep(f64),
    #[error("Scan would produce about {count:e} samples, more than the limit of {limit}")]
    TooManySamples { count: f64, limit: usize },
}

/// A one-dimensional sampling range `start..=stop` in increments of `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanRange {
    start: f64,
    stop: f64,
    step: f64,
    sample_count: usize,
}

impl ScanRange {
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self, RangeError> {
        for (field, value) in [("start", start), ("stop", stop), ("step", step)] {
            if !value.is_finite() {
                return Err(RangeError::NonFinite { field, value });
            }
        }
        if start >= stop {
            return Err(RangeError::EmptyInterval { start, stop });
        }
        if step <= 0.0 {
            return Err(RangeError::NonPositiveStep(step));
        }
        let sample_count = count_samples(start, stop, step)?;
        Ok(Self {
            start,
            stop,
            step,
            sample_count,
        })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn stop(&self) -> f64 {
        self.stop
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns a copy of this range with a different step size.
    pub fn with_step(&self, step: f64) -> Result<Self, RangeError> {
        Self::new(self.start, self.stop, step)
    }

    /// Number of sample points, counting `start` and every `start + k * step`
    /// that does not pass `stop`.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn sample(&self, index: usize) -> Option<f64> {
        if index >= self.sample_count() {
            return None;
        }
        Some((self.start + index as f64 * self.step).min(self.stop))
    }

    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.sample_count()).filter_map(move |i| self.sample(i))
    }
}

fn count_samples(start: f64, stop: f64, step: f64) -> Result<usize, RangeError> {
    let count = ((stop - start) / step + SAMPLE_TOLERANCE).floor() + 1.0;
    if !count.is_finite() || count > MAX_SAMPLES as f64 {
        return Err(RangeError::TooManySamples {
            count,
            limit: MAX_SAMPLES,
        });
    }
    Ok(count as usize)
}
