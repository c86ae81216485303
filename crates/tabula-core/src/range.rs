//! Stepped sampling of a closed interval

use crate::error::TableError;

/// Closed interval `[from, to]` sampled every `step`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    pub from: f64,
    pub to: f64,
    pub step: f64,
}

impl SampleRange {
    /// Build a range without validation
    ///
    /// A zero or negative step with `from <= to` yields samples forever;
    /// `from > to` yields none.
    pub fn new(from: f64, to: f64, step: f64) -> Self {
        Self { from, to, step }
    }

    /// Build a range whose sampling is guaranteed to terminate
    pub fn checked(from: f64, to: f64, step: f64) -> Result<Self, TableError> {
        for value in [from, to] {
            if !value.is_finite() {
                return Err(TableError::NonFiniteBound { value });
            }
        }
        if !(step.is_finite() && step > 0.0) {
            return Err(TableError::InvalidStep { step });
        }
        Ok(Self::new(from, to, step))
    }

    pub fn samples(&self) -> Samples {
        Samples {
            range: *self,
            index: 0,
        }
    }
}

impl IntoIterator for SampleRange {
    type Item = f64;
    type IntoIter = Samples;

    fn into_iter(self) -> Samples {
        self.samples()
    }
}

/// Iterator over the sample points of a `SampleRange`
///
/// Points are `from + i * step` rather than a running sum, so no rounding
/// error accumulates across the range.
#[derive(Debug, Clone)]
pub struct Samples {
    range: SampleRange,
    index: u64,
}

impl Iterator for Samples {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let x = self.range.from + self.index as f64 * self.range.step;
        // NaN compares false, so it also ends the iteration
        if x <= self.range.to {
            self.index += 1;
            Some(x)
        } else {
            None
        }
    }
}
