//! Value tables
//!
//! A table is a header naming the function followed by one row per sample
//! point. Every row shows `describe_at(x)`; the bare value is only shown
//! where the function is defined, otherwise the row says it is not
//! computable.

use crate::error::TableError;
use crate::format::format_number;
use crate::function::RealFunction;
use crate::range::SampleRange;
use log::{debug, error, trace};
use std::fmt;
use std::io::{self, Write};

/// Shown in place of the value outside the domain
pub const NOT_COMPUTABLE: &str = "is not computable";

/// Underline printed below the table header
pub const HEADER_RULE: &str = "=========================";

/// One line of a value table
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub x: f64,
    pub description: String,
    /// `None` when the function is not defined at `x`
    pub value: Option<f64>,
}

impl Row {
    /// Sample `f` at `x`
    pub fn sample<F: RealFunction + ?Sized>(f: &F, x: f64) -> Self {
        let value = if f.is_defined_at(x) {
            Some(f.evaluate(x))
        } else {
            None
        };

        Self {
            x,
            description: f.describe_at(x),
            value,
        }
    }

    pub fn is_computable(&self) -> bool {
        self.value.is_some()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) = ", self.description, format_number(self.x))?;
        match self.value {
            Some(value) => write!(f, "{}", format_number(value)),
            None => write!(f, "{}", NOT_COMPUTABLE),
        }
    }
}

/// Write the value table of `f` over `range` to `out`
///
/// The range is not validated; see `SampleRange::new` for what happens with
/// a non-positive step.
pub fn write_table<W, F>(out: &mut W, f: &F, range: SampleRange) -> Result<(), TableError>
where
    W: Write + ?Sized,
    F: RealFunction + ?Sized,
{
    debug!(
        "tabulating '{}' over [{}, {}] step {}",
        f.describe(),
        range.from,
        range.to,
        range.step
    );

    writeln!(out, "Value table of function: {}", f.describe())?;
    writeln!(out, "{}", HEADER_RULE)?;

    for x in range {
        let row = Row::sample(f, x);
        trace!("x = {}: computable = {}", x, row.is_computable());
        writeln!(out, "{}", row)?;
    }

    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Print the value table of `f` from `from` to `to` (inclusive) to stdout
///
/// Output failures are logged and otherwise ignored.
pub fn tabulate<F: RealFunction + ?Sized>(f: &F, from: f64, to: f64, step: f64) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = write_table(&mut out, f, SampleRange::new(from, to, step)) {
        error!("{}", e);
    }
}
