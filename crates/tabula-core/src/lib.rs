//! Tabula Core
//!
//! Composable real functions of one variable and the value tables printed
//! from them.
//!
//! # Modules
//!
//! - `function`: The `RealFunction` trait and the leaf functions
//! - `product`: Pointwise product of two owned functions
//! - `range`: Stepped sampling of a closed interval
//! - `format`: Number rendering used by table rows
//! - `tabulator`: Table rows and the table writer
//! - `error`: Error types for range validation and output

pub mod error;
pub mod format;
pub mod function;
pub mod product;
pub mod range;
pub mod tabulator;

// Re-export main types
pub use error::TableError;
pub use function::{RealFunction, Square, SquareRoot};
pub use product::Product;
pub use range::{SampleRange, Samples};
pub use tabulator::{tabulate, write_table, Row};
