//! Document model types for tabular content representation.
//!
//! This module defines the intermediate representation (IR) that bridges
//! delimited-text parsing and document rendering. All cell values are kept
//! as strings end-to-end; nothing is coerced to numbers on the way through.

mod document;
mod table;

pub use document::Document;
pub use table::{Table, TableRow};
