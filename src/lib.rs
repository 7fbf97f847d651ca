//! # csv2docx
//!
//! Convert delimited tabular text into a styled Word (.docx) table, with a
//! transport-safe base64 copy of the document bytes.
//!
//! The pipeline has three stages: parse the text block into rows and
//! columns (first record is the header), render the rows into a bordered
//! table with a bold header inside a titled document, then write the
//! document bytes and their base64 encoding to disk.
//!
//! ## Quick Start
//!
//! ```no_run
//! use csv2docx::{convert_str, write_artifacts, RenderOptions};
//! use std::path::Path;
//!
//! fn main() -> csv2docx::Result<()> {
//!     let bytes = convert_str(
//!         "Name,Age\nAlice,30\nBob,25\n",
//!         "People",
//!         &RenderOptions::default(),
//!     )?;
//!
//!     let artifacts = write_artifacts(
//!         &bytes,
//!         Path::new("people.docx"),
//!         Path::new("people.docx.b64"),
//!     )?;
//!     println!("{}", artifacts.document_path.display());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Guarantees
//!
//! - Cell and row order are preserved exactly; every value stays a string.
//! - A record whose field count differs from the header is a fatal error,
//!   raised before anything is rendered.
//! - Empty fields become empty table cells, never missing cells.
//! - Decoding the base64 output reproduces the document bytes exactly.

pub mod encode;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use encode::{to_base64, write_artifacts, Artifacts};
pub use error::{Error, Result};
pub use model::{Document, Table, TableRow};
pub use parser::{ParseOptions, TableParser};
pub use render::{to_docx, RenderOptions};

/// Parse a delimited text block with default options.
///
/// The first record is treated as the column header.
///
/// # Example
///
/// ```
/// let table = csv2docx::parse_str("a,b\n1,2\n").unwrap();
/// assert_eq!(table.row_count(), 2);
/// ```
pub fn parse_str(text: &str) -> Result<Table> {
    TableParser::new().parse_str(text)
}

/// Parse a delimited text block and render it to Word bytes in one call.
///
/// # Example
///
/// ```
/// use csv2docx::RenderOptions;
///
/// let bytes = csv2docx::convert_str(
///     "a,b\n1,2\n",
///     "Numbers",
///     &RenderOptions::default(),
/// ).unwrap();
/// assert_eq!(&bytes[0..2], b"PK");
/// ```
pub fn convert_str(text: &str, title: &str, options: &RenderOptions) -> Result<Vec<u8>> {
    let table = parse_str(text)?;
    let document = Document::new(title, table);
    render::to_docx(&document, options)
}

/// Builder for parsing and rendering tabular text.
///
/// # Example
///
/// ```
/// use csv2docx::Csv2Docx;
///
/// let bytes = Csv2Docx::new()
///     .with_delimiter(b';')
///     .with_header_font_size(24)
///     .parse("a;b\n1;2\n")?
///     .to_docx("Numbers")?;
/// # Ok::<(), csv2docx::Error>(())
/// ```
pub struct Csv2Docx {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Csv2Docx {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.parse_options = self.parse_options.with_delimiter(delimiter);
        self
    }

    /// Set the heading font size in half-points.
    pub fn with_heading_size(mut self, size: usize) -> Self {
        self.render_options = self.render_options.with_heading_size(size);
        self
    }

    /// Set the header-row font size in half-points.
    pub fn with_header_font_size(mut self, size: usize) -> Self {
        self.render_options = self.render_options.with_header_font_size(size);
        self
    }

    /// Parse a text block and return a result wrapper.
    pub fn parse(self, text: &str) -> Result<Csv2DocxResult> {
        let table = TableParser::with_options(self.parse_options).parse_str(text)?;
        Ok(Csv2DocxResult {
            table,
            render_options: self.render_options,
        })
    }
}

impl Default for Csv2Docx {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a tabular text block.
pub struct Csv2DocxResult {
    /// The parsed table
    pub table: Table,
    /// Render options to use
    render_options: RenderOptions,
}

impl Csv2DocxResult {
    /// Render to Word bytes under the given title.
    pub fn to_docx(&self, title: &str) -> Result<Vec<u8>> {
        let document = Document::new(title, self.table.clone());
        render::to_docx(&document, &self.render_options)
    }

    /// Get the parsed table.
    pub fn table(&self) -> &Table {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_options() {
        let builder = Csv2Docx::new()
            .with_delimiter(b'\t')
            .with_heading_size(40)
            .with_header_font_size(22);

        assert_eq!(builder.parse_options.delimiter, b'\t');
        assert_eq!(builder.render_options.heading_size, 40);
        assert_eq!(builder.render_options.header_font_size, 22);
    }

    #[test]
    fn test_builder_parse_and_render() {
        let result = Csv2Docx::new().parse("a,b\n1,2\n").unwrap();
        assert_eq!(result.table().row_count(), 2);

        let bytes = result.to_docx("Numbers").unwrap();
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_builder_parse_ragged_input() {
        let result = Csv2Docx::new().parse("a,b\n1\n");
        assert!(matches!(result, Err(Error::RaggedRow { .. })));
    }

    #[test]
    fn test_convert_str_empty_input() {
        let result = convert_str("", "Empty", &RenderOptions::default());
        assert!(matches!(result, Err(Error::EmptyInput)));
    }
}
