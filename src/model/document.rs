//! Document-level types.

use super::Table;
use serde::{Deserialize, Serialize};

/// A titled container holding one table, ready for rendering.
///
/// The document is built once from parsed input and is not mutated after
/// it has been serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document title, rendered as a heading above the table
    pub title: String,

    /// The table content
    pub table: Table,
}

impl Document {
    /// Create a new document.
    pub fn new(title: impl Into<String>, table: Table) -> Self {
        Self {
            title: title.into(),
            table,
        }
    }

    /// Get the number of table rows (header included).
    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    /// Get the number of table columns.
    pub fn column_count(&self) -> usize {
        self.table.column_count()
    }

    /// Check if the document has any table content.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Get plain text content of the document.
    pub fn plain_text(&self) -> String {
        format!("{}\n{}", self.title, self.table.plain_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableRow;

    #[test]
    fn test_document_new() {
        let doc = Document::new("水质表", Table::new());
        assert_eq!(doc.title, "水质表");
        assert!(doc.is_empty());
        assert_eq!(doc.row_count(), 0);
    }

    #[test]
    fn test_document_counts() {
        let mut table = Table::with_header(1);
        table.add_row(TableRow::header(vec!["A".into(), "B".into(), "C".into()]));
        table.add_row(TableRow::from_strings(["1", "2", "3"]));

        let doc = Document::new("Report", table);
        assert_eq!(doc.row_count(), 2);
        assert_eq!(doc.column_count(), 3);
        assert!(doc.plain_text().starts_with("Report\n"));
    }
}
