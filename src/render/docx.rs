//! Word document generation with `docx-rs`.

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};

use crate::error::{Error, Result};
use crate::model::Document;
use crate::render::RenderOptions;

/// Render a document to Word (.docx) bytes.
///
/// The title is rendered as a bold heading above the table. Header-row
/// cells are written bold at the configured size; data cells are written
/// verbatim, with empty strings kept as empty cells so every row spans the
/// full column count. All cell borders are drawn (grid style).
///
/// Output bytes depend only on the document content and options; no
/// timestamps or generated IDs are embedded.
pub fn to_docx(document: &Document, options: &RenderOptions) -> Result<Vec<u8>> {
    let mut docx = Docx::new();

    // Heading -- bold, one size step below a title
    let heading = Run::new()
        .add_text(document.title.as_str())
        .bold()
        .size(options.heading_size);
    docx = docx.add_paragraph(Paragraph::new().add_run(heading));

    // Spacer paragraph
    docx = docx.add_paragraph(Paragraph::new());

    let mut table_rows = Vec::with_capacity(document.table.row_count());
    for row in &document.table.rows {
        let cells: Vec<TableCell> = row
            .cells
            .iter()
            .map(|text| {
                let mut run = Run::new().add_text(text.as_str());
                if row.is_header {
                    run = run.bold().size(options.header_font_size);
                }
                TableCell::new().add_paragraph(Paragraph::new().add_run(run))
            })
            .collect();
        table_rows.push(TableRow::new(cells));
    }
    docx = docx.add_table(Table::new(table_rows));

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| Error::Render(format!("failed to pack DOCX: {e}")))?;

    let bytes = buf.into_inner();
    log::debug!(
        "rendered {} rows x {} columns into {} bytes",
        document.row_count(),
        document.column_count(),
        bytes.len()
    );

    Ok(bytes)
}
