//! Rendering module for serializing documents to Word format.

mod docx;
mod options;

pub use docx::to_docx;
pub use options::RenderOptions;
