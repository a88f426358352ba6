//! Document exporter adapters

mod pdf;

pub use pdf::PdfExporter;
