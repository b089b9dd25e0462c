//! Render and export boundaries for statchart.
//!
//! The chart core stays backend-agnostic: [`StatChart`] paints against
//! the [`Canvas`] trait, and image export goes through [`ExportAdapter`].
//! [`RecordingCanvas`] and [`NullExporter`] are the test doubles.

mod canvas;
mod chart;
mod export;

pub use canvas::{Canvas, DrawCommand, RecordingCanvas, TextStyle};
pub use chart::StatChart;
pub use export::{
    download_filename, export_chart, CapturedImage, ChartExport, ExportAdapter, ExportError,
    NullExporter,
};
