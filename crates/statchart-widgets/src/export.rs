//! The image export boundary.
//!
//! Capture is a side-effecting contract: hide the interactive controls,
//! rasterize the chart region, restore the controls. [`export_chart`]
//! owns that sequence so `end_capture` runs even when the capture itself
//! fails, and derives the download filename from the character name.

use serde::{Deserialize, Serialize};
use statchart_core::Rect;

/// A rasterized capture of the chart region, encoded as a PNG data URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedImage {
    /// `data:image/png;base64,...` payload driving the client-side
    /// download.
    pub data_url: String,
}

/// A finished export: the image plus its download filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartExport {
    /// Sanitized download filename.
    pub filename: String,
    /// The captured image.
    pub image: CapturedImage,
}

/// Error surface of the export boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The backend failed to rasterize the region.
    CaptureFailed(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CaptureFailed(reason) => write!(f, "capture failed: {reason}"),
        }
    }
}

impl std::error::Error for ExportError {}

/// Screenshot backend for the rendered chart region.
///
/// `begin_capture` and `end_capture` bracket every capture: the first
/// hides interactive controls and expands the region for rendering, the
/// second restores the original state. Implementations must tolerate
/// `end_capture` after a failed capture.
pub trait ExportAdapter {
    /// Hide controls and prepare the region for rasterization.
    fn begin_capture(&mut self);

    /// Rasterize the region to a PNG data URL.
    fn capture(&mut self, region: Rect) -> Result<CapturedImage, ExportError>;

    /// Restore the UI state changed by `begin_capture`.
    fn end_capture(&mut self);
}

/// Run one export: bracket the capture with the begin/end hooks and name
/// the download after the character.
pub fn export_chart(
    adapter: &mut dyn ExportAdapter,
    region: Rect,
    character_name: &str,
) -> Result<ChartExport, ExportError> {
    adapter.begin_capture();
    let result = adapter.capture(region);
    adapter.end_capture();

    let image = result?;
    Ok(ChartExport {
        filename: download_filename(character_name),
        image,
    })
}

/// Download filename for a character: whitespace runs collapse to `_`,
/// empty names become `Unnamed`.
#[must_use]
pub fn download_filename(character_name: &str) -> String {
    let cleaned: Vec<&str> = character_name.split_whitespace().collect();
    let name = if cleaned.is_empty() {
        "Unnamed".to_string()
    } else {
        cleaned.join("_")
    };
    format!("{name}_CharacterChart.png")
}

/// Export adapter that captures nothing. Records hook calls so tests can
/// assert the bracket contract.
#[derive(Debug, Default)]
pub struct NullExporter {
    /// Number of `begin_capture` calls.
    pub begun: usize,
    /// Number of `end_capture` calls.
    pub ended: usize,
    /// When set, `capture` fails.
    pub fail_next: bool,
}

impl NullExporter {
    /// Create a new null exporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExportAdapter for NullExporter {
    fn begin_capture(&mut self) {
        self.begun += 1;
    }

    fn capture(&mut self, _region: Rect) -> Result<CapturedImage, ExportError> {
        if self.fail_next {
            return Err(ExportError::CaptureFailed("null backend".to_string()));
        }
        Ok(CapturedImage {
            data_url: "data:image/png;base64,".to_string(),
        })
    }

    fn end_capture(&mut self) {
        self.ended += 1;
    }
}
