//! Script rendering, preview sinks and clipboard exporters

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::domain::{ClipboardExporter, PreviewRenderer};
use crate::error::{ExportError, GenerateResult};

pub const SCRIPT_OPEN: &str = "<script type=\"application/ld+json\">";
pub const SCRIPT_CLOSE: &str = "</script>";

/// Pretty JSON with a 4-space indent
pub fn to_pretty_json(schema: &Value) -> GenerateResult<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    schema.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

pub fn wrap_script(json: &str) -> String {
    format!("{}\n{}\n{}", SCRIPT_OPEN, json, SCRIPT_CLOSE)
}

/// The complete artifact: pretty JSON inside the JSON-LD script tag
pub fn render_script(schema: &Value) -> GenerateResult<String> {
    Ok(wrap_script(&to_pretty_json(schema)?))
}

// ============================================================================
// Preview renderers
// ============================================================================

/// Keeps the latest script and counts renders
#[derive(Debug, Default)]
pub struct BufferPreview {
    latest: Option<String>,
    renders: usize,
}

impl BufferPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<&str> {
        self.latest.as_deref()
    }

    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl PreviewRenderer for BufferPreview {
    fn render(&mut self, script: &str) {
        self.latest = Some(script.to_string());
        self.renders += 1;
    }
}

// ============================================================================
// Clipboard exporters
// ============================================================================

/// In-process clipboard
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardExporter for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ExportError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Writes the exported text to a file, replacing its contents
#[derive(Debug, Clone)]
pub struct FileExporter {
    path: PathBuf,
}

impl FileExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ClipboardExporter for FileExporter {
    fn write_text(&mut self, text: &str) -> Result<(), ExportError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut file = std::fs::File::create(&self.path)?;
        file.write_all(text.as_bytes())?;
        tracing::info!("Exported {} bytes to {}", text.len(), self.path.display());
        Ok(())
    }
}

// ============================================================================
// Copy feedback
// ============================================================================

/// Copy button label that reads "Copied!" for a short window after a copy
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    label: String,
    copied_label: String,
    window: Duration,
    copied_at: Option<Instant>,
}

impl CopyFeedback {
    pub fn new(label: impl Into<String>, copied_label: impl Into<String>, window: Duration) -> Self {
        Self {
            label: label.into(),
            copied_label: copied_label.into(),
            window,
            copied_at: None,
        }
    }

    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn label(&self, now: Instant) -> &str {
        match self.copied_at {
            Some(at) if now.saturating_duration_since(at) < self.window => &self.copied_label,
            _ => &self.label,
        }
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new("Copy", "Copied!", Duration::from_secs(2))
    }
}
