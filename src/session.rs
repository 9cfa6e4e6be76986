//! Authoring Session
//!
//! Owns the form state and drives the preview: the initial render happens on
//! construction, type switches render immediately, edits are debounced. Time
//! is passed in by the caller, so there are no timers or threads here.

use std::time::{Duration, Instant};

use crate::config::Settings;
use crate::domain::{ClipboardExporter, PreviewRenderer, SchemaType};
use crate::error::{ExportError, GenerateResult};
use crate::forms::FormState;
use crate::mapper::SchemaMapper;
use crate::preview::CopyFeedback;

/// Deadline-based debounce. Each schedule pushes the deadline out.
#[derive(Debug, Clone)]
pub struct PreviewScheduler {
    debounce: Duration,
    due: Option<Instant>,
}

impl PreviewScheduler {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            due: None,
        }
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn schedule(&mut self, now: Instant) {
        self.due = Some(now + self.debounce);
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// Clear and report a deadline that has passed
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }
}

pub struct AuthoringSession<R: PreviewRenderer> {
    state: FormState,
    mapper: SchemaMapper,
    renderer: R,
    scheduler: PreviewScheduler,
    feedback: CopyFeedback,
    latest: Option<String>,
}

impl<R: PreviewRenderer> AuthoringSession<R> {
    /// Start a session and render the initial preview.
    ///
    /// A form the mapper refuses (strict policy) leaves the preview empty
    /// until it is fixed.
    pub fn new(state: FormState, settings: &Settings, renderer: R) -> Self {
        let mut session = Self {
            state,
            mapper: SchemaMapper::new(settings.mapper.clone()),
            renderer,
            scheduler: PreviewScheduler::new(settings.preview.debounce()),
            feedback: CopyFeedback::new(
                settings.clipboard.label.clone(),
                settings.clipboard.copied_label.clone(),
                settings.clipboard.feedback_window(),
            ),
            latest: None,
        };
        if let Err(e) = session.refresh() {
            tracing::warn!("Initial preview not rendered: {}", e);
        }
        session
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn schema_type(&self) -> SchemaType {
        self.state.schema_type
    }

    /// The last script handed to the renderer
    pub fn latest(&self) -> Option<&str> {
        self.latest.as_deref()
    }

    pub fn is_refresh_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Switch the visible form and render right away
    pub fn select_type(&mut self, schema_type: SchemaType) -> GenerateResult<()> {
        self.state.select(schema_type);
        self.scheduler.cancel();
        self.refresh()
    }

    /// Apply a change to the form and schedule a refresh.
    ///
    /// With a zero debounce the preview is rendered before returning.
    pub fn edit<F>(&mut self, now: Instant, change: F) -> GenerateResult<()>
    where
        F: FnOnce(&mut FormState),
    {
        change(&mut self.state);
        self.scheduler.schedule(now);
        self.tick(now).map(|_| ())
    }

    /// Render if a scheduled refresh is due. Returns whether it rendered.
    pub fn tick(&mut self, now: Instant) -> GenerateResult<bool> {
        if !self.scheduler.take_due(now) {
            return Ok(false);
        }
        self.refresh()?;
        Ok(true)
    }

    /// Regenerate from the whole form and hand the script to the renderer
    pub fn refresh(&mut self) -> GenerateResult<()> {
        let script = self.mapper.render(&self.state)?;
        self.renderer.render(&script);
        self.latest = Some(script);
        Ok(())
    }

    /// Send the latest script to the exporter, verbatim
    pub fn copy<E: ClipboardExporter>(
        &mut self,
        exporter: &mut E,
        now: Instant,
    ) -> Result<(), ExportError> {
        let script = self.latest.as_deref().ok_or(ExportError::NothingRendered)?;
        exporter.write_text(script)?;
        self.feedback.mark_copied(now);
        tracing::debug!("Copied {} schema to clipboard", self.state.schema_type);
        Ok(())
    }

    pub fn copy_label(&self, now: Instant) -> &str {
        self.feedback.label(now)
    }
}
