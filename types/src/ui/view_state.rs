//! View state for rendering.
//!
//! Groups the state related to scrolling and display, separating it from
//! the controllers that drive application logic.

use std::time::Duration;

use super::scroll::ScrollEffect;

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

/// Scroll position and metrics for the section viewport.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    offset: u16,
    content_height: u16,
    viewport_height: u16,
    effect: Option<ScrollEffect>,
    ui_options: UiOptions,
}

impl ViewState {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            ui_options,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn offset(&self) -> u16 {
        self.offset
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Record the rendered content and viewport heights, clamping the
    /// current offset into the new range.
    pub fn set_metrics(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Begin a glide to `target`. With reduced motion (or a zero duration)
    /// the offset jumps in the same call.
    pub fn scroll_to(&mut self, target: u16, duration: Duration) {
        let target = target.min(self.max_offset());
        if self.ui_options.reduced_motion || duration.is_zero() {
            self.offset = target;
            self.effect = None;
            return;
        }
        self.effect = Some(ScrollEffect::new(self.offset, target, duration));
    }

    /// Manual scroll by whole lines. Cancels any in-flight glide.
    pub fn scroll_by(&mut self, lines: i32) {
        self.effect = None;
        let next = i64::from(self.offset) + i64::from(lines);
        self.offset = next.clamp(0, i64::from(self.max_offset())) as u16;
    }

    /// Advance the glide, if any, and update the offset from it.
    pub fn advance(&mut self, delta: Duration) {
        let max_offset = self.max_offset();
        if let Some(effect) = &mut self.effect {
            effect.advance(delta);
            self.offset = effect.position().min(max_offset);
            if effect.is_finished() {
                self.effect = None;
            }
        }
    }

    /// True while a glide is in flight.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.effect.is_some()
    }

    /// Target of the in-flight glide, if any.
    #[must_use]
    pub fn scroll_target(&self) -> Option<u16> {
        self.effect.as_ref().map(ScrollEffect::target)
    }
}
