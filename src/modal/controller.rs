use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::time::Duration;

use super::overlay::{ModalLayout, ModalView};
use super::transition::{
    Phase, TransitionConfig, TransitionEngine, TransitionFrame, BASE_TRANSITION,
};
use super::{Dismiss, ModalError};

/// Caller-facing lifecycle of a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Unmounted,
    Entering,
    Entered,
    Exiting,
}

impl From<Phase> for ModalState {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Entering => ModalState::Entering,
            Phase::Entered => ModalState::Entered,
            Phase::Exiting => ModalState::Exiting,
            Phase::Exited => ModalState::Unmounted,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalProps {
    /// Esc and clicks outside the panel request a dismiss when set.
    pub allow_escape: bool,
    /// Panel width cap in pixels (600 when unset).
    pub max_width: Option<u16>,
    /// Panel title.
    pub label: Option<String>,
    /// Rows the content wants inside the panel padding.
    pub content_height: u16,
}

impl Default for ModalProps {
    fn default() -> Self {
        Self {
            allow_escape: true,
            max_width: None,
            label: None,
            content_height: 0,
        }
    }
}

/// How the modal reacted to an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Not for the modal; hand it to the content or the screen below.
    Ignored,
    /// Swallowed without side effects.
    Consumed,
    /// The dismiss handle was invoked.
    Dismissed,
}

#[derive(Debug, Clone)]
pub struct ModalController {
    props: ModalProps,
    engine: TransitionEngine,
}

impl ModalController {
    pub fn new(props: ModalProps, transition: TransitionConfig) -> Self {
        Self {
            props,
            engine: TransitionEngine::new(BASE_TRANSITION, transition),
        }
    }

    pub fn is_on(&self) -> bool {
        self.engine.is_on()
    }

    pub fn set_on(&mut self, on: bool) {
        let before = self.state();
        if self.engine.set_on(on) {
            tracing::debug!(?before, after = ?self.state(), on, "modal retargeted");
        }
    }

    pub fn state(&self) -> ModalState {
        self.engine.phase().into()
    }

    pub fn frame(&self) -> TransitionFrame {
        self.engine.frame()
    }

    pub fn is_visible(&self) -> bool {
        self.frame().is_rendered()
    }

    pub fn is_animating(&self) -> bool {
        self.engine.phase().is_animating()
    }

    pub fn advance(&mut self, dt: Duration) -> TransitionFrame {
        let before = self.state();
        let frame = self.engine.advance(dt);
        let after = self.state();
        if before != after {
            tracing::debug!(?before, ?after, "modal transition settled");
        }
        frame
    }

    /// Where to draw, or `Hidden` when nothing should be drawn at all.
    pub fn view(&self, area: Rect) -> ModalView {
        if !self.is_visible() {
            return ModalView::Hidden;
        }
        ModalView::Visible(ModalLayout::compute(area, &self.props, self.frame()))
    }

    /// Route an input event through the backdrop.
    ///
    /// A failing `close` is returned to the caller untouched; the modal keeps
    /// its state, so the next trigger asks again.
    pub fn handle_event<D>(
        &self,
        event: &Event,
        area: Rect,
        close: &mut D,
    ) -> Result<EventOutcome, ModalError>
    where
        D: Dismiss + ?Sized,
    {
        let ModalView::Visible(layout) = self.view(area) else {
            return Ok(EventOutcome::Ignored);
        };

        let escape_trigger = match event {
            Event::Key(key) => key.kind == KeyEventKind::Press && key.code == KeyCode::Esc,
            Event::Mouse(mouse) => {
                mouse.kind == MouseEventKind::Down(MouseButton::Left)
                    && !layout.panel.contains(Position::new(mouse.column, mouse.row))
            }
            _ => false,
        };

        if !escape_trigger {
            return Ok(EventOutcome::Ignored);
        }
        if !self.props.allow_escape || !self.is_on() {
            return Ok(EventOutcome::Consumed);
        }
        self.request_close(close)?;
        Ok(EventOutcome::Dismissed)
    }

    /// Explicit dismiss from inside the content; ignores `allow_escape`.
    pub fn request_close<D>(&self, close: &mut D) -> Result<(), ModalError>
    where
        D: Dismiss + ?Sized,
    {
        tracing::info!(label = ?self.props.label, "modal dismiss requested");
        close.dismiss()
    }
}
