use crossterm::event::Event as CrosstermEvent;
use std::time::Instant;

/// Modals owned by the application, used to route dismiss requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalId {
    MobileMenu,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Animation frame from the frame ticker
    Frame(Instant),

    /// A modal asked its owner to close it
    Dismiss(ModalId),
}
