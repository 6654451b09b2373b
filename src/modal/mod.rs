//! Animated modal overlay: a backdrop plus a floating panel whose mount and
//! unmount are driven by an enter/exit transition.

pub mod controller;
pub mod dismiss;
pub mod overlay;
pub mod ticker;
pub mod transition;

pub use controller::{EventOutcome, ModalController, ModalProps, ModalState};
pub use dismiss::{Dismiss, DismissSender};
pub use overlay::ModalView;
pub use ticker::FrameTicker;

/// Horizontal pixels covered by one terminal column.
pub const PX_PER_COL: f64 = 8.0;
/// Vertical pixels covered by one terminal row.
pub const PX_PER_ROW: f64 = 16.0;

pub fn px_to_cols(px: f64) -> u16 {
    (px / PX_PER_COL).round().max(0.0) as u16
}

pub fn px_to_rows(px: f64) -> i32 {
    (px / PX_PER_ROW).round() as i32
}

#[derive(Debug, thiserror::Error)]
pub enum ModalError {
    #[error("dismiss callback failed: {0}")]
    Dismiss(anyhow::Error),
    #[error("dismiss channel closed")]
    ChannelClosed,
}
