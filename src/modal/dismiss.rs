use tokio::sync::mpsc::UnboundedSender;

use super::ModalError;

/// Receiver of dismiss requests raised by a modal.
///
/// The modal never closes itself: it asks its owner to, and the owner flips
/// `on` when it agrees.
pub trait Dismiss {
    fn dismiss(&mut self) -> Result<(), ModalError>;
}

impl<F> Dismiss for F
where
    F: FnMut() -> anyhow::Result<()>,
{
    fn dismiss(&mut self) -> Result<(), ModalError> {
        self().map_err(ModalError::Dismiss)
    }
}

/// Posts a fixed message on an event channel for every dismiss request.
#[derive(Debug, Clone)]
pub struct DismissSender<T> {
    tx: UnboundedSender<T>,
    message: T,
}

impl<T: Clone> DismissSender<T> {
    pub fn new(tx: UnboundedSender<T>, message: T) -> Self {
        Self { tx, message }
    }
}

impl<T: Clone> Dismiss for DismissSender<T> {
    fn dismiss(&mut self) -> Result<(), ModalError> {
        self.tx
            .send(self.message.clone())
            .map_err(|_| ModalError::ChannelClosed)
    }
}
