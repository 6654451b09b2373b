//! Animation frame driver.
//!
//! Frames only flow while something is animating; an idle UI sleeps on input.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Sends `make()` on the event channel once per frame interval while running.
///
/// Stopping or dropping the ticker aborts its task, so no frame can arrive
/// after the modal it was driving is gone.
pub struct FrameTicker<T> {
    tx: UnboundedSender<T>,
    make: fn() -> T,
    interval: Duration,
    handle: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> FrameTicker<T> {
    pub fn new(tx: UnboundedSender<T>, frame_rate: u32, make: fn() -> T) -> Self {
        let interval = Duration::from_secs(1) / frame_rate.max(1);
        Self {
            tx,
            make,
            interval,
            handle: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Start or stop the ticker to match `animating`.
    pub fn sync(&mut self, animating: bool) {
        if animating {
            self.start();
        } else {
            self.stop();
        }
    }

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        let tx = self.tx.clone();
        let make = self.make;
        let period = self.interval();
        tracing::trace!(?period, "frame ticker started");
        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if tx.send(make()).is_err() {
                    break;
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::trace!("frame ticker stopped");
        }
    }
}

impl<T> Drop for FrameTicker<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use tokio::sync::mpsc::error::TryRecvError;

    fn drain(rx: &mut mpsc::UnboundedReceiver<u32>) -> usize {
        let mut n = 0;
        while rx.try_recv().is_ok() {
            n += 1;
        }
        n
    }

    #[test]
    fn interval_follows_frame_rate() {
        let (tx, _rx) = mpsc::unbounded_channel::<u32>();
        assert_eq!(
            FrameTicker::new(tx.clone(), 50, || 0).interval(),
            Duration::from_millis(20)
        );
        assert_eq!(
            FrameTicker::new(tx, 0, || 0).interval(),
            Duration::from_secs(1)
        );
    }

    #[tokio::test]
    async fn emits_frames_while_running() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = FrameTicker::new(tx, 200, || 1u32);
        ticker.sync(true);
        assert!(ticker.is_running());

        let first = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap();
        assert_eq!(first, Some(1));
        ticker.sync(false);
        assert!(!ticker.is_running());
    }

    #[tokio::test]
    async fn stop_cancels_pending_frames() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = FrameTicker::new(tx, 200, || 1u32);
        ticker.start();
        tokio::time::sleep(Duration::from_millis(30)).await;
        ticker.stop();

        tokio::time::sleep(Duration::from_millis(20)).await;
        drain(&mut rx);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test]
    async fn drop_cancels_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = FrameTicker::new(tx, 200, || 1u32);
        ticker.start();
        drop(ticker);

        tokio::time::sleep(Duration::from_millis(20)).await;
        drain(&mut rx);
        // The aborted task dropped its sender, so the channel is closed.
        assert_eq!(rx.try_recv(), Err(TryRecvError::Disconnected));
    }
}
