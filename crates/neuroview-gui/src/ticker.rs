use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use neuroview_core::consts::SLICE_TICK_MILLIS;

use crate::messages::WorkerResult;

/// Cancelable slice-advance ticker.
///
/// One ticker exists per `play()`; pausing (or dropping the viewer) cancels
/// it synchronously via the shared flag. A tick message already in the
/// channel when cancellation happens is ignored by the app, because the
/// playback state machine no-ops ticks while stopped — so no tick can
/// mutate state after teardown.
pub struct SliceTicker {
    cancel: Arc<AtomicBool>,
}

impl SliceTicker {
    /// Spawn the ticker thread; it sends [`WorkerResult::SliceTick`] every
    /// tick period until canceled.
    pub fn spawn(result_tx: mpsc::Sender<WorkerResult>, ctx: egui::Context) -> Self {
        let cancel = Arc::new(AtomicBool::new(false));
        let cancel_flag = cancel.clone();

        std::thread::Builder::new()
            .name("neuroview-ticker".into())
            .spawn(move || {
                loop {
                    std::thread::sleep(Duration::from_millis(SLICE_TICK_MILLIS));
                    if cancel_flag.load(Ordering::Relaxed) {
                        break;
                    }
                    if result_tx.send(WorkerResult::SliceTick).is_err() {
                        break;
                    }
                    ctx.request_repaint();
                }
            })
            .expect("Failed to spawn ticker thread");

        Self { cancel }
    }

    /// Cancel the ticker. Idempotent; safe to call more than once.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}

impl Drop for SliceTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}
