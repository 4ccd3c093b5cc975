//! Start/stop state machine governing the active timing session.

use crate::core::math::Elapsed;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::session::Session;
use crate::store::EntryStore;
use crate::ui::adapter::UiAdapter;
use crate::utils::time::now;
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Owned handle of the recurring display tick.
/// The session holds at most one of these at a time; cancelling joins the
/// task, so no tick can fire once `cancel` has returned.
#[derive(Debug)]
pub struct TickHandle {
    stop_tx: Sender<()>,
    thread: JoinHandle<()>,
}

impl TickHandle {
    fn spawn(started_at: DateTime<Local>, ui: Arc<dyn UiAdapter>) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel();
        let thread = thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(TICK_PERIOD) {
                    Err(RecvTimeoutError::Timeout) => {
                        let delta = (now() - started_at).num_milliseconds();
                        ui.on_tick(Elapsed::from_millis(delta));
                    }
                    // stop requested, or the controller went away
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });
        Self { stop_tx, thread }
    }

    fn cancel(self) {
        let _ = self.stop_tx.send(());
        let _ = self.thread.join();
    }
}

/// Two states: Idle (no session, no tick) and Running (session + one tick).
pub struct TimerController {
    session: Session,
    ui: Arc<dyn UiAdapter>,
}

impl TimerController {
    pub fn new(ui: Arc<dyn UiAdapter>) -> Self {
        Self {
            session: Session::default(),
            ui,
        }
    }

    pub fn is_running(&self) -> bool {
        self.session.is_active()
    }

    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.session.started_at()
    }

    /// Elapsed time of the running session, if any.
    pub fn elapsed(&self) -> Option<Elapsed> {
        self.session
            .started_at()
            .map(|s| Elapsed::from_millis((now() - s).num_milliseconds()))
    }

    /// Idle → Running. Calling start on a session that is already running is
    /// a no-op: the original start instant and the existing tick are kept,
    /// and no second tick is ever scheduled.
    pub fn start(&mut self) {
        if self.session.is_active() {
            return;
        }
        let started_at = now();
        self.session.started_at = Some(started_at);
        self.session.tick = Some(TickHandle::spawn(started_at, Arc::clone(&self.ui)));
    }

    /// Running → Idle, recording the finished interval as an entry.
    /// Returns `None` when no session is running. An invalid rate is
    /// rejected before the session is touched, so the timer keeps running.
    pub fn stop(&mut self, store: &mut EntryStore, rate: f64) -> AppResult<Option<Entry>> {
        let Some(started_at) = self.session.started_at else {
            return Ok(None);
        };
        if rate < 0.0 {
            return Err(AppError::InvalidRate(rate));
        }

        if let Some(tick) = self.session.tick.take() {
            tick.cancel();
        }
        let end = now();
        self.session.started_at = None;

        let entry = store.add_entry(started_at, end, rate)?;
        Ok(Some(entry))
    }

    /// Cancel any running session without creating an entry.
    /// Idle → Idle is a harmless no-op.
    pub fn reset(&mut self) {
        if let Some(tick) = self.session.tick.take() {
            tick.cancel();
        }
        self.session.started_at = None;
    }

    /// Before-unload guard: while Running, the surrounding environment must
    /// ask before tearing the widget down. Declining keeps the session
    /// running and unchanged.
    pub fn guard_unload(&self) -> bool {
        if !self.is_running() {
            return true;
        }
        self.ui
            .confirm("A timing session is still running. Leave anyway?")
    }
}

impl Drop for TimerController {
    fn drop(&mut self) {
        self.reset();
    }
}
