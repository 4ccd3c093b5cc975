use crate::core::timer::TickHandle;
use chrono::{DateTime, Local};

/// The transient active timer run. Never persisted.
///
/// Invariant: `tick` is Some if and only if `started_at` is Some — a running
/// session always owns exactly one outstanding display tick, an idle one
/// owns none. The controller in `core::timer` is the only writer.
#[derive(Debug, Default)]
pub struct Session {
    pub(crate) started_at: Option<DateTime<Local>>,
    pub(crate) tick: Option<TickHandle>,
}

impl Session {
    pub fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.started_at
    }
}
