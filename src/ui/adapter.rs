//! Contract between the core and whatever renders it.
//! The core never touches presentation directly; everything it needs from
//! the surrounding UI goes through this trait.

use crate::core::math::Elapsed;
use crate::models::entry::Entry;

/// Raw field values of the manual entry form, before any validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInterval {
    pub start: String,
    pub end: String,
    pub rate: Option<f64>,
}

/// The four operations the core relies on. Implementations must be callable
/// from the tick task, hence `Send + Sync`.
pub trait UiAdapter: Send + Sync {
    /// Render one entry row (start, end, rate, hours, price).
    fn render_row(&self, entry: &Entry);

    /// Read the raw values of the manual entry form.
    fn read_form_interval(&self) -> FormInterval;

    /// Synchronous yes/no prompt, used for deletions, full reset and the
    /// leave-while-running guard.
    fn confirm(&self, message: &str) -> bool;

    /// Called once per second while a session is running.
    fn on_tick(&self, elapsed: Elapsed);
}
