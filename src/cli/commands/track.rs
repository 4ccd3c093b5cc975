use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timer::TimerController;
use crate::errors::AppResult;
use crate::store::persist;
use crate::ui::adapter::UiAdapter;
use crate::ui::console::ConsoleUi;
use crate::ui::messages::{info, success};
use std::io;
use std::sync::Arc;

/// Run a live timing session: the elapsed time is redrawn every second
/// until the user presses Enter, then the interval is recorded.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Track { rate } = cmd {
        let (mut store_persist, mut store) = persist::open(cfg)?;

        let rate = match rate {
            Some(r) => *r,
            None => store_persist.load_rate()?,
        };

        let ui: Arc<dyn UiAdapter> = Arc::new(ConsoleUi);
        let mut timer = TimerController::new(Arc::clone(&ui));
        timer.start();

        info("Session started — press Enter to stop, or 'q' to discard.");

        loop {
            let mut line = String::new();
            let n = io::stdin().read_line(&mut line).unwrap_or(0);
            if n > 0 && line.trim().eq_ignore_ascii_case("q") {
                if timer.guard_unload() {
                    timer.reset();
                    println!();
                    info("Session discarded, nothing recorded.");
                    return Ok(());
                }
                // declined: the session keeps running
                continue;
            }
            break;
        }

        if let Some(entry) = timer.stop(&mut store, rate)? {
            store_persist.save_entries(store.list_entries())?;
            println!();
            success(format!(
                "Recorded {} → {} ({:.2} h, {:.2} charged).",
                entry.start_time, entry.end_time, entry.hours, entry.price
            ));
        }
    }
    Ok(())
}
