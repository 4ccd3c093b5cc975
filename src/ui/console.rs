//! Console implementation of the UI adapter: table-style rows, y/N prompts
//! on stdin and a live elapsed line that rewrites itself in place.

use crate::core::math::Elapsed;
use crate::models::entry::Entry;
use crate::ui::adapter::{FormInterval, UiAdapter};
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Column widths shared by `render_row` and the `list` table.
pub const ID_W: usize = 8;
pub const TIME_W: usize = 17;
pub const NUM_W: usize = 8;
pub const PRICE_W: usize = 10;

#[derive(Debug, Default)]
pub struct ConsoleUi;

impl UiAdapter for ConsoleUi {
    fn render_row(&self, entry: &Entry) {
        println!(
            "{:<idw$} {:<tw$} {:<tw$} {:>nw$.2} {:>nw$.2} {:>pw$.2}",
            entry.short_id(),
            entry.start_time,
            entry.end_time,
            entry.hourly_rate,
            entry.hours,
            entry.price,
            idw = ID_W,
            tw = TIME_W,
            nw = NUM_W,
            pw = PRICE_W,
        );
    }

    fn read_form_interval(&self) -> FormInterval {
        let start = prompt_line("Start (YYYY-MM-DDTHH:mm): ");
        let end = prompt_line("End   (YYYY-MM-DDTHH:mm): ");
        let raw_rate = prompt_line("Hourly rate (empty = saved rate): ");
        let rate = match raw_rate.parse() {
            Ok(r) => Some(r),
            Err(_) => {
                if !raw_rate.is_empty() {
                    warning(format!(
                        "Unrecognized rate '{raw_rate}', using the saved rate instead."
                    ));
                }
                None
            }
        };
        FormInterval { start, end, rate }
    }

    fn confirm(&self, message: &str) -> bool {
        warning(message);
        print!("Confirm [y/N]: ");
        let _ = io::stdout().flush();

        let mut s = String::new();
        if io::stdin().read_line(&mut s).is_ok() {
            matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
        } else {
            false
        }
    }

    fn on_tick(&self, elapsed: Elapsed) {
        print!("\r⏱  {elapsed} ");
        let _ = io::stdout().flush();
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut s = String::new();
    let _ = io::stdin().read_line(&mut s);
    s.trim().to_string()
}
