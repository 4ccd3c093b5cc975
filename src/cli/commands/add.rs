use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::store::persist;
use crate::ui::adapter::{FormInterval, UiAdapter};
use crate::ui::console::ConsoleUi;
use crate::ui::messages::success;

/// Record a work interval with explicit start and end times.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { start, end, rate } = cmd {
        //
        // 1. Collect the form values (arguments, or interactive prompt
        //    when start/end were omitted)
        //
        let form = match (start, end) {
            (Some(s), Some(e)) => FormInterval {
                start: s.clone(),
                end: e.clone(),
                rate: *rate,
            },
            _ => {
                let mut form = ConsoleUi.read_form_interval();
                if rate.is_some() {
                    form.rate = *rate;
                }
                form
            }
        };

        //
        // 2. Validate, append, persist
        //
        let (mut store_persist, mut store) = persist::open(cfg)?;
        let entry = AddLogic::apply(&mut store_persist, &mut store, &form)?;

        ConsoleUi.render_row(&entry);
        success(format!(
            "Entry recorded ({:.2} h at {:.2}/h).",
            entry.hours, entry.hourly_rate
        ));
    }
    Ok(())
}
