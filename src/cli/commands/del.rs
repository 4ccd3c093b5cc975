use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::store::persist;
use crate::ui::adapter::UiAdapter;
use crate::ui::console::ConsoleUi;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        //
        // Confirmation prompt
        //
        if !*yes
            && cfg.confirm_actions
            && !ConsoleUi.confirm(&format!(
                "Delete entry '{}'? This action is irreversible.",
                id
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let (mut store_persist, mut store) = persist::open(cfg)?;

        if DeleteLogic::apply(&mut store_persist, &mut store, id)? {
            success(format!("Entry '{}' has been deleted.", id));
        } else {
            info(format!("No entry with id '{}' (nothing deleted).", id));
        }
    }
    Ok(())
}
