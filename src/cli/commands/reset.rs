use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::ResetLogic;
use crate::errors::AppResult;
use crate::store::persist;
use crate::ui::adapter::UiAdapter;
use crate::ui::console::ConsoleUi;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        let (mut store_persist, mut store) = persist::open(cfg)?;

        if store.is_empty() {
            info("No entries recorded, nothing to reset.");
            return Ok(());
        }

        if !*yes
            && cfg.confirm_actions
            && !ConsoleUi.confirm(&format!(
                "Delete ALL {} entries? This action is irreversible.",
                store.len()
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        ResetLogic::apply(&mut store_persist, &mut store)?;
        success("All entries have been deleted.");
    }
    Ok(())
}
