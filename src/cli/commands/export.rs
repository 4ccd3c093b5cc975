use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::persist;
use crate::ui::console::ConsoleUi;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let (_persist, store) = persist::open(cfg)?;
        ExportLogic::apply(store.list_entries(), format, file, *force, &ConsoleUi)?;
    }
    Ok(())
}
