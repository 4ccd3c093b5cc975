use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::persist;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rate { set } = cmd {
        let (mut store_persist, _store) = persist::open(cfg)?;

        if let Some(rate) = set {
            store_persist.save_rate(*rate)?;
            success(format!("Hourly rate set to {:.2}.", rate));
        } else {
            println!("Hourly rate: {:.2}", store_persist.load_rate()?);
        }
    }
    Ok(())
}
