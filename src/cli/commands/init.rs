use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the key-value data file
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.data {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load();

    println!("⚙️  Initializing timetally…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Data file  : {}", cfg.data_file);
    println!("🎉 timetally initialization completed!");

    Ok(())
}
