use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("📄 {}\n\n{}", path.display(), content);
            } else {
                // no file yet: show the effective defaults
                let yaml =
                    serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
                println!("📄 (defaults, no config file)\n\n{}", yaml);
            }
        }
    }
    Ok(())
}
