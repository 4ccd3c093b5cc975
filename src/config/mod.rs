use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub data_file: String,
    #[serde(default = "default_confirm_actions")]
    pub confirm_actions: bool,
}

fn default_confirm_actions() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::default_data_file().to_string_lossy().to_string(),
            confirm_actions: default_confirm_actions(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timetally")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".timetally")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timetally.conf")
    }

    /// Return the full path of the default data file
    pub fn default_data_file() -> PathBuf {
        Self::config_dir().join("timetally.json")
    }

    /// Load configuration from file, or return defaults if missing or
    /// unreadable. A broken config file is never fatal.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                warning(format!("Unreadable config file ({e}), using defaults"));
                Self::default()
            }),
            Err(e) => {
                warning(format!("Cannot read config file ({e}), using defaults"));
                Self::default()
            }
        }
    }

    /// Initialize configuration and data files (the `init` command).
    pub fn init_all(custom_data: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // data file: user provided or default
        let data_path = if let Some(name) = custom_data {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::default_data_file()
        };

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            confirm_actions: default_confirm_actions(),
        };

        // write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // create an empty key-value document if not present
        if !data_path.exists() {
            fs::write(&data_path, "{}\n")?;
        }

        println!("✅ Data file:   {:?}", data_path);

        Ok(())
    }
}
