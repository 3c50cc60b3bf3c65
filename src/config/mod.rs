use crate::core::app::Timings;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_optional_time;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// HH:MM the demo session is clocked in since at start-up; empty disables.
    #[serde(default = "default_demo_clock_start")]
    pub demo_clock_start: String,
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
    #[serde(default = "default_leave_submit_ms")]
    pub leave_submit_ms: u64,
    #[serde(default = "default_report_generate_ms")]
    pub report_generate_ms: u64,
    #[serde(default = "default_report_export_ms")]
    pub report_export_ms: u64,
    #[serde(default = "default_clock_tick_ms")]
    pub clock_tick_ms: u64,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_demo_clock_start() -> String {
    "09:15".to_string()
}
fn default_toast_ms() -> u64 {
    5000
}
fn default_leave_submit_ms() -> u64 {
    500
}
fn default_report_generate_ms() -> u64 {
    2000
}
fn default_report_export_ms() -> u64 {
    1500
}
fn default_clock_tick_ms() -> u64 {
    60_000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            demo_clock_start: default_demo_clock_start(),
            toast_ms: default_toast_ms(),
            leave_submit_ms: default_leave_submit_ms(),
            report_generate_ms: default_report_generate_ms(),
            report_export_ms: default_report_export_ms(),
            clock_tick_ms: default_clock_tick_ms(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("ttpro")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".ttpro")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ttpro.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("ttpro.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.demo_start()?;
        Ok(cfg)
    }

    /// Database path with `~/` expanded.
    pub fn database_path(&self) -> String {
        if self.database == ":memory:" {
            return self.database.clone();
        }
        expand_tilde(&self.database).to_string_lossy().to_string()
    }

    pub fn demo_start(&self) -> AppResult<Option<NaiveTime>> {
        parse_optional_time(Some(self.demo_clock_start.as_str())).map_err(|e| {
            AppError::Config(format!("demo_clock_start: {}", e))
        })
    }

    pub fn timings(&self) -> Timings {
        Timings {
            toast: Duration::from_millis(self.toast_ms),
            leave_submit: Duration::from_millis(self.leave_submit_ms),
            report_generate: Duration::from_millis(self.report_generate_ms),
            report_export: Duration::from_millis(self.report_export_ms),
            clock_tick: Duration::from_millis(self.clock_tick_ms),
        }
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config.database)
    }
}
