use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::prefs::PreferenceStore;
use crate::errors::AppResult;
use crate::models::theme::{THEME_KEY, Theme};
use crate::ui::messages::{info, success, warning};

/// Handle the `theme` command: show, toggle or set the stored preference.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Theme { toggle, set } = cmd {
        let mut pool = DbPool::open_initialized(&cfg.database_path())?;

        // an unreadable stored value counts as unset so --set/--toggle can replace it
        let stored = match pool.get(THEME_KEY)?.map(|v| Theme::parse(&v)).transpose() {
            Ok(t) => t,
            Err(e) => {
                warning(format!("Ignoring stored theme: {}", e));
                None
            }
        };
        let current = stored.unwrap_or_else(Theme::system);

        let next = if *toggle {
            Some(current.toggled())
        } else {
            set.as_deref().map(Theme::parse).transpose()?
        };

        match next {
            Some(theme) => {
                pool.set(THEME_KEY, theme.as_str())?;
                if let Err(e) = log::ttlog(&pool.conn, "theme", theme.as_str(), "Theme preference stored") {
                    warning(format!("Failed to write internal log: {}", e));
                }
                success(format!("Switched to {} mode", theme));
            }
            None if stored.is_some() => info(format!("Theme: {}", current)),
            None => info(format!("Theme: {} (system)", current)),
        }
    }

    Ok(())
}
