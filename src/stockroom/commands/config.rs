//! Reading and changing the settings kept in `config.json`.
//!
//! Bad keys and values come back as error messages rather than `Err`, so the
//! caller can keep going; only I/O on the config file itself fails the command.

use crate::commands::{CmdMessage, CmdResult, StockroomPaths};
use crate::config::StockroomConfig;
use crate::error::Result;
use tracing::{info, warn};

/// Amount shown after a formatting setting changes.
const SAMPLE_PRICE: f64 = 1299.99;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &StockroomPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    let mut config = StockroomConfig::load(dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => return Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(value) => result.add_message(CmdMessage::info(value)),
            None => result.add_message(CmdMessage::error(unknown_key(&key))),
        },
        ConfigAction::Set(key, value) => {
            if let Err(reason) = config.set(&key, &value) {
                warn!(key = %key, value = %value, "config value rejected");
                result.add_message(CmdMessage::error(reason));
                return Ok(result);
            }
            config.save(dir)?;

            let shown = config.get(&key).unwrap_or(value);
            info!(key = %key, value = %shown, "config updated");
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
            if key == "locale" || key == "currency" {
                let sample = config.money_format().format(SAMPLE_PRICE);
                result.add_message(CmdMessage::info(format!("Prices now read {}", sample)));
            }
            result = result.with_config(config);
        }
    }
    Ok(result)
}

fn unknown_key(key: &str) -> String {
    format!(
        "Unknown config key: {} (expected one of {})",
        key,
        StockroomConfig::KEYS.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::money::Locale;
    use tempfile::TempDir;

    fn paths(temp: &TempDir) -> StockroomPaths {
        StockroomPaths {
            data_dir: temp.path().to_path_buf(),
        }
    }

    #[test]
    fn set_persists_and_show_reads_back() {
        let temp = TempDir::new().unwrap();
        let paths = paths(&temp);

        let res = run(&paths, ConfigAction::Set("locale".into(), "en-us".into())).unwrap();
        assert_eq!(res.messages[0].content, "locale set to en-US");
        assert_eq!(res.messages[1].content, "Prices now read $1,299.99");
        assert_eq!(res.config.unwrap().locale, Locale::EnUs);

        let shown = run(&paths, ConfigAction::ShowKey("locale".into())).unwrap();
        assert_eq!(shown.messages[0].content, "en-US");
    }

    #[test]
    fn invalid_values_are_reported_not_saved() {
        let temp = TempDir::new().unwrap();
        let paths = paths(&temp);

        let res = run(&paths, ConfigAction::Set("page-size".into(), "0".into())).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Error);
        assert!(!temp.path().join("config.json").exists());
    }

    #[test]
    fn unknown_key_lists_the_known_ones() {
        let temp = TempDir::new().unwrap();
        let res = run(&paths(&temp), ConfigAction::ShowKey("colour".into())).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Error);
        assert!(res.messages[0].content.contains("page-size, locale, currency"));
    }

    #[test]
    fn page_size_change_has_no_price_sample() {
        let temp = TempDir::new().unwrap();
        let res = run(&paths(&temp), ConfigAction::Set("page-size".into(), "3".into())).unwrap();
        assert_eq!(res.messages.len(), 1);
        assert_eq!(res.config.unwrap().page_size, 3);
    }

    #[test]
    fn show_all_returns_config() {
        let temp = TempDir::new().unwrap();
        let res = run(&paths(&temp), ConfigAction::ShowAll).unwrap();
        assert_eq!(res.config.unwrap(), StockroomConfig::default());
    }
}
