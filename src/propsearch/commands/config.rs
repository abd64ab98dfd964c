use crate::commands::{CmdMessage, CmdResult};
use crate::config::{AppConfig, ConfigKey};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = AppConfig::load(dir)?;
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default()
            .with_config(config)
            .with_config_path(dir.to_path_buf())),
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            match ConfigKey::parse(&key) {
                Ok(k) => result.add_message(CmdMessage::info(config.get(k))),
                Err(e) => result.add_message(CmdMessage::error(e.to_string())),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let k = match ConfigKey::parse(&key) {
                Ok(k) => k,
                Err(e) => return Ok(CmdResult::default().with_message(CmdMessage::error(e.to_string()))),
            };
            config.set(k, &value);
            config.save(dir)?;
            let display_val = config.get(k);
            Ok(CmdResult::default()
                .with_config(config)
                .with_message(CmdMessage::success(format!("{} set to {}", key, display_val))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn set_persists_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("currency".into(), "$".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(AppConfig::load(dir.path()).unwrap().currency, "$");
    }

    #[test]
    fn show_key_prints_value() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("currency".into())).unwrap();
        assert_eq!(result.messages[0].content, "£");
    }

    #[test]
    fn unknown_key_is_reported_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::Set("colour".into(), "red".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn show_all_returns_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(AppConfig::default()));
        assert_eq!(result.config_path.as_deref(), Some(dir.path()));
    }
}
