use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::config::ShelfzConfig;
use crate::error::{Result, ShelfzError};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ShelfzConfig::load(config_dir)?;

    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            let value = match key.as_str() {
                "catalog-file" => config.catalog_file().to_string(),
                "show-icons" => config.show_icons().to_string(),
                other => return Err(ShelfzError::Api(format!("Unknown config key: {}", other))),
            };
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            Ok(result.with_config(config))
        }
        ConfigAction::Set(key, value) => {
            match key.as_str() {
                "catalog-file" => config.set_catalog_file(&value),
                "show-icons" => {
                    let on = value.parse::<bool>().map_err(|_| {
                        ShelfzError::Api(format!("show-icons expects true or false, got {}", value))
                    })?;
                    config.set_show_icons(on);
                }
                other => return Err(ShelfzError::Api(format!("Unknown config key: {}", other))),
            }
            config.save(config_dir)?;

            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("Set {} = {}", key, value)));
            Ok(result)
        }
    }
}
