use home::home_dir;
use std::path::PathBuf;

const PRODUCT_NAME: &str = "card-wizard";
pub const LOCATION_ENV_VAR: &str = "CARD_WIZARD_CONFIG_LOCATION";
pub const DEFINITION_FILE_NAME: &str = "wizard.toml";

/// where wizard definitions are looked up when no path is given,
/// for ex, default ~/card-wizard
pub fn default_config_location() -> PathBuf {
    match std::env::var(LOCATION_ENV_VAR) {
        Ok(value) => PathBuf::from(value),
        Err(_) => {
            let home = if let Some(d) = home_dir() {
                d
            } else {
                return PathBuf::new();
            };

            match std::env::consts::OS {
                "macos" => home.join("Library").join("Preferences").join(PRODUCT_NAME),
                _ => home.join(PRODUCT_NAME),
            }
        }
    }
}

pub fn default_definition_path() -> PathBuf {
    default_config_location().join(DEFINITION_FILE_NAME)
}
