pub mod run_options;

use run_options::Args;
use serde::Deserialize;
use std::fs;
use tracing::warn;

pub const CONFIG_FILE: &str = "./aquadash.toml";

#[derive(Debug, Deserialize)]
pub struct WebServer {
    pub address: String,
}

impl Default for WebServer {
    fn default() -> Self {
        Self { address: "0.0.0.0:8080".to_owned() }
    }
}

#[derive(Debug, Deserialize)]
pub struct Backend {
    pub endpoint: String,
}

impl Default for Backend {
    fn default() -> Self {
        Self { endpoint: "http://127.0.0.1:9000".to_owned() }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web_server: WebServer,
    #[serde(default)]
    pub backend: Backend,
}

impl Config {
    // A broken config file warns and falls back to defaults, same as a
    // missing one does in run_options::get_args.
    pub fn load(args: Args) -> Self {
        let config_content = match fs::read_to_string(&args.cfg_file) {
            Ok(content) => content,
            Err(e) => {
                warn!("Unable to read config file '{}': {}. Proceeding with defaults.", args.cfg_file.display(), e);
                return Config::default();
            }
        };
        match toml::from_str(&config_content) {
            Ok(config) => config,
            Err(e) => {
                warn!("Unable to parse config file '{}': {}. Proceeding with defaults.", args.cfg_file.display(), e);
                Config::default()
            }
        }
    }

    // test helper
    pub fn load_from_str(config_str: &str) -> Self {
        let config: Config = toml::from_str(config_str).expect("Unable to parse config");
        config
    }
}

#[cfg(test)]
pub mod tests {
    use crate::config::Config;

    #[test]
    fn load_full() {
        let cfg = Config::load_from_str(
            r#"
            [web_server]
            address = "127.0.0.1:3000"

            [backend]
            endpoint = "http://backend.local:9000"
            "#,
        );
        assert_eq!(cfg.web_server.address, "127.0.0.1:3000");
        assert_eq!(cfg.backend.endpoint, "http://backend.local:9000");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg = Config::load_from_str("");
        assert_eq!(cfg.web_server.address, "0.0.0.0:8080");
        assert_eq!(cfg.backend.endpoint, "http://127.0.0.1:9000");
    }

    #[test]
    fn unreadable_or_invalid_file_falls_back_to_defaults() {
        use crate::config::run_options::Args;
        use std::path::PathBuf;

        let missing = Config::load(Args { cfg_file: PathBuf::from("/nonexistent/aquadash.toml") });
        assert_eq!(missing.web_server.address, "0.0.0.0:8080");

        let path = std::env::temp_dir().join("aquadash-bad-config.toml");
        std::fs::write(&path, "not [valid toml").unwrap();
        let invalid = Config::load(Args { cfg_file: path.clone() });
        assert_eq!(invalid.backend.endpoint, "http://127.0.0.1:9000");
        let _ = std::fs::remove_file(path);
    }
}
