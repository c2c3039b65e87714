use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) json: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) color: Option<String>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
    #[serde(default)]
    pub(crate) model: Option<PathBuf>,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/tiercost/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("tiercost").join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support, Windows AppData)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("tiercost").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.tiercost.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".tiercost.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_paths_are_populated() {
        let paths = Config::get_config_paths();
        assert!(!paths.is_empty());
    }

    #[test]
    fn config_parses_all_keys() {
        let config: Config = toml::from_str(
            r#"
            json = true
            no_color = true
            color = "never"
            locale = "de"
            model = "/tmp/model.json"
            "#,
        )
        .unwrap();
        assert!(config.json);
        assert!(config.no_color);
        assert_eq!(config.color.as_deref(), Some("never"));
        assert_eq!(config.locale.as_deref(), Some("de"));
        assert_eq!(config.model, Some(PathBuf::from("/tmp/model.json")));
    }

    #[test]
    fn config_defaults_for_missing_keys() {
        let config: Config = toml::from_str("").unwrap();
        assert!(!config.json);
        assert!(config.model.is_none());
    }
}
