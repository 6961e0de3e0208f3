// Configuration loading module

use anyhow::{Context, Result};
use serde::Deserialize;
use spellpixel_components::{NavConfigYaml, NavTabYaml};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub application: ApplicationConfig,
    pub navigation: NavConfigYaml,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    pub tagline: String,
    pub headline: String,
    pub status_bar: StatusBarConfigYaml,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBarConfigYaml {
    pub default_text: String,
}

impl Default for AppConfig {
    /// Built-in fallback used when config.yaml is missing or invalid
    fn default() -> Self {
        Self {
            application: ApplicationConfig {
                title: "SpellPixel".to_string(),
                tagline: "Crafted pixels. Conjured motion.".to_string(),
                headline: "WE MAKE SCREENS FEEL ALIVE".to_string(),
                status_bar: StatusBarConfigYaml {
                    default_text: " q quit | hover the tabs top-right | esc closes the overlay"
                        .to_string(),
                },
            },
            navigation: NavConfigYaml {
                panel_width: None,
                tabs: vec![
                    NavTabYaml { id: 1, name: "Services".to_string() },
                    NavTabYaml { id: 2, name: "Portfolio".to_string() },
                    NavTabYaml { id: 3, name: "Insights".to_string() },
                ],
            },
        }
    }
}

pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let path = config_path.unwrap_or_else(|| {
        let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        default_path.push("src");
        default_path.push("config.yaml");
        default_path
    });

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: AppConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
application:
  title: "Demo"
  tagline: "Line one"
  headline: "BIG TEXT"
  status_bar:
    default_text: "q quits"
navigation:
  panel_width: 40
  tabs:
    - id: 1
      name: "Alpha"
    - id: 2
      name: "Beta"
ui:
  mouse_enabled: true
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.application.title, "Demo");
        assert_eq!(config.navigation.panel_width, Some(40));
        assert_eq!(config.navigation.tabs.len(), 2);
        assert_eq!(config.navigation.tabs[1].name, "Beta");
    }

    #[test]
    fn test_default_config_has_three_tabs() {
        let config = AppConfig::default();
        let ids: Vec<u8> = config.navigation.tabs.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(config.navigation.panel_width, None);
    }
}
