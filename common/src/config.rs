use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Result;

const CONFIG_FILE: &str = "compendium.toml";

/// Tool configuration, read from `compendium.toml` in the working
/// directory. Every field has a default; a missing file means defaults.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Config {
    /// Directory the per-family JSON files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Per-family output file name overrides, keyed by family name
    /// (e.g. `talents = "talents-v2.json"`).
    #[serde(default)]
    pub outputs: HashMap<String, String>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            outputs: HashMap::new(),
        }
    }
}

impl Config {
    pub fn load<T>(source_path: T) -> Result<Config>
    where
        T: AsRef<Path>,
    {
        let mut filename = source_path.as_ref().to_path_buf();
        filename.push(CONFIG_FILE);
        if !filename.exists() {
            return Ok(Config::default());
        }
        let contents = match std::fs::read_to_string(&filename) {
            Ok(c) => c,
            Err(err) => {
                eprintln!("Could not read config file `{}`", filename.display());
                return Err(Box::new(err));
            }
        };

        let config: Config = match toml::from_str(&contents) {
            Ok(d) => d,
            Err(err) => {
                eprintln!("Unable to load data from `{}`", filename.display());
                return Err(Box::new(err));
            }
        };

        Ok(config)
    }

    /// Output path for a family: the configured override name if present,
    /// otherwise the default name, inside the output directory.
    pub fn output_path(&self, family: &str, default_name: &str) -> PathBuf {
        let name = self
            .outputs
            .get(family)
            .map(String::as_str)
            .unwrap_or(default_name);
        self.output_dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(
            config.output_path("talents", "talents.json"),
            PathBuf::from("output/talents.json")
        );
    }

    #[test]
    fn test_overrides() {
        let config: Config =
            toml::from_str("output_dir = \"dist\"\n[outputs]\ntalents = \"t.json\"\n").unwrap();
        assert_eq!(
            config.output_path("talents", "talents.json"),
            PathBuf::from("dist/t.json")
        );
        assert_eq!(
            config.output_path("tags", "tags.json"),
            PathBuf::from("dist/tags.json")
        );
    }
}
