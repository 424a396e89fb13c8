//! Configuration management for gol.
//!
//! Loads configuration from ${GOL_HOME}/config.toml with sensible defaults.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::rule::Topology;

/// Commented config written by `gol config init`.
const TEMPLATE: &str = include_str!("../default_config.toml");

pub mod paths {
    //! Where gol keeps its config: `$GOL_HOME`, else `~/.config/gol`, else
    //! `./.gol` when there is no home directory.

    use std::path::PathBuf;

    pub fn gol_home() -> PathBuf {
        match std::env::var_os("GOL_HOME") {
            Some(home) => PathBuf::from(home),
            None => dirs::home_dir()
                .map_or_else(|| PathBuf::from(".gol"), |home| home.join(".config/gol")),
        }
    }

    pub fn config_path() -> PathBuf {
        gol_home().join("config.toml")
    }
}

/// Defaults for a run; every field can be overridden on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Generations to run when the command line does not say
    pub generations: u32,

    /// Edge behavior
    pub topology: Topology,

    /// Print statistics after the grid
    pub stats: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generations: Self::DEFAULT_GENERATIONS,
            topology: Topology::default(),
            stats: false,
        }
    }
}

impl Config {
    const DEFAULT_GENERATIONS: u32 = 5;

    /// Loads `paths::config_path()`.
    ///
    /// # Errors
    /// As [`Config::load_from`].
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Parses the config at `path`; a missing file means all defaults.
    ///
    /// # Errors
    /// The file exists but cannot be read or is not a valid gol config.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("read {}", path.display()));
            }
        };
        let config =
            toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Writes the commented template to `path`, creating parent directories.
    ///
    /// Never replaces an existing file.
    ///
    /// # Errors
    /// `path` already exists, or a directory or the file cannot be created.
    pub fn init(path: &Path) -> Result<PathBuf> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }

        let mut file = match fs::OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                anyhow::bail!("config already exists at {}", path.display());
            }
            Err(err) => return Err(err).with_context(|| format!("create {}", path.display())),
        };
        file.write_all(TEMPLATE.as_bytes())
            .with_context(|| format!("write {}", path.display()))?;

        tracing::debug!(path = %path.display(), "wrote config template");
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_template_sets_every_key_to_its_default() {
        let table: toml::Table = toml::from_str(TEMPLATE).unwrap();
        let mut keys: Vec<&str> = table.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["generations", "stats", "topology"]);

        let config: Config = toml::from_str(TEMPLATE).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_file_runs_five_bounded_generations() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.generations, 5);
        assert_eq!(config.topology, Topology::Bounded);
        assert!(!config.stats);
    }

    #[test]
    fn test_edited_template_is_respected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Config::init(&path).unwrap();

        let edited = fs::read_to_string(&path)
            .unwrap()
            .replace("generations = 5", "generations = 40")
            .replace("topology = \"bounded\"", "topology = \"toroidal\"");
        fs::write(&path, edited).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.generations, 40);
        assert_eq!(config.topology, Topology::Toroidal);
        assert!(!config.stats);
    }

    #[test]
    fn test_omitted_keys_keep_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "stats = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.stats);
        assert_eq!(config.generations, 5);
        assert_eq!(config.topology, Topology::Bounded);
    }

    #[test]
    fn test_rejects_unknown_topology_and_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        fs::write(&path, "topology = \"klein\"\n").unwrap();
        assert!(Config::load_from(&path).is_err());

        fs::write(&path, "generation = 3\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").starts_with("parse "));
    }

    #[test]
    fn test_init_creates_missing_parent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("gol").join("config.toml");

        let written = Config::init(&path).unwrap();
        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), TEMPLATE);
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "generations = 12\n").unwrap();

        let err = Config::init(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "generations = 12\n");
        assert_eq!(Config::load_from(&path).unwrap().generations, 12);
    }
}
