use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::seed::FkPolicy;

/// Optional `shopseed.toml` values. Command-line flags take precedence;
/// anything absent here falls back to built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShopseedConfig {
    pub database: Option<String>,
    pub products: Option<u32>,
    pub customers: Option<u32>,
    pub fk_policy: Option<FkPolicy>,
    /// Fixed RNG seed for reproducible datasets
    pub rng_seed: Option<u64>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("shopseed.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("shop.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<ShopseedConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: ShopseedConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &ShopseedConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopseed.toml");
        assert!(load_config(Some(&path)).unwrap().is_none());
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopseed.toml");

        let config = ShopseedConfig {
            database: Some("data/shop.db".to_string()),
            products: Some(10),
            customers: Some(25),
            fk_policy: Some(FkPolicy::Ignore),
            rng_seed: Some(42),
        };
        write_config(&path, &config, false).unwrap();

        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded.database.as_deref(), Some("data/shop.db"));
        assert_eq!(loaded.customers, Some(25));
        assert_eq!(loaded.fk_policy, Some(FkPolicy::Ignore));
        assert_eq!(loaded.rng_seed, Some(42));
    }

    #[test]
    fn test_write_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopseed.toml");

        write_config(&path, &ShopseedConfig::default(), false).unwrap();
        assert!(write_config(&path, &ShopseedConfig::default(), false).is_err());
        write_config(&path, &ShopseedConfig::default(), true).unwrap();
    }

    #[test]
    fn test_ensure_db_dir_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("nested").join("deep").join("shop.db");
        ensure_db_dir(&db).unwrap();
        assert!(db.parent().unwrap().exists());
    }
}
