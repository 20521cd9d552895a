use anyhow::Result;
use elemcraft_core::UniverseConfig;
use elemcraft_game::DEFAULT_SHOP_SIZE;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config/elemcraft.toml";
const DEFAULT_DATA_DIR: &str = "saves";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    /// Universe seed. Saves from other seeds are ignored.
    pub seed: u32,
    pub generated_total: usize,
    pub recipe_target: usize,
    /// Bulk-fill attempts allowed per element key.
    pub attempt_multiplier: usize,
    /// Directory backing the key-value store.
    pub data_dir: PathBuf,
    pub shop_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        let universe = UniverseConfig::default();
        Self {
            seed: universe.seed,
            generated_total: universe.generated_total,
            recipe_target: universe.recipe_target,
            attempt_multiplier: universe.attempt_multiplier,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            shop_size: DEFAULT_SHOP_SIZE,
        }
    }
}

impl GameConfig {
    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<GameConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    GameConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_CONFIG_PATH)
                    || err.kind() != std::io::ErrorKind::NotFound
                {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                GameConfig::default()
            }
        }
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }

    pub fn universe(&self) -> UniverseConfig {
        UniverseConfig {
            seed: self.seed,
            generated_total: self.generated_total,
            recipe_target: self.recipe_target,
            attempt_multiplier: self.attempt_multiplier,
        }
    }
}
