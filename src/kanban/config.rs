//! # Configuration
//!
//! Kanban configuration is derived with [`confique`], which handles layered loading
//! from a TOML file and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `KANBAN_SEED_EXAMPLES`.
//! 2. **Config file**: an explicit path, or `kanban.toml` in the OS config directory
//!    (via the `directories` crate). A missing file is not an error.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `seed_examples` | `true` | Bootstrap new boards with example cards |

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{KanbanError, Result};

pub const CONFIG_FILE_NAME: &str = "kanban.toml";

/// Configuration for kanban, stored in `kanban.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KanbanConfig {
    /// Start the board with one example card in todo, inProgress and done.
    #[config(default = true, env = "KANBAN_SEED_EXAMPLES")]
    pub seed_examples: bool,
}

impl Default for KanbanConfig {
    fn default() -> Self {
        Self {
            seed_examples: true,
        }
    }
}

impl KanbanConfig {
    /// Loads configuration from the environment, then `path` (or the default
    /// location when `None`), then compiled defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(file) = path.map(Path::to_path_buf).or_else(Self::default_path) {
            builder = builder.file(file);
        }
        builder
            .load()
            .map_err(|e| KanbanError::Config(e.to_string()))
    }

    /// `kanban.toml` inside the platform config directory, if one can be determined.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "kanban").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
