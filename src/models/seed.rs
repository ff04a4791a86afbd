use std::path::Path;

use anyhow::Context;
use serde::{Serialize, Deserialize};

use super::models::{Post, User};

const DEFAULT_SEED: &str = include_str!("../../data/seed.json");

/// Initial contents of the store, loaded once at startup.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Seed {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub posts: Vec<Post>,
}

impl Seed {
    /// The fixture compiled into the binary.
    pub fn builtin() -> anyhow::Result<Self> {
        serde_json::from_str(DEFAULT_SEED).context("Failed to parse built-in seed data")
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))
    }
}
