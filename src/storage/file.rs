use super::*;

use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::PathBuf;

pub const DEFAULT_FAVORITES_PATH: &str = "./.instance/favorites.json";

/// Favorites kept as a JSON array of ids in a single file.
pub struct JsonFavorites {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonFavorites {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.into(),
        }
    }
}

impl FavoriteStore for JsonFavorites {
    fn load(&self) -> Result<BTreeSet<UserId>, AppError> {
        if !fs::exists(&self.path)? {
            return Ok(BTreeSet::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(BTreeSet::new());
        }

        let ids: Vec<UserId> = serde_json::from_str(&data)?;
        Ok(ids.into_iter().collect())
    }

    fn save(&self, favorites: &BTreeSet<UserId>) -> Result<(), AppError> {
        if !self.path.exists() {
            create_file_parent(&self.path)?;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let data = serde_json::to_string(favorites)?;
        file.write_all(data.as_bytes())?;

        tracing::debug!(path = %self.path.display(), count = favorites.len(), "favorites written");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
