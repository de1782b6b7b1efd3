pub mod file;
pub mod memory;
pub mod remote;

use crate::prelude::{AppError, User, UserId};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Durable home of the favorites set.
pub trait FavoriteStore {
    /// Reads the persisted set. A medium that has never been written
    /// yields an empty set; an unreadable value is an error.
    fn load(&self) -> Result<BTreeSet<UserId>, AppError>;

    /// Overwrites the persisted value with the full set.
    fn save(&self, favorites: &BTreeSet<UserId>) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

/// Where the user collection comes from.
pub trait UserSource {
    fn fetch(&self) -> Result<Vec<User>, AppError>;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
