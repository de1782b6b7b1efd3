use super::*;

use std::cell::RefCell;

/// Favorites that live only as long as the process. Used by tests and when
/// persistence is not wanted.
#[derive(Default)]
pub struct MemFavorites {
    data: RefCell<BTreeSet<UserId>>,
}

impl MemFavorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids(ids: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            data: RefCell::new(ids.into_iter().collect()),
        }
    }
}

impl FavoriteStore for MemFavorites {
    fn load(&self) -> Result<BTreeSet<UserId>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, favorites: &BTreeSet<UserId>) -> Result<(), AppError> {
        *self.data.borrow_mut() = favorites.clone();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
