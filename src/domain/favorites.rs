use std::collections::BTreeSet;

use crate::prelude::{FavoriteStore, UserId};

/// The set of favorite user ids, mirrored to a durable store after every
/// change.
pub struct Favorites {
    ids: BTreeSet<UserId>,
    store: Box<dyn FavoriteStore>,
}

impl Favorites {
    /// Reads the store once. Anything it cannot hand back (missing, corrupt,
    /// unreadable) starts the session with no favorites.
    pub fn open(store: Box<dyn FavoriteStore>) -> Self {
        let ids = match store.load() {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!(medium = store.get_medium(), error = %e, "ignoring stored favorites");
                BTreeSet::new()
            }
        };

        Self { ids, store }
    }

    pub fn is_favorite(&self, id: UserId) -> bool {
        self.ids.contains(&id)
    }

    /// Flips membership of `id` and persists the whole set. Returns whether
    /// `id` is a favorite afterwards.
    pub fn toggle(&mut self, id: UserId) -> bool {
        let now_favorite = if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        };

        if let Err(e) = self.store.save(&self.ids) {
            tracing::warn!(medium = self.store.get_medium(), error = %e, "could not persist favorites");
        }

        now_favorite
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> &BTreeSet<UserId> {
        &self.ids
    }
}
