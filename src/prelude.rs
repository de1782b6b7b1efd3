pub use crate::cli::{command, run_app};
pub use crate::domain::{
    directory::{Directory, LoadState, LoadingGuard, LoadingIndicator, NoIndicator},
    favorites::Favorites,
    render::{self, Card, Page, Segment, Status},
    search::{self, SortDirection},
    user::{User, UserId},
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, FavoriteStore, UserSource, file::JsonFavorites, memory::MemFavorites,
    remote::RemoteUsers,
};
