use crate::prelude::{
    AppError, Favorites, User, UserId, UserSource,
    search::{self, SortDirection},
};

/// Something that can tell the user a load is in progress.
pub trait LoadingIndicator {
    fn show(&mut self);

    fn hide(&mut self);
}

/// Keeps an indicator shown for as long as the guard lives.
///
/// Dropping the guard hides the indicator, so every way out of a load
/// (success, failure, panic unwinding) releases it.
pub struct LoadingGuard<'a> {
    indicator: &'a mut dyn LoadingIndicator,
}

impl<'a> LoadingGuard<'a> {
    pub fn show(indicator: &'a mut dyn LoadingIndicator) -> Self {
        indicator.show();
        Self { indicator }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.indicator.hide();
    }
}

/// Indicator for callers that have nowhere to show one.
pub struct NoIndicator;

impl LoadingIndicator for NoIndicator {
    fn show(&mut self) {}

    fn hide(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    NotLoaded,
    Loading,
    Loaded,
    Failed,
}

/// Everything a session knows: the fetched users, the favorites and the
/// current search/sort settings.
///
/// What is displayed is always the search filter applied to `users`, in the
/// order `users` is currently in. Sorting reorders `users` itself, so a sort
/// carries over to every later search.
pub struct Directory {
    users: Vec<User>,
    favorites: Favorites,
    search: String,
    next_sort: SortDirection,
    state: LoadState,
}

impl Directory {
    pub fn new(favorites: Favorites) -> Self {
        Self {
            users: Vec::new(),
            favorites,
            search: String::new(),
            next_sort: SortDirection::default(),
            state: LoadState::NotLoaded,
        }
    }

    pub fn with_users(users: Vec<User>, favorites: Favorites) -> Self {
        let mut directory = Self::new(favorites);
        directory.users = users;
        directory.state = LoadState::Loaded;
        directory
    }

    /// Fetches the whole collection once.
    ///
    /// On success the fetched users replace the current ones wholesale. On
    /// failure the current users are kept and the state becomes `Failed`.
    pub fn load(
        &mut self,
        source: &dyn UserSource,
        indicator: &mut dyn LoadingIndicator,
    ) -> LoadState {
        let _guard = LoadingGuard::show(indicator);
        self.start_loading();
        self.finish_loading(source.fetch())
    }

    /// Marks a fetch as in flight. Nothing is on display until it finishes.
    pub fn start_loading(&mut self) {
        self.state = LoadState::Loading;
    }

    pub fn finish_loading(&mut self, fetched: Result<Vec<User>, AppError>) -> LoadState {
        match fetched {
            Ok(users) => {
                self.users = users;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                tracing::error!(error = %e, "error fetching users");
                self.state = LoadState::Failed;
            }
        }

        self.state
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn total(&self) -> usize {
        self.users.len()
    }

    pub fn find(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Sets the search text, ignoring surrounding whitespace.
    pub fn set_search(&mut self, term: &str) {
        self.search = term.trim().to_string();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// The users currently on display.
    pub fn view(&self) -> Vec<&User> {
        search::filter(&self.users, &self.search)
    }

    /// Sorts by name length in the pending direction, then flips it for the
    /// next call. The first call sorts ascending.
    pub fn toggle_sort(&mut self) -> SortDirection {
        let direction = self.next_sort;
        self.sort(direction);
        direction
    }

    /// Sorts in an explicit direction; the following toggle goes the other
    /// way.
    pub fn sort(&mut self, direction: SortDirection) {
        search::sort_by_name_length(&mut self.users, direction);
        self.next_sort = direction.toggled();
        tracing::debug!(direction = direction.is_which(), "users sorted by name length");
    }

    pub fn next_sort(&self) -> SortDirection {
        self.next_sort
    }

    pub fn is_favorite(&self, id: UserId) -> bool {
        self.favorites.is_favorite(id)
    }

    pub fn toggle_favorite(&mut self, id: UserId) -> bool {
        self.favorites.toggle(id)
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::MemFavorites;

    struct FixedSource(Vec<User>);

    impl UserSource for FixedSource {
        fn fetch(&self) -> Result<Vec<User>, AppError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl UserSource for FailingSource {
        fn fetch(&self) -> Result<Vec<User>, AppError> {
            Err(AppError::NotFound("Users endpoint".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingIndicator {
        events: Vec<&'static str>,
    }

    impl LoadingIndicator for RecordingIndicator {
        fn show(&mut self) {
            self.events.push("show");
        }

        fn hide(&mut self) {
            self.events.push("hide");
        }
    }

    fn ann_and_bob() -> Vec<User> {
        vec![
            User::new(1, "Ann", "a@x", "X"),
            User::new(2, "Bob", "b@y", "Y"),
        ]
    }

    fn empty_directory() -> Directory {
        Directory::new(Favorites::open(Box::new(MemFavorites::new())))
    }

    #[test]
    fn load_replaces_users_and_releases_indicator() {
        let mut directory = empty_directory();
        let mut indicator = RecordingIndicator::default();

        let state = directory.load(&FixedSource(ann_and_bob()), &mut indicator);

        assert_eq!(state, LoadState::Loaded);
        assert_eq!(directory.total(), 2);
        assert_eq!(directory.view().len(), 2);
        assert_eq!(indicator.events, vec!["show", "hide"]);

        directory.load(&FixedSource(vec![User::new(9, "Zed", "z@z", "Z")]), &mut indicator);
        assert_eq!(directory.total(), 1);
        assert_eq!(directory.users()[0].id, 9);
    }

    #[test]
    fn failed_load_keeps_users_and_releases_indicator() {
        let mut directory = Directory::with_users(
            ann_and_bob(),
            Favorites::open(Box::new(MemFavorites::new())),
        );
        let mut indicator = RecordingIndicator::default();

        let state = directory.load(&FailingSource, &mut indicator);

        assert_eq!(state, LoadState::Failed);
        assert_eq!(directory.total(), 2);
        assert_eq!(indicator.events, vec!["show", "hide"]);
    }

    #[test]
    fn nothing_is_displayed_while_loading() {
        let mut directory = Directory::with_users(
            ann_and_bob(),
            Favorites::open(Box::new(MemFavorites::new())),
        );

        directory.start_loading();
        assert_eq!(directory.state(), LoadState::Loading);
        assert_eq!(directory.total(), 2);

        let state = directory.finish_loading(Ok(vec![User::new(3, "Cy", "c@z", "Z")]));
        assert_eq!(state, LoadState::Loaded);
        assert_eq!(directory.total(), 1);
    }

    #[test]
    fn first_load_failure_leaves_collection_empty() {
        let mut directory = empty_directory();

        directory.load(&FailingSource, &mut NoIndicator);

        assert_eq!(directory.state(), LoadState::Failed);
        assert!(directory.users().is_empty());
    }

    #[test]
    fn search_is_trimmed_and_filters_view() {
        let mut directory = empty_directory();
        directory.load(&FixedSource(ann_and_bob()), &mut NoIndicator);

        directory.set_search("  an ");
        assert_eq!(directory.search(), "an");

        let ids: Vec<UserId> = directory.view().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1]);

        directory.clear_search();
        assert_eq!(directory.view().len(), 2);
    }

    #[test]
    fn toggle_sort_alternates_direction() {
        let users = vec![
            User::new(1, "Clementine Bauch", "c@x", "X"),
            User::new(2, "Al", "a@x", "X"),
            User::new(3, "Ervin Howell", "e@x", "X"),
        ];
        let mut directory =
            Directory::with_users(users, Favorites::open(Box::new(MemFavorites::new())));

        assert_eq!(directory.toggle_sort(), SortDirection::Ascending);
        let ids: Vec<UserId> = directory.users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        assert_eq!(directory.toggle_sort(), SortDirection::Descending);
        let ids: Vec<UserId> = directory.users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);

        assert_eq!(directory.next_sort(), SortDirection::Ascending);
    }

    #[test]
    fn sort_carries_over_into_search() {
        let users = vec![
            User::new(1, "Leanne Graham", "l@x", "X"),
            User::new(2, "Ann", "a@x", "X"),
            User::new(3, "Dean", "d@x", "X"),
        ];
        let mut directory =
            Directory::with_users(users, Favorites::open(Box::new(MemFavorites::new())));

        directory.set_search("an");
        directory.toggle_sort();

        let ids: Vec<UserId> = directory.view().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        directory.clear_search();
        let ids: Vec<UserId> = directory.view().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn favorite_toggle_goes_through_store() {
        let mut directory = empty_directory();
        directory.load(&FixedSource(ann_and_bob()), &mut NoIndicator);

        assert!(directory.toggle_favorite(2));
        assert!(directory.is_favorite(2));
        assert_eq!(directory.favorites().count(), 1);

        assert!(!directory.toggle_favorite(2));
        assert!(!directory.is_favorite(2));
    }
}
