//! Projection of a [`Directory`] into the cards a front end draws.
//!
//! Rendering is a pure function of the directory; front ends decide how a
//! highlighted segment or a favorite marker looks.

use crate::prelude::{Directory, LoadState, User, UserId, search::Matches};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load users.";
pub const PROFILE_LABEL: &str = "View Profile →";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: UserId,
    pub avatar: Option<char>,
    pub name: Vec<Segment>,
    pub city: String,
    pub email: String,
    pub favorite: bool,
    pub profile_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Loading,
    Ready,
    Failed(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: Status,
    pub cards: Vec<Card>,
    pub found: usize,
    pub favorites: usize,
    pub total: usize,
}

/// Splits `text` into plain and highlighted runs, one highlighted run per
/// case-insensitive occurrence of `term`.
pub fn highlight(text: &str, term: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for span in Matches::new(text, term) {
        if span.start > last {
            segments.push(Segment {
                text: text[last..span.start].to_string(),
                highlighted: false,
            });
        }
        segments.push(Segment {
            text: text[span.clone()].to_string(),
            highlighted: true,
        });
        last = span.end;
    }

    if last < text.len() {
        segments.push(Segment {
            text: text[last..].to_string(),
            highlighted: false,
        });
    }
    segments
}

pub fn card(user: &User, term: &str, favorite: bool) -> Card {
    Card {
        id: user.id,
        avatar: user.initial(),
        name: highlight(&user.name, term),
        city: user.city.clone(),
        email: user.email.clone(),
        favorite,
        profile_label: PROFILE_LABEL,
    }
}

pub fn render(directory: &Directory) -> Page {
    let favorites = directory.favorites().count();
    let total = directory.total();

    match directory.state() {
        LoadState::Loading => Page {
            status: Status::Loading,
            cards: Vec::new(),
            found: 0,
            favorites,
            total,
        },
        LoadState::Failed => Page {
            status: Status::Failed(LOAD_FAILED_MESSAGE),
            cards: Vec::new(),
            found: 0,
            favorites,
            total,
        },
        LoadState::NotLoaded | LoadState::Loaded => {
            let cards: Vec<Card> = directory
                .view()
                .into_iter()
                .map(|u| card(u, directory.search(), directory.is_favorite(u.id)))
                .collect();

            Page {
                status: Status::Ready,
                found: cards.len(),
                cards,
                favorites,
                total,
            }
        }
    }
}

/// Same as [`render`] but keeps only the favorite users. The search text
/// still applies.
pub fn render_favorites(directory: &Directory) -> Page {
    let mut page = render(directory);
    page.cards.retain(|c| c.favorite);
    page.found = page.cards.len();
    page
}
