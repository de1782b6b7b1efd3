use std::ops::Range;

use crate::prelude::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_which(&self) -> &str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// Case-insensitive, literal occurrences of a term inside a text.
///
/// Yields non-overlapping byte ranges into the text, scanning left to right.
/// Both sides are compared after full Unicode lowercasing, so the ranges
/// always fall on char boundaries of the original text even when lowercasing
/// changes a character's width.
pub struct Matches<'a> {
    text: &'a str,
    needle: Vec<char>,
    pos: usize,
}

impl<'a> Matches<'a> {
    pub fn new(text: &'a str, term: &str) -> Self {
        Matches {
            text,
            needle: term.chars().flat_map(char::to_lowercase).collect(),
            pos: 0,
        }
    }
}

impl Iterator for Matches<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.needle.is_empty() {
            return None;
        }

        while self.pos < self.text.len() {
            let rest = &self.text[self.pos..];
            let Some(first) = rest.chars().next() else {
                break;
            };

            // A match may start inside the lowercase form of `first`
            for skip in 0..first.to_lowercase().count() {
                if let Some(len) = match_len_at(rest, &self.needle, skip) {
                    let span = self.pos..self.pos + len;
                    self.pos += len;
                    return Some(span);
                }
            }

            self.pos += first.len_utf8();
        }
        None
    }
}

// Byte length of the shortest prefix of `haystack` whose lowercase form,
// minus its first `skip` chars, starts with `needle`. A match ending inside a
// multi-char lowercase form covers the whole source character.
fn match_len_at(haystack: &str, needle: &[char], skip: usize) -> Option<usize> {
    let lowered = haystack
        .char_indices()
        .flat_map(|(offset, c)| c.to_lowercase().map(move |l| (offset + c.len_utf8(), l)))
        .skip(skip);

    for (matched, (end, lower)) in lowered.enumerate() {
        if needle[matched] != lower {
            return None;
        }
        if matched + 1 == needle.len() {
            return Some(end);
        }
    }
    None
}

pub fn find_matches(text: &str, term: &str) -> Vec<Range<usize>> {
    Matches::new(text, term).collect()
}

pub fn name_matches(user: &User, term: &str) -> bool {
    term.is_empty() || Matches::new(&user.name, term).next().is_some()
}

/// Users whose name contains `term`, ignoring case, in their original order.
/// An empty term keeps everyone.
pub fn filter<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    users.iter().filter(|u| name_matches(u, term)).collect()
}

/// Stable sort on the number of characters in each name.
///
/// Names of equal length are never compared further, so they keep the order
/// they had before the sort.
pub fn sort_by_name_length(users: &mut [User], direction: SortDirection) {
    match direction {
        SortDirection::Ascending => users.sort_by_key(User::name_length),
        SortDirection::Descending => {
            users.sort_by(|a, b| b.name_length().cmp(&a.name_length()))
        }
    }
}
