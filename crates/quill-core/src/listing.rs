//! View state for the post list: sorting, the single expanded post, body
//! previews and author labels.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::collections::BTreeMap;

use crate::{post::PostRecord, store::PostStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Likes,
    Date,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// No field means the store order is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self {
            field: Some(field),
            direction,
        }
    }

    /// Clicking the active field flips the direction, any other field starts
    /// ascending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == Some(field) {
            self.direction = self.direction.flipped();
        } else {
            self.field = Some(field);
            self.direction = SortDirection::Asc;
        }
    }
}

/// Dates are free text in the posts file. `None` sorts before every date that
/// parses.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(date.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
}

pub fn sorted_posts(store: &PostStore, state: SortState) -> Vec<&PostRecord> {
    let mut posts: Vec<&PostRecord> = store.iter().collect();
    let Some(field) = state.field else {
        return posts;
    };
    // Stable in both directions: equal keys keep store order.
    posts.sort_by(|a, b| {
        let ordering = match field {
            SortField::Likes => a.likes().unwrap_or(0).cmp(&b.likes().unwrap_or(0)),
            SortField::Date => a
                .date()
                .and_then(parse_date)
                .cmp(&b.date().and_then(parse_date)),
        };
        match state.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    posts
}

/// First `max_len` characters followed by `...` when the text is longer.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Which post, if any, shows its full body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    expanded: Option<String>,
}

impl Expansion {
    pub fn toggle(&mut self, id: &str) {
        if self.is_expanded(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }
}

/// `Me` for the current user, the mapped name otherwise, `N/A` as a fallback.
pub fn author_label(
    post: &PostRecord,
    names: &BTreeMap<String, String>,
    current_user: Option<&str>,
) -> Option<String> {
    let user_id = post.user_id()?;
    if current_user == Some(user_id) {
        return Some("Me".into());
    }
    Some(
        names
            .get(user_id)
            .cloned()
            .unwrap_or_else(|| String::from("N/A")),
    )
}
