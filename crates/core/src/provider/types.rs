//! Types shared by all movie data providers.

use serde::{Deserialize, Serialize};

/// What a search hit refers to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MovieKind {
    Movie,
    Tv,
    Person,
    Other,
}

impl MovieKind {
    /// Map a TMDB `media_type` value.
    pub fn from_media_type(media_type: &str) -> Self {
        match media_type {
            "movie" => Self::Movie,
            "tv" => Self::Tv,
            "person" => Self::Person,
            _ => Self::Other,
        }
    }
}

/// Lightweight handle returned by a prefix search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MovieRef {
    /// Provider ID, used to fetch the full record.
    pub id: u32,
    /// Kind of the hit. Only `Movie` is quizzable.
    pub kind: MovieKind,
}

impl MovieRef {
    pub fn movie(id: u32) -> Self {
        Self {
            id,
            kind: MovieKind::Movie,
        }
    }

    pub fn is_movie(&self) -> bool {
        self.kind == MovieKind::Movie
    }
}

/// Full details of a single movie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    /// Provider ID.
    pub id: u32,
    /// Movie title.
    pub title: String,
    /// Release year, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// First paragraph of the synopsis, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
    /// Director names in credit order.
    #[serde(default)]
    pub directors: Vec<String>,
}

/// Extract the year from a `YYYY-MM-DD` (or partial) date.
pub fn year_from_date(date: &str) -> Option<i32> {
    date.split('-').next().and_then(|y| y.trim().parse().ok())
}

/// First non-empty paragraph of a synopsis.
pub fn first_paragraph(text: &str) -> Option<String> {
    text.split("\n\n")
        .map(|p| p.split_whitespace().collect::<Vec<_>>().join(" "))
        .find(|p| !p.is_empty())
}
