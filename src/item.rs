use std::fmt;

use serde::Deserialize;

/// Availability of a catalog item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ItemState {
    /// Item is on the shelf and can be borrowed
    #[default]
    Available,
    /// Item is out with a patron
    Borrowed,
}

impl ItemState {
    /// Label used when rendering an item
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Borrowed => "BORROWED",
        }
    }
}

/// Kind-specific attributes of a catalog item
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKind {
    /// A printed book
    Book {
        /// Author as printed on the cover
        author: String,
        /// ISBN in hyphenated form
        isbn: String,
    },
    /// A magazine or other serial
    Periodical {
        /// Issue number within the series
        issue_number: u32,
    },
    /// A video disc
    Disc {
        /// Running time in minutes
        duration_minutes: u32,
    },
}

impl ItemKind {
    /// Heading printed above the item's details
    #[must_use]
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Book { .. } => "BOOK",
            Self::Periodical { .. } => "MAGAZINE",
            Self::Disc { .. } => "DVD",
        }
    }
}

/// A single circulating resource tracked by the registry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogItem {
    /// Identifier, unique within the registry (case-insensitive)
    pub id: String,
    /// Descriptive title
    pub title: String,
    /// Current availability; only circulation changes it, never a seed file
    #[serde(skip_deserializing, default)]
    state: ItemState,
    /// Kind-specific attributes
    #[serde(flatten)]
    pub kind: ItemKind,
}

impl CatalogItem {
    /// Create an available item
    #[must_use]
    pub fn new(id: &str, title: &str, kind: ItemKind) -> Self {
        Self { id: id.to_string(), title: title.to_string(), state: ItemState::Available, kind }
    }

    /// Shorthand for a book
    #[must_use]
    pub fn book(id: &str, title: &str, author: &str, isbn: &str) -> Self {
        Self::new(id, title, ItemKind::Book { author: author.to_string(), isbn: isbn.to_string() })
    }

    /// Shorthand for a periodical
    #[must_use]
    pub fn periodical(id: &str, title: &str, issue_number: u32) -> Self {
        Self::new(id, title, ItemKind::Periodical { issue_number })
    }

    /// Shorthand for a disc
    #[must_use]
    pub fn disc(id: &str, title: &str, duration_minutes: u32) -> Self {
        Self::new(id, title, ItemKind::Disc { duration_minutes })
    }

    /// Current availability
    #[must_use]
    pub fn state(&self) -> ItemState {
        self.state
    }

    /// Whether the item is currently out
    #[must_use]
    pub fn is_borrowed(&self) -> bool {
        self.state == ItemState::Borrowed
    }

    /// Whether `id` names this item, ignoring case
    #[must_use]
    pub fn matches_id(&self, id: &str) -> bool {
        self.id.to_lowercase() == id.to_lowercase()
    }

    /// Move the item to a new state. Circulation is the only caller.
    pub(crate) fn set_state(&mut self, state: ItemState) {
        self.state = state;
    }
}

impl fmt::Display for CatalogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heading = self.kind.heading();
        writeln!(f, "=== {heading} ===")?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Item ID: {}", self.id)?;
        match &self.kind {
            ItemKind::Book { author, isbn } => {
                writeln!(f, "Author: {author}")?;
                writeln!(f, "ISBN: {isbn}")?;
            }
            ItemKind::Periodical { issue_number } => writeln!(f, "Issue Number: {issue_number}")?,
            ItemKind::Disc { duration_minutes } => {
                writeln!(f, "Duration: {duration_minutes} minutes")?;
            }
        }
        writeln!(f, "Status: {}", self.state.label())?;
        write!(f, "{}", "=".repeat(heading.len().saturating_add(8)))
    }
}
