//! Error types for catalog lookups, circulation and registry setup.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Why a circulation request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    /// Borrow requested while the item is already out
    AlreadyBorrowed,
    /// Return requested while the item is on the shelf
    NotBorrowed,
}

impl Refusal {
    /// Trailing phrase used in the user-facing message
    #[must_use]
    pub fn phrase(self) -> &'static str {
        match self {
            Self::AlreadyBorrowed => "is already borrowed!",
            Self::NotBorrowed => "was not borrowed!",
        }
    }
}

/// Errors from resolving an id or moving an item between states.
///
/// Both are recovered at the command loop, which logs them under
/// [`CirculationError::category`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CirculationError {
    /// The id does not name any item in the registry
    #[error("Invalid item ID: {id}")]
    InvalidItem {
        /// The id as the user typed it
        id: String,
    },

    /// The transition is not legal from the item's current state
    #[error("Item '{title}' (ID: {id}) {}", .reason.phrase())]
    ItemUnavailable {
        /// Registry id of the item
        id: String,
        /// Title of the item
        title: String,
        /// Which transition was refused
        reason: Refusal,
    },
}

impl CirculationError {
    /// Category written in front of the message in the error log
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidItem { .. } => "INVALID ITEM",
            Self::ItemUnavailable { .. } => "ITEM NOT AVAILABLE",
        }
    }

    /// `<CATEGORY>: <message>`, the form shown to the user and logged
    #[must_use]
    pub fn report(&self) -> String {
        format!("{}: {self}", self.category())
    }
}

/// Errors building the registry at startup
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two entries share an id under case-insensitive comparison
    #[error("Duplicate item ID: {0}")]
    DuplicateId(String),

    /// An entry has a blank title
    #[error("Item {0} has an empty title")]
    EmptyTitle(String),

    /// The seed file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        /// Seed file path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The seed file is not a valid item list
    #[error("Failed to parse catalog {path}: {source}")]
    Parse {
        /// Seed file path
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}
