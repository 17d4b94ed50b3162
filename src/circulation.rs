//! Borrow and return transitions for a single catalog item.
//!
//! Each item is a two-state machine, `Available` and `Borrowed`. A refused
//! transition leaves the item untouched.

use std::fmt;

use crate::{
    error::{CirculationError, Refusal},
    item::{CatalogItem, ItemState},
};

/// Events that move an item between states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CirculationEvent {
    /// A patron takes the item out
    Borrow,
    /// A patron brings the item back
    Return,
}

impl CirculationEvent {
    /// Past-tense verb for confirmations
    #[must_use]
    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Borrow => "borrowed",
            Self::Return => "returned",
        }
    }
}

impl fmt::Display for CirculationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Borrow => write!(f, "borrow"),
            Self::Return => write!(f, "return"),
        }
    }
}

/// Apply an event to an item
///
/// # Errors
///
/// Returns `CirculationError::ItemUnavailable` if the event is not legal from
/// the item's current state.
pub fn apply(item: &mut CatalogItem, event: CirculationEvent) -> Result<ItemState, CirculationError> {
    let from = item.state();
    let to = match (from, event) {
        (ItemState::Available, CirculationEvent::Borrow) => ItemState::Borrowed,
        (ItemState::Borrowed, CirculationEvent::Return) => ItemState::Available,
        (ItemState::Borrowed, CirculationEvent::Borrow) => {
            return Err(refuse(item, Refusal::AlreadyBorrowed));
        }
        (ItemState::Available, CirculationEvent::Return) => {
            return Err(refuse(item, Refusal::NotBorrowed));
        }
    };

    item.set_state(to);
    tracing::info!(id = %item.id, %event, ?from, ?to, "circulation transition");
    Ok(to)
}

/// Take an available item out
///
/// # Errors
///
/// Returns `CirculationError::ItemUnavailable` if the item is already borrowed.
pub fn borrow(item: &mut CatalogItem) -> Result<(), CirculationError> {
    apply(item, CirculationEvent::Borrow)?;
    Ok(())
}

/// Bring a borrowed item back
///
/// # Errors
///
/// Returns `CirculationError::ItemUnavailable` if the item was not borrowed.
pub fn return_item(item: &mut CatalogItem) -> Result<(), CirculationError> {
    apply(item, CirculationEvent::Return)?;
    Ok(())
}

/// Build the refusal error for `item`
fn refuse(item: &CatalogItem, reason: Refusal) -> CirculationError {
    tracing::debug!(id = %item.id, ?reason, "circulation refused");
    CirculationError::ItemUnavailable { id: item.id.clone(), title: item.title.clone(), reason }
}

#[cfg(test)]
mod tests;
