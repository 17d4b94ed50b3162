//! Library circulation desk.
//!
//! This crate keeps an in-memory catalog of books, periodicals and discs,
//! moves items between available and borrowed, and drives both through an
//! interactive menu session that logs every failed request to a text file.

pub mod circulation;
pub mod error;
pub mod error_log;
pub mod item;
pub mod library;
pub mod registry;
pub mod session;
pub mod settings;
pub mod telemetry;

pub use circulation::CirculationEvent;
pub use error::{CatalogError, CirculationError};
pub use error_log::ErrorReporter;
pub use item::{CatalogItem, ItemKind, ItemState};
pub use library::Library;
pub use registry::ItemRegistry;
pub use session::Session;
pub use settings::Settings;
