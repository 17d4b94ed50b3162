use std::{fs::File, io::Read, path::Path};

use crate::{
    error::{CatalogError, CirculationError},
    item::CatalogItem,
};

/// Ordered collection of catalog items, fixed at startup
#[derive(Debug, Clone)]
pub struct ItemRegistry {
    /// Items in insertion order
    items: Vec<CatalogItem>,
}

impl ItemRegistry {
    /// Build a registry, rejecting duplicate ids and blank titles
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two items share an id
    /// (ignoring case), or `CatalogError::EmptyTitle` for a blank title.
    pub fn from_items(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        for (pos, item) in items.iter().enumerate() {
            if item.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(item.id.clone()));
            }
            if items.iter().take(pos).any(|earlier| earlier.matches_id(&item.id)) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    /// The built-in seed set
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            items: vec![
                CatalogItem::book(
                    "B001",
                    "The Great Gatsby",
                    "F. Scott Fitzgerald",
                    "978-0-7432-7356-5",
                ),
                CatalogItem::book("B002", "To Kill a Mockingbird", "Harper Lee", "978-0-06-112008-4"),
                CatalogItem::book("B003", "1984", "George Orwell", "978-0-452-28423-4"),
                CatalogItem::periodical("M001", "National Geographic", 245),
                CatalogItem::periodical("M002", "TIME Magazine", 52),
                CatalogItem::disc("D001", "The Matrix", 136),
                CatalogItem::disc("D002", "Inception", 148),
            ],
        }
    }

    /// Read a seed set from a JSON array of items
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if:
    /// - The file cannot be opened or read
    /// - The JSON parsing fails
    /// - The items violate id uniqueness or have blank titles
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let mut file = File::open(path)
            .map_err(|source| CatalogError::Read { path: path.to_path_buf(), source })?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|source| CatalogError::Read { path: path.to_path_buf(), source })?;

        let items: Vec<CatalogItem> = serde_json::from_str(&contents)
            .map_err(|source| CatalogError::Parse { path: path.to_path_buf(), source })?;

        tracing::debug!(path = %path.display(), count = items.len(), "loaded catalog seed");
        Self::from_items(items)
    }

    /// All items in insertion order
    #[must_use]
    pub fn all(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resolve an id to its item, ignoring case
    ///
    /// # Errors
    ///
    /// Returns `CirculationError::InvalidItem` if no item has that id.
    pub fn find_by_id(&self, id: &str) -> Result<&CatalogItem, CirculationError> {
        self.items
            .iter()
            .find(|item| item.matches_id(id))
            .ok_or_else(|| CirculationError::InvalidItem { id: id.to_string() })
    }

    /// Resolve an id to its item for a state change
    ///
    /// # Errors
    ///
    /// Returns `CirculationError::InvalidItem` if no item has that id.
    pub fn find_by_id_mut(&mut self, id: &str) -> Result<&mut CatalogItem, CirculationError> {
        self.items
            .iter_mut()
            .find(|item| item.matches_id(id))
            .ok_or_else(|| CirculationError::InvalidItem { id: id.to_string() })
    }
}
