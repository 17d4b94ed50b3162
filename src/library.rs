use crate::{
    circulation::{self, CirculationEvent},
    error::{CatalogError, CirculationError},
    error_log::ErrorReporter,
    item::CatalogItem,
    registry::ItemRegistry,
    settings::Settings,
};

/// Everything a desk session works against: the catalog and its error log
#[derive(Debug, Clone)]
pub struct Library {
    /// Items on offer
    pub registry: ItemRegistry,
    /// Sink for failed operations
    pub reporter: ErrorReporter,
}

impl Default for Library {
    /// The built-in seed set logging to the default path
    fn default() -> Self {
        Self::new(ItemRegistry::seeded(), ErrorReporter::default())
    }
}

impl Library {
    /// Bundle a registry with a reporter
    #[must_use]
    pub fn new(registry: ItemRegistry, reporter: ErrorReporter) -> Self {
        Self { registry, reporter }
    }

    /// Build the library described by `settings`
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the configured seed catalog cannot be loaded.
    pub fn from_settings(settings: &Settings) -> Result<Self, CatalogError> {
        let registry = match &settings.catalog {
            Some(path) => ItemRegistry::load_from_file(path)?,
            None => ItemRegistry::seeded(),
        };
        Ok(Self::new(registry, ErrorReporter::new(&settings.error_log)))
    }

    /// Look `id` up and apply `event` to it, returning the item on success
    ///
    /// # Errors
    ///
    /// Returns `CirculationError::InvalidItem` for an unknown id and
    /// `CirculationError::ItemUnavailable` for an illegal transition.
    pub fn circulate(
        &mut self,
        id: &str,
        event: CirculationEvent,
    ) -> Result<&CatalogItem, CirculationError> {
        let item = self.registry.find_by_id_mut(id)?;
        circulation::apply(item, event)?;
        Ok(item)
    }

    /// Record a failed operation in the error log
    pub fn report(&self, error: &CirculationError) {
        self.reporter.log_error(&error.report());
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    #[allow(clippy::expect_used)]
    fn circulate_resolves_then_transitions() {
        let mut library = Library::default();
        let title = library
            .circulate("d001", CirculationEvent::Borrow)
            .map(|item| item.title.clone())
            .expect("D001 is seeded");
        assert_eq!(title, "The Matrix");
        assert!(library.registry.find_by_id("D001").expect("seeded").is_borrowed());
    }

    #[test]
    fn circulate_reports_unknown_ids() {
        let mut library = Library::default();
        let result = library.circulate("X1", CirculationEvent::Return);
        assert_eq!(result, Err(CirculationError::InvalidItem { id: "X1".to_string() }));
    }

    #[test]
    fn default_library_holds_the_seed_set() {
        let library = Library::default();
        assert_eq!(library.registry.len(), ItemRegistry::seeded().len());
        assert!(library.registry.find_by_id("B001").is_ok());
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn from_settings_honours_catalog_and_log_paths() {
        let dir = tempfile::tempdir().expect("temp dir");
        let catalog = dir.path().join("catalog.json");
        fs::write(
            &catalog,
            r#"[{"id":"M900","title":"Wired","kind":"periodical","issue_number":7}]"#,
        )
        .expect("write seed");

        let settings =
            Settings { error_log: dir.path().join("log.txt"), catalog: Some(catalog) };
        let library = Library::from_settings(&settings).expect("library builds");
        assert_eq!(library.registry.len(), 1);

        library.report(&CirculationError::InvalidItem { id: "nope".to_string() });
        let log = fs::read_to_string(dir.path().join("log.txt")).expect("log written");
        assert!(log.contains("INVALID ITEM: Invalid item ID: nope"));
    }
}
