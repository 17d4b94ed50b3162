use crate::{
    circulation::{CirculationEvent, apply, borrow, return_item},
    error::{CirculationError, Refusal},
    item::{CatalogItem, ItemState},
    registry::ItemRegistry,
};

/// Helper function to set up a single available book
fn gatsby() -> CatalogItem {
    CatalogItem::book("B001", "The Great Gatsby", "F. Scott Fitzgerald", "978-0-7432-7356-5")
}

#[test]
fn test_borrow_available_item() {
    let mut item = gatsby();
    assert_eq!(borrow(&mut item), Ok(()));
    assert_eq!(item.state(), ItemState::Borrowed);
}

#[test]
fn test_double_borrow_is_refused() {
    let mut item = gatsby();
    assert!(borrow(&mut item).is_ok());

    let result = borrow(&mut item);
    assert_eq!(
        result,
        Err(CirculationError::ItemUnavailable {
            id: "B001".to_string(),
            title: "The Great Gatsby".to_string(),
            reason: Refusal::AlreadyBorrowed,
        })
    );

    // State should still be Borrowed
    assert_eq!(item.state(), ItemState::Borrowed);
}

#[test]
fn test_return_borrowed_item() {
    let mut item = gatsby();
    assert!(borrow(&mut item).is_ok());
    assert_eq!(return_item(&mut item), Ok(()));
    assert_eq!(item.state(), ItemState::Available);
}

#[test]
fn test_return_available_item_is_refused() {
    let mut item = CatalogItem::periodical("M001", "National Geographic", 245);
    let result = return_item(&mut item);
    assert!(matches!(
        result,
        Err(CirculationError::ItemUnavailable { reason: Refusal::NotBorrowed, .. })
    ));
    assert_eq!(item.state(), ItemState::Available);
}

#[test]
fn test_borrow_then_return_restores_state() {
    let mut item = CatalogItem::disc("D002", "Inception", 148);
    let before = item.clone();
    assert_eq!(apply(&mut item, CirculationEvent::Borrow), Ok(ItemState::Borrowed));
    assert_eq!(apply(&mut item, CirculationEvent::Return), Ok(ItemState::Available));
    assert_eq!(item, before);
}

#[test]
#[allow(clippy::expect_used)]
fn test_gatsby_scenario_through_registry() {
    let mut registry = ItemRegistry::seeded();

    let item = registry.find_by_id_mut("B001").expect("B001 is seeded");
    assert!(borrow(item).is_ok());
    assert!(registry.find_by_id("b001").expect("B001 is seeded").is_borrowed());

    let item = registry.find_by_id_mut("b001").expect("B001 is seeded");
    assert!(matches!(borrow(item), Err(CirculationError::ItemUnavailable { .. })));

    let item = registry.find_by_id_mut("B001").expect("B001 is seeded");
    assert!(return_item(item).is_ok());
    assert!(!registry.find_by_id("B001").expect("B001 is seeded").is_borrowed());

    assert!(matches!(
        registry.find_by_id("Z999"),
        Err(CirculationError::InvalidItem { id }) if id == "Z999"
    ));
}

#[test]
fn test_transitions_touch_only_the_target() {
    let mut registry = ItemRegistry::seeded();
    if let Ok(item) = registry.find_by_id_mut("M002") {
        assert!(borrow(item).is_ok());
    }
    let borrowed: Vec<&str> =
        registry.all().iter().filter(|item| item.is_borrowed()).map(|item| item.id.as_str()).collect();
    assert_eq!(borrowed, ["M002"]);
}

#[test]
fn test_event_wording() {
    assert_eq!(CirculationEvent::Borrow.past_tense(), "borrowed");
    assert_eq!(CirculationEvent::Return.to_string(), "return");
}
