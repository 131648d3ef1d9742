use event_management::{GuardErrorKind, Venue};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn convention_center() -> Venue {
    Venue::new(1, "Centro de Convenções", "Rua Principal, 123", 500).unwrap()
}

#[test]
fn test_new_with_valid_data() {
    let venue = convention_center();

    assert_eq!(venue.venue_id(), 1);
    assert_eq!(venue.name(), "Centro de Convenções");
    assert_eq!(venue.address(), "Rua Principal, 123");
    assert_eq!(venue.capacity(), 500);
    assert_eq!(venue.description(), None);
}

#[test]
fn test_new_trims_name_and_address() {
    let venue = Venue::new(1, "  Auditório  ", "  Rua das Flores, 500 ", 200).unwrap();

    assert_eq!(venue.name(), "Auditório");
    assert_eq!(venue.address(), "Rua das Flores, 500");
}

#[test]
fn test_new_rejects_non_positive_id_and_capacity() {
    for value in [0, -1] {
        let err = Venue::new(value, "Centro", "Rua Principal, 123", 500).unwrap_err();
        assert_eq!(err.kind(), GuardErrorKind::OutOfRange);
        assert_eq!(err.param(), "venueId");

        let err = Venue::new(1, "Centro", "Rua Principal, 123", value).unwrap_err();
        assert_eq!(err.kind(), GuardErrorKind::OutOfRange);
        assert_eq!(err.param(), "capacity");
    }
}

#[test]
fn test_new_rejects_blank_name_and_address() {
    for blank in ["", "   "] {
        let err = Venue::new(1, blank, "Rua Principal, 123", 500).unwrap_err();
        assert_eq!(err.kind(), GuardErrorKind::InvalidArgument);
        assert_eq!(err.param(), "name");

        let err = Venue::new(1, "Centro", blank, 500).unwrap_err();
        assert_eq!(err.kind(), GuardErrorKind::InvalidArgument);
        assert_eq!(err.param(), "address");
    }
}

#[test]
fn test_new_checks_fields_in_order() {
    assert_eq!(Venue::new(0, "", "", 0).unwrap_err().param(), "venueId");
    assert_eq!(Venue::new(1, "", "", 0).unwrap_err().param(), "name");
    assert_eq!(Venue::new(1, "x", "", 0).unwrap_err().param(), "address");
    assert_eq!(Venue::new(1, "x", "y", 0).unwrap_err().param(), "capacity");
}

#[test]
fn test_set_description() {
    let mut venue = convention_center();

    venue.set_description("  Local moderno com infraestrutura completa  ");
    assert_eq!(
        venue.description(),
        Some("Local moderno com infraestrutura completa")
    );

    for blank in [None, Some(""), Some("   ")] {
        venue.set_description("algo");
        venue.set_description(blank);
        assert_eq!(venue.description(), None);
    }
}

#[test]
fn test_parking_info_renders_empty_when_absent() {
    let mut venue = convention_center();
    assert_eq!(venue.parking_info(), "");

    venue.set_parking_info("Estacionamento subterrâneo");
    assert_eq!(venue.parking_info(), "Estacionamento subterrâneo");

    venue.set_parking_info(None);
    assert_eq!(venue.parking_info(), "");
}

#[test]
fn test_default_venue() {
    let first = Venue::default_venue();
    let second = Venue::default_venue();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Venue::is_default(&first));
    assert_eq!(first.venue_id(), 0);
    assert_eq!(first.name(), "Evento Online");
    assert_eq!(first.address(), "Virtual");
    assert_eq!(first.capacity(), 1000);
}

#[test]
fn test_regular_venue_is_not_default() {
    let venue = Arc::new(convention_center());
    assert!(!Venue::is_default(&venue));
}

#[test]
fn test_equality_uses_id_only() {
    let a = Venue::new(1, "Local A", "Endereço A", 100).unwrap();
    let b = Venue::new(1, "Local B", "Endereço B", 200).unwrap();
    let c = Venue::new(2, "Local A", "Endereço A", 100).unwrap();

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, c);
}

#[test]
fn test_display() {
    assert_eq!(
        convention_center().to_string(),
        "Centro de Convenções - Rua Principal, 123 (Capacidade: 500)"
    );
    assert_eq!(
        Venue::default_venue().to_string(),
        "Evento Online - Virtual (Capacidade: 1000)"
    );
}
