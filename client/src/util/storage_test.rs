use super::*;

fn sample() -> LocationData {
    LocationData { city: "Florianópolis".into(), region_name: "Santa Catarina".into(), country: "Brasil".into() }
}

#[test]
fn memory_storage_starts_empty() {
    let store = MemoryStorage::new();
    assert!(store.is_empty());
    assert_eq!(store.get(LOCATION_STORAGE_KEY), None);
}

#[test]
fn memory_storage_set_then_get() {
    let store = MemoryStorage::new();
    store.set("k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));
    store.set("k", "w");
    assert_eq!(store.get("k").as_deref(), Some("w"));
    assert_eq!(store.len(), 1);
}

#[test]
fn with_entry_prepopulates() {
    let store = MemoryStorage::new().with_entry(LOCATION_STORAGE_KEY, "{}");
    assert_eq!(store.get(LOCATION_STORAGE_KEY).as_deref(), Some("{}"));
}

#[test]
fn has_saved_location_detects_any_non_empty_value() {
    assert!(!has_saved_location(&MemoryStorage::new()));
    assert!(!has_saved_location(&MemoryStorage::new().with_entry(LOCATION_STORAGE_KEY, "")));
    assert!(has_saved_location(&MemoryStorage::new().with_entry(LOCATION_STORAGE_KEY, "not json")));
}

#[test]
fn save_location_writes_camel_case_json() {
    let store = MemoryStorage::new();
    save_location(&store, &sample());
    let raw = store.get(LOCATION_STORAGE_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["regionName"], "Santa Catarina");
}

#[test]
fn load_location_reads_back_saved_value() {
    let store = MemoryStorage::new();
    save_location(&store, &sample());
    assert_eq!(load_location(&store), Some(sample()));
}

#[test]
fn load_location_ignores_garbage() {
    let store = MemoryStorage::new().with_entry(LOCATION_STORAGE_KEY, "not json");
    assert_eq!(load_location(&store), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_without_hydrate() {
    let store = BrowserStorage;
    store.set(LOCATION_STORAGE_KEY, "x");
    assert_eq!(store.get(LOCATION_STORAGE_KEY), None);
}
