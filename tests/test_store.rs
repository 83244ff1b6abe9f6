use rand::distributions::Alphanumeric;
use rand::Rng;
use rstest::{fixture, rstest};
use std::sync::Arc;
use tinykv::{Store, StoreBase};

#[fixture]
fn store() -> Store {
    Store::new()
}

fn random_key(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[rstest]
#[case("missing")]
#[case("")]
#[case("ключ")]
fn test_get_absent_key_is_empty(store: Store, #[case] key: &str) {
    assert_eq!(store.get(key), "");
}

#[rstest]
#[case("a", "1")]
#[case("name", "John")]
#[case("k", "")]
fn test_set_then_get(store: Store, #[case] key: &str, #[case] value: &str) {
    store.set(key.to_string(), value.to_string());

    // An empty value reads back exactly like an absent key
    assert_eq!(store.get(key), value);
}

#[rstest]
fn test_set_overwrites(store: Store) {
    store.set("a".to_string(), "1".to_string());
    store.set("a".to_string(), "2".to_string());

    assert_eq!(store.get("a"), "2");
    assert_eq!(store.len(), 1);
}

#[rstest]
fn test_update_inserts_absent_key(store: Store) {
    store.update("fresh".to_string(), "v".to_string());

    assert_eq!(store.get("fresh"), "v");
}

#[rstest]
fn test_update_overwrites_like_set(store: Store) {
    store.set("a".to_string(), "1".to_string());
    store.update("a".to_string(), "2".to_string());

    assert_eq!(store.get("a"), "2");
}

#[rstest]
fn test_delete(store: Store) {
    store.set("a".to_string(), "1".to_string());
    store.delete("a");

    assert_eq!(store.get("a"), "");
    assert!(store.is_empty());
}

#[rstest]
fn test_delete_absent_key_is_noop(store: Store) {
    store.set("kept".to_string(), "1".to_string());
    store.delete("missing");

    assert_eq!(store.get("kept"), "1");
    assert_eq!(store.len(), 1);
}

#[rstest]
fn test_clones_share_map(store: Store) {
    let other = store.clone();
    other.set("a".to_string(), "1".to_string());

    assert_eq!(store.get("a"), "1");
}

#[rstest]
fn test_new_stores_are_isolated() {
    let first = Store::new();
    let second = Store::new();
    first.set("x".to_string(), "1".to_string());

    assert_eq!(second.get("x"), "");
}

#[rstest]
fn test_concurrent_sets_on_disjoint_keys(store: Store) {
    let store = Arc::new(store);
    let keys: Vec<String> = (0..64).map(|i| format!("{}-{}", i, random_key(8))).collect();

    std::thread::scope(|scope| {
        for chunk in keys.chunks(8) {
            let store = Arc::clone(&store);
            scope.spawn(move || {
                for key in chunk {
                    store.set(key.clone(), key.to_uppercase());
                }
            });
        }
    });

    assert_eq!(store.len(), keys.len());
    for key in &keys {
        assert_eq!(store.get(key), key.to_uppercase());
    }
}

#[rstest]
fn test_concurrent_readers_and_writer(store: Store) {
    store.set("shared".to_string(), "0".to_string());

    std::thread::scope(|scope| {
        let writer = store.clone();
        scope.spawn(move || {
            for i in 1..=100 {
                writer.update("shared".to_string(), i.to_string());
            }
        });

        for _ in 0..4 {
            let reader = store.clone();
            scope.spawn(move || {
                for _ in 0..100 {
                    // Never a torn or missing value, only some whole write
                    let value: u32 = reader.get("shared").parse().unwrap();
                    assert!(value <= 100);
                }
            });
        }
    });

    assert_eq!(store.get("shared"), "100");
}
