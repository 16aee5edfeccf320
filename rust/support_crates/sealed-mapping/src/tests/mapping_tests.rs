use crate::{MapBuilder, Mapping};

fn sealed(pairs: &[(&'static str, i32)]) -> Mapping<&'static str, i32> {
    let mut builder = MapBuilder::new();
    builder.collect_from(pairs.iter().copied());
    builder.seal()
}

#[test]
fn test_default_is_empty() {
    let map = Mapping::<String, u32>::default();
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    assert_eq!(map.get("x"), None);
    assert!(!map.contains("x"));
    assert_eq!(*map.get_or("x", &5), 5);
    assert_eq!(map.iter().count(), 0);
}

#[test]
fn test_lookups() {
    let map = sealed(&[("a", 1), ("b", 2)]);
    assert_eq!(map.get("a"), Some(&1));
    assert_eq!(map.get("c"), None);
    assert_eq!(*map.get_or("b", &0), 2);
    assert_eq!(*map.get_or("c", &-1), -1);
    assert!(map.contains("a"));
    assert!(map.contains_key("b"));
    assert!(!map.contains("c"));
}

#[test]
#[should_panic(expected = "key not present")]
fn test_index_missing_key_panics() {
    let map = sealed(&[("a", 1)]);
    let _ = map["b"];
}

#[test]
fn test_iter_visits_every_entry_once() {
    let map = sealed(&[("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
    let mut pairs = map.iter().map(|(&k, &v)| (k, v)).collect::<Vec<_>>();
    pairs.sort();
    assert_eq!(pairs, vec![("a", 1), ("b", 2), ("c", 3), ("d", 4)]);

    let mut keys = map.keys().copied().collect::<Vec<_>>();
    keys.sort();
    assert_eq!(keys, vec!["a", "b", "c", "d"]);
    assert_eq!(map.values().sum::<i32>(), 10);
}

#[test]
fn test_iter_early_stop() {
    let map = sealed(&[("a", 1), ("b", 2), ("c", 3)]);
    let mut seen = 0;
    for (_, v) in &map {
        seen += 1;
        if *v > 0 {
            break;
        }
    }
    assert_eq!(seen, 1);
}

#[test]
fn test_equality_ignores_insertion_order() {
    let left = sealed(&[("a", 1), ("b", 2)]);
    let right = sealed(&[("b", 2), ("a", 1)]);
    assert_eq!(left, right);
    assert_ne!(left, sealed(&[("a", 1)]));
}

#[test]
fn test_clone_is_independent() {
    let map = sealed(&[("a", 1)]);
    let copy = map.clone();
    let mut owned = copy.into_hash_map();
    owned.insert("b", 2);
    assert_eq!(map.len(), 1);
    assert!(!map.contains("b"));
}

#[test]
fn test_into_iter_by_value() {
    let map = sealed(&[("a", 1), ("b", 2)]);
    let mut pairs = map.into_iter().collect::<Vec<_>>();
    pairs.sort();
    assert_eq!(pairs, vec![("a", 1), ("b", 2)]);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_json() {
    let map = sealed(&[("a", 1), ("b", 2)]);
    let json = serde_json::to_string(&map).unwrap();
    let back: Mapping<String, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), 2);
    assert_eq!(back.get("a"), Some(&1));
    assert_eq!(back.get("b"), Some(&2));

    let empty: Mapping<String, i32> = serde_json::from_str("{}").unwrap();
    assert!(empty.is_empty());
}
