use sealed_common::ErrorKind;

use crate::{Sequence, SequenceBuilder};

fn sealed<T: Clone>(values: &[T]) -> Sequence<T> {
    let mut builder = SequenceBuilder::new();
    builder.extend_from_slice(values);
    builder.seal()
}

#[test]
fn test_default_is_empty() {
    let seq = Sequence::<i64>::default();
    assert_eq!(seq.len(), 0);
    assert!(seq.is_empty());
    assert_eq!(seq.first(), None);
    assert_eq!(seq.last(), None);
    assert_eq!(seq.first_or_default(), 0);
    assert_eq!(seq.last_or_default(), 0);
    assert!(seq.try_get(0).is_err());
    assert_eq!(seq.iter().count(), 0);
    assert_eq!(seq, Sequence::empty());
}

#[test]
fn test_first_last() {
    let seq = sealed(&[4, 5, 6]);
    assert_eq!(seq.first(), Some(&4));
    assert_eq!(seq.last(), Some(&6));
    assert_eq!(seq.first_or_default(), 4);
    assert_eq!(seq.last_or_default(), 6);

    let single = sealed(&["only"]);
    assert_eq!(single.first(), single.last());
}

#[test]
fn test_try_get() {
    let seq = sealed(&[10, 20]);
    assert_eq!(*seq.try_get(1).unwrap(), 20);
    let err = seq.try_get(2).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::IndexOutOfRange { index: 2, len: 2 }
    ));
}

#[test]
#[should_panic(expected = "index 3 out of range for sequence of length 3")]
fn test_get_out_of_range_panics() {
    let seq = sealed(&[1, 2, 3]);
    seq.get(3);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_index_out_of_range_panics() {
    let seq = Sequence::<u8>::default();
    let _ = seq[0];
}

#[test]
fn test_iter_early_stop_and_restart() {
    let seq = sealed(&['a', 'b', 'c', 'd']);
    let mut visited = Vec::new();
    for (i, &c) in &seq {
        if c == 'c' {
            break;
        }
        visited.push(i);
    }
    assert_eq!(visited, vec![0, 1]);

    let all = seq.iter().map(|(_, &c)| c).collect::<String>();
    assert_eq!(all, "abcd");
    assert_eq!(seq.values().rev().collect::<String>(), "dcba");
}

#[test]
fn test_search() {
    let seq = sealed(&[3, 1, 4, 1, 5]);
    assert!(seq.contains(&4));
    assert!(!seq.contains(&9));
    assert_eq!(seq.index_of(&1), Some(1));
    assert_eq!(seq.position(|&v| v > 3), Some(2));
    assert_eq!(seq.position(|&v| v > 5), None);
}

#[test]
fn test_slice() {
    let seq = sealed(&[1, 2, 3, 4, 5]);
    assert_eq!(seq.slice(1..4), &[2, 3, 4]);
    assert_eq!(seq.slice(..2), &[1, 2]);
    assert_eq!(seq.slice(3..), &[4, 5]);
    assert_eq!(seq.slice(..=0), &[1]);
    assert!(seq.slice(5..).is_empty());
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_slice_out_of_bounds() {
    let seq = sealed(&[1, 2, 3]);
    seq.slice(2..4);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_slice_inclusive_end_at_usize_max() {
    let seq = sealed(&[1, 2, 3]);
    seq.slice(0..=usize::MAX);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_slice_excluded_start_at_usize_max() {
    use std::ops::Bound;
    let seq = sealed(&[1, 2, 3]);
    seq.slice((Bound::Excluded(usize::MAX), Bound::Unbounded));
}

#[test]
fn test_clone_is_independent() {
    let seq = sealed(&[String::from("x"), String::from("y")]);
    let copy = seq.clone();
    assert_eq!(seq, copy);
    assert_ne!(seq.as_slice().as_ptr(), copy.as_slice().as_ptr());
}

#[test]
fn test_into_iter_by_value() {
    let seq = sealed(&[1, 2, 3]);
    let doubled = seq.into_iter().map(|v| v * 2).collect::<Vec<_>>();
    assert_eq!(doubled, vec![2, 4, 6]);
}

#[test]
fn test_to_vec_and_into_vec() {
    let seq = sealed(&[7u16, 8]);
    let copied = seq.to_vec();
    assert_eq!(copied, seq.into_vec());
}

#[test]
fn test_debug_format() {
    let seq = sealed(&[1, 2]);
    assert_eq!(format!("{seq:?}"), "Sequence([1, 2])");
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_json() {
    let seq = sealed(&[3, 2, 1]);
    let json = serde_json::to_string(&seq).unwrap();
    assert_eq!(json, "[3,2,1]");

    let back: Sequence<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, seq);

    let empty: Sequence<i32> = serde_json::from_str("[]").unwrap();
    assert!(empty.is_empty());
}
