use crate::aggregate::{FrequencyTable, Ranked};
use pretty_assertions::assert_eq;

fn ranked(name: &str, count: u64) -> Ranked<String> {
    Ranked {
        name: name.to_string(),
        count,
    }
}

#[test]
fn counts_and_distinct_keys() {
    // Arrange
    let mut table: FrequencyTable<String> = FrequencyTable::new();

    // Act
    table.increment("a");
    table.increment("b");
    table.increment("a");
    table.add("c", 10);

    // Assert
    assert_eq!(table.get("a"), 2);
    assert_eq!(table.get("b"), 1);
    assert_eq!(table.get("c"), 10);
    assert_eq!(table.get("missing"), 0);
    assert_eq!(table.len(), 3);
    assert_eq!(table.total(), 13);
}

#[test]
fn iteration_follows_first_seen_order() {
    // Arrange
    let mut table: FrequencyTable<String> = FrequencyTable::new();
    for key in ["z", "a", "m", "a", "z"] {
        table.increment(key);
    }

    // Act
    let keys: Vec<_> = table.iter().map(|(k, _)| k.as_str()).collect();

    // Assert
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn top_k_sorts_descending_and_truncates() {
    // Arrange
    let mut table: FrequencyTable<String> = FrequencyTable::new();
    table.add("low", 1);
    table.add("high", 5);
    table.add("mid", 3);

    // Act
    let top = table.top_k(2);

    // Assert
    assert_eq!(top, vec![ranked("high", 5), ranked("mid", 3)]);
}

#[test]
fn top_k_breaks_ties_by_first_seen() {
    // Arrange
    let mut table: FrequencyTable<String> = FrequencyTable::new();
    table.increment("/b-first");
    table.increment("/a-second");
    table.increment("/c-third");
    table.increment("/c-third");

    // Act
    let top = table.top_k(3);

    // Assert
    assert_eq!(
        top,
        vec![
            ranked("/c-third", 2),
            ranked("/b-first", 1),
            ranked("/a-second", 1),
        ]
    );
}

#[test]
fn top_k_larger_than_table_returns_everything() {
    // Arrange
    let mut table: FrequencyTable<u32> = FrequencyTable::new();
    table.increment(&404);

    // Act
    let top = table.top_k(50);

    // Assert
    assert_eq!(top, vec![Ranked { name: 404, count: 1 }]);
}

#[test]
fn top_zero_is_empty() {
    let mut table: FrequencyTable<String> = FrequencyTable::new();
    table.increment("x");

    assert!(table.top_k(0).is_empty());
}

#[test]
fn sorted_by_key_is_lexicographic() {
    // Arrange
    let mut table: FrequencyTable<String> = FrequencyTable::new();
    for key in ["unknown", "2023-10-11 01:00", "2023-10-10 23:00"] {
        table.increment(key);
    }

    // Act
    let keys: Vec<_> = table.sorted_by_key().into_iter().map(|r| r.name).collect();

    // Assert
    assert_eq!(keys, vec!["2023-10-10 23:00", "2023-10-11 01:00", "unknown"]);
}

#[test]
fn add_saturates_instead_of_overflowing() {
    // Arrange
    let mut table: FrequencyTable<String> = FrequencyTable::new();
    table.add("a", u64::MAX);
    table.add("b", 1);

    // Act
    table.add("a", u64::MAX);

    // Assert
    assert_eq!(table.get("a"), u64::MAX);
    assert_eq!(table.total(), u64::MAX);
}
