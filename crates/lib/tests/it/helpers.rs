use regroup::GroupedCollection;

/// The small fixture set the original scenarios are built around: groups
/// 'A' = [Apple], 'B' = [Banana], 'P' = [Pear, Pineapple].
pub const FRUITS: [&str; 4] = ["Apple", "Banana", "Pear", "Pineapple"];

/// Key derivation used throughout: group strings by first character.
pub fn first_char(s: &String) -> char {
    s.chars().next().expect("test items are non-empty")
}

/// ASCII-case-insensitive element equivalence.
pub fn caseless(a: &String, b: &String) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Builds a collection grouped by first character from string literals.
pub fn grouped(items: &[&str]) -> GroupedCollection<char, String> {
    GroupedCollection::with_items(first_char, items.iter().map(|s| s.to_string()))
}

pub fn keys_of(c: &GroupedCollection<char, String>) -> Vec<char> {
    c.keys().copied().collect()
}

pub fn items_of(c: &GroupedCollection<char, String>) -> Vec<String> {
    c.iter_items().cloned().collect()
}

/// Flat `(key, elements)` mirror of the grouped state, the shape an observer
/// maintaining shadow state would keep.
pub fn mirror_of(c: &GroupedCollection<char, String>) -> Vec<(char, Vec<String>)> {
    (0..c.len())
        .map(|i| (*c[i].key(), c[i].iter().cloned().collect()))
        .collect()
}
