//! replace_with reconciliation tests.
//!
//! These follow the original behavioral scenarios: a live collection grouped
//! by first character is periodically replaced with a freshly built snapshot
//! under a case-insensitive comparer, and must end up matching the snapshot
//! exactly while keeping untouched groups undisturbed.

use regroup::GroupedCollection;

use crate::helpers::*;

#[test]
fn test_identical_replacement_has_no_effect() {
    let mut sut = grouped(&FRUITS);
    let replacement = grouped(&FRUITS);

    let returned: *const GroupedCollection<char, String> = sut.replace_with(&replacement, &caseless);

    assert!(std::ptr::eq(returned, &sut));
    assert_eq!(items_of(&sut), FRUITS);
    assert!(sut.drain_changes().is_empty());
}

#[test]
fn test_sole_item_missing_removes_group() {
    let mut sut = grouped(&FRUITS);
    let replacement = grouped(&["Apple", "Pear", "Pineapple"]);

    sut.replace_with(&replacement, &caseless);

    assert_eq!(keys_of(&sut), ['A', 'P']);
    assert_eq!(items_of(&sut), items_of(&replacement));
}

#[test]
fn test_reordered_items_within_group() {
    let mut sut = grouped(&FRUITS);
    let replacement = grouped(&["Apple", "Banana", "Pineapple", "Pear"]);

    sut.replace_with(&replacement, &caseless);

    assert_eq!(keys_of(&sut), ['A', 'B', 'P']);
    assert_eq!(items_of(&sut), items_of(&replacement));
}

#[test]
fn test_new_item_at_start_of_group() {
    let mut sut = grouped(&FRUITS);
    // "Peach" lands at the front of the 'P' group.
    let target = ["Apple", "Banana", "Peach", "Pear", "Pineapple"];
    let replacement = grouped(&target);

    sut.replace_with(&replacement, &caseless);

    assert_eq!(keys_of(&sut), ['A', 'B', 'P']);
    assert_eq!(items_of(&sut), target);
}

#[test]
fn test_new_item_in_middle_of_group() {
    let mut sut = grouped(&FRUITS);
    let target = ["Apple", "Banana", "Pear", "Pzzz", "Pineapple"];
    let replacement = grouped(&target);

    sut.replace_with(&replacement, &caseless);

    assert_eq!(keys_of(&sut), ['A', 'B', 'P']);
    assert_eq!(items_of(&sut), target);
}

#[test]
fn test_replacement_reduced_to_single_restructured_group() {
    let mut sut = grouped(&FRUITS);
    let target = ["Potato", "Pineapple", "Plant", "Pear"];
    let replacement = grouped(&target);

    sut.replace_with(&replacement, &caseless);

    assert_eq!(keys_of(&sut), ['P']);
    assert_eq!(items_of(&sut), target);
}

#[test]
fn test_new_group_at_end_of_current_groups() {
    let mut sut = grouped(&FRUITS);
    let target = ["Apple", "Banana", "Pear", "Pineapple", "Radish", "Raspberry"];
    let replacement = grouped(&target);

    sut.replace_with(&replacement, &caseless);

    assert_eq!(keys_of(&sut), ['A', 'B', 'P', 'R']);
    assert_eq!(items_of(&sut), target);
}

#[test]
fn test_new_group_at_start_of_current_groups() {
    let mut sut = grouped(&FRUITS);
    let target = ["0number2", "0number", "Apple", "Banana", "Pear", "Pineapple"];
    let replacement = grouped(&target);

    sut.replace_with(&replacement, &caseless);

    // The new leading key comes first without disturbing the relative order
    // of the existing groups.
    assert_eq!(keys_of(&sut), ['0', 'A', 'B', 'P']);
    assert_eq!(items_of(&sut), target);
}

#[test]
fn test_group_order_follows_target() {
    let mut sut = grouped(&["Apple", "Banana"]);
    let replacement = grouped(&["Banana", "Apple"]);

    sut.replace_with(&replacement, &caseless);

    assert_eq!(keys_of(&sut), ['B', 'A']);
    assert_eq!(items_of(&sut), ["Banana", "Apple"]);
}

#[test]
fn test_matched_element_adopts_target_casing() {
    let mut sut = grouped(&FRUITS);
    // Recased within each key: "PEAR" and "PineApple" still derive 'P', so
    // every key and every element pairs up under the comparer.
    let replacement = grouped(&["Apple", "Banana", "PEAR", "PineApple"]);

    sut.replace_with(&replacement, &caseless);

    // Content equivalent under the comparer: structurally a no-op, but the
    // stored values are refreshed from the target.
    assert!(sut.drain_changes().is_empty());
    assert_eq!(items_of(&sut), ["Apple", "Banana", "PEAR", "PineApple"]);
}

#[test]
fn test_replacement_with_empty_target() {
    let mut sut = grouped(&FRUITS);
    let replacement = GroupedCollection::new(first_char);

    sut.replace_with(&replacement, &caseless);

    assert!(sut.is_empty());
}

#[test]
fn test_replacement_of_empty_source() {
    let mut sut = GroupedCollection::new(first_char);
    let replacement = grouped(&FRUITS);

    sut.replace_with(&replacement, &caseless);

    assert_eq!(keys_of(&sut), ['A', 'B', 'P']);
    assert_eq!(items_of(&sut), FRUITS);
}

#[test]
fn test_idempotent_when_applied_twice() {
    let target = ["Radish", "Pineapple", "0number", "Pear", "Apple"];
    let replacement = grouped(&target);

    let mut sut = grouped(&FRUITS);
    sut.replace_with(&replacement, &caseless);
    let after_once = (keys_of(&sut), items_of(&sut));

    sut.drain_changes();
    sut.replace_with(&replacement, &caseless);

    assert_eq!((keys_of(&sut), items_of(&sut)), after_once);
    assert!(sut.drain_changes().is_empty());
}

#[test]
fn test_flattened_result_always_matches_target() {
    let scenarios: &[&[&str]] = &[
        &[],
        &["Apple"],
        &["Banana", "Apple"],
        &["Pineapple", "Pear", "Peach"],
        &["Radish", "Apple", "Pineapple", "Pear", "0x"],
        &["Zebra", "zest", "Apple", "apricot", "Banana"],
        &["Pear", "Pear", "Pear"],
    ];

    for target in scenarios {
        let mut sut = grouped(&FRUITS);
        let replacement = grouped(target);

        sut.replace_with(&replacement, &caseless);

        assert_eq!(keys_of(&sut), keys_of(&replacement), "keys for {target:?}");
        assert_eq!(
            items_of(&sut),
            items_of(&replacement),
            "items for {target:?}"
        );
    }
}
