//! Two-level minimal-edit reconciliation for [`GroupedCollection`].
//!
//! `replace_with` transforms a live collection in place into the shape of a
//! target snapshot. Level 1 diffs the two ordered key sequences to decide
//! which groups survive, where new groups slot in, and which survivors must
//! change ordinal position; survivors keep their [`Group`] instance. Level 2
//! diffs each surviving group's elements against the target's elements for
//! the same key under the caller's equivalence relation, removing, inserting,
//! and value-refreshing as needed.
//!
//! The whole transformation is recorded as a fine-grained change stream.
//! Indices in each record are valid at the moment of recording, so draining
//! and replaying the stream reproduces the final state exactly; a relocated
//! group appears in the stream as a removal, a re-insertion, and the
//! insertions of its contents, since the change vocabulary has no group move.

pub mod diff;

use std::collections::HashSet;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::change::Change;
use crate::collection::GroupedCollection;
use crate::equivalence::Equivalence;
use crate::group::Group;

use self::diff::{diff_sequences, longest_common_subsequence};

impl<K, T> GroupedCollection<K, T>
where
    K: Eq + Hash + Clone,
    T: Clone,
{
    /// Mutates this collection in place to match `target`, pairing elements
    /// under `comparer` (keys always match by exact equality).
    ///
    /// Returns `&mut self`: the same instance, transformed, so callers that
    /// retain a reference keep observing it. `target` is a read-only
    /// snapshot. An equivalent target is a no-op that records no changes;
    /// applying the same target twice yields the same state as applying it
    /// once.
    ///
    /// For every matched element the stored value becomes the *target's*
    /// value, so content differences the comparer cannot see (casing, say)
    /// are still picked up, silently.
    pub fn replace_with(&mut self, target: &Self, comparer: &impl Equivalence<T>) -> &mut Self {
        let target_keys: Vec<K> = target.keys().cloned().collect();

        let relocated = self.reconcile_groups(&target_keys);
        let (inserted, removed) =
            self.reconcile_elements(target, &target_keys, &relocated, comparer);

        debug!(
            groups = self.len(),
            groups_moved = relocated.len(),
            elements_inserted = inserted,
            elements_removed = removed,
            "applied replacement snapshot"
        );
        self
    }

    /// Level 1: align the group sequence with `target_keys`.
    ///
    /// Returns the keys of surviving groups that changed ordinal position;
    /// their contents must be replayed into the change stream by level 2.
    fn reconcile_groups(&mut self, target_keys: &[K]) -> HashSet<K> {
        let target_key_set: HashSet<&K> = target_keys.iter().collect();

        // Groups whose key vanished go first, highest index first, so every
        // recorded index is valid at the moment of recording.
        for i in (0..self.len()).rev() {
            if !target_key_set.contains(self[i].key()) {
                let group = self.remove_group_at(i);
                self.record(Change::GroupRemoved {
                    index: i,
                    key: group.into_key(),
                });
            }
        }

        // The LCS of the surviving key order against the target key order
        // picks the anchored groups: a largest set that can stay put without
        // perturbing each other's relative order. Everything else is slotted
        // in around the anchors.
        let surviving: Vec<K> = self.keys().cloned().collect();
        let common_in_target: Vec<K> = target_keys
            .iter()
            .filter(|key| self.position_of(key).is_some())
            .cloned()
            .collect();
        let anchored: HashSet<K> =
            longest_common_subsequence(&surviving, &common_in_target, |a, b| a == b)
                .into_iter()
                .map(|(i, _)| surviving[i].clone())
                .collect();

        let mut relocated = HashSet::new();
        let mut prev: Option<usize> = None;
        for key in target_keys {
            match self.position_of(key) {
                None => {
                    // Brand-new key: an empty group at the exact ordinal slot
                    // the target order implies. Level 2 populates it.
                    let slot = prev.map_or(0, |p| p + 1);
                    self.insert_group_at(slot, Group::new(key.clone()));
                    self.record(Change::GroupInserted {
                        index: slot,
                        key: key.clone(),
                    });
                }
                Some(_) if anchored.contains(key) => {}
                Some(at) => {
                    let want = prev.map_or(0, |p| p + 1);
                    if at != want {
                        trace!(from = at, to = want, "relocating group");
                        let group = self.remove_group_at(at);
                        self.record(Change::GroupRemoved {
                            index: at,
                            key: key.clone(),
                        });
                        let slot = if at < want { want - 1 } else { want };
                        self.insert_group_at(slot, group);
                        self.record(Change::GroupInserted {
                            index: slot,
                            key: key.clone(),
                        });
                        relocated.insert(key.clone());
                    }
                }
            }
            prev = self.position_of(key);
        }
        relocated
    }

    /// Level 2: inside every group of the (now target-ordered) sequence,
    /// diff the live elements against the target's elements for the same key
    /// and apply the edit script. A brand-new group takes the same path with
    /// an empty source side, so all of its elements arrive as insertions.
    fn reconcile_elements(
        &mut self,
        target: &Self,
        target_keys: &[K],
        relocated: &HashSet<K>,
        comparer: &impl Equivalence<T>,
    ) -> (usize, usize) {
        let mut inserted_total = 0;
        let mut removed_total = 0;

        for (gi, key) in target_keys.iter().enumerate() {
            debug_assert_eq!(self.position_of(key), Some(gi));
            let target_items = target[gi].items();
            let script = diff_sequences(self[gi].items(), target_items, |a, b| {
                comparer.equivalent(a, b)
            });
            // A relocated group re-entered the change stream empty, so its
            // per-element edits are not recorded; its final contents are
            // replayed wholesale below.
            let replay_as_fresh = relocated.contains(key);

            // Source-only elements out first, highest index first.
            for &si in script.removed.iter().rev() {
                let value = self.group_mut(gi).take_at(si);
                removed_total += 1;
                if !replay_as_fresh {
                    self.record(Change::ElementRemoved {
                        group: gi,
                        index: si,
                        value,
                    });
                }
            }

            // Matched elements adopt the target's value in place. After the
            // removals above, a matched element sits at its source index minus
            // the removed elements before it.
            let mut removed_before = 0;
            for &(si, ti) in &script.matched {
                while removed_before < script.removed.len() && script.removed[removed_before] < si
                {
                    removed_before += 1;
                }
                self.group_mut(gi)
                    .set_at(si - removed_before, target_items[ti].clone());
            }

            // Target-only elements in ascending target order land directly at
            // their final positions.
            for &ti in &script.inserted {
                let value = target_items[ti].clone();
                inserted_total += 1;
                self.group_mut(gi).put_at(ti, value.clone());
                if !replay_as_fresh {
                    self.record(Change::ElementInserted {
                        group: gi,
                        index: ti,
                        value,
                    });
                }
            }

            if replay_as_fresh {
                let snapshot: Vec<T> = self[gi].iter().cloned().collect();
                for (ei, value) in snapshot.into_iter().enumerate() {
                    self.record(Change::ElementInserted {
                        group: gi,
                        index: ei,
                        value,
                    });
                }
            }
        }
        (inserted_total, removed_total)
    }
}
