//! Orientation key to correct button
//!
//! Hand-enumerated data, not derived from any rule.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::orientation::{Orientation, Slot};

/// Raw table: (orientation key, correct button index)
static SOLUTION_ENTRIES: [(&str, usize); 24] = [
    ("3102", 0),
    ("1320", 2),
    ("0213", 1),
    ("2103", 2),
    ("3120", 3),
    ("2013", 0),
    ("3210", 1),
    ("2031", 1),
    ("1032", 2),
    ("3021", 3),
    ("0123", 3),
    ("2130", 1),
    ("1203", 0),
    ("1302", 3),
    ("0231", 3),
    ("0321", 2),
    ("3201", 1),
    ("3012", 2),
    ("0312", 0),
    ("0132", 1),
    ("1230", 3),
    ("2301", 0),
    ("2310", 2),
    ("1023", 0),
];

static SOLUTIONS: LazyLock<HashMap<&'static str, Slot>> = LazyLock::new(|| {
    SOLUTION_ENTRIES
        .iter()
        .filter_map(|&(key, index)| Slot::from_index(index).map(|slot| (key, slot)))
        .collect()
});

/// Table entries in declaration order
pub fn entries() -> impl Iterator<Item = (&'static str, Slot)> {
    SOLUTION_ENTRIES
        .iter()
        .filter_map(|&(key, index)| Slot::from_index(index).map(|slot| (key, slot)))
}

/// Correct button for an orientation key such as `"3102"`
pub fn lookup(key: &str) -> Option<Slot> {
    SOLUTIONS.get(key).copied()
}

/// Correct button for an orientation (defined for all 24)
pub fn correct_button(orientation: &Orientation) -> Option<Slot> {
    lookup(&orientation.key())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_covers_every_permutation_once() {
        assert_eq!(entries().count(), 24);

        let keys: HashSet<&str> = entries().map(|(key, _)| key).collect();
        assert_eq!(keys.len(), 24, "duplicate key in table");

        let all: HashSet<String> = Orientation::all().iter().map(|o| o.key()).collect();
        let table: HashSet<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(table, all);
    }

    #[test]
    fn test_every_key_is_a_permutation() {
        for (key, _) in entries() {
            assert!(Orientation::from_key(key).is_some(), "bad key {key}");
        }
    }

    #[test]
    fn test_correct_button_is_total() {
        for o in Orientation::all() {
            assert!(correct_button(&o).is_some(), "no answer for {o}");
        }
    }

    #[test]
    fn test_answers_are_balanced() {
        for slot in Slot::ALL {
            let n = entries().filter(|&(_, s)| s == slot).count();
            assert_eq!(n, 6, "{slot} is the answer {n} times");
        }
    }

    #[test]
    fn test_known_answers() {
        assert_eq!(lookup("3102"), Some(Slot::TopLeft));
        assert_eq!(lookup("0123"), Some(Slot::BottomRight));
        assert_eq!(lookup("0213"), Some(Slot::TopRight));
        assert_eq!(lookup("1320"), Some(Slot::BottomLeft));
        assert_eq!(lookup("1023"), Some(Slot::TopLeft));
    }

    #[test]
    fn test_lookup_rejects_non_permutations() {
        assert_eq!(lookup("0000"), None);
        assert_eq!(lookup("012"), None);
        assert_eq!(lookup(""), None);
    }
}
