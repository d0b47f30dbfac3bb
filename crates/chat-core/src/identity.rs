//! Display-identity generation.
//!
//! The registry assigns every connection a display name at registration.
//! The generator is injected behind [`NameSource`] so the server can use
//! random word pairs while tests use a deterministic counter.
//!
//! Names are display-only: connections are keyed by id, never by name, so
//! two clients may coincidentally share a name.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

/// Source of display names for newly registered connections.
pub trait NameSource: Send + Sync {
    /// Produce the display name for the next registration. Infallible.
    fn next_name(&self) -> String;
}

const ADJECTIVES: &[&str] = &[
    "brisk", "calm", "clever", "daring", "eager", "gentle", "keen", "lively",
    "mellow", "nimble", "quiet", "rapid", "sly", "sturdy", "vivid", "witty",
];

const ANIMALS: &[&str] = &[
    "badger", "falcon", "heron", "ibex", "jackal", "lemur", "lynx", "marten",
    "otter", "panther", "raven", "stoat", "tapir", "viper", "walrus", "wren",
];

/// Random adjective-animal pairs, e.g. `brisk-otter`.
#[derive(Debug, Default)]
pub struct WordPairNames;

impl WordPairNames {
    pub fn new() -> Self {
        WordPairNames
    }
}

impl NameSource for WordPairNames {
    fn next_name(&self) -> String {
        let mut rng = rand::thread_rng();
        let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
        let animal = ANIMALS[rng.gen_range(0..ANIMALS.len())];
        format!("{adjective}-{animal}")
    }
}

/// Deterministic `prefix-N` names for tests and local debugging.
#[derive(Debug)]
pub struct SequentialNames {
    prefix: String,
    next: AtomicU64,
}

impl SequentialNames {
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialNames {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl NameSource for SequentialNames {
    fn next_name(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_names_count_up() {
        let names = SequentialNames::new("guest");
        assert_eq!(names.next_name(), "guest-1");
        assert_eq!(names.next_name(), "guest-2");
        assert_eq!(names.next_name(), "guest-3");
    }

    #[test]
    fn word_pairs_come_from_the_word_lists() {
        let names = WordPairNames::new();
        for _ in 0..32 {
            let name = names.next_name();
            let (adjective, animal) = name.split_once('-').expect("name has two parts");
            assert!(ADJECTIVES.contains(&adjective));
            assert!(ANIMALS.contains(&animal));
        }
    }
}
