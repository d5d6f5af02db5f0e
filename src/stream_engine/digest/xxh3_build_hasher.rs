use std::hash::{BuildHasher, Hasher};
use xxhash_rust::xxh3::Xxh3;

/// Streaming `Hasher` backed by XXH3.
///
/// `str` hashing issues more than one `write` call (the bytes, then a
/// terminator), so every call feeds the same running state.
pub struct Xxh3Hasher {
    state: Xxh3,
}

impl Default for Xxh3Hasher {
    fn default() -> Self {
        Self { state: Xxh3::new() }
    }
}

impl Hasher for Xxh3Hasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.state.update(bytes);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state.digest()
    }
}

/// Custom BuildHasher for `HashMap`/`HashSet`
#[derive(Default, Clone, Copy, Debug)]
pub struct Xxh3BuildHasher;

impl BuildHasher for Xxh3BuildHasher {
    type Hasher = Xxh3Hasher;

    fn build_hasher(&self) -> Self::Hasher {
        Xxh3Hasher::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_names_hash_differently() {
        let build = Xxh3BuildHasher;
        assert_ne!(build.hash_one("orders"), build.hash_one("payments"));
        assert_eq!(build.hash_one("orders"), build.hash_one("orders"));
    }

    #[test]
    fn empty_name_is_hashable() {
        let build = Xxh3BuildHasher;
        assert_ne!(build.hash_one(""), build.hash_one("a"));
    }
}
