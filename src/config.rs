use crate::error::{KeySetError, Result};
use crate::hash::{keccak64, HashFn};
use crate::ArenaPolicy;

pub const DEFAULT_BUCKET_COUNT: usize = 400;
pub const DEFAULT_ARENA_SIZING: usize = 32;

/// Construction parameters for a `HashSet`.
///
/// `arena_sizing` is the initial node count of the arena and the smallest
/// step a growable arena grows by.
#[derive(Debug, Clone, Copy)]
pub struct KeySetConfig {
    pub bucket_count: usize,
    pub arena_sizing: usize,
    pub policy: ArenaPolicy,
    pub hash_fn: Option<HashFn>,
}

impl Default for KeySetConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_BUCKET_COUNT,
            DEFAULT_ARENA_SIZING,
            ArenaPolicy::Growable,
            Some(keccak64),
        )
    }
}

impl KeySetConfig {
    pub fn new(
        bucket_count: usize,
        arena_sizing: usize,
        policy: ArenaPolicy,
        hash_fn: Option<HashFn>,
    ) -> Self {
        Self {
            bucket_count,
            arena_sizing,
            policy,
            hash_fn,
        }
    }

    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    pub fn with_arena_sizing(mut self, arena_sizing: usize) -> Self {
        self.arena_sizing = arena_sizing;
        self
    }

    pub fn with_policy(mut self, policy: ArenaPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_hash_fn(mut self, hash_fn: HashFn) -> Self {
        self.hash_fn = Some(hash_fn);
        self
    }

    /// Checks the parameters and hands back the hash function to use.
    pub fn validate(&self) -> Result<HashFn> {
        if self.bucket_count == 0 {
            return Err(KeySetError::InvalidConfig(
                "bucket count must be positive".to_string(),
            ));
        }
        if self.arena_sizing == 0 {
            return Err(KeySetError::InvalidConfig(
                "arena sizing must be positive".to_string(),
            ));
        }

        self.hash_fn
            .ok_or_else(|| KeySetError::InvalidConfig("hash function is required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{KeySetConfig, DEFAULT_ARENA_SIZING, DEFAULT_BUCKET_COUNT};
    use crate::hash::fnv1a64;
    use crate::{ArenaPolicy, KeySetError};

    #[test]
    fn default_config_is_valid() {
        let config = KeySetConfig::default();
        assert_eq!(config.bucket_count, DEFAULT_BUCKET_COUNT);
        assert_eq!(config.arena_sizing, DEFAULT_ARENA_SIZING);
        assert_eq!(config.policy, ArenaPolicy::Growable);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_sizes_and_missing_hash() {
        let zero_buckets = KeySetConfig::default().with_bucket_count(0);
        let zero_arena = KeySetConfig::default().with_arena_sizing(0);
        let no_hash = KeySetConfig::new(4, 4, ArenaPolicy::Fixed, None);

        for config in [zero_buckets, zero_arena, no_hash] {
            assert!(matches!(
                config.validate(),
                Err(KeySetError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn validate_returns_configured_hash() {
        let config = KeySetConfig::default().with_hash_fn(fnv1a64);
        let hash_fn = config.validate().expect("valid config");
        assert_eq!(hash_fn(b"abc"), fnv1a64(b"abc"));
    }
}
