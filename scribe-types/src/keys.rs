//! Block-key generation.

use uuid::Uuid;

/// Produces a fresh, collision-free string key on demand.
///
/// Used when synthesizing blocks from raw text. Implementations must
/// never return a key they have returned before; block identity across
/// snapshots depends on it.
pub trait KeyGenerator {
    /// Returns a fresh key.
    fn next_key(&self) -> String;
}

/// Default key generator backed by random UUIDs.
///
/// 122 bits of randomness, so collisions are not a practical concern
/// even across independently created documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomKeyGenerator;

impl KeyGenerator for RandomKeyGenerator {
    fn next_key(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
