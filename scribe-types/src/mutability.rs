//! Entity mutability classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classifies how the text span referencing an entity may be edited.
///
/// Serialized in screaming case (`"IMMUTABLE"`, ...) to match the wire
/// format of the surrounding editor ecosystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityMutability {
    /// The span's text must stay identical for the annotation to
    /// survive; any edit removes the entity reference.
    Immutable,
    /// The span's text may be edited freely (e.g. a link label).
    Mutable,
    /// Like immutable, but the span may be split and individual
    /// segments deleted wholesale.
    Segmented,
}

impl fmt::Display for EntityMutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Immutable => "IMMUTABLE",
            Self::Mutable => "MUTABLE",
            Self::Segmented => "SEGMENTED",
        };
        f.write_str(label)
    }
}
