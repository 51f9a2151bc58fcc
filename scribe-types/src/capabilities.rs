//! Injectable capabilities consumed during plain-text import.
//!
//! These are deliberately small traits so tests can control sanitizer
//! and feature-flag behavior deterministically. Production defaults
//! are provided alongside.

use std::collections::HashMap;

/// Normalizes disallowed characters out of raw text before block
/// construction.
pub trait TextSanitizer {
    /// Returns `raw` with disallowed characters removed.
    fn sanitize(&self, raw: &str) -> String;
}

/// Default sanitizer: strips carriage returns.
///
/// `\r` acts as a block delimiter during import; one surviving into
/// block text would corrupt block boundaries on the next round-trip.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarriageReturnSanitizer;

impl TextSanitizer for CarriageReturnSanitizer {
    fn sanitize(&self, raw: &str) -> String {
        raw.replace('\r', "")
    }
}

/// Runtime feature-flag lookup.
///
/// Injected into the import path rather than read from a process-wide
/// singleton, so representation choices are deterministic under test.
pub trait FeatureFlags {
    /// Returns whether `flag` is enabled. Unknown flags are disabled.
    fn is_enabled(&self, flag: &str) -> bool;
}

/// Map-backed flags.
#[derive(Debug, Clone, Default)]
pub struct StaticFlags {
    flags: HashMap<String, bool>,
}

impl StaticFlags {
    /// All flags disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `flag` set to `enabled`.
    #[must_use]
    pub fn with_flag(mut self, flag: &str, enabled: bool) -> Self {
        self.flags.insert(flag.to_string(), enabled);
        self
    }
}

impl FeatureFlags for StaticFlags {
    fn is_enabled(&self, flag: &str) -> bool {
        self.flags.get(flag).copied().unwrap_or(false)
    }
}
