//! Pokemon identifiers taken from a path segment.

use std::fmt;

/// Numeric pokemon id as sent to the upstream.
///
/// Path segments are coerced rather than rejected: anything that is not an
/// unsigned integer becomes [`PokemonId::UNKNOWN`], an id the upstream never
/// assigns, so the lookup fails as "not found" there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PokemonId(u32);

impl PokemonId {
    /// Sentinel for unparsable input.
    pub const UNKNOWN: PokemonId = PokemonId(0);

    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn coerce(raw: &str) -> Self {
        raw.trim().parse().map(Self).unwrap_or(Self::UNKNOWN)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PokemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
