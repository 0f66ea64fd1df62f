//! Provenance tags for configuration values

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use serde::{Serialize, Serializer};

/// Where a configuration value came from.
///
/// A bitmask: exactly one of [`Scope::SYSTEM`], [`Scope::GLOBAL`] or
/// [`Scope::LOCAL`] is set once a value has been merged from a source, and
/// [`Scope::INCLUDE`] is added when the value arrived through an
/// `include.path` directive. Values that were never merged carry
/// [`Scope::NONE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Scope(u32);

impl Scope {
    pub const NONE: Scope = Scope(0);
    pub const INCLUDE: Scope = Scope(1);
    pub const SYSTEM: Scope = Scope(1 << 1);
    pub const GLOBAL: Scope = Scope(1 << 2);
    /// Repository-local configuration (`<gitdir>/config`).
    pub const LOCAL: Scope = Scope(1 << 3);

    /// Matches any scope.
    pub const ALL: Scope = Scope(0xFFFF);
    /// Everything except the include modifier.
    pub const MASK: Scope = Scope(!1);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// True if every bit of `other` is set in `self`.
    pub const fn contains(self, other: Scope) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if `self` and `other` share any bit.
    pub const fn intersects(self, other: Scope) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_include(self) -> bool {
        self.contains(Self::INCLUDE)
    }

    /// The scope with the include modifier stripped.
    pub const fn base(self) -> Scope {
        Scope(self.0 & Self::MASK.0)
    }
}

impl BitOr for Scope {
    type Output = Scope;

    fn bitor(self, rhs: Scope) -> Scope {
        Scope(self.0 | rhs.0)
    }
}

impl BitOrAssign for Scope {
    fn bitor_assign(&mut self, rhs: Scope) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Scope {
    type Output = Scope;

    fn bitand(self, rhs: Scope) -> Scope {
        Scope(self.0 & rhs.0)
    }
}

impl Not for Scope {
    type Output = Scope;

    fn not(self) -> Scope {
        Scope(!self.0)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.contains(Self::SYSTEM) {
            "system"
        } else if self.contains(Self::GLOBAL) {
            "global"
        } else if self.contains(Self::LOCAL) {
            "local"
        } else {
            "unknown"
        };
        let suffix = if self.is_include() { "-inc" } else { "" };
        write!(f, "{name}{suffix}")
    }
}

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
