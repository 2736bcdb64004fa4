pub mod config;
pub mod core_api;
pub mod error;
pub mod hash;
pub mod hash_set;
pub mod iter;
pub mod node;
pub mod node_arena;

use std::fmt;

pub use crate::config::KeySetConfig;
pub use crate::core_api::{KeySetEngine, KeySetSnapshot};
pub use crate::error::{KeySetError, Result};
pub use crate::hash::HashFn;
pub use crate::hash_set::HashSet;
pub use crate::node_arena::{ArenaStats, NodeArena};

/// Whether a node arena may grow past its initial sizing.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ArenaPolicy {
    Fixed,
    Growable,
}

impl ArenaPolicy {
    pub fn from_fixed(fixed: bool) -> Self {
        if fixed {
            Self::Fixed
        } else {
            Self::Growable
        }
    }

    pub fn from_config(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "growable" => Ok(Self::Growable),
            other => Err(KeySetError::InvalidConfig(format!(
                "unsupported arena policy '{other}', expected one of: fixed, growable"
            ))),
        }
    }

    pub fn as_config_name(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Growable => "growable",
        }
    }

    pub fn is_fixed(self) -> bool {
        matches!(self, Self::Fixed)
    }
}

impl fmt::Display for ArenaPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_config_name())
    }
}
