//! MySQL connection protocols.

use std::fmt;

/// Multi-host connection modes supported by Connector/J.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// Spread connections across several hosts.
    LoadBalance,
    /// Route writes to a source and reads to replicas.
    Replication,
}

impl Protocol {
    /// Every supported protocol, in the order they are reported.
    pub const ALL: [Protocol; 2] = [Protocol::LoadBalance, Protocol::Replication];

    /// The user-facing alias accepted in a datasource config.
    pub fn alias(&self) -> &'static str {
        match self {
            Self::LoadBalance => "loadbalance",
            Self::Replication => "replication",
        }
    }

    /// The canonical connection mode name.
    pub fn canonical(&self) -> &'static str {
        match self {
            Self::LoadBalance => "loadBalance",
            Self::Replication => "replication",
        }
    }

    /// Resolve an alias. Matching is exact.
    pub fn from_alias(alias: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.alias() == alias)
    }

    /// All accepted aliases.
    pub fn aliases() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(|p| p.alias())
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_alias() {
        assert_eq!(Protocol::from_alias("loadbalance"), Some(Protocol::LoadBalance));
        assert_eq!(Protocol::from_alias("replication"), Some(Protocol::Replication));
        assert_eq!(Protocol::from_alias("loadBalance"), None);
        assert_eq!(Protocol::from_alias(""), None);
    }

    #[test]
    fn test_canonical_names() {
        assert_eq!(Protocol::LoadBalance.canonical(), "loadBalance");
        assert_eq!(Protocol::Replication.canonical(), "replication");
        assert_eq!(
            Protocol::aliases().collect::<Vec<_>>(),
            ["loadbalance", "replication"]
        );
    }
}
