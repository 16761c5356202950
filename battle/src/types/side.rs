//! Combatant slots

/// Which combatant a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    P1,
    P2,
}

impl Side {
    /// Parse `"p1"` / `"p2"` (case-insensitive)
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "p1" => Some(Side::P1),
            "p2" => Some(Side::P2),
            _ => None,
        }
    }

    pub fn opponent(&self) -> Side {
        match self {
            Side::P1 => Side::P2,
            Side::P2 => Side::P1,
        }
    }

    /// Request field name for this combatant
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::P1 => "pokemon1",
            Side::P2 => "pokemon2",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_protocol() {
        assert_eq!(Side::from_protocol("p1"), Some(Side::P1));
        assert_eq!(Side::from_protocol("P2"), Some(Side::P2));
        assert_eq!(Side::from_protocol("p3"), None);
        assert_eq!(Side::from_protocol(""), None);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Side::P1.opponent(), Side::P2);
        assert_eq!(Side::P2.opponent(), Side::P1);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Side::P1.as_str(), "pokemon1");
        assert_eq!(Side::P2.to_string(), "pokemon2");
    }
}
