use serde::{Deserialize, Serialize};

/// Target audience for a generated explanation.
///
/// Closed enumeration mapped exhaustively to prompt preambles; adding a
/// profile means adding a variant and its template here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Auditor,
    Developer,
    Beginner,
    /// "Explain it simply" mode.
    Simple,
}

impl Audience {
    pub fn preamble(&self) -> &'static str {
        match self {
            Audience::Auditor => {
                "You are a senior smart contract security auditor. Explain the \
                 following risk flags with precise terminology, referencing the \
                 relevant Solidity constructs and attack patterns."
            }
            Audience::Developer => {
                "You are explaining contract risk findings to a Solidity developer. \
                 Be concrete about which functions and modifiers cause each flag and \
                 how the code could be hardened."
            }
            Audience::Beginner => {
                "You are explaining token contract risks to someone new to crypto. \
                 Avoid jargon; say plainly what could go wrong with their money."
            }
            Audience::Simple => {
                "Explain these token warning signs as simply as possible, in short \
                 sentences a child could follow."
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Auditor => "auditor",
            Audience::Developer => "developer",
            Audience::Beginner => "beginner",
            Audience::Simple => "simple",
        }
    }
}

impl std::str::FromStr for Audience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auditor" => Ok(Audience::Auditor),
            "developer" | "dev" => Ok(Audience::Developer),
            "beginner" => Ok(Audience::Beginner),
            "simple" | "eli5" => Ok(Audience::Simple),
            other => Err(format!("unknown audience profile: {}", other)),
        }
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const ALL: [Audience; 4] = [
        Audience::Auditor,
        Audience::Developer,
        Audience::Beginner,
        Audience::Simple,
    ];

    #[test]
    fn test_every_profile_has_a_distinct_preamble() {
        for (i, a) in ALL.iter().enumerate() {
            assert!(!a.preamble().is_empty());
            for b in &ALL[i + 1..] {
                assert_ne!(a.preamble(), b.preamble());
            }
        }
    }

    #[test]
    fn test_from_str_round_trip() {
        for audience in ALL {
            assert_eq!(Audience::from_str(audience.as_str()).unwrap(), audience);
        }
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(Audience::from_str("eli5").unwrap(), Audience::Simple);
        assert_eq!(Audience::from_str("dev").unwrap(), Audience::Developer);
        assert_eq!(Audience::from_str("AUDITOR").unwrap(), Audience::Auditor);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!(Audience::from_str("wizard").is_err());
    }
}
