use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionOrder {
    Pair,       // 2-body interaction
    Triplet,    // 3-body interaction
    Quadruplet, // 4-body interaction
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid interaction order '{0}'. Expected 'pair', 'triplet' or 'quadruplet'.")]
pub struct ParseInteractionOrderError(pub String);

impl InteractionOrder {
    pub const ALL: [InteractionOrder; 3] = [
        InteractionOrder::Pair,
        InteractionOrder::Triplet,
        InteractionOrder::Quadruplet,
    ];

    pub fn bodies(self) -> usize {
        match self {
            InteractionOrder::Pair => 2,
            InteractionOrder::Triplet => 3,
            InteractionOrder::Quadruplet => 4,
        }
    }

    /// Number of interatomic distances spanned by a cluster of this order.
    pub fn distance_count(self) -> u32 {
        let n = self.bodies() as u32;
        n * (n - 1) / 2
    }

    pub fn key(self) -> &'static str {
        match self {
            InteractionOrder::Pair => "pair",
            InteractionOrder::Triplet => "triplet",
            InteractionOrder::Quadruplet => "quadruplet",
        }
    }

    /// Heading under which type indices of this order are declared in a ChIMES parameter file.
    pub fn parameter_section(self) -> &'static str {
        match self {
            InteractionOrder::Pair => "PAIRTYPE PARAMS",
            InteractionOrder::Triplet => "TRIPLETTYPE PARAMS",
            InteractionOrder::Quadruplet => "QUADRUPLETTYPE PARAMS",
        }
    }
}

impl FromStr for InteractionOrder {
    type Err = ParseInteractionOrderError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pair" => Ok(InteractionOrder::Pair),
            "triplet" => Ok(InteractionOrder::Triplet),
            "quadruplet" => Ok(InteractionOrder::Quadruplet),
            _ => Err(ParseInteractionOrderError(s.to_string())),
        }
    }
}

impl fmt::Display for InteractionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
