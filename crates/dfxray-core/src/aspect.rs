use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One evaluation dimension of the DfX rubric.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum AspectId {
    /// Design for Assembly.
    #[serde(rename = "DFA")]
    Assembly,
    /// Design for Manufacturing.
    #[serde(rename = "DFM")]
    Manufacturing,
    /// Design for Service.
    #[serde(rename = "DFS")]
    Service,
    /// Design for Sustainability.
    #[serde(rename = "DFSust")]
    Sustainability,
}

impl AspectId {
    /// All aspects in registry declaration order.
    pub const ALL: [AspectId; 4] = [
        AspectId::Assembly,
        AspectId::Manufacturing,
        AspectId::Service,
        AspectId::Sustainability,
    ];

    /// Wire code for this aspect.
    pub fn code(self) -> &'static str {
        match self {
            AspectId::Assembly => "DFA",
            AspectId::Manufacturing => "DFM",
            AspectId::Service => "DFS",
            AspectId::Sustainability => "DFSust",
        }
    }

    /// Parse a wire code into an aspect id.
    pub fn parse(code: &str) -> Result<Self, Error> {
        AspectId::ALL
            .into_iter()
            .find(|aspect| aspect.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| Error::UnknownAspect(code.to_string()))
    }
}

impl fmt::Display for AspectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for AspectId {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        AspectId::parse(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_codes_case_insensitively() {
        assert_eq!(AspectId::parse("DFA").unwrap(), AspectId::Assembly);
        assert_eq!(AspectId::parse("dfsust").unwrap(), AspectId::Sustainability);
    }

    #[test]
    fn rejects_unknown_codes() {
        let err = AspectId::parse("DFX").unwrap_err();
        assert!(matches!(err, Error::UnknownAspect(code) if code == "DFX"));
    }

    #[test]
    fn codes_round_trip_through_display() {
        for aspect in AspectId::ALL {
            assert_eq!(AspectId::parse(aspect.code()).unwrap(), aspect);
        }
    }
}
