//! Result-type vocabulary for the Finder service
//!
//! The remote service categorizes every match as one of a small, closed set
//! of result types. This module provides that vocabulary as a typed enum so
//! callers get a checked entry point for filters, while the raw-string
//! variants on [`FinderArgs`](crate::FinderArgs) remain available for
//! service-side additions the crate does not know about yet.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A result-type category as defined by the Finder service.
///
/// Variant spellings match the service's wire vocabulary exactly; `as_str`
/// returns the string the service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum FilterType {
    /// A locality such as a town or city
    Locality,
    /// A street, without a specific premise
    Street,
    /// A full deliverable address
    Address,
    /// A named building
    BuildingName,
}

/// Error returned when parsing a string outside the service's result-type
/// vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter type: {0:?} (expected Locality, Street, Address or BuildingName)")]
pub struct UnknownFilterType(pub String);

impl FilterType {
    /// The service's wire spelling for this result type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FilterType::Locality => "Locality",
            FilterType::Street => "Street",
            FilterType::Address => "Address",
            FilterType::BuildingName => "BuildingName",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterType {
    type Err = UnknownFilterType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Locality" => Ok(FilterType::Locality),
            "Street" => Ok(FilterType::Street),
            "Address" => Ok(FilterType::Address),
            "BuildingName" => Ok(FilterType::BuildingName),
            other => Err(UnknownFilterType(other.to_string())),
        }
    }
}
