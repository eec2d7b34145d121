//! Argument builder for a single Finder address-search request
//!
//! One [`FinderArgs`] instance holds the parameters of one search. Callers
//! construct it with the search term, adjust any of the defaulted fields
//! through the fluent setters, and hand the result of [`FinderArgs::to_params`]
//! to whatever transport performs the actual call. Nothing here validates
//! against the remote service's rules; malformed values are forwarded as-is
//! and surface as service-side errors.

use crate::filter_type::FilterType;
use log::debug;
use serde::{Serialize, Serializer};

/// Parameters of one address-search request against the Finder service.
///
/// Scalar setters overwrite (last write wins); the type-filter appenders
/// accumulate. An instance is meant to be built by a single owner for a
/// single logical request and exported once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FinderArgs {
    /// The search term to find
    text: String,
    /// Container for the search; an Id previously returned by the service
    /// (default: empty)
    container: String,
    /// Starting location for the search; a country name, ISO 2/3 code, or
    /// lat-long pair (default: empty)
    origin: String,
    /// ISO 2 or 3 character country codes limiting the search, e.g.
    /// `US,CA,MX` on the wire; order is preserved (default: empty)
    #[serde(serialize_with = "join_comma")]
    countries: Vec<String>,
    /// Maximum number of results to return (default: 8, not clamped)
    #[serde(serialize_with = "as_decimal_string")]
    limit: u32,
    /// Preferred result language, a 2-5 character tag such as `en` or
    /// `en-gb` (default: `en`)
    language: String,
    /// Result types to filter the search by; `None` until configured.
    /// Not part of the exported mapping (see [`FinderArgs::to_params`]).
    #[serde(skip)]
    type_filter: Option<Vec<String>>,
}

impl FinderArgs {
    /// Result count used when the caller never sets a limit.
    pub const DEFAULT_LIMIT: u32 = 8;
    /// Language tag used when the caller never sets a language.
    pub const DEFAULT_LANGUAGE: &'static str = "en";

    /// Create the arguments for a new search with known defaults.
    ///
    /// The search term is required up front; every other field starts at
    /// its documented default and can be overwritten later.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            container: String::new(),
            origin: String::new(),
            countries: Vec::new(),
            limit: Self::DEFAULT_LIMIT,
            language: Self::DEFAULT_LANGUAGE.to_string(),
            type_filter: None,
        }
    }

    /// The search term.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the search term.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }

    /// The continuation container, empty when this is a fresh search.
    #[must_use]
    pub fn container(&self) -> &str {
        &self.container
    }

    /// Narrow the search to a container Id returned by a previous search.
    pub fn set_container(&mut self, container: impl Into<String>) -> &mut Self {
        self.container = container.into();
        self
    }

    /// The geographic origin hint, empty when unset.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Bias the search towards a country or lat-long starting point.
    pub fn set_origin(&mut self, origin: impl Into<String>) -> &mut Self {
        self.origin = origin.into();
        self
    }

    /// Country codes the search is limited to, in the order they were given.
    #[must_use]
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Replace the country restriction list. Codes are forwarded verbatim;
    /// the service expects ISO 2 or 3 character codes.
    pub fn set_countries<I, S>(&mut self, countries: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    /// The maximum number of results requested.
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Replace the result limit. Stored and exported without clamping.
    pub fn set_limit(&mut self, limit: u32) -> &mut Self {
        self.limit = limit;
        self
    }

    /// The preferred result language tag.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Replace the preferred result language.
    pub fn set_language(&mut self, language: impl Into<String>) -> &mut Self {
        self.language = language.into();
        self
    }

    /// Configured result-type filters, or `None` if none were ever set.
    ///
    /// `None` ("never configured") is distinct from `Some(&[])` ("explicitly
    /// set to an empty list").
    #[must_use]
    pub fn type_filter(&self) -> Option<&[String]> {
        self.type_filter.as_deref()
    }

    /// Replace the whole filter list with typed result types.
    pub fn set_type_filter(&mut self, filters: impl IntoIterator<Item = FilterType>) -> &mut Self {
        self.type_filter = Some(filters.into_iter().map(|f| f.as_str().to_string()).collect());
        self
    }

    /// Replace the whole filter list with raw strings.
    ///
    /// Escape hatch for result types the service adds before this crate
    /// learns about them; prefer [`FinderArgs::set_type_filter`].
    pub fn set_type_filter_raw<I, S>(&mut self, filters: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_filter = Some(filters.into_iter().map(Into::into).collect());
        self
    }

    /// Append one result-type filter, creating the list on first use.
    ///
    /// Appends accumulate in call order and are not deduplicated.
    pub fn add_type_filter(&mut self, filter: FilterType) -> &mut Self {
        self.add_type_filter_raw(filter.as_str())
    }

    /// Raw-string variant of [`FinderArgs::add_type_filter`].
    pub fn add_type_filter_raw(&mut self, filter: impl Into<String>) -> &mut Self {
        self.type_filter.get_or_insert_with(Vec::new).push(filter.into());
        self
    }

    /// Export the transport-ready parameter mapping.
    ///
    /// Produces the fixed key set the service expects, in order: `Text`,
    /// `Container`, `Origin`, `Countries` (comma-joined), `Limit` (decimal
    /// string), `Language`. Suitable for merging into query parameters or a
    /// form body.
    ///
    /// Type filters are tracked on the builder but have never been part of
    /// this export; no `TypeFilter` key is emitted even when filters are
    /// configured.
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        debug!(
            "exporting finder args: text={:?} countries={:?} limit={}",
            self.text, self.countries, self.limit
        );

        vec![
            ("Text", self.text.clone()),
            ("Container", self.container.clone()),
            ("Origin", self.origin.clone()),
            ("Countries", self.countries.join(",")),
            ("Limit", self.limit.to_string()),
            ("Language", self.language.clone()),
        ]
    }
}

fn join_comma<S>(values: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&values.join(","))
}

fn as_decimal_string<S>(value: &u32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}
