//! Typed argument builder for the PCA Predict address Finder web service
//!
//! The Finder endpoint takes a flat set of string parameters describing one
//! address search. [`FinderArgs`] assembles those parameters with the
//! service's documented defaults and exports them as a transport-ready
//! key/value mapping; actually sending the request (and parsing the
//! response) is the job of whatever HTTP client the caller pairs this with.
//!
//! ```
//! use finder_args::{FilterType, FinderArgs};
//!
//! let mut args = FinderArgs::new("221B Baker Street");
//! args.set_countries(["GB"])
//!     .set_limit(5)
//!     .add_type_filter(FilterType::Address);
//!
//! let params = args.to_params();
//! assert_eq!(params[0], ("Text", "221B Baker Street".to_string()));
//! assert_eq!(params[3], ("Countries", "GB".to_string()));
//! ```

pub mod filter_type;
pub use filter_type::*;

pub mod finder_args;
pub use finder_args::*;
