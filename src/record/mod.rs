//! Nested records with keyed and attribute-style access
//!
//! A [`Record`] is built from a plain nested mapping. Every nested mapping
//! (including mappings inside lists) is converted into a `Record` on the way
//! in, so the whole tree can be walked with [`Record::attr`] chains, resolved
//! with dotted paths, flattened, or deep-merged.
//!
//! ## Example
//!
//! ```rust,ignore
//! use record_dict::record::{LookupOptions, Record};
//! use serde_json::json;
//!
//! let mut place = Record::from_value(json!({
//!     "name": "Belgium",
//!     "location": {"lon": 4.66092, "lat": 50.640991}
//! }))?;
//!
//! assert_eq!(place.attr("location")?.attr("lat")?.as_f64(), Some(50.640991));
//!
//! let lat = place.lookup(["location.xyz", "location.lat"], &LookupOptions::default());
//! assert_eq!(lat.as_f64(), Some(50.640991));
//!
//! place.flatten("_");
//! assert!(place.contains_key("location_lat"));
//! ```

mod config;
mod container;
mod convert;
mod field;

pub use config::{LookupOptions, NormalizeOptions};
pub use container::{DEFAULT_SEPARATOR, Record};
pub use convert::{Objectified, objectify};
pub use field::Field;
