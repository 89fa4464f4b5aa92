//! Validated host names for Rust.
//!
//! This crate provides a value type for host names that is guaranteed to be
//! valid according to [RFC 1123], plus the means to navigate the naming
//! hierarchy with it: finding the parent of a name, its second-level
//! domain, or adding labels in front of it. A stricter variant following
//! the original rules of [RFC 1035] is available as well and values can be
//! converted between the two.
//!
//! All types live in the [name] module and the most important ones are
//! re-exported here.
//!
//! ```
//! use domain_hostname::Domain;
//!
//! let name: Domain = "api.v1.example.com".parse().unwrap();
//! assert_eq!(name.tld().as_str(), "com");
//! assert_eq!(name.sld().unwrap().as_str(), "example");
//! assert_eq!(name.parent().unwrap().name(), "v1.example.com");
//! assert_eq!(name.root().unwrap().name(), "example.com");
//! assert!(name.is_subdomain_of(&name.root().unwrap()));
//!
//! // Labels may start with a digit but the top-level domain may not.
//! assert!("123.example.com".parse::<Domain>().is_ok());
//! assert!("example.123com".parse::<Domain>().is_err());
//!
//! // RFC 1035 doesn’t allow leading digits at all.
//! let name: Domain = "3com.example.com".parse().unwrap();
//! assert!(name.to_rfc1035().is_err());
//! ```
//!
//! Only the syntax of host names is considered. There is no support for
//! looking up names in the DNS, nor for wildcard or internationalized
//! names.
//!
//! # Reference of Feature Flags
//!
//! The following is the complete list of the feature flags available.
//!
//! * `serde`: Adds support for serializing and deserializing host names
//!   and labels via [serde](https://serde.rs/). Both are represented as a
//!   string.
//! * `std`: support for the Rust std library. This feature is enabled by
//!   default. Without it, the crate only requires `alloc`.
//! * `tracing`: Emits trace events via the
//!   [tracing](https://github.com/tokio-rs/tracing) crate whenever a host
//!   name is rejected.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035
//! [RFC 1123]: https://tools.ietf.org/html/rfc1123

#![no_std]
#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub use self::name::{
    Domain, Label, LabelError, LabelKind, OwnedLabel, Rfc1035Domain,
    Rfc1123Domain, Rules, ValidationError,
};

pub mod name;
