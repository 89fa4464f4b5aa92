//! Host names.
//!
//! This module provides types for working with host names as defined in
//! [RFC 1123], section 2.1, and its stricter predecessor [RFC 1035],
//! section 2.3.1.
//!
//! Main types: [`Domain`], [`Label`], [`OwnedLabel`].<br/>
//! Rules: [`Rules`], [`Standard`], [`Rfc1123`], [`Rfc1035`].<br/>
//! Errors: [`ValidationError`], [`LabelError`].
//!
//! Host names are a sequence of *labels* separated by dots. Each label is
//! between 1 and 63 octets long and consists of ASCII letters, digits, and
//! hyphens. A label must not start or end with a hyphen. RFC 1035 requires
//! labels to start with a letter while RFC 1123 permits a digit as well.
//! The rightmost label, the *top-level domain,* must start and end with a
//! letter under both standards. A host name is at most 255 octets long and
//! has at most 127 labels.
//!
//! Unlike domain names in the DNS proper, host names are always written
//! without the trailing dot of the root label. They are also limited to a
//! subset of ASCII. Escape sequences, wildcard labels, and internationalized
//! names are not supported.
//!
//! The labels in a host name are arranged backwards. That is, the ‘most
//! significant’ label is the last one. The [`Domain`] type keeps them in
//! that order and provides methods to walk up the hierarchy, such as
//! [`Domain::parent`] and [`Domain::root`], and to walk down, such as
//! [`Domain::adding_subdomain`].
//!
//! Which set of rules a [`Domain`] follows is determined by its type
//! argument. The default is [`Rfc1123`]. Values can be converted between
//! standards, which checks all labels again.
//!
//! The functions in [`validate`] perform the actual checks and can be used
//! directly with any set of [`Rules`].
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035
//! [RFC 1123]: https://tools.ietf.org/html/rfc1123

pub use self::domain::{
    Domain, DomainIter, Rfc1035Domain, Rfc1123Domain, SuffixIter,
};
pub use self::label::{Label, LabelError, LabelKind, OwnedLabel};
pub use self::rules::{Rfc1035, Rfc1123, Rules, Standard};
pub use self::validate::ValidationError;

mod domain;
mod interop;
mod label;
mod rules;
pub mod validate;
