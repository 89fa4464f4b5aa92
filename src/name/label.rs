//! Host name labels.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use super::rules::Rules;
use core::str::FromStr;
use core::{borrow, cmp, fmt, hash, mem, ops, str};

//------------ Label ---------------------------------------------------------

/// A string slice with the content of a valid host name label.
///
/// This is an unsized type wrapping the text of a single label, i.e., one
/// of the dot-separated parts of a host name. A value of this type can only
/// be created through [`Label::new`] or [`Label::with_rules`] which check
/// the label against a set of [`Rules`]. It is thus guaranteed to be between
/// 1 and 63 octets long and to contain only ASCII letters, digits, and
/// hyphens, with the hyphen never appearing at either end. As an unsized
/// type, it needs to be used behind some kind of pointer, most likely a
/// reference.
///
/// The label keeps the case of its letters as given. Since labels are to be
/// case-insensitive, all the comparison traits as well as `Hash` are
/// implemented ignoring ASCII-case.
#[repr(transparent)]
pub struct Label(str);

/// # Creation
///
impl Label {
    /// Host name labels have a maximum length of 63 octets.
    pub const MAX_LEN: usize = 63;

    /// Creates a label from a string slice without any checking.
    ///
    /// # Safety
    ///
    /// The `s` must be a label that passed [`Rules::check_label`] for some
    /// rule set and label kind.
    pub(super) unsafe fn from_str_unchecked(s: &str) -> &Self {
        // SAFETY: Label has repr(transparent)
        mem::transmute(s)
    }

    /// Checks a string slice against the RFC 1123 rules and makes it a label.
    ///
    /// The `kind` argument determines whether the slice is checked as the
    /// top-level domain, which has to start and end with a letter, or as any
    /// other label of a host name.
    pub fn new(s: &str, kind: LabelKind) -> Result<&Self, LabelError> {
        Self::with_rules(s, kind, Rules::RFC1123)
    }

    /// Checks a string slice against the given rules and makes it a label.
    pub fn with_rules(
        s: &str,
        kind: LabelKind,
        rules: Rules,
    ) -> Result<&Self, LabelError> {
        rules.check_label(s, kind)?;
        Ok(unsafe { Self::from_str_unchecked(s) })
    }

    /// Returns the label in canonical form.
    ///
    /// In this form, all ASCII letters are lowercase.
    #[must_use]
    pub fn to_canonical(&self) -> OwnedLabel {
        let mut res = OwnedLabel::from_label(self);
        res.make_canonical();
        res
    }
}

/// # Properties
///
impl Label {
    /// Returns the text of the label exactly as it was given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a reference to the underlying octets.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Returns the length of the label in octets.
    ///
    /// Since a label is never empty, this is always between 1 and 63.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether all ASCII letters in the label are lowercase.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        !self.as_slice().iter().any(u8::is_ascii_uppercase)
    }
}

//--- AsRef

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<[u8]> for Label {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

//--- ToOwned

impl alloc::borrow::ToOwned for Label {
    type Owned = OwnedLabel;

    fn to_owned(&self) -> Self::Owned {
        self.into()
    }
}

//--- PartialEq and Eq

impl<T: AsRef<[u8]> + ?Sized> PartialEq<T> for Label {
    fn eq(&self, other: &T) -> bool {
        self.as_slice().eq_ignore_ascii_case(other.as_ref())
    }
}

impl Eq for Label {}

//--- PartialOrd and Ord

impl PartialOrd for Label {
    /// Returns an ordering between `self` and `other`.
    ///
    /// Labels are ordered like octet strings except that the case of ASCII
    /// letters is ignored. This is the order defined in section 6.1 of
    /// [RFC 4034].
    ///
    /// [RFC 4034]: https://tools.ietf.org/html/rfc4034
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Label {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.as_slice()
            .iter()
            .map(u8::to_ascii_lowercase)
            .cmp(other.as_slice().iter().map(u8::to_ascii_lowercase))
    }
}

//--- Hash

impl hash::Hash for Label {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        // Include the length in the hash so we can simply hash over the
        // labels when building a name’s hash.
        (self.len() as u8).hash(state);
        for c in self.as_slice() {
            c.to_ascii_lowercase().hash(state)
        }
    }
}

//--- Display and Debug

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Label(")?;
        fmt::Display::fmt(self, f)?;
        f.write_str(")")
    }
}

//------------ LabelKind -----------------------------------------------------

/// The position of a label within a host name.
///
/// The rightmost label of a host name, the top-level domain, is held to
/// stricter rules than all other labels. The kind only selects which rules
/// are applied when a label is created, it is not kept by the label.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LabelKind {
    /// Any label but the rightmost one.
    Regular,

    /// The rightmost label, i.e., the top-level domain.
    Tld,
}

//------------ OwnedLabel ----------------------------------------------------

/// An owned label.
///
/// Since labels are relatively short, this type doesn’t actually allocate any
/// memory but is a 64 octet array.
//
//  This keeps the label in wire format, so the first octet is the length
//  octet, the remainder is the content.
#[derive(Clone, Copy)]
pub struct OwnedLabel([u8; 64]);

impl OwnedLabel {
    /// Creates a new owned label from an existing label.
    #[must_use]
    pub fn from_label(label: &Label) -> Self {
        let mut res = [0; 64];
        res[0] = label.len() as u8;
        res[1..=label.len()].copy_from_slice(label.as_slice());
        OwnedLabel(res)
    }

    /// Checks a string slice against the RFC 1123 rules and copies it.
    pub fn new(s: &str, kind: LabelKind) -> Result<Self, LabelError> {
        Label::new(s, kind).map(Self::from_label)
    }

    /// Converts the label into the canonical form.
    ///
    /// This form has all octets representing ASCII letters converted to their
    /// lower case form.
    pub fn make_canonical(&mut self) {
        self.0[1..].make_ascii_lowercase()
    }

    /// Returns a reference to the label.
    #[must_use]
    pub fn as_label(&self) -> &Label {
        let len = self.0[0] as usize;
        // SAFETY: the content was copied from a checked label and thus is
        // ASCII only. Lowercasing in `make_canonical` keeps it that way.
        unsafe {
            Label::from_str_unchecked(str::from_utf8_unchecked(
                &self.0[1..=len],
            ))
        }
    }

    /// Returns a slice that is the wire-representation of the label.
    #[must_use]
    pub fn as_wire_slice(&self) -> &[u8] {
        let len = self.0[0] as usize;
        &self.0[..=len]
    }
}

//--- From

impl<'a> From<&'a Label> for OwnedLabel {
    fn from(label: &'a Label) -> Self {
        Self::from_label(label)
    }
}

//--- FromStr

impl FromStr for OwnedLabel {
    type Err = LabelError;

    /// Parses a string into a regular RFC 1123 label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s, LabelKind::Regular)
    }
}

//--- Deref, AsRef, and Borrow

impl ops::Deref for OwnedLabel {
    type Target = Label;

    fn deref(&self) -> &Label {
        self.as_label()
    }
}

impl AsRef<Label> for OwnedLabel {
    fn as_ref(&self) -> &Label {
        self.as_label()
    }
}

impl AsRef<str> for OwnedLabel {
    fn as_ref(&self) -> &str {
        self.as_label().as_str()
    }
}

impl AsRef<[u8]> for OwnedLabel {
    fn as_ref(&self) -> &[u8] {
        self.as_label().as_slice()
    }
}

impl borrow::Borrow<Label> for OwnedLabel {
    fn borrow(&self) -> &Label {
        self.as_label()
    }
}

//--- PartialEq and Eq

impl<T: AsRef<Label>> PartialEq<T> for OwnedLabel {
    fn eq(&self, other: &T) -> bool {
        self.as_label().eq(other.as_ref())
    }
}

impl Eq for OwnedLabel {}

//--- PartialOrd and Ord

impl<T: AsRef<Label>> PartialOrd<T> for OwnedLabel {
    fn partial_cmp(&self, other: &T) -> Option<cmp::Ordering> {
        self.as_label().partial_cmp(other.as_ref())
    }
}

impl Ord for OwnedLabel {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.as_label().cmp(other.as_label())
    }
}

//--- Hash

impl hash::Hash for OwnedLabel {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.as_label().hash(state)
    }
}

//--- Display and Debug

impl fmt::Display for OwnedLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self.as_label(), f)
    }
}

impl fmt::Debug for OwnedLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("OwnedLabel").field(&self.as_label()).finish()
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for OwnedLabel {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_newtype_struct("OwnedLabel", self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OwnedLabel {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        use serde::de::Error;

        struct InnerVisitor;

        impl<'de> serde::de::Visitor<'de> for InnerVisitor {
            type Value = OwnedLabel;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a host name label")
            }

            fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
                OwnedLabel::from_str(v).map_err(E::custom)
            }
        }

        struct NewtypeVisitor;

        impl<'de> serde::de::Visitor<'de> for NewtypeVisitor {
            type Value = OwnedLabel;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a host name label")
            }

            fn visit_newtype_struct<D: serde::Deserializer<'de>>(
                self,
                deserializer: D,
            ) -> Result<Self::Value, D::Error> {
                deserializer.deserialize_str(InnerVisitor)
            }

            fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
                serde::de::Visitor::visit_str(InnerVisitor, v)
            }
        }

        deserializer.deserialize_newtype_struct("OwnedLabel", NewtypeVisitor)
    }
}

//============ Error Types ===================================================

//------------ LabelError ----------------------------------------------------

/// A string could not be made into a label.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LabelError {
    /// The label was empty.
    Empty,

    /// The label was longer than 63 octets.
    ///
    /// Contains the actual length.
    LongLabel(usize),

    /// The label contained a character other than a letter, digit, or hyphen.
    BadSymbol(char),

    /// The label started with a hyphen.
    LeadingHyphen,

    /// The label ended with a hyphen.
    TrailingHyphen,

    /// The label started with a digit where the rules forbid it.
    LeadingDigit,

    /// A top-level domain label did not start and end with a letter.
    TldBoundary,
}

//--- Display and Error

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LabelError::Empty => f.write_str("empty label"),
            LabelError::LongLabel(len) => {
                write!(f, "label of {} octets exceeds 63 octets", len)
            }
            LabelError::BadSymbol(ch) => {
                write!(f, "illegal character {:?} in label", ch)
            }
            LabelError::LeadingHyphen => {
                f.write_str("label starts with a hyphen")
            }
            LabelError::TrailingHyphen => {
                f.write_str("label ends with a hyphen")
            }
            LabelError::LeadingDigit => {
                f.write_str("label starts with a digit")
            }
            LabelError::TldBoundary => f.write_str(
                "top-level domain does not start and end with a letter",
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LabelError {}

//============ Testing =======================================================
