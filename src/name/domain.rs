//! Validated host names.
//!
//! This is a private module. Its public types are re-exported by the parent.

use super::label::{Label, OwnedLabel};
use super::rules::{Rfc1035, Rfc1123, Standard};
use super::validate::{
    validate_labels, validate_str, ValidationError, MAX_LABELS, MAX_NAME_LEN,
};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::marker::PhantomData;
use core::str::FromStr;
use core::{cmp, fmt, hash, iter, slice};

//------------ Domain --------------------------------------------------------

/// A valid host name.
///
/// The type keeps the labels of a host name and guarantees that they form a
/// valid name under the rules of the standard `S`. That is, there is at
/// least one and at most 127 labels, the name including its dots is at most
/// 255 octets long, the last label is a valid top-level domain, and all
/// other labels are valid regular labels. See [`Rules`] for what exactly
/// that means for each standard.
///
/// The standard defaults to [RFC 1123][Rfc1123] which permits labels to
/// start with a digit. [`Rfc1035Domain`] is the stricter variant of
/// [RFC 1035][Rfc1035]. Values can be converted between the two through
/// [`Domain::convert`], which checks the labels again.
///
/// The labels are kept in the order they appear in the name. The first
/// label is the most specific one, the last label is the top-level domain.
/// Values are immutable. All methods that walk the hierarchy return new
/// values.
///
/// Labels keep the case they were given in but equality, ordering, and
/// hashing ignore ASCII case as is customary for domain names.
///
/// [`Rules`]: super::Rules
pub struct Domain<S = Rfc1123> {
    labels: Vec<OwnedLabel>,
    marker: PhantomData<S>,
}

/// A host name following RFC 1123.
pub type Rfc1123Domain = Domain<Rfc1123>;

/// A host name following RFC 1035.
pub type Rfc1035Domain = Domain<Rfc1035>;

/// # Creating Values
///
impl<S: Standard> Domain<S> {
    /// The maximum length of a host name in octets, including the dots.
    pub const MAX_LEN: usize = MAX_NAME_LEN;

    /// The maximum number of labels in a host name.
    pub const MAX_LABELS: usize = MAX_LABELS;

    /// Creates a host name from a sequence of labels.
    ///
    /// The labels are given in the order they appear in the name, i.e., the
    /// top-level domain comes last. Each item is exactly one label.
    pub fn from_labels<I, L>(labels: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        validate_labels(labels, S::RULES).map(Self::from_vec_unchecked)
    }

    /// Creates a two label name from a second-level and top-level domain.
    pub fn new_root(sld: &str, tld: &str) -> Result<Self, ValidationError> {
        Self::from_labels([sld, tld])
    }

    /// Creates a host name from its labels given from the root down.
    ///
    /// The top-level domain comes first, followed by the second-level
    /// domain and then the `deeper` labels, again from the top down. So
    /// `Domain::new_subdomain("com", "example", ["api"])` results in
    /// `api.example.com`.
    pub fn new_subdomain<I, L>(
        tld: &str,
        sld: &str,
        deeper: I,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let deeper: Vec<L> = deeper.into_iter().collect();
        let mut labels = Vec::with_capacity(deeper.len() + 2);
        labels.push(tld);
        labels.push(sld);
        labels.extend(deeper.iter().map(AsRef::as_ref));
        labels.reverse();
        Self::from_labels(labels)
    }

    /// Checks the labels again under the rules of the standard `T`.
    pub fn convert<T: Standard>(&self) -> Result<Domain<T>, ValidationError> {
        Domain::from_labels(self.iter())
    }

    /// Returns a new name with `labels` added in front of this name.
    ///
    /// The first item becomes the leftmost label of the new name. The
    /// combined name is checked again and may be too long or have too many
    /// labels.
    pub fn adding_subdomain<I, L>(
        &self,
        labels: I,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let added: Vec<L> = labels.into_iter().collect();
        Self::from_labels(
            added
                .iter()
                .map(AsRef::as_ref)
                .chain(self.iter().map(Label::as_str)),
        )
    }
}

impl<S> Domain<S> {
    /// Creates a value from already checked labels.
    fn from_vec_unchecked(labels: Vec<OwnedLabel>) -> Self {
        debug_assert!(!labels.is_empty() && labels.len() <= MAX_LABELS);
        Domain {
            labels,
            marker: PhantomData,
        }
    }

    /// Creates a value from a non-empty run of another value’s labels.
    ///
    /// Dropping labels from the front keeps a valid name valid: the
    /// top-level domain stays the same and the name only gets shorter.
    fn from_suffix(labels: &[OwnedLabel]) -> Self {
        Self::from_vec_unchecked(labels.to_vec())
    }
}

/// # Properties
///
impl<S> Domain<S> {
    /// Returns the name with its labels separated by dots.
    ///
    /// This is the same as the `Display` representation.
    #[must_use]
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Returns the number of labels.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns the length of the name in octets, including the dots.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.iter().map(Label::len).sum::<usize>() + self.labels.len() - 1
    }

    /// Returns an iterator over the labels, leftmost label first.
    pub fn iter(&self) -> DomainIter {
        DomainIter(self.labels.iter())
    }

    /// Returns the leftmost, i.e., most specific label.
    #[must_use]
    pub fn first(&self) -> &Label {
        self.labels[0].as_label()
    }

    /// Returns the top-level domain.
    ///
    /// As a name has at least one label, there always is one.
    #[must_use]
    pub fn tld(&self) -> &Label {
        self.labels[self.labels.len() - 1].as_label()
    }

    /// Returns the second-level domain if the name has at least two labels.
    #[must_use]
    pub fn sld(&self) -> Option<&Label> {
        let index = self.labels.len().checked_sub(2)?;
        Some(self.labels[index].as_label())
    }

    /// Returns whether all letters in the name are lowercase.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.iter().all(Label::is_canonical)
    }

    /// Returns the name with all letters converted to lowercase.
    #[must_use]
    pub fn to_canonical(&self) -> Self {
        let mut labels = self.labels.clone();
        labels.iter_mut().for_each(OwnedLabel::make_canonical);
        Self::from_vec_unchecked(labels)
    }
}

/// # Working with the Hierarchy
///
impl<S> Domain<S> {
    /// Returns the parent of this name.
    ///
    /// The parent is the name without its leftmost label. A name of a
    /// second-level and top-level domain only has no parent, and neither has
    /// a single label name.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.labels.len() <= 2 {
            None
        } else {
            Some(Self::from_suffix(&self.labels[1..]))
        }
    }

    /// Returns the second-level and top-level domain of this name.
    ///
    /// Returns `None` for a single label name.
    #[must_use]
    pub fn root(&self) -> Option<Self> {
        let start = self.labels.len().checked_sub(2)?;
        Some(Self::from_suffix(&self.labels[start..]))
    }

    /// Returns an iterator over this name and all its ancestors.
    ///
    /// The iterator starts with a copy of the name itself and then
    /// returns each parent in turn, ending with [`root`][Self::root].
    pub fn iter_suffixes(&self) -> SuffixIter<S> {
        SuffixIter::new(self)
    }

    /// Returns whether `base` is a suffix of this name.
    ///
    /// This is also true if both names are equal.
    pub fn ends_with<T>(&self, base: &Domain<T>) -> bool {
        self.labels.len() >= base.labels.len()
            && self.iter().rev().zip(base.iter().rev()).all(|(l, r)| l == r)
    }

    /// Returns whether this name lies strictly below `other`.
    ///
    /// This is the case if `other` can be had by dropping one or more
    /// labels from the front of this name. A name is never a subdomain of
    /// itself.
    pub fn is_subdomain_of<T>(&self, other: &Domain<T>) -> bool {
        self.labels.len() > other.labels.len() && self.ends_with(other)
    }
}

//--- Clone

impl<S> Clone for Domain<S> {
    fn clone(&self) -> Self {
        Self::from_vec_unchecked(self.labels.clone())
    }
}

//--- FromStr and TryFrom

impl<S: Standard> FromStr for Domain<S> {
    type Err = ValidationError;

    /// Parses a string of dot-separated labels into a host name.
    ///
    /// A trailing dot is not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_str(s, S::RULES).map(Self::from_vec_unchecked)
    }
}

impl<'a, S: Standard> TryFrom<&'a str> for Domain<S> {
    type Error = ValidationError;

    fn try_from(s: &'a str) -> Result<Self, Self::Error> {
        Self::from_str(s)
    }
}

impl<S: Standard> TryFrom<String> for Domain<S> {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_str(&s)
    }
}

//--- PartialEq and Eq

impl<S, T> PartialEq<Domain<T>> for Domain<S> {
    fn eq(&self, other: &Domain<T>) -> bool {
        self.labels.len() == other.labels.len()
            && self.iter().zip(other.iter()).all(|(l, r)| l == r)
    }
}

impl<S> Eq for Domain<S> {}

//--- PartialOrd and Ord

impl<S, T> PartialOrd<Domain<T>> for Domain<S> {
    /// Returns the ordering between `self` and `other`.
    ///
    /// Host name order is determined according to the ‘canonical DNS
    /// name order’ as defined in [section 6.1 of RFC 4034][RFC4034-6.1].
    ///
    /// [RFC4034-6.1]: https://tools.ietf.org/html/rfc4034#section-6.1
    fn partial_cmp(&self, other: &Domain<T>) -> Option<cmp::Ordering> {
        Some(self.iter().rev().cmp(other.iter().rev()))
    }
}

impl<S> Ord for Domain<S> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.iter().rev().cmp(other.iter().rev())
    }
}

//--- Hash

impl<S> hash::Hash for Domain<S> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        for label in self.iter() {
            label.hash(state)
        }
    }
}

//--- IntoIterator

impl<'a, S> IntoIterator for &'a Domain<S> {
    type Item = &'a Label;
    type IntoIter = DomainIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//--- Display and Debug

impl<S> fmt::Display for Domain<S> {
    /// Formats the host name.
    ///
    /// The labels are separated by dots. There is no trailing dot.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(label) = iter.next() {
            fmt::Display::fmt(label, f)?;
        }
        for label in iter {
            write!(f, ".{}", label)?
        }
        Ok(())
    }
}

impl<S> fmt::Debug for Domain<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Domain({})", self)
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl<S> serde::Serialize for Domain<S> {
    fn serialize<Ser: serde::Serializer>(
        &self,
        serializer: Ser,
    ) -> Result<Ser::Ok, Ser::Error> {
        serializer.serialize_newtype_struct("Domain", &format_args!("{}", self))
    }
}

#[cfg(feature = "serde")]
impl<'de, S: Standard> serde::Deserialize<'de> for Domain<S> {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        use serde::de::Error;

        struct InnerVisitor<S>(PhantomData<S>);

        impl<'de, S: Standard> serde::de::Visitor<'de> for InnerVisitor<S> {
            type Value = Domain<S>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a host name")
            }

            fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
                Domain::from_str(v).map_err(E::custom)
            }
        }

        struct NewtypeVisitor<S>(PhantomData<S>);

        impl<'de, S: Standard> serde::de::Visitor<'de> for NewtypeVisitor<S> {
            type Value = Domain<S>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a host name")
            }

            fn visit_newtype_struct<D: serde::Deserializer<'de>>(
                self,
                deserializer: D,
            ) -> Result<Self::Value, D::Error> {
                deserializer.deserialize_str(InnerVisitor(PhantomData))
            }

            fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
                serde::de::Visitor::visit_str(InnerVisitor(PhantomData), v)
            }
        }

        deserializer
            .deserialize_newtype_struct("Domain", NewtypeVisitor(PhantomData))
    }
}

//------------ DomainIter ----------------------------------------------------

/// An iterator over the labels of a host name.
///
/// Iterating forward starts with the leftmost label. Iterating backwards
/// starts with the top-level domain.
#[derive(Clone, Debug)]
pub struct DomainIter<'a>(slice::Iter<'a, OwnedLabel>);

impl<'a> Iterator for DomainIter<'a> {
    type Item = &'a Label;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(OwnedLabel::as_label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> DoubleEndedIterator for DomainIter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(OwnedLabel::as_label)
    }
}

impl<'a> ExactSizeIterator for DomainIter<'a> {}

impl<'a> iter::FusedIterator for DomainIter<'a> {}

//------------ SuffixIter ----------------------------------------------------

/// An iterator over ever shorter suffixes of a host name.
///
/// The iterator stops at the suffix of the second-level and top-level
/// domain. A single label name only produces itself.
pub struct SuffixIter<'a, S> {
    name: &'a Domain<S>,
    start: Option<usize>,
}

impl<'a, S> SuffixIter<'a, S> {
    fn new(name: &'a Domain<S>) -> Self {
        SuffixIter {
            name,
            start: Some(0),
        }
    }
}

impl<'a, S> Clone for SuffixIter<'a, S> {
    fn clone(&self) -> Self {
        SuffixIter {
            name: self.name,
            start: self.start,
        }
    }
}

impl<'a, S> Iterator for SuffixIter<'a, S> {
    type Item = Domain<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.start?;
        let labels = &self.name.labels[start..];
        self.start = if labels.len() > 2 {
            Some(start + 1)
        } else {
            None
        };
        Some(Domain::from_suffix(labels))
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn name(s: &str) -> Domain {
        Domain::from_str(s).unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(name("example.com").name(), "example.com");
        assert_eq!(name("123.example.com").name(), "123.example.com");
        assert_eq!(name("localhost").label_count(), 1);
        assert_eq!(
            Domain::<Rfc1123>::from_str("example.123com"),
            Err(ValidationError::InvalidTld("123com".into()))
        );
        assert_eq!(
            Domain::<Rfc1123>::from_str(""),
            Err(ValidationError::Empty)
        );
        assert_eq!(
            Rfc1035Domain::from_str("123.example.com"),
            Err(ValidationError::InvalidLabel("123".into()))
        );
        assert!(Rfc1123Domain::try_from("a.b").is_ok());
        assert!(Rfc1123Domain::try_from(String::from("a.b")).is_ok());
    }

    #[test]
    fn from_labels() {
        let domain = Rfc1123Domain::from_labels(["api", "Example", "com"])
            .unwrap();
        assert_eq!(domain.name(), "api.Example.com");
        assert_eq!(
            Rfc1123Domain::from_labels(Vec::<String>::new()),
            Err(ValidationError::Empty)
        );
        assert_eq!(
            Rfc1123Domain::from_labels(["api.v1", "com"]),
            Err(ValidationError::InvalidLabel("api.v1".into()))
        );
    }

    #[test]
    fn new_root() {
        assert_eq!(
            Rfc1123Domain::new_root("example", "com").unwrap().name(),
            "example.com"
        );
        assert_eq!(
            Rfc1123Domain::new_root("example", "c-"),
            Err(ValidationError::InvalidTld("c-".into()))
        );
    }

    #[test]
    fn new_subdomain() {
        assert_eq!(
            Rfc1123Domain::new_subdomain("com", "example", ["api"])
                .unwrap()
                .name(),
            "api.example.com"
        );
        assert_eq!(
            Rfc1123Domain::new_subdomain("com", "example", ["v1", "api"])
                .unwrap()
                .name(),
            "api.v1.example.com"
        );
        assert_eq!(
            Rfc1123Domain::new_subdomain("com", "example", Vec::<&str>::new())
                .unwrap()
                .name(),
            "example.com"
        );
    }

    #[test]
    fn accessors() {
        let domain = name("api.example.com");
        assert_eq!(domain.tld().as_str(), "com");
        assert_eq!(domain.sld().unwrap().as_str(), "example");
        assert_eq!(domain.first().as_str(), "api");
        assert_eq!(domain.len(), 15);

        let single = name("localhost");
        assert_eq!(single.tld().as_str(), "localhost");
        assert!(single.sld().is_none());
    }

    #[test]
    fn iter() {
        let domain = name("api.example.com");
        let labels: Vec<_> = domain.iter().map(Label::as_str).collect();
        assert_eq!(labels, ["api", "example", "com"]);
        let labels: Vec<_> = domain.iter().rev().map(Label::as_str).collect();
        assert_eq!(labels, ["com", "example", "api"]);
        assert_eq!(domain.iter().len(), 3);
        assert_eq!((&domain).into_iter().count(), 3);
    }

    #[test]
    fn parent() {
        let domain = name("api.v1.example.com");
        let parent = domain.parent().unwrap();
        assert_eq!(parent.name(), "v1.example.com");
        let parent = parent.parent().unwrap();
        assert_eq!(parent.name(), "example.com");
        assert!(parent.parent().is_none());
        assert!(name("localhost").parent().is_none());
    }

    #[test]
    fn root() {
        assert_eq!(name("api.v1.example.com").root().unwrap().name(), "example.com");
        assert_eq!(name("example.com").root().unwrap().name(), "example.com");
        assert!(name("localhost").root().is_none());
    }

    #[test]
    fn iter_suffixes() {
        let domain = name("api.v1.example.com");
        let suffixes: Vec<_> =
            domain.iter_suffixes().map(|name| name.name()).collect();
        assert_eq!(
            suffixes,
            ["api.v1.example.com", "v1.example.com", "example.com"]
        );
        assert_eq!(name("localhost").iter_suffixes().count(), 1);
        assert_eq!(name("example.com").iter_suffixes().count(), 1);
    }

    #[test]
    fn adding_subdomain() {
        let domain = name("api.v1.example.com");
        assert_eq!(
            domain.adding_subdomain(["staging"]).unwrap().name(),
            "staging.api.v1.example.com"
        );
        assert_eq!(
            domain.adding_subdomain(["a", "b"]).unwrap().name(),
            "a.b.api.v1.example.com"
        );
        assert_eq!(
            domain.adding_subdomain(["-x"]),
            Err(ValidationError::InvalidLabel("-x".into()))
        );
        assert_eq!(
            domain.adding_subdomain(["x.y"]),
            Err(ValidationError::InvalidLabel("x.y".into()))
        );

        let long = name(&["a"; 127].join("."));
        assert_eq!(
            long.adding_subdomain(["b"]),
            Err(ValidationError::TooManyLabels)
        );
        let wide = name(&["a".repeat(63), "b".repeat(63), "com".into()].join("."));
        let label = "c".repeat(63);
        assert_eq!(
            wide.adding_subdomain([label.as_str(), label.as_str()]),
            Err(ValidationError::TooLong(259))
        );
    }

    #[test]
    fn is_subdomain_of() {
        let base = name("example.com");
        assert!(name("api.example.com").is_subdomain_of(&base));
        assert!(name("a.b.example.com").is_subdomain_of(&base));
        assert!(name("API.Example.COM").is_subdomain_of(&base));
        assert!(!base.is_subdomain_of(&base));
        assert!(!base.is_subdomain_of(&name("api.example.com")));
        assert!(!name("api.example.org").is_subdomain_of(&base));
        assert!(!name("api.badexample.com").is_subdomain_of(&base));

        assert!(base.ends_with(&base));
        assert!(name("api.example.com").ends_with(&name("com")));
    }

    #[test]
    fn eq() {
        assert_eq!(name("example.com"), name("EXAMPLE.com"));
        assert_ne!(name("example.com"), name("www.example.com"));
        assert_ne!(name("example.com"), name("example.org"));
        let strict: Rfc1035Domain = "example.com".parse().unwrap();
        assert_eq!(name("example.com"), strict);
    }

    #[test]
    fn cmp() {
        // The list from section 6.1 of RFC 4034 minus the non-host names.
        let names = [
            name("example"),
            name("a.example"),
            name("yljkjljk.a.example"),
            name("Z.a.example"),
            name("zABC.a.EXAMPLE"),
            name("z.example"),
        ];
        for i in 0..names.len() {
            for j in 0..names.len() {
                let ord = i.cmp(&j);
                assert_eq!(names[i].partial_cmp(&names[j]), Some(ord));
                assert_eq!(names[i].cmp(&names[j]), ord);
            }
        }
    }

    #[test]
    #[cfg(feature = "std")]
    fn hash() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut s1 = DefaultHasher::new();
        let mut s2 = DefaultHasher::new();
        name("www.example.com").hash(&mut s1);
        name("WWW.EXAMPLE.com").hash(&mut s2);
        assert_eq!(s1.finish(), s2.finish());
    }

    #[test]
    fn canonical() {
        let domain = name("WWW.Example.com");
        assert!(!domain.is_canonical());
        let canonical = domain.to_canonical();
        assert_eq!(canonical.name(), "www.example.com");
        assert!(canonical.is_canonical());
        assert_eq!(canonical, domain);
    }

    #[test]
    fn display() {
        use alloc::format;

        let domain = name("api.example.com");
        assert_eq!(format!("{}", domain), "api.example.com");
        assert_eq!(format!("{:?}", domain), "Domain(api.example.com)");
    }

    #[test]
    fn send_sync() {
        fn check<T: Send + Sync>() {}
        check::<Rfc1123Domain>();
        check::<Rfc1035Domain>();
    }
}
