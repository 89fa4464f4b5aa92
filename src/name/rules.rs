//! Rule sets for host names.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use super::label::{Label, LabelError, LabelKind};

//------------ Rules ---------------------------------------------------------

/// The rules a host name label has to follow.
///
/// [RFC 1035] limits host name labels to ASCII letters, digits, and the
/// hyphen. A label has to start with a letter, it cannot end with a
/// hyphen, and it can be at most 63 octets long. [RFC 1123] relaxed this
/// and allows labels to start with a digit as well. Under both, the
/// top-level domain has to start and end with a letter so a host name can
/// never be mistaken for a dotted-decimal address.
///
/// The two sets are available as [`Rules::RFC1123`] and [`Rules::RFC1035`].
///
/// [RFC 1035]: https://tools.ietf.org/html/rfc1035
/// [RFC 1123]: https://tools.ietf.org/html/rfc1123
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Rules {
    /// Whether a regular label may start with a digit.
    leading_digit: bool,
}

impl Rules {
    /// The rules of RFC 1123, section 2.1.
    pub const RFC1123: Self = Rules {
        leading_digit: true,
    };

    /// The rules of RFC 1035, section 2.3.1.
    pub const RFC1035: Self = Rules {
        leading_digit: false,
    };

    /// Returns whether regular labels may start with a digit.
    #[must_use]
    pub const fn allows_leading_digit(self) -> bool {
        self.leading_digit
    }

    /// Checks that `label` is a valid label of the given kind.
    pub fn check_label(
        self,
        label: &str,
        kind: LabelKind,
    ) -> Result<(), LabelError> {
        let bytes = label.as_bytes();
        let (first, last) = match (bytes.first(), bytes.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(LabelError::Empty),
        };
        if bytes.len() > Label::MAX_LEN {
            return Err(LabelError::LongLabel(bytes.len()));
        }
        if let Some(ch) =
            label.chars().find(|ch| !ch.is_ascii_alphanumeric() && *ch != '-')
        {
            return Err(LabelError::BadSymbol(ch));
        }
        if first == b'-' {
            return Err(LabelError::LeadingHyphen);
        }
        if last == b'-' {
            return Err(LabelError::TrailingHyphen);
        }
        match kind {
            LabelKind::Regular => {
                if !self.leading_digit && first.is_ascii_digit() {
                    return Err(LabelError::LeadingDigit);
                }
            }
            LabelKind::Tld => {
                if !first.is_ascii_alphabetic() || !last.is_ascii_alphabetic()
                {
                    return Err(LabelError::TldBoundary);
                }
            }
        }
        Ok(())
    }
}

//------------ Standard ------------------------------------------------------

/// A host name standard.
///
/// This trait connects the marker types used as the type argument of
/// [`Domain`][super::Domain] with the rules that domain is checked against.
pub trait Standard {
    /// The rules all labels have to follow.
    const RULES: Rules;
}

/// Marker for host names following RFC 1123.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Rfc1123 {}

impl Standard for Rfc1123 {
    const RULES: Rules = Rules::RFC1123;
}

/// Marker for host names following RFC 1035.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Rfc1035 {}

impl Standard for Rfc1035 {
    const RULES: Rules = Rules::RFC1035;
}

//============ Testing =======================================================
