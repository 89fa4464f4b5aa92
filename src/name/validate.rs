//! Checking complete host names.
//!
//! The functions in this module split a host name into its labels and check
//! each of them according to its position: the rightmost label is the
//! top-level domain and has to follow stricter rules than all the others.
//! On top of that, the name as a whole must not be longer than
//! [`MAX_NAME_LEN`] octets and must not have more than [`MAX_LABELS`]
//! labels.
//!
//! Both functions return the labels in the order they appear in the name,
//! i.e., the top-level domain comes last.

use super::label::{Label, LabelError, LabelKind, OwnedLabel};
use super::rules::Rules;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

//------------ Limits --------------------------------------------------------

/// The maximum length of a host name in octets, including the dots.
pub const MAX_NAME_LEN: usize = 255;

/// The maximum number of labels in a host name.
pub const MAX_LABELS: usize = 127;

//------------ validate_str --------------------------------------------------

/// Splits a host name at its dots and checks the resulting labels.
pub fn validate_str(
    name: &str,
    rules: Rules,
) -> Result<Vec<OwnedLabel>, ValidationError> {
    if name.is_empty() {
        return Err(rejected(ValidationError::Empty));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(rejected(ValidationError::TooLong(name.len())));
    }
    let count = name.split('.').count();
    if count > MAX_LABELS {
        return Err(rejected(ValidationError::TooManyLabels));
    }
    check_labels(name.split('.'), count, rules)
}

//------------ validate_labels -----------------------------------------------

/// Checks a sequence of individual labels.
///
/// Each item is taken to be exactly one label. An item containing a dot is
/// therefore rejected rather than split.
pub fn validate_labels<I, L>(
    labels: I,
    rules: Rules,
) -> Result<Vec<OwnedLabel>, ValidationError>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let labels: Vec<L> = labels.into_iter().collect();
    if labels.is_empty() {
        return Err(rejected(ValidationError::Empty));
    }
    let len = labels
        .iter()
        .map(|label| label.as_ref().len())
        .sum::<usize>()
        + labels.len()
        - 1;
    if len > MAX_NAME_LEN {
        return Err(rejected(ValidationError::TooLong(len)));
    }
    if labels.len() > MAX_LABELS {
        return Err(rejected(ValidationError::TooManyLabels));
    }
    check_labels(labels.iter().map(AsRef::as_ref), labels.len(), rules)
}

/// Checks `count` labels, the last of which is the top-level domain.
fn check_labels<'a>(
    labels: impl Iterator<Item = &'a str>,
    count: usize,
    rules: Rules,
) -> Result<Vec<OwnedLabel>, ValidationError> {
    let mut res = Vec::with_capacity(count);
    for (index, label) in labels.enumerate() {
        let kind = if index + 1 == count {
            LabelKind::Tld
        } else {
            LabelKind::Regular
        };
        match Label::with_rules(label, kind, rules) {
            Ok(label) => res.push(OwnedLabel::from_label(label)),
            Err(err) => return Err(rejected_label(label, kind, err)),
        }
    }
    Ok(res)
}

/// Turns a label error into the validation error for its position.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn rejected_label(
    label: &str,
    kind: LabelKind,
    err: LabelError,
) -> ValidationError {
    #[cfg(feature = "tracing")]
    tracing::trace!(label, ?kind, reason = %err, "rejected host name label");
    match kind {
        LabelKind::Regular => ValidationError::InvalidLabel(label.to_string()),
        LabelKind::Tld => ValidationError::InvalidTld(label.to_string()),
    }
}

fn rejected(err: ValidationError) -> ValidationError {
    #[cfg(feature = "tracing")]
    tracing::trace!(error = %err, "rejected host name");
    err
}

//============ Error Types ===================================================

//------------ ValidationError -----------------------------------------------

/// A host name or sequence of labels is not a valid host name.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ValidationError {
    /// The name was empty or there were no labels.
    Empty,

    /// The name was longer than 255 octets.
    ///
    /// Contains the actual length.
    TooLong(usize),

    /// The name had more than 127 labels.
    TooManyLabels,

    /// A label other than the top-level domain was invalid.
    ///
    /// Contains the offending label.
    InvalidLabel(String),

    /// The top-level domain was invalid.
    ///
    /// Contains the offending label.
    InvalidTld(String),
}

//--- Display and Error

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ValidationError::Empty => f.write_str("empty host name"),
            ValidationError::TooLong(len) => {
                write!(f, "host name of {} octets exceeds 255 octets", len)
            }
            ValidationError::TooManyLabels => {
                f.write_str("host name has more than 127 labels")
            }
            ValidationError::InvalidLabel(ref label) => {
                write!(f, "invalid label '{}'", label)
            }
            ValidationError::InvalidTld(ref label) => {
                write!(f, "invalid top-level domain '{}'", label)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

//============ Testing =======================================================
