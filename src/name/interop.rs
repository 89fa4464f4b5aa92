//! Conversion between RFC 1123 and RFC 1035 host names.
//!
//! This is a private module. It only adds methods and trait impls to
//! [`Domain`].

use super::domain::{Rfc1035Domain, Rfc1123Domain};
use super::validate::ValidationError;

//------------ Rfc1123Domain -------------------------------------------------

impl Rfc1123Domain {
    /// Converts an RFC 1035 host name.
    ///
    /// The labels are checked again. Since RFC 1123 only relaxes the rules
    /// for labels other than the top-level domain, this will not fail for
    /// any valid RFC 1035 name.
    pub fn from_rfc1035(
        domain: &Rfc1035Domain,
    ) -> Result<Self, ValidationError> {
        domain.convert()
    }

    /// Converts the name into an RFC 1035 host name.
    ///
    /// This fails with [`ValidationError::InvalidLabel`] if any label but
    /// the top-level domain starts with a digit.
    pub fn to_rfc1035(&self) -> Result<Rfc1035Domain, ValidationError> {
        self.convert()
    }
}

//--- TryFrom

impl TryFrom<Rfc1035Domain> for Rfc1123Domain {
    type Error = ValidationError;

    fn try_from(domain: Rfc1035Domain) -> Result<Self, Self::Error> {
        Self::from_rfc1035(&domain)
    }
}

impl TryFrom<Rfc1123Domain> for Rfc1035Domain {
    type Error = ValidationError;

    fn try_from(domain: Rfc1123Domain) -> Result<Self, Self::Error> {
        domain.to_rfc1035()
    }
}

//============ Testing =======================================================
