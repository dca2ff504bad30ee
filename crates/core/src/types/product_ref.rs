//! Product reference type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ProductRef`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ProductRefError {
    /// The input string is empty.
    #[error("product reference cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("product reference must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// An opaque, stable reference to a catalog product.
///
/// The catalog assigns these identifiers; the cart treats them as opaque and
/// only requires them to be non-empty. Two cart lines never share a
/// `ProductRef`.
///
/// ## Examples
///
/// ```
/// use medibay_core::ProductRef;
///
/// assert!(ProductRef::parse("prod-8861").is_ok());
/// assert!(ProductRef::parse("").is_err()); // empty
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ProductRef(String);

impl ProductRef {
    /// Maximum length of a product reference.
    pub const MAX_LENGTH: usize = 128;

    /// Parse a `ProductRef` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or longer than 128 characters.
    pub fn parse(s: &str) -> Result<Self, ProductRefError> {
        if s.is_empty() {
            return Err(ProductRefError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(ProductRefError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductRef` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductRef {
    type Err = ProductRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ProductRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
