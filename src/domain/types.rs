//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so that
//! identifiers, text values and numeric constraints are enforced at the
//! boundary. The `Display` output of [`TypeConstraintError`] is what API
//! clients see when a payload is rejected.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Earliest accepted book release year.
pub const MIN_RELEASE_YEAR: i32 = 1980;
/// Latest accepted book release year.
pub const MAX_RELEASE_YEAR: i32 = 2024;
/// Books with more pages than this are classified as thick.
pub const THIN_BOOK_MAX_PAGES: i32 = 100;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A numeric value required to be positive was zero or negative.
    #[error("{0} must be greater than 0")]
    NonPositiveNumber(&'static str),
    /// A numeric value fell outside its inclusive range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i32,
        max: i32,
    },
    /// A string was empty or whitespace-only.
    #[error("{0} is required")]
    EmptyString(&'static str),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Blank values are rejected, anything else is kept exactly as given.
fn require_non_blank<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let value = value.into();
    if value.trim().is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(value)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a value that is not blank.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                require_non_blank(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

macro_rules! positive_i32_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Constructs a strictly positive value.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveNumber($field))
                }
            }

            /// Returns the raw `i32` value.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

id_newtype!(BookId, "Unique identifier for a book.", "book_id");
id_newtype!(
    CategoryId,
    "Unique identifier for a category.",
    "category_id"
);

non_empty_string_newtype!(BookTitle, "Book title enforcing non-empty values.", "Title");
non_empty_string_newtype!(
    CategoryName,
    "Category name enforcing non-empty values.",
    "Name"
);

positive_i32_newtype!(BookPrice, "Positive book price in whole currency units.", "Price");
positive_i32_newtype!(PageCount, "Positive number of pages in a book.", "Total page");

/// Release year bounded to the catalog's accepted range.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ReleaseYear(i32);

impl ReleaseYear {
    /// Constructs a release year within [`MIN_RELEASE_YEAR`]..=[`MAX_RELEASE_YEAR`].
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if (MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::OutOfRange {
                field: "Release year",
                min: MIN_RELEASE_YEAR,
                max: MAX_RELEASE_YEAR,
            })
        }
    }

    /// Returns the raw year.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for ReleaseYear {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for ReleaseYear {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ReleaseYear> for i32 {
    fn from(value: ReleaseYear) -> Self {
        value.0
    }
}

impl PartialEq<i32> for ReleaseYear {
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
}

/// Page-count classification of a book.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Thickness {
    /// More than [`THIN_BOOK_MAX_PAGES`] pages.
    Tebal,
    /// At most [`THIN_BOOK_MAX_PAGES`] pages.
    Tipis,
}

impl Thickness {
    /// Classifies a book by its page count.
    pub const fn from_pages(pages: PageCount) -> Self {
        if pages.get() > THIN_BOOK_MAX_PAGES {
            Self::Tebal
        } else {
            Self::Tipis
        }
    }

    /// String representation used in persistence.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tebal => "tebal",
            Self::Tipis => "tipis",
        }
    }
}

impl Display for Thickness {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<PageCount> for Thickness {
    fn from(value: PageCount) -> Self {
        Self::from_pages(value)
    }
}

impl TryFrom<&str> for Thickness {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "tebal" => Ok(Self::Tebal),
            "tipis" => Ok(Self::Tipis),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "thickness: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for Thickness {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<Thickness> for String {
    fn from(value: Thickness) -> Self {
        value.as_str().to_string()
    }
}
