use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName};

/// Category grouping books in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

/// Data required to insert a new [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub name: CategoryName,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

/// Full-field update of an existing [`Category`].
///
/// There is no `created_at` here: updates never touch the creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryChanges {
    pub name: CategoryName,
    pub modified_at: NaiveDateTime,
}
