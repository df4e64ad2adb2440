use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::{
    Category as DomainCategory, CategoryChanges as DomainCategoryChanges,
    NewCategory as DomainNewCategory,
};
use crate::domain::types::{CategoryName, TypeConstraintError};

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

/// Insertable form of [`Category`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory {
    pub name: String,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

/// Changeset applied by a full category update.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::categories)]
pub struct CategoryChanges {
    pub name: String,
    pub modified_at: NaiveDateTime,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: category.id.try_into()?,
            name: CategoryName::new(category.name)?,
            created_at: category.created_at,
            modified_at: category.modified_at,
        })
    }
}

impl From<DomainNewCategory> for NewCategory {
    fn from(category: DomainNewCategory) -> Self {
        Self {
            name: category.name.into_inner(),
            created_at: category.created_at,
            modified_at: category.modified_at,
        }
    }
}

impl From<DomainCategoryChanges> for CategoryChanges {
    fn from(changes: DomainCategoryChanges) -> Self {
        Self {
            name: changes.name.into_inner(),
            modified_at: changes.modified_at,
        }
    }
}
