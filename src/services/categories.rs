use crate::domain::category::Category;
use crate::domain::types::CategoryId;
use crate::forms::categories::{CategoryForm, CategoryPayload};
use crate::repository::{CategoryReader, CategoryWriter, RepositoryError};

use super::errors::CATEGORY_IN_USE_MESSAGE;
use super::{ServiceError, ServiceResult};

pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader,
{
    repo.list_categories().map_err(|e| {
        log::error!("Failed to list categories: {e}");
        ServiceError::Internal(e.to_string())
    })
}

pub fn get_category<R>(category_id: i32, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader,
{
    let category_id = CategoryId::new(category_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_category_by_id(category_id) {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            Err(ServiceError::Internal(e.to_string()))
        }
    }
}

pub fn create_category<R>(form: CategoryForm, repo: &R) -> ServiceResult<Category>
where
    R: CategoryWriter,
{
    let payload = CategoryPayload::try_from(form)?;

    repo.create_category(&payload.into_new_category()).map_err(|e| {
        log::error!("Failed to create category: {e}");
        ServiceError::Internal(e.to_string())
    })
}

pub fn update_category<R>(category_id: i32, form: CategoryForm, repo: &R) -> ServiceResult<Category>
where
    R: CategoryWriter,
{
    let payload = CategoryPayload::try_from(form)?;
    let category_id = CategoryId::new(category_id).map_err(|_| ServiceError::NotFound)?;

    match repo.update_category(category_id, &payload.into_changes()) {
        Ok(category) => Ok(category),
        Err(RepositoryError::NotFound) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update category: {e}");
            Err(ServiceError::Internal(e.to_string()))
        }
    }
}

pub fn delete_category<R>(category_id: i32, repo: &R) -> ServiceResult<()>
where
    R: CategoryWriter,
{
    let category_id = CategoryId::new(category_id).map_err(|_| ServiceError::NotFound)?;

    match repo.delete_category(category_id) {
        Ok(()) => Ok(()),
        Err(RepositoryError::NotFound) => Err(ServiceError::NotFound),
        Err(RepositoryError::ConstraintViolation(_)) => Err(ServiceError::InvalidReference(
            CATEGORY_IN_USE_MESSAGE.to_string(),
        )),
        Err(e) => {
            log::error!("Failed to delete category: {e}");
            Err(ServiceError::Internal(e.to_string()))
        }
    }
}
