use crate::domain::category::Category;
use crate::repository::CategoryReader;
use crate::services::{ServiceError, ServiceResult};

/// Returns every category, unfiltered and unpaginated. An empty list is
/// a valid result.
pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader + ?Sized,
{
    repo.list_categories().map_err(ServiceError::from)
}
