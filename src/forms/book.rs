use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::book::{NewBook, UpdateBook};
use crate::repository::{SortColumn, SortOrder};
use crate::services::book::BooksQuery;

/// Body shared by the create and update endpoints.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookForm {
    #[validate(length(min = 1, max = 30, message = "title must be between 1 and 30 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "image must not be empty"))]
    pub image: String,
    #[validate(range(min = 0, message = "quantity must not be negative"))]
    pub quantity: i32,
    pub price: i32,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    #[validate(range(min = 1, message = "categoryId must be a valid identifier"))]
    pub category_id: i32,
}

impl From<&BookForm> for NewBook {
    fn from(form: &BookForm) -> Self {
        Self {
            title: form.title.clone(),
            image: form.image.clone(),
            quantity: form.quantity,
            price: form.price,
            description: form.description.clone(),
            author: form.author.clone(),
            category_id: form.category_id,
        }
    }
}

impl From<&BookForm> for UpdateBook {
    fn from(form: &BookForm) -> Self {
        Self {
            title: form.title.clone(),
            image: form.image.clone(),
            quantity: form.quantity,
            price: form.price,
            description: form.description.clone(),
            author: form.author.clone(),
            category_id: form.category_id,
        }
    }
}

/// Query string accepted by the book listing. Every field is optional;
/// coercion happens here rather than through schema validation.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListBooksParams {
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub page: Option<i64>,
    /// `0` sorts ascending, anything else descending.
    pub sort_order: Option<i32>,
    /// Column name; unknown values fall back to `id`.
    pub sort_column: Option<String>,
    pub category_id: Option<i32>,
}

impl From<ListBooksParams> for BooksQuery {
    fn from(params: ListBooksParams) -> Self {
        Self {
            search: params.search,
            limit: params.limit,
            page: params.page,
            sort_order: match params.sort_order {
                Some(0) => SortOrder::Asc,
                _ => SortOrder::Desc,
            },
            sort_column: params
                .sort_column
                .as_deref()
                .map(SortColumn::parse)
                .unwrap_or_default(),
            category_id: params.category_id,
        }
    }
}
