use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A book row as stored, before the category join is flattened into a DTO.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub image: String,
    pub quantity: i32,
    pub price: i32,
    pub description: String,
    pub author: String,
    pub category_id: i32,
    pub is_deleted: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub image: String,
    pub quantity: i32,
    pub price: i32,
    pub description: String,
    pub author: String,
    pub category_id: i32,
}

/// Full-field replacement applied by the update endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdateBook {
    pub title: String,
    pub image: String,
    pub quantity: i32,
    pub price: i32,
    pub description: String,
    pub author: String,
    pub category_id: i32,
}
