use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
/// Diesel model for [`crate::domain::category::Category`].
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl From<Category> for DomainCategory {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}
