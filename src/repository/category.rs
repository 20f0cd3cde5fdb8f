use diesel::prelude::*;

use crate::domain::category::Category;
use crate::repository::{CategoryReader, DieselRepository, errors::RepositoryResult};

impl CategoryReader for DieselRepository {
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<Category>> {
        use crate::models::category::Category as DbCategory;
        use crate::schema::categories;

        let mut conn = self.pool.get()?;
        let category = categories::table
            .find(id)
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(category.map(Into::into))
    }

    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::models::category::Category as DbCategory;
        use crate::schema::categories;

        let mut conn = self.pool.get()?;
        let categories = categories::table
            .order(categories::id.asc())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(categories)
    }
}
