use chrono::Utc;
use diesel::prelude::*;

use crate::domain::{
    book::{Book, NewBook, UpdateBook},
    category::Category,
};
use crate::repository::{
    BookListQuery, BookReader, BookWriter, DieselRepository, SortColumn, SortOrder,
    errors::RepositoryResult,
};

impl BookReader for DieselRepository {
    fn get_book_by_id(&self, id: i32) -> RepositoryResult<Option<(Book, Category)>> {
        use crate::models::book::Book as DbBook;
        use crate::models::category::Category as DbCategory;
        use crate::schema::{books, categories};

        let mut conn = self.pool.get()?;
        let result = books::table
            .inner_join(categories::table)
            .filter(books::id.eq(id))
            .filter(books::is_deleted.eq(false))
            .first::<(DbBook, DbCategory)>(&mut conn)
            .optional()?;

        Ok(result.map(|(book, category)| (book.into(), category.into())))
    }

    fn list_books(&self, query: BookListQuery) -> RepositoryResult<(usize, Vec<(Book, Category)>)> {
        use crate::models::book::Book as DbBook;
        use crate::models::category::Category as DbCategory;
        use crate::schema::{books, categories};

        let mut conn = self.pool.get()?;

        // SQLite LIKE is case-insensitive for ASCII.
        let pattern = query.search.as_ref().map(|s| format!("%{s}%"));

        let mut count_query = books::table
            .select(diesel::dsl::count_star())
            .filter(books::is_deleted.eq(false))
            .into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(pattern) = &pattern {
            count_query = count_query.filter(books::title.like(pattern));
        }
        if let Some(category_id) = query.category_id {
            count_query = count_query.filter(books::category_id.eq(category_id));
        }
        let total: i64 = count_query.get_result(&mut conn)?;

        let mut select_query = books::table
            .inner_join(categories::table)
            .filter(books::is_deleted.eq(false))
            .into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(pattern) = &pattern {
            select_query = select_query.filter(books::title.like(pattern));
        }
        if let Some(category_id) = query.category_id {
            select_query = select_query.filter(books::category_id.eq(category_id));
        }

        select_query = match query.sort_order {
            SortOrder::Asc => match query.sort_column {
                SortColumn::Id => select_query.order(books::id.asc()),
                SortColumn::Title => select_query.order(books::title.asc()),
                SortColumn::Author => select_query.order(books::author.asc()),
                SortColumn::Price => select_query.order(books::price.asc()),
                SortColumn::Quantity => select_query.order(books::quantity.asc()),
                SortColumn::CreatedAt => select_query.order(books::created_at.asc()),
                SortColumn::UpdatedAt => select_query.order(books::updated_at.asc()),
            },
            SortOrder::Desc => match query.sort_column {
                SortColumn::Id => select_query.order(books::id.desc()),
                SortColumn::Title => select_query.order(books::title.desc()),
                SortColumn::Author => select_query.order(books::author.desc()),
                SortColumn::Price => select_query.order(books::price.desc()),
                SortColumn::Quantity => select_query.order(books::quantity.desc()),
                SortColumn::CreatedAt => select_query.order(books::created_at.desc()),
                SortColumn::UpdatedAt => select_query.order(books::updated_at.desc()),
            },
        };

        if let Some(pagination) = &query.pagination {
            let page = pagination.page.max(1) as i64;
            let per_page = pagination.per_page as i64;
            select_query = select_query.limit(per_page).offset((page - 1) * per_page);
        }

        let items = select_query
            .load::<(DbBook, DbCategory)>(&mut conn)?
            .into_iter()
            .map(|(book, category)| (book.into(), category.into()))
            .collect();

        Ok((total as usize, items))
    }

    fn list_all_books(&self) -> RepositoryResult<Vec<(Book, Category)>> {
        use crate::models::book::Book as DbBook;
        use crate::models::category::Category as DbCategory;
        use crate::schema::{books, categories};

        let mut conn = self.pool.get()?;
        let items = books::table
            .inner_join(categories::table)
            .order(books::id.asc())
            .load::<(DbBook, DbCategory)>(&mut conn)?
            .into_iter()
            .map(|(book, category)| (book.into(), category.into()))
            .collect();

        Ok(items)
    }
}

impl BookWriter for DieselRepository {
    fn create_book(&self, new_book: &NewBook) -> RepositoryResult<Book> {
        use crate::models::book::{Book as DbBook, NewBook as DbNewBook};
        use crate::schema::books;

        let mut conn = self.pool.get()?;
        let insertable: DbNewBook = new_book.into();
        let created = diesel::insert_into(books::table)
            .values(&insertable)
            .get_result::<DbBook>(&mut conn)?;

        Ok(created.into())
    }

    fn update_book(&self, book_id: i32, updates: &UpdateBook) -> RepositoryResult<Book> {
        use crate::models::book::{Book as DbBook, UpdateBook as DbUpdateBook};
        use crate::schema::books;

        let mut conn = self.pool.get()?;
        let db_updates: DbUpdateBook = updates.into();

        let updated = diesel::update(books::table.find(book_id))
            .set((&db_updates, books::updated_at.eq(Utc::now().naive_utc())))
            .get_result::<DbBook>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_book(&self, book_id: i32) -> RepositoryResult<Book> {
        use crate::models::book::Book as DbBook;
        use crate::schema::books;

        let mut conn = self.pool.get()?;
        let removed = diesel::update(books::table.find(book_id))
            .set((
                books::is_deleted.eq(true),
                books::updated_at.eq(Utc::now().naive_utc()),
            ))
            .get_result::<DbBook>(&mut conn)?;

        Ok(removed.into())
    }
}
