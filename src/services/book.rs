use crate::domain::book::{NewBook, UpdateBook};
use crate::dto::book::BookDetail;
use crate::pagination::{DEFAULT_PAGE_SIZE, PagedResponse};
use crate::repository::{
    BookListQuery, BookReader, BookWriter, CategoryReader, SortColumn, SortOrder,
};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the paginated book listing.
#[derive(Debug, Default)]
pub struct BooksQuery {
    /// Optional case-insensitive substring matched against titles.
    pub search: Option<String>,
    /// Requested page size; non-positive values fall back to the default.
    pub limit: Option<i64>,
    /// 1-indexed page; non-positive values are treated as the first page.
    pub page: Option<i64>,
    pub sort_order: SortOrder,
    pub sort_column: SortColumn,
    /// Optional exact-match filter on the category foreign key.
    pub category_id: Option<i32>,
}

/// Returns the requested page of non-deleted books with paging metadata.
pub fn list_books<R>(repo: &R, params: BooksQuery) -> ServiceResult<PagedResponse<BookDetail>>
where
    R: BookReader + ?Sized,
{
    let current_page = match params.page {
        Some(page) if page > 0 => page as usize,
        _ => 1,
    };
    let page_size = match params.limit {
        Some(limit) if limit > 0 => limit as usize,
        _ => DEFAULT_PAGE_SIZE,
    };

    let mut query = BookListQuery::new()
        .order_by(params.sort_column, params.sort_order)
        .paginate(current_page, page_size);

    let search = params
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    if let Some(term) = search {
        query = query.search(term);
    }
    if let Some(category_id) = params.category_id {
        query = query.category(category_id);
    }

    let (total, items) = repo.list_books(query).map_err(ServiceError::from)?;
    let items = items.into_iter().map(BookDetail::from).collect();

    Ok(PagedResponse::new(items, current_page, total, page_size))
}

/// Returns every book joined with its category, soft-deleted rows
/// included.
pub fn list_all_books<R>(repo: &R) -> ServiceResult<Vec<BookDetail>>
where
    R: BookReader + ?Sized,
{
    let books = repo.list_all_books().map_err(ServiceError::from)?;
    Ok(books.into_iter().map(BookDetail::from).collect())
}

/// Fetches a single non-deleted book by its identifier.
pub fn get_book_by_id<R>(repo: &R, book_id: i32) -> ServiceResult<BookDetail>
where
    R: BookReader + ?Sized,
{
    repo.get_book_by_id(book_id)
        .map_err(ServiceError::from)?
        .map(BookDetail::from)
        .ok_or_else(|| ServiceError::not_found("book"))
}

/// Creates a book after checking the referenced category exists. The
/// category fetched for the check is reused in the response.
pub fn create_book<R>(repo: &R, new_book: NewBook) -> ServiceResult<BookDetail>
where
    R: BookWriter + CategoryReader + ?Sized,
{
    let category = repo
        .get_category_by_id(new_book.category_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::not_found("category"))?;

    let book = repo.create_book(&new_book).map_err(ServiceError::from)?;

    Ok(BookDetail::from((book, category)))
}

/// Replaces every field of an existing book. The book existence check
/// runs before the category check, so a missing book wins even when the
/// category is missing too.
pub fn update_book<R>(repo: &R, book_id: i32, updates: UpdateBook) -> ServiceResult<BookDetail>
where
    R: BookReader + BookWriter + CategoryReader + ?Sized,
{
    if repo
        .get_book_by_id(book_id)
        .map_err(ServiceError::from)?
        .is_none()
    {
        return Err(ServiceError::not_found("book"));
    }

    let category = repo
        .get_category_by_id(updates.category_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::not_found("category"))?;

    let book = repo
        .update_book(book_id, &updates)
        .map_err(ServiceError::from)?;

    Ok(BookDetail::from((book, category)))
}

/// Soft-deletes a book and returns the affected identifier.
pub fn delete_book<R>(repo: &R, book_id: i32) -> ServiceResult<i32>
where
    R: BookReader + BookWriter + ?Sized,
{
    if repo
        .get_book_by_id(book_id)
        .map_err(ServiceError::from)?
        .is_none()
    {
        return Err(ServiceError::not_found("book"));
    }

    let removed = repo.delete_book(book_id).map_err(ServiceError::from)?;

    Ok(removed.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::Book;
    use crate::domain::category::Category;
    use crate::repository::mock::MockRepository;

    fn sample_category() -> Category {
        Category {
            id: 1,
            name: "sport".to_string(),
        }
    }

    fn sample_book(id: i32, title: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
            image: format!("https://example.com/{id}.jpg"),
            quantity: 10,
            price: 12,
            description: "description".to_string(),
            author: "author".to_string(),
            category_id: 1,
            ..Book::default()
        }
    }

    fn sample_new_book() -> NewBook {
        NewBook {
            title: "New book".to_string(),
            image: "https://example.com/new.jpg".to_string(),
            quantity: 1,
            price: 1,
            description: "New book description".to_string(),
            author: "author new book".to_string(),
            category_id: 1,
        }
    }

    fn sample_updates() -> UpdateBook {
        UpdateBook {
            title: "Update book".to_string(),
            image: "https://example.com/update.jpg".to_string(),
            quantity: 2,
            price: 2,
            description: "Update book description".to_string(),
            author: "update author".to_string(),
            category_id: 1,
        }
    }

    #[test]
    fn non_positive_page_is_treated_as_first_page() {
        for page in [Some(-3), Some(0), None] {
            let mut repo = MockRepository::new();
            repo.expect_list_books()
                .times(1)
                .withf(|query| {
                    query
                        .pagination
                        .as_ref()
                        .is_some_and(|pagination| pagination.page == 1)
                })
                .returning(|_| Ok((0, vec![])));

            let paged = list_books(
                &repo,
                BooksQuery {
                    page,
                    ..BooksQuery::default()
                },
            )
            .unwrap();
            assert_eq!(paged.current_page, 1);
        }
    }

    #[test]
    fn missing_or_zero_limit_falls_back_to_default_page_size() {
        for limit in [None, Some(0)] {
            let mut repo = MockRepository::new();
            repo.expect_list_books()
                .times(1)
                .withf(|query| {
                    query
                        .pagination
                        .as_ref()
                        .is_some_and(|pagination| pagination.per_page == DEFAULT_PAGE_SIZE)
                })
                .returning(|_| Ok((0, vec![])));

            list_books(
                &repo,
                BooksQuery {
                    limit,
                    ..BooksQuery::default()
                },
            )
            .unwrap();
        }
    }

    #[test]
    fn total_pages_is_ceiling_of_total_over_page_size() {
        let mut repo = MockRepository::new();
        repo.expect_list_books().returning(|_| Ok((25, vec![])));

        let paged = list_books(
            &repo,
            BooksQuery {
                limit: Some(10),
                page: Some(2),
                ..BooksQuery::default()
            },
        )
        .unwrap();

        assert_eq!(paged.total_items, 25);
        assert_eq!(paged.total_pages, 3);
        assert_eq!(paged.current_page, 2);
    }

    #[test]
    fn blank_search_is_dropped_and_terms_are_trimmed() {
        let mut repo = MockRepository::new();
        repo.expect_list_books()
            .times(1)
            .withf(|query| query.search.is_none())
            .returning(|_| Ok((0, vec![])));
        list_books(
            &repo,
            BooksQuery {
                search: Some("   ".to_string()),
                ..BooksQuery::default()
            },
        )
        .unwrap();

        let mut repo = MockRepository::new();
        repo.expect_list_books()
            .times(1)
            .withf(|query| query.search.as_deref() == Some("1984"))
            .returning(|_| {
                Ok((1, vec![(sample_book(3, "1984"), sample_category())]))
            });
        let paged = list_books(
            &repo,
            BooksQuery {
                search: Some(" 1984 ".to_string()),
                limit: Some(10),
                page: Some(1),
                sort_order: SortOrder::Asc,
                ..BooksQuery::default()
            },
        )
        .unwrap();

        assert_eq!(paged.total_items, 1);
        assert_eq!(paged.total_pages, 1);
        assert_eq!(paged.current_page, 1);
        assert_eq!(paged.items.len(), 1);
        assert_eq!(paged.items[0].title, "1984");
    }

    #[test]
    fn category_filter_is_forwarded_to_the_repository() {
        let mut repo = MockRepository::new();
        repo.expect_list_books()
            .times(1)
            .withf(|query| query.category_id == Some(7))
            .returning(|_| Ok((0, vec![])));

        list_books(
            &repo,
            BooksQuery {
                category_id: Some(7),
                ..BooksQuery::default()
            },
        )
        .unwrap();
    }

    #[test]
    fn get_book_by_id_returns_flattened_category() {
        let mut repo = MockRepository::new();
        repo.expect_get_book_by_id()
            .times(1)
            .returning(|id| Ok(Some((sample_book(id, "The Great Gatsby"), sample_category()))));

        let book = get_book_by_id(&repo, 1).unwrap();
        assert_eq!(book.id, 1);
        assert_eq!(book.category, sample_category());
    }

    #[test]
    fn get_book_by_id_reports_missing_book() {
        let mut repo = MockRepository::new();
        repo.expect_get_book_by_id().returning(|_| Ok(None));

        let err = get_book_by_id(&repo, 42).unwrap_err();
        assert_eq!(err, ServiceError::NotFound("book".to_string()));
    }

    #[test]
    fn create_book_reuses_the_fetched_category() {
        let mut repo = MockRepository::new();
        repo.expect_get_category_by_id()
            .times(1)
            .returning(|_| Ok(Some(sample_category())));
        repo.expect_create_book()
            .times(1)
            .returning(|new_book| {
                let mut book = sample_book(4, &new_book.title);
                book.quantity = new_book.quantity;
                book.price = new_book.price;
                Ok(book)
            });

        let created = create_book(&repo, sample_new_book()).unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(created.title, "New book");
        assert_eq!(created.category, sample_category());
    }

    #[test]
    fn create_book_with_unknown_category_performs_no_insert() {
        let mut repo = MockRepository::new();
        repo.expect_get_category_by_id()
            .times(1)
            .returning(|_| Ok(None));
        // No create expectation: an insert attempt would fail the test.

        let err = create_book(&repo, sample_new_book()).unwrap_err();
        assert_eq!(err, ServiceError::NotFound("category".to_string()));
    }

    #[test]
    fn update_book_checks_book_before_category() {
        let mut repo = MockRepository::new();
        repo.expect_get_book_by_id().times(1).returning(|_| Ok(None));
        // Both lookups would miss; the book must be reported.

        let err = update_book(&repo, 9, sample_updates()).unwrap_err();
        assert_eq!(err, ServiceError::NotFound("book".to_string()));
    }

    #[test]
    fn update_book_reports_missing_category() {
        let mut repo = MockRepository::new();
        repo.expect_get_book_by_id()
            .times(1)
            .returning(|id| Ok(Some((sample_book(id, "existing"), sample_category()))));
        repo.expect_get_category_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let err = update_book(&repo, 1, sample_updates()).unwrap_err();
        assert_eq!(err, ServiceError::NotFound("category".to_string()));
    }

    #[test]
    fn update_book_returns_updated_fields() {
        let mut repo = MockRepository::new();
        repo.expect_get_book_by_id()
            .times(1)
            .returning(|id| Ok(Some((sample_book(id, "existing"), sample_category()))));
        repo.expect_get_category_by_id()
            .times(1)
            .returning(|_| Ok(Some(sample_category())));
        repo.expect_update_book()
            .times(1)
            .returning(|id, updates| {
                let mut book = sample_book(id, &updates.title);
                book.quantity = updates.quantity;
                book.price = updates.price;
                Ok(book)
            });

        let updated = update_book(&repo, 1, sample_updates()).unwrap();
        assert_eq!(updated.title, "Update book");
        assert_eq!(updated.quantity, 2);
        assert_eq!(updated.category, sample_category());
    }

    #[test]
    fn delete_book_returns_the_affected_id() {
        let mut repo = MockRepository::new();
        repo.expect_get_book_by_id()
            .times(1)
            .returning(|id| Ok(Some((sample_book(id, "existing"), sample_category()))));
        repo.expect_delete_book().times(1).returning(|id| {
            let mut book = sample_book(id, "existing");
            book.is_deleted = true;
            Ok(book)
        });

        assert_eq!(delete_book(&repo, 5).unwrap(), 5);
    }

    #[test]
    fn delete_book_reports_missing_book() {
        let mut repo = MockRepository::new();
        repo.expect_get_book_by_id().times(1).returning(|_| Ok(None));

        let err = delete_book(&repo, 5).unwrap_err();
        assert_eq!(err, ServiceError::NotFound("book".to_string()));
    }

    #[test]
    fn list_all_books_passes_rows_through() {
        let mut repo = MockRepository::new();
        repo.expect_list_all_books().times(1).returning(|| {
            let mut deleted = sample_book(2, "removed");
            deleted.is_deleted = true;
            Ok(vec![
                (sample_book(1, "kept"), sample_category()),
                (deleted, sample_category()),
            ])
        });

        let books = list_all_books(&repo).unwrap();
        assert_eq!(books.len(), 2);
    }
}
