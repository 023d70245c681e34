//! Offset pagination over a whole table.
//!
//! The count and the page fetch are two independent statements, so a row
//! inserted between them can make `total` disagree with what the page shows.
//! Callers get read-committed-at-query-time numbers, nothing stronger.

use serde::Serialize;
use sqlx::{postgres::PgRow, FromRow, PgPool};

use crate::shared::types::{Meta, PaginationQuery};

/// A table that can be paged through with [`find_and_paginate`].
pub trait Paginate: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    const TABLE: &'static str;
    const COLUMNS: &'static str;
    const ORDER_BY: &'static str = "id ASC";
}

/// One page of records plus the table total
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> i64 {
        total_pages(self.total, self.page_size)
    }

    pub fn meta(&self) -> Meta {
        Meta {
            total: self.total,
            page: Some(self.page),
            page_size: Some(self.page_size),
            total_pages: Some(self.total_pages()),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

pub fn total_pages(total: i64, page_size: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    (total + page_size - 1) / page_size
}

/// Fetch page `query.page` (1-based) of `T`'s table and the table's row count.
pub async fn find_and_paginate<T: Paginate>(
    pool: &PgPool,
    query: &PaginationQuery,
) -> Result<Page<T>, sqlx::Error> {
    let count_sql = format!("SELECT COUNT(*) FROM {}", T::TABLE);
    let total: i64 = sqlx::query_scalar(&count_sql).fetch_one(pool).await?;

    let page_sql = format!(
        "SELECT {} FROM {} ORDER BY {} LIMIT $1 OFFSET $2",
        T::COLUMNS,
        T::TABLE,
        T::ORDER_BY
    );
    let items: Vec<T> = sqlx::query_as(&page_sql)
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(pool)
        .await?;

    Ok(Page {
        items,
        total,
        page: query.page(),
        page_size: query.limit(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(95, 10), 10);
    }

    #[test]
    fn test_page_meta_and_map() {
        let page = Page {
            items: vec![1, 2, 3],
            total: 23,
            page: 3,
            page_size: 10,
        };
        let meta = page.meta();
        assert_eq!(meta.total, 23);
        assert_eq!(meta.page, Some(3));
        assert_eq!(meta.total_pages, Some(3));

        let doubled = page.map(|n| n * 2);
        assert_eq!(doubled.items, vec![2, 4, 6]);
        assert_eq!(doubled.total, 23);
    }

    #[test]
    fn test_out_of_range_page_keeps_total() {
        let page: Page<i32> = Page {
            items: vec![],
            total: 5,
            page: 9,
            page_size: 10,
        };
        assert!(page.items.is_empty());
        assert_eq!(page.meta().total, 5);
        assert_eq!(page.total_pages(), 1);
    }
}
