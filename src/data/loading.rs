//! Generic model loading for admin index endpoints.
//!
//! Takes an arbitrary entity select, applies whitelisted search and ordering
//! clauses plus page/length pagination, and returns the requested page along
//! with the total number of matches before pagination.

use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    DatabaseConnection, DbErr, EntityTrait, FromQueryResult, Order, PaginatorTrait, QueryFilter,
    QueryOrder, Select,
};

/// Page size used when the client sends no `length` parameter.
pub const DEFAULT_PAGE_LENGTH: u64 = 10;

/// Whitelist of client-facing field names for an entity.
///
/// Only fields mapped here may appear in `search[...]` or `order[...]`
/// clauses; anything else is dropped before it reaches the query builder, so
/// client input is never interpolated into a raw query.
pub trait SearchableEntity: EntityTrait {
    fn column_for(field: &str) -> Option<Self::Column>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn into_order(self) -> Order {
        match self {
            Self::Asc => Order::Asc,
            Self::Desc => Order::Desc,
        }
    }
}

/// Search, ordering, and pagination parameters for a list request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadingParams {
    /// `(field, term)` pairs; each whitelisted pair becomes a
    /// case-insensitive substring match, combined conjunctively.
    pub search: Vec<(String, String)>,
    /// `(field, direction)` pairs applied in order.
    pub order: Vec<(String, SortDirection)>,
    /// 1-indexed page number; 0 falls back to the first page.
    pub page: u64,
    /// Page size; 0 falls back to [`DEFAULT_PAGE_LENGTH`].
    pub length: u64,
}

/// One page of records plus the counts a client needs to build pagination
/// controls. `total` counts all matches before pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage<M> {
    pub records: Vec<M>,
    pub total: u64,
    pub page: u64,
    pub length: u64,
    pub total_pages: u64,
}

impl<M> LoadedPage<M> {
    /// Converts the records while keeping the pagination counts.
    pub fn map<T>(self, f: impl FnMut(M) -> T) -> LoadedPage<T> {
        LoadedPage {
            records: self.records.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            length: self.length,
            total_pages: self.total_pages,
        }
    }

    /// Converts the records while keeping the pagination counts, failing on
    /// the first conversion error.
    pub fn try_map<T, E>(self, f: impl FnMut(M) -> Result<T, E>) -> Result<LoadedPage<T>, E> {
        let records = self.records.into_iter().map(f).collect::<Result<_, E>>()?;

        Ok(LoadedPage {
            records,
            total: self.total,
            page: self.page,
            length: self.length,
            total_pages: self.total_pages,
        })
    }
}

pub struct ModelLoader<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModelLoader<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies search, ordering, and pagination to `select` and fetches the
    /// requested page.
    ///
    /// Search terms match as `lower(column) LIKE '%term%'`. Unknown field
    /// names are ignored. An out-of-range page yields an empty record set
    /// with the counts intact.
    pub async fn load<E>(
        &self,
        select: Select<E>,
        params: &LoadingParams,
    ) -> Result<LoadedPage<E::Model>, DbErr>
    where
        E: SearchableEntity,
        E::Model: FromQueryResult + Sized + Send + Sync,
    {
        let page = Ord::max(params.page, 1);
        let length = if params.length == 0 {
            DEFAULT_PAGE_LENGTH
        } else {
            params.length
        };

        let mut select = select;

        for (field, term) in &params.search {
            let Some(column) = E::column_for(field) else {
                continue;
            };
            let pattern = format!("%{}%", term.to_lowercase());
            select = select.filter(Expr::expr(Func::lower(Expr::col(column))).like(pattern));
        }

        for (field, direction) in &params.order {
            let Some(column) = E::column_for(field) else {
                continue;
            };
            select = select.order_by(column, direction.into_order());
        }

        let paginator = select.paginate(self.db, length);
        let total = paginator.num_items().await?;
        let records = paginator.fetch_page(page - 1).await?;

        Ok(LoadedPage {
            records,
            total,
            page,
            length,
            total_pages: total.div_ceil(length),
        })
    }
}
