//! Paging and sorting for list requests
//!
//! Query syntax: `page` (0-based), `size`, and repeated
//! `sort=<field>[,asc|desc]`. Sorting is limited to known columns so the SQL
//! ORDER BY clause is never built from client text.

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Nome,
}

impl SortField {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim() {
            "id" => Ok(Self::Id),
            "nome" => Ok(Self::Nome),
            other => Err(Error::InvalidRequest(format!(
                "Unknown sort property '{other}'"
            ))),
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Nome => "nome",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn parse(value: &str) -> Result<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(Error::InvalidRequest(format!(
                "Invalid sort direction '{value}'"
            )))
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    fn as_query(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: Direction,
}

impl SortOrder {
    /// Parse one `sort` value, e.g. `id,desc` or `nome`.
    pub fn parse(value: &str) -> Result<Self> {
        let mut parts = value.split(',');
        let field = SortField::parse(parts.next().unwrap_or_default())?;
        let direction = match parts.next() {
            Some(d) if !d.trim().is_empty() => Direction::parse(d.trim())?,
            _ => Direction::Asc,
        };
        if parts.next().is_some() {
            return Err(Error::InvalidRequest(format!(
                "Invalid sort parameter '{value}'"
            )));
        }
        Ok(Self { field, direction })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Vec<SortOrder>,
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size,
            sort: Vec::new(),
        }
    }

    pub fn sorted(mut self, field: SortField, direction: Direction) -> Self {
        self.sort.push(SortOrder { field, direction });
        self
    }

    /// Build a page request from raw query pairs.
    ///
    /// `size` is clamped to `max_size`; a zero size falls back to
    /// `default_size`.
    pub fn from_query_pairs(
        pairs: &[(String, String)],
        default_size: u64,
        max_size: u64,
    ) -> Result<Self> {
        let mut request = Self::new(0, default_size);

        for (key, value) in pairs {
            match key.as_str() {
                "page" => {
                    request.page = value.trim().parse().map_err(|_| {
                        Error::InvalidRequest(format!("Invalid page number '{value}'"))
                    })?;
                }
                "size" => {
                    let size: u64 = value.trim().parse().map_err(|_| {
                        Error::InvalidRequest(format!("Invalid page size '{value}'"))
                    })?;
                    request.size = if size == 0 { default_size } else { size };
                }
                "sort" => request.sort.push(SortOrder::parse(value)?),
                _ => {}
            }
        }

        request.size = request.size.min(max_size).max(1);
        Ok(request)
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }

    /// Sort orders with `id ASC` appended as a tie-breaker unless `id` is
    /// already sorted on.
    pub fn effective_sort(&self) -> Vec<SortOrder> {
        let mut orders = self.sort.clone();
        if !orders.iter().any(|o| o.field == SortField::Id) {
            orders.push(SortOrder {
                field: SortField::Id,
                direction: Direction::Asc,
            });
        }
        orders
    }

    /// Query string for this request pointing at `page`, used in `Link` headers.
    pub fn query_for_page(&self, page: u64) -> String {
        let mut query = format!("page={page}&size={}", self.size);
        for order in &self.sort {
            query.push_str(&format!(
                "&sort={},{}",
                order.field.column(),
                order.direction.as_query()
            ));
        }
        query
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn total_pages(&self, size: u64) -> u64 {
        if size == 0 {
            return 0;
        }
        self.total.div_ceil(size)
    }
}
