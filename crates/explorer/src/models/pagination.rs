use serde::{Deserialize, Serialize};

use crate::errors::{ExplorerError, Result};

pub const DEFAULT_OFFSET: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 25;

/// Paging as supplied by the caller. Either field may be omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl Pagination {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
        }
    }

    /// Validate explicit values and fill in defaults for omitted ones.
    pub fn window(&self) -> Result<PaginationWindow> {
        let offset = match self.offset {
            None => DEFAULT_OFFSET,
            Some(value) if value < 0 => {
                return Err(ExplorerError::InvalidPagination {
                    field: "offset",
                    value,
                })
            }
            Some(value) => value as u64,
        };
        let limit = match self.limit {
            None => DEFAULT_LIMIT,
            Some(value) if value <= 0 => {
                return Err(ExplorerError::InvalidPagination {
                    field: "limit",
                    value,
                })
            }
            Some(value) => value as u64,
        };
        Ok(PaginationWindow { offset, limit })
    }
}

/// Validated paging; both fields always present on the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationWindow {
    pub offset: u64,
    pub limit: u64,
}

impl Default for PaginationWindow {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PaginationWindow {
    pub fn query_string(&self) -> String {
        format!("offset={}&limit={}", self.offset, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let window = Pagination::default().window().unwrap();
        assert_eq!(window, PaginationWindow { offset: 0, limit: 25 });
        assert_eq!(window.query_string(), "offset=0&limit=25");
    }

    #[test]
    fn test_partial_defaults() {
        let only_offset = Pagination {
            offset: Some(50),
            limit: None,
        };
        assert_eq!(
            only_offset.window().unwrap(),
            PaginationWindow { offset: 50, limit: 25 }
        );

        let only_limit = Pagination {
            offset: None,
            limit: Some(5),
        };
        assert_eq!(
            only_limit.window().unwrap(),
            PaginationWindow { offset: 0, limit: 5 }
        );
    }

    #[test]
    fn test_explicit_values() {
        let window = Pagination::new(10, 5).window().unwrap();
        assert_eq!(window.query_string(), "offset=10&limit=5");
    }

    #[test]
    fn test_rejects_negative_offset() {
        let err = Pagination::new(-1, 5).window().unwrap_err();
        assert!(matches!(
            err,
            ExplorerError::InvalidPagination {
                field: "offset",
                value: -1
            }
        ));
    }

    #[test]
    fn test_rejects_non_positive_limit() {
        for limit in [0, -7] {
            let err = Pagination::new(0, limit).window().unwrap_err();
            assert!(matches!(
                err,
                ExplorerError::InvalidPagination { field: "limit", .. }
            ));
        }
    }

    #[test]
    fn test_deserialize_from_query_shape() {
        let pagination: Pagination = serde_json::from_str(r#"{"limit": 10}"#).unwrap();
        assert_eq!(pagination.offset, None);
        assert_eq!(pagination.limit, Some(10));
    }
}
