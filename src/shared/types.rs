use std::fmt;

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::error::{AppError, Result};
use crate::shared::constants::{DEFAULT_LIMIT, DEFAULT_OFFSET};

/// Body of every error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }
}

/// Plain confirmation body, e.g. after a delete
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub has_more: bool,
}

impl Pagination {
    pub fn new(total: i64, limit: i64, offset: i64, returned: usize) -> Self {
        Self {
            total,
            limit,
            offset,
            has_more: offset + (returned as i64) < total,
        }
    }
}

/// List envelope: `{ data, pagination }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total: i64, limit: i64, offset: i64) -> Self {
        let pagination = Pagination::new(total, limit, offset, data.len());
        Self { data, pagination }
    }
}

/// Pagination query parameters shared by the list endpoints.
///
/// Values are kept as raw strings so that garbage input falls back to the
/// defaults instead of rejecting the request. A repeated parameter keeps its
/// first value.
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Page size (default: 10)
    #[param(value_type = Option<i64>)]
    pub limit: Option<String>,

    /// Number of records to skip (default: 0)
    #[param(value_type = Option<i64>)]
    pub offset: Option<String>,
}

impl ListQuery {
    pub fn limit(&self) -> i64 {
        parse_int(self.limit.as_deref())
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_LIMIT)
    }

    pub fn offset(&self) -> i64 {
        parse_int(self.offset.as_deref())
            .filter(|offset| *offset >= 0)
            .unwrap_or(DEFAULT_OFFSET)
    }
}

impl<'de> Deserialize<'de> for ListQuery {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ListQueryVisitor;

        impl<'de> Visitor<'de> for ListQueryVisitor {
            type Value = ListQuery;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("pagination query parameters")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<ListQuery, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut query = ListQuery::default();
                while let Some(key) = map.next_key::<String>()? {
                    let slot = match key.as_str() {
                        "limit" => &mut query.limit,
                        "offset" => &mut query.offset,
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                            continue;
                        }
                    };
                    let value = map.next_value::<String>()?;
                    if slot.is_none() {
                        *slot = Some(value);
                    }
                }
                Ok(query)
            }
        }

        deserializer.deserialize_map(ListQueryVisitor)
    }
}

/// Parse the leading integer of `raw`: `"5.7"` gives 5, `"10abc"` gives 10,
/// `"abc"` gives `None`
fn parse_int(raw: Option<&str>) -> Option<i64> {
    let s = raw?.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Query parameters for the search endpoints
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring to look for
    pub q: Option<String>,
}

impl SearchQuery {
    /// The search term, or `BadRequest` when it is missing or empty
    pub fn term(&self) -> Result<&str> {
        match self.q.as_deref() {
            Some(q) if !q.is_empty() => Ok(q),
            _ => Err(AppError::BadRequest(
                "Search query 'q' is required".to_string(),
            )),
        }
    }
}
