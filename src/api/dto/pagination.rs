//! Pagination and filtering query parameters.

use serde::Deserialize;
use serde_json::json;
use serde_with::{DisplayFromStr, NoneAsEmptyString, serde_as};

use crate::error::AppError;

pub const DEFAULT_PAGE_SIZE: u32 = 25;
pub const MAX_PAGE_SIZE: u32 = 200;

/// Query parameters for link listings.
///
/// Uses `serde_with` to parse numbers from query strings and to treat an
/// empty `subdomain=` (as submitted by an empty filter form) as absent.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct LinkListParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub subdomain: Option<String>,
}

/// Validated pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub page_size: u32,
}

impl PageWindow {
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    /// Number of pages needed for `total` items (at least one).
    pub fn page_count(&self, total: i64) -> u32 {
        let size = i64::from(self.page_size);
        let pages = (total + size - 1) / size;
        pages.max(1) as u32
    }
}

impl LinkListParams {
    /// Validates pagination parameters.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `page_size`: 25
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the page is 0 or the page size is
    /// outside `1..=200`.
    pub fn window(&self) -> Result<PageWindow, AppError> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page == 0 {
            return Err(AppError::bad_request(
                "Page must be greater than 0",
                json!({ "page": page }),
            ));
        }

        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(AppError::bad_request(
                format!("Page size must be between 1 and {MAX_PAGE_SIZE}"),
                json!({ "page_size": page_size }),
            ));
        }

        Ok(PageWindow { page, page_size })
    }
}
