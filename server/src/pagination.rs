//! Page arithmetic for `GET /todos`.

use serde::Deserialize;

use crate::error::{TodoError, TodoResult};
use crate::model::{Page, Todo};

pub const DEFAULT_PAGE_SIZE: i64 = 3;
pub const DEFAULT_PAGE_NUMBER: i64 = 1;

/// Query parameters of the list endpoint (`?first_n=&page_no=`).
///
/// Kept signed so that zero and negative values reach [`paginate`] and are
/// reported as invalid pagination rather than as an extractor failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    #[serde(rename = "first_n", default = "default_page_size")]
    pub page_size: i64,
    #[serde(rename = "page_no", default = "default_page_number")]
    pub page_number: i64,
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

fn default_page_number() -> i64 {
    DEFAULT_PAGE_NUMBER
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_number: DEFAULT_PAGE_NUMBER,
        }
    }
}

impl PageRequest {
    pub fn new(page_size: i64, page_number: i64) -> Self {
        Self {
            page_size,
            page_number,
        }
    }
}

/// Cut page `request.page_number` of size `request.page_size` out of `todos`.
///
/// A page number past the last page is `PageNotFound`. That includes page 1
/// of an empty collection, where there are zero pages.
pub fn paginate(todos: &[Todo], request: PageRequest) -> TodoResult<Page> {
    if request.page_size < 1 || request.page_number < 1 {
        return Err(TodoError::InvalidPagination(format!(
            "first_n and page_no must be at least 1, got first_n={} page_no={}",
            request.page_size, request.page_number
        )));
    }

    let page_size = usize::try_from(request.page_size)
        .map_err(|_| TodoError::InvalidPagination(format!("first_n={} is too large", request.page_size)))?;
    let total_items = todos.len();
    let total_pages = total_items.div_ceil(page_size);

    let page_number = match usize::try_from(request.page_number) {
        Ok(n) if n <= total_pages => n,
        _ => {
            return Err(TodoError::PageNotFound {
                page: request.page_number,
                total_pages,
            })
        }
    };

    let start = (page_number - 1) * page_size;
    let end = start.saturating_add(page_size).min(total_items);

    Ok(Page {
        items: todos[start..end].to_vec(),
        total_items,
        total_pages,
        current_page: page_number,
        page_size,
    })
}
