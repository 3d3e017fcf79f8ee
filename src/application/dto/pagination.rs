use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::pagination::PageRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of a numbered listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// Assembles a page, failing with `NotFound` when the requested page lies past the end.
    pub fn from_parts(
        items: Vec<T>,
        request: PageRequest,
        total_items: u64,
    ) -> ApplicationResult<Self> {
        if !request.is_within(total_items) {
            return Err(ApplicationError::not_found(format!(
                "page {} does not exist",
                request.page()
            )));
        }

        let total_pages = request.total_pages(total_items);
        Ok(Self {
            items,
            page: request.page(),
            per_page: request.per_page(),
            total_items,
            total_pages,
            has_next: request.page() < total_pages,
            has_previous: request.page() > 1,
        })
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

/// Turns a raw page number into a request for `PAGE_SIZE` items.
pub fn page_request(page: u32) -> ApplicationResult<PageRequest> {
    PageRequest::new(page, crate::domain::pagination::PAGE_SIZE)
        .map_err(|err| ApplicationError::validation(err.to_string()))
}
