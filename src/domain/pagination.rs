// src/domain/pagination.rs
use crate::domain::errors::{DomainError, DomainResult};

/// Page size shared by the post listing and the category listing.
pub const PAGE_SIZE: u32 = 4;

/// A 1-based page number together with the page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> DomainResult<Self> {
        if page == 0 {
            return Err(DomainError::Validation("page numbers start at 1".into()));
        }
        if per_page == 0 {
            return Err(DomainError::Validation("page size must be positive".into()));
        }
        Ok(Self { page, per_page })
    }

    pub fn first() -> Self {
        Self {
            page: 1,
            per_page: PAGE_SIZE,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    pub fn total_pages(&self, total_items: u64) -> u32 {
        let per_page = u64::from(self.per_page);
        let pages = total_items.div_ceil(per_page).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Whether this page exists for a collection of `total_items`. The first page always
    /// exists, even for an empty collection.
    pub fn is_within(&self, total_items: u64) -> bool {
        self.page <= self.total_pages(total_items)
    }
}
