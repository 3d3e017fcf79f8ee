use super::CategoryQueryService;
use crate::application::{
    dto::{CategoryDto, Page, pagination::page_request},
    error::ApplicationResult,
};

pub struct ListCategoriesQuery {
    pub page: u32,
}

impl CategoryQueryService {
    /// Categories in alphabetical order, the subscription page's listing.
    pub async fn list_categories(
        &self,
        query: ListCategoriesQuery,
    ) -> ApplicationResult<Page<CategoryDto>> {
        let request = page_request(query.page)?;
        let (records, total) = self.category_repo.list_page(request).await?;
        Ok(Page::from_parts(records, request, total)?.map(Into::into))
    }
}
