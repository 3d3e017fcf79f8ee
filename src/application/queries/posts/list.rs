use super::PostQueryService;
use crate::{
    application::{
        dto::{
            AuthenticatedUser, Page, PostDto, PostFilterDto, PostListingDto,
            pagination::page_request,
        },
        error::ApplicationResult,
    },
    domain::post::PostFilter,
};

pub struct ListPostsQuery {
    pub page: u32,
}

impl PostQueryService {
    pub async fn list_posts(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListPostsQuery,
    ) -> ApplicationResult<PostListingDto> {
        let posts = self.load_page(&PostFilter::default(), query.page).await?;
        Ok(PostListingDto {
            posts,
            is_not_author: is_not_author(actor),
            filter: None,
        })
    }

    pub(super) async fn load_page(
        &self,
        filter: &PostFilter,
        page: u32,
    ) -> ApplicationResult<Page<PostDto>> {
        let request = page_request(page)?;
        let (records, total) = self.read_repo.list_page(filter, request).await?;
        let page = Page::from_parts(records, request, total)?;
        Ok(page.map(|post| PostDto::censored(post, &self.censor)))
    }

    pub(super) fn listing_with_filter(
        actor: Option<&AuthenticatedUser>,
        posts: Page<PostDto>,
        filter: &PostFilter,
    ) -> PostListingDto {
        PostListingDto {
            posts,
            is_not_author: is_not_author(actor),
            filter: Some(PostFilterDto::from(filter)),
        }
    }
}

/// Anonymous visitors count as non-authors.
fn is_not_author(actor: Option<&AuthenticatedUser>) -> bool {
    !actor.is_some_and(AuthenticatedUser::is_author)
}
