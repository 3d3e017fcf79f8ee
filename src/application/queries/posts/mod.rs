mod get_by_id;
mod list;
mod search;
mod service;

pub use get_by_id::GetPostByIdQuery;
pub use list::ListPostsQuery;
pub use search::SearchPostsQuery;
pub use service::PostQueryService;
