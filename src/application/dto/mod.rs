pub mod auth;
pub mod categories;
pub mod pagination;
pub mod posts;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use categories::{CategoryDto, SubscriptionDto};
pub use pagination::Page;
pub use posts::{PostDto, PostFilterDto, PostListingDto};
