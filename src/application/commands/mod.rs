pub mod posts;
pub mod subscriptions;

mod capability;
