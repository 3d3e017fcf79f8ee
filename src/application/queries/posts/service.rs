use std::sync::Arc;

use crate::{
    application::ports::cache::PostCache,
    domain::{censor::ProfanityFilter, post::PostReadRepository},
};

pub struct PostQueryService {
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) cache: Arc<dyn PostCache>,
    pub(super) censor: Arc<ProfanityFilter>,
}

impl PostQueryService {
    pub fn new(
        read_repo: Arc<dyn PostReadRepository>,
        cache: Arc<dyn PostCache>,
        censor: Arc<ProfanityFilter>,
    ) -> Self {
        Self {
            read_repo,
            cache,
            censor,
        }
    }
}
