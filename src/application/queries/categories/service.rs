use std::sync::Arc;

use crate::domain::category::CategoryRepository;

pub struct CategoryQueryService {
    pub(super) category_repo: Arc<dyn CategoryRepository>,
}

impl CategoryQueryService {
    pub fn new(category_repo: Arc<dyn CategoryRepository>) -> Self {
        Self { category_repo }
    }
}
