// src/application/commands/posts/categories.rs
use super::PostCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::category::CategoryId,
};

impl PostCommandService {
    /// Check that every submitted category exists, in submission order.
    pub(super) async fn resolve_categories(
        &self,
        ids: &[i64],
    ) -> ApplicationResult<Vec<CategoryId>> {
        let mut resolved = Vec::with_capacity(ids.len());
        for &raw in ids {
            let missing = || ApplicationError::not_found(format!("category {raw} not found"));
            let id = CategoryId::new(raw).map_err(|_| missing())?;
            let category = self
                .category_repo
                .find_by_id(id)
                .await?
                .ok_or_else(missing)?;
            resolved.push(category.id);
        }
        Ok(resolved)
    }
}
