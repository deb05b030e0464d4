//! Group directory reads
//!
//! Group management itself happens outside this service (there is no
//! public group CRUD surface); these are the read paths the feed pages
//! link to.

use tracing::instrument;

use crate::dto::GroupResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Group service
pub struct GroupService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GroupService<'a> {
    /// Create a new GroupService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every group, ordered by title
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<GroupResponse>> {
        let groups = self.ctx.group_repo().list().await?;
        Ok(groups.iter().map(GroupResponse::from).collect())
    }

    /// Fetch one group by slug
    #[instrument(skip(self))]
    pub async fn get(&self, slug: &str) -> ServiceResult<GroupResponse> {
        let group = self
            .ctx
            .group_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Group", slug))?;

        Ok(GroupResponse::from(&group))
    }
}
