//! Follow edge database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the follows table
///
/// The (user_id, author_id) pair carries a uniqueness constraint; racing
/// duplicate inserts converge to a single row.
#[derive(Debug, Clone, FromRow)]
pub struct FollowModel {
    pub user_id: i64,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}
