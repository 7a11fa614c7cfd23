//! Follow domain entity - a directed edge in the follow graph.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Directed follow edge. At most one edge may exist per ordered
/// (follower, followed) pair; the database enforces this with a unique
/// composite index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Follow {
    pub id: Uuid,
    pub follower_user_id: Uuid,
    pub followed_user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
