use serde::{Deserialize, Serialize};

/// 服务端会话，按 cookie 中的令牌存放在对象缓存里
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
