use actix_web::HttpRequest;
use actix_web::cookie::{Cookie, SameSite};
use rand::Rng;
use rand::distr::Alphanumeric;
use tracing::warn;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::auth::entities::Session;
use crate::models::users::entities::User;

const SESSION_TOKEN_LEN: usize = 32;

pub struct SessionUtils;

impl SessionUtils {
    // 会话 cookie 名称
    pub fn cookie_name() -> &'static str {
        &AppConfig::get().session.cookie_name
    }

    // 生成随机会话令牌
    pub fn generate_token() -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(SESSION_TOKEN_LEN)
            .map(char::from)
            .collect()
    }

    fn cache_key(token: &str) -> String {
        format!("session:{token}")
    }

    /// 为用户创建新会话，返回令牌
    pub async fn create_session(cache: &dyn ObjectCache, user: &User) -> Result<(String, Session)> {
        let token = Self::generate_token();
        let session = Session {
            user_id: user.id,
            username: user.username.clone(),
            created_at: chrono::Utc::now(),
        };

        let payload = serde_json::to_string(&session)?;
        cache
            .insert_raw(
                Self::cache_key(&token),
                payload,
                AppConfig::get().session.ttl,
            )
            .await?;

        Ok((token, session))
    }

    /// 读取会话，不存在或已过期时返回 None
    pub async fn load_session(cache: &dyn ObjectCache, token: &str) -> Option<Session> {
        match cache.get_raw(&Self::cache_key(token)).await {
            CacheResult::Found(raw) => match serde_json::from_str(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    warn!("Discarding unreadable session payload: {}", e);
                    None
                }
            },
            CacheResult::NotFound | CacheResult::ExistsButNoValue => None,
        }
    }

    /// 删除会话
    pub async fn destroy_session(cache: &dyn ObjectCache, token: &str) {
        cache.remove(&Self::cache_key(token)).await;
    }

    /// 创建会话 Cookie
    pub fn create_session_cookie(token: &str) -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build(config.session.cookie_name.clone(), token.to_string())
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(
                i64::try_from(config.session.ttl).unwrap_or(i64::MAX),
            ))
            .same_site(SameSite::Lax)
            .http_only(true)
            .secure(config.session.secure_cookie)
            .finish()
    }

    /// 创建空的会话 Cookie（用于注销）
    pub fn create_empty_session_cookie() -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build(config.session.cookie_name.clone(), "")
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(0))
            .same_site(SameSite::Lax)
            .http_only(true)
            .secure(config.session.secure_cookie)
            .finish()
    }

    /// 从请求中提取会话令牌
    pub fn extract_session_token_from_cookie(req: &HttpRequest) -> Option<String> {
        req.cookie(Self::cookie_name())
            .map(|cookie| cookie.value().to_string())
            .filter(|token| !token.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::object_cache::moka::MokaCacheWrapper;

    fn sample_user() -> User {
        User {
            id: 7,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: String::new(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_generate_token() {
        let a = SessionUtils::generate_token();
        let b = SessionUtils::generate_token();
        assert_eq!(a.len(), SESSION_TOKEN_LEN);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }

    #[actix_web::test]
    async fn test_session_lifecycle() {
        let cache = MokaCacheWrapper::with_settings(100, 60);
        let (token, session) = SessionUtils::create_session(&cache, &sample_user())
            .await
            .expect("session should be created");

        let loaded = SessionUtils::load_session(&cache, &token).await;
        assert_eq!(loaded, Some(session));

        SessionUtils::destroy_session(&cache, &token).await;
        assert_eq!(SessionUtils::load_session(&cache, &token).await, None);
    }

    #[test]
    fn test_cookies() {
        let cookie = SessionUtils::create_session_cookie("abc");
        assert_eq!(cookie.name(), "sessionid");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));
        // 默认不带 Secure，http:// 客户端也能回传
        assert_ne!(cookie.secure(), Some(true));

        let empty = SessionUtils::create_empty_session_cookie();
        assert_eq!(empty.value(), "");
        assert_eq!(
            empty.max_age(),
            Some(actix_web::cookie::time::Duration::seconds(0))
        );
    }
}
