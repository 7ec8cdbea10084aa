//! rateprofs HTTP 接口封装
//!
//! 整个会话共用一个带 cookie 存储的 `reqwest::Client`，登录后的会话 cookie 会自动随后续请求发送。

use anyhow::{Context, Result};
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api/";

/// 服务端响应：2xx 时为解析后的内容，否则保留状态码与原始正文
#[derive(Debug, PartialEq)]
pub enum Reply<T> {
    Success(T),
    Failure { status: u16, body: String },
}

impl<T> Reply<T> {
    pub fn render(self, on_success: impl FnOnce(T) -> String) -> String {
        match self {
            Reply::Success(value) => on_success(value),
            Reply::Failure { status, body } => format!("Error: {status} - {body}"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TaughtBy {
    pub professor_code: String,
    pub professor_name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ModuleInstanceRow {
    pub module_code: String,
    pub module_name: String,
    pub year: i64,
    pub semester: i64,
    pub taught_by: Vec<TaughtBy>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProfessorRatingRow {
    pub professor_code: String,
    pub professor_name: String,
    pub average_rating: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ModuleRatingRow {
    pub professor_code: String,
    pub professor_name: String,
    pub module_code: String,
    pub module_name: String,
    pub average_rating: Option<u32>,
}

pub struct ApiClient {
    http: Client,
    base_url: Url,
}

/// 保证以 `/` 结尾，便于 `Url::join`
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut raw = raw.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }
    Url::parse(&raw).with_context(|| format!("invalid base URL '{raw}'"))
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .cookie_store(true)
            .user_agent(concat!("rateprofs-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: parse_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// 切换到 `http://<host>/api/`，host 自带 `https://` 时保留该协议
    pub fn rebind_host(&mut self, host: &str) -> Result<()> {
        let host = host.trim().trim_end_matches('/');
        let root = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{host}")
        };
        self.base_url = parse_base_url(&format!("{root}/api/"))?;
        debug!("Base URL rebound to {}", self.base_url);
        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("invalid endpoint '{path}'"))
    }

    async fn text_reply(response: Response) -> Result<Reply<String>> {
        let status = response.status();
        let body = response.text().await?;
        debug!("Response {}: {}", status, body);
        if status.is_success() {
            Ok(Reply::Success(body))
        } else {
            Ok(Reply::Failure {
                status: status.as_u16(),
                body,
            })
        }
    }

    async fn json_reply<T: DeserializeOwned>(response: Response) -> Result<Reply<T>> {
        let status = response.status();
        if status.is_success() {
            Ok(Reply::Success(response.json().await?))
        } else {
            Ok(Reply::Failure {
                status: status.as_u16(),
                body: response.text().await?,
            })
        }
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Reply<String>> {
        let response = self
            .http
            .post(self.endpoint("register")?)
            .form(&[
                ("username", username),
                ("email", email),
                ("password", password),
            ])
            .send()
            .await?;
        Self::text_reply(response).await
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Reply<String>> {
        let response = self
            .http
            .post(self.endpoint("login")?)
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;
        Self::text_reply(response).await
    }

    pub async fn logout(&self) -> Result<Reply<String>> {
        let response = self.http.post(self.endpoint("logout")?).send().await?;
        Self::text_reply(response).await
    }

    pub async fn list(&self) -> Result<Reply<Vec<ModuleInstanceRow>>> {
        let response = self.http.get(self.endpoint("list")?).send().await?;
        Self::json_reply(response).await
    }

    pub async fn view(&self) -> Result<Reply<Vec<ProfessorRatingRow>>> {
        let response = self.http.get(self.endpoint("view")?).send().await?;
        Self::json_reply(response).await
    }

    pub async fn average(
        &self,
        professor_code: &str,
        module_code: &str,
    ) -> Result<Reply<ModuleRatingRow>> {
        let response = self
            .http
            .get(self.endpoint("average")?)
            .query(&[
                ("professor_code", professor_code),
                ("module_code", module_code),
            ])
            .send()
            .await?;
        Self::json_reply(response).await
    }

    pub async fn rate(
        &self,
        professor_code: &str,
        module_code: &str,
        year: &str,
        semester: &str,
        rating: &str,
    ) -> Result<Reply<String>> {
        let response = self
            .http
            .post(self.endpoint("rate")?)
            .form(&[
                ("professorCode", professor_code),
                ("moduleCode", module_code),
                ("year", year),
                ("semester", semester),
                ("rating", rating),
            ])
            .send()
            .await?;
        Self::text_reply(response).await
    }
}
