use articles_shared::DEFAULT_TOKEN_KEY;
use articles_shared::protocol::EndpointBase;
use serde::{Deserialize, Serialize};

// =========================================================
// 运行时配置 (Runtime Configuration)
// =========================================================

/// 变量缺失时使用的默认值
const DEFAULT_BASE_URL: &str = "http://localhost:9000";
const DEFAULT_LOGIN_PATH: &str = "/api/login";
const DEFAULT_ARTICLES_PATH: &str = "/api/articles";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 凭据附加方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthScheme {
    /// `Authorization: Bearer <token>`
    #[default]
    Bearer,
    /// `Authorization: <token>`
    Raw,
}

impl AuthScheme {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bearer" => Some(Self::Bearer),
            "raw" => Some(Self::Raw),
            _ => None,
        }
    }

    pub fn header_value(&self, token: &str) -> String {
        match self {
            AuthScheme::Bearer => format!("Bearer {}", token),
            AuthScheme::Raw => token.to_string(),
        }
    }
}

/// 客户端配置
///
/// 显式构造后传给控制器，不依赖任何全局状态。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub login_path: String,
    pub articles_path: String,
    /// 会话存储中保存 token 的键名
    pub token_key: String,
    pub auth_scheme: AuthScheme,
    /// 仅原生 HTTP 客户端使用
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            articles_path: DEFAULT_ARTICLES_PATH.to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            auth_scheme: AuthScheme::default(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_base(base_url.into()),
            ..Self::default()
        }
    }

    /// 从命名变量构造配置，读不到的变量使用默认值
    ///
    /// `lookup` 可以是 `|k| std::env::var(k).ok()`，也可以是编译期注入的值。
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            base_url: trim_base(var("ARTICLES_API_URL").unwrap_or(defaults.base_url)),
            login_path: var("ARTICLES_LOGIN_PATH").unwrap_or(defaults.login_path),
            articles_path: var("ARTICLES_PATH").unwrap_or(defaults.articles_path),
            token_key: var("ARTICLES_TOKEN_KEY").unwrap_or(defaults.token_key),
            auth_scheme: var("ARTICLES_AUTH_SCHEME")
                .and_then(|v| AuthScheme::parse(&v))
                .unwrap_or(defaults.auth_scheme),
            request_timeout_secs: var("ARTICLES_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }

    /// 存储变化通知是否涉及会话 token
    ///
    /// `None` 表示整个存储被清空。
    pub fn is_token_key(&self, changed: Option<&str>) -> bool {
        changed.is_none_or(|key| key == self.token_key)
    }

    /// 拼接完整 URL
    pub fn url(&self, base: EndpointBase, suffix: &str) -> String {
        let path = match base {
            EndpointBase::Login => &self.login_path,
            EndpointBase::Articles => &self.articles_path,
        };
        let base_url = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}{}", base_url, path, suffix)
        } else {
            format!("{}/{}{}", base_url, path, suffix)
        }
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
