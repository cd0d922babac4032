use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const FAREWELL_MESSAGE: &str = "Goodbye!";

/// 标题最大长度（字符数）
pub const TITLE_MAX_CHARS: usize = 50;
/// 正文最大长度（字符数）
pub const TEXT_MAX_CHARS: usize = 200;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 文章 ID，由服务端分配，创建后不可变
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub u64);

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ArticleId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// 文章主题（封闭枚举）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    JavaScript,
    React,
    Node,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::JavaScript, Topic::React, Topic::Node];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::JavaScript => "JavaScript",
            Topic::React => "React",
            Topic::Node => "Node",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FieldError::UnknownTopic(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub article_id: ArticleId,
    pub title: String,
    pub text: String,
    pub topic: Topic,
}

impl Article {
    /// 取出可编辑字段（用于填充编辑表单）
    pub fn fields(&self) -> ArticleFields {
        ArticleFields {
            title: self.title.clone(),
            text: self.text.clone(),
            topic: self.topic,
        }
    }
}

// =========================================================
// 输入校验 (Validated Inputs)
// =========================================================

/// 字段校验错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// 必填字段为空
    Missing(&'static str),
    /// 字段超出长度限制
    TooLong { field: &'static str, max: usize },
    /// 未知主题
    UnknownTopic(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Missing(field) => write!(f, "{} is required", field),
            FieldError::TooLong { field, max } => {
                write!(f, "{} must be at most {} characters", field, max)
            }
            FieldError::UnknownTopic(t) => write!(f, "unknown topic: {:?}", t),
        }
    }
}

impl std::error::Error for FieldError {}

fn require(field: &'static str, value: &str, max: Option<usize>) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Missing(field));
    }
    if let Some(max) = max {
        if value.chars().count() > max {
            return Err(FieldError::TooLong { field, max });
        }
    }
    Ok(())
}

/// 文章的可写字段（创建与更新共用）
///
/// 只能通过 [`ArticleFields::new`] 构造，保证三个字段都非空且在长度限制内。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleFields {
    title: String,
    text: String,
    topic: Topic,
}

impl ArticleFields {
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        topic: Topic,
    ) -> Result<Self, FieldError> {
        let title = title.into();
        let text = text.into();
        require("title", &title, Some(TITLE_MAX_CHARS))?;
        require("text", &text, Some(TEXT_MAX_CHARS))?;
        Ok(Self { title, text, topic })
    }

    /// 从表单原始输入构造，主题以字符串给出
    pub fn parse(title: &str, text: &str, topic: &str) -> Result<Self, FieldError> {
        if topic.is_empty() {
            return Err(FieldError::Missing("topic"));
        }
        Self::new(title, text, topic.parse()?)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }
}

/// 登录凭据
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, FieldError> {
        let username = username.into();
        let password = password.into();
        require("username", &username, None)?;
        require("password", &password, None)?;
        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

// 不打印密码
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

// =========================================================
// 响应结构 (Response Schemas)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticlesResponse {
    pub articles: Vec<Article>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub article: Article,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// 非 2xx 响应体，服务端不保证一定是 JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
