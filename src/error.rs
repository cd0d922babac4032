use std::fmt;

use articles_shared::ErrorBody;

// =========================================================
// 错误状态枚举
// =========================================================

/// 客户端看到的失败类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientErrorStatus {
    /// 没有收到响应（网络不可达、超时、请求构建失败）
    Transport,
    /// 401 / 403: 凭据缺失或无效
    Unauthorized,
    /// 400 / 422: 服务端拒绝输入
    Validation,
    /// 404: 目标不存在
    NotFound,
    /// 其他非 2xx 响应
    Server,
    /// 2xx 但响应体无法解析
    Decode,
}

impl ClientErrorStatus {
    pub fn from_http_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Unauthorized,
            400 | 422 => Self::Validation,
            404 => Self::NotFound,
            _ => Self::Server,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ClientErrorStatus::Transport => "TRANSPORT_ERROR",
            ClientErrorStatus::Unauthorized => "UNAUTHORIZED",
            ClientErrorStatus::Validation => "INVALID_INPUT",
            ClientErrorStatus::NotFound => "RESOURCE_NOT_FOUND",
            ClientErrorStatus::Server => "SERVER_ERROR",
            ClientErrorStatus::Decode => "RESPONSE_PARSE_ERROR",
        }
    }
}

// =========================================================
// 核心错误类型
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientError {
    pub status: ClientErrorStatus,
    /// 服务端给出的说明，或本地生成的描述
    pub message: String,
    pub http_status: Option<u16>,
    /// HTTP 状态描述，如 "Unauthorized"
    pub status_text: Option<String>,
}

impl ClientError {
    pub fn new(status: ClientErrorStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            http_status: None,
            status_text: None,
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ClientErrorStatus::Transport, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ClientErrorStatus::Decode, message)
    }

    /// 由非 2xx 响应构造
    ///
    /// 响应体优先按 `{ "message": ... }` 解析，失败时原样使用响应文本。
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody {
                message: Some(message),
            }) => message,
            _ => body.trim().to_string(),
        };

        Self {
            status: ClientErrorStatus::from_http_status(status),
            message,
            http_status: Some(status),
            status_text: (!status_text.is_empty()).then(|| status_text.to_string()),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == ClientErrorStatus::Unauthorized
    }

    pub fn error_code(&self) -> &'static str {
        self.status.error_code()
    }

    /// 仅服务端说明
    pub fn detail(&self) -> &str {
        &self.message
    }

    /// 说明 + 状态描述，形如 `"Token invalid, Unauthorized"`
    pub fn summary(&self) -> String {
        match (&self.status_text, self.message.is_empty()) {
            (Some(text), false) => format!("{}, {}", self.message, text),
            (Some(text), true) => text.clone(),
            (None, _) => self.message.clone(),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.error_code(), self.message)?;
        if let Some(status) = self.http_status {
            write!(f, " (HTTP {})", status)?;
        }
        Ok(())
    }
}

impl std::error::Error for ClientError {}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::decode(e.to_string())
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
