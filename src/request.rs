use crate::error::{ClientError, ClientResult};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

pub use articles_shared::protocol::HttpMethod;

#[cfg(test)]
use std::{cell::RefCell, rc::Rc};

// =========================================================
// 核心抽象层 (HTTP Interface Abstraction)
// =========================================================

/// 通用 HTTP 请求结构
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body.to_string());
        self.with_header("Content-Type", "application/json")
    }
}

/// 通用 HTTP 响应结构
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    /// 状态描述，如 "Not Found"；传输层拿不到时为空
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        serde_json::from_str(&self.body).map_err(ClientError::from)
    }
}

/// HTTP 客户端特性 (Trait)
///
/// 浏览器环境下 future 不是 Send 的，所以使用 `?Send`。
/// 只有“没有拿到响应”才返回 `Err`，非 2xx 由调用方处理。
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse>;
}

// =========================================================
// 实现层: reqwest 客户端 (Native)
// =========================================================

#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestHttpClient;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;
    use crate::config::ClientConfig;
    use std::time::Duration;

    #[derive(Clone)]
    pub struct ReqwestHttpClient {
        client: reqwest::Client,
    }

    impl ReqwestHttpClient {
        pub fn new(config: &ClientConfig) -> ClientResult<Self> {
            let client = reqwest::Client::builder()
                .timeout(Duration::from_secs(config.request_timeout_secs))
                .build()
                .map_err(|e| ClientError::transport(format!("Reqwest Build Error: {}", e)))?;
            Ok(Self { client })
        }
    }

    #[async_trait::async_trait(?Send)]
    impl HttpClient for ReqwestHttpClient {
        async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
            let method = match req.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
                HttpMethod::Put => reqwest::Method::PUT,
                HttpMethod::Delete => reqwest::Method::DELETE,
            };

            let mut builder = self.client.request(method, &req.url);

            for (k, v) in req.headers {
                builder = builder.header(k, v);
            }

            if let Some(body) = req.body {
                builder = builder.body(body);
            }

            let resp = builder
                .send()
                .await
                .map_err(|e| ClientError::transport(format!("Reqwest Error: {}", e)))?;

            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| ClientError::transport(format!("Reqwest Body Error: {}", e)))?;

            Ok(HttpResponse {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            })
        }
    }
}

// =========================================================
// 测试工具: MockHttpClient
// =========================================================

/// 按 (METHOD, URL) 返回预设响应，并记录所有请求
///
/// `hold` 可以让某个路由的响应挂起，直到测试释放闸门，用来控制完成顺序。
/// 克隆共享同一份状态。
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockHttpClient {
    inner: Rc<MockInner>,
}

#[cfg(test)]
#[derive(Default)]
struct MockInner {
    responses: RefCell<HashMap<(String, String), (u16, String)>>,
    gates: RefCell<HashMap<(String, String), futures::channel::oneshot::Receiver<()>>>,
    requests: RefCell<Vec<HttpRequest>>,
    offline: RefCell<bool>,
}

#[cfg(test)]
pub struct Gate(futures::channel::oneshot::Sender<()>);

#[cfg(test)]
impl Gate {
    pub fn release(self) {
        let _ = self.0.send(());
    }
}

#[cfg(test)]
impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(method: HttpMethod, url: &str) -> (String, String) {
        (method.as_str().to_string(), url.to_string())
    }

    pub fn mock_response(&self, method: HttpMethod, url: &str, status: u16, body: serde_json::Value) {
        self.inner
            .responses
            .borrow_mut()
            .insert(Self::key(method, url), (status, body.to_string()));
    }

    /// 下一次命中该路由的请求会等到 `Gate::release` 之后才返回
    pub fn hold(&self, method: HttpMethod, url: &str) -> Gate {
        let (tx, rx) = futures::channel::oneshot::channel();
        self.inner
            .gates
            .borrow_mut()
            .insert(Self::key(method, url), rx);
        Gate(tx)
    }

    pub fn set_offline(&self, offline: bool) {
        *self.inner.offline.borrow_mut() = offline;
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.requests.borrow().clone()
    }
}

#[cfg(test)]
fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        422 => "Unprocessable Entity",
        _ => "Internal Server Error",
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl HttpClient for MockHttpClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        let key = Self::key(req.method, &req.url);
        self.inner.requests.borrow_mut().push(req);

        let gate = self.inner.gates.borrow_mut().remove(&key);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        if *self.inner.offline.borrow() {
            return Err(ClientError::transport("Network Error"));
        }

        let responses = self.inner.responses.borrow();
        let (status, body) = responses
            .get(&key)
            .cloned()
            .unwrap_or_else(|| (404, "Not Found".to_string()));

        Ok(HttpResponse {
            status,
            status_text: reason(status).to_string(),
            body,
        })
    }
}
