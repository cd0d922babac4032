//! HTTP 请求封装模块
//!
//! 基于 `gloo-net` 实现核心库的 `HttpClient`，供控制器在浏览器中使用。

use articles_client::{ClientError, ClientResult, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use gloo_net::http::Request;

/// 基于 fetch 的 HTTP 客户端
#[derive(Clone, Copy, Default)]
pub struct FetchHttpClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        let mut builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
            HttpMethod::Put => Request::put(&req.url),
            HttpMethod::Delete => Request::delete(&req.url),
        };

        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ClientError::transport(format!("Request build failed: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::transport(format!("Network Error: {}", e)))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::transport(format!("Response read failed: {}", e)))?;

        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}
