use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::request::{HttpClient, HttpRequest};
use articles_shared::HEADER_AUTHORIZATION;
use articles_shared::protocol::{
    ApiRequest, CreateArticleRequest, DeleteArticleRequest, ListArticlesRequest, LoginRequest,
    UpdateArticleRequest,
};
use articles_shared::{
    ArticleFields, ArticleId, ArticleResponse, ArticlesResponse, Credentials, LoginResponse,
    MessageResponse,
};

// =========================================================
// 类型化 API 客户端
// =========================================================

/// 文章服务的类型化入口
///
/// 接受任何实现了 HttpClient 的客户端，从而解耦了具体的 HTTP 实现。
pub struct ArticlesApi<C: HttpClient> {
    client: C,
    config: ClientConfig,
}

impl<C: HttpClient> ArticlesApi<C> {
    pub fn new(client: C, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// 发送一个端点请求
    ///
    /// `token` 仅在端点需要认证时附加。
    pub async fn call<R: ApiRequest>(&self, req: &R, token: Option<&str>) -> ClientResult<R::Response> {
        let url = self.config.url(R::BASE, &req.path_suffix());
        let mut http = HttpRequest::new(&url, R::METHOD);

        if R::REQUIRES_AUTH {
            if let Some(token) = token {
                http = http.with_header(
                    HEADER_AUTHORIZATION,
                    &self.config.auth_scheme.header_value(token),
                );
            }
        }

        if let Some(body) = req.body() {
            http = http.with_body(body);
        }

        log::debug!("[Api] {} {}", R::METHOD.as_str(), url);
        let resp = self.client.send(http).await?;

        if !resp.is_success() {
            return Err(ClientError::from_response(
                resp.status,
                &resp.status_text,
                &resp.body,
            ));
        }

        resp.json::<R::Response>()
    }

    pub async fn login(&self, credentials: Credentials) -> ClientResult<LoginResponse> {
        self.call(&LoginRequest(credentials), None).await
    }

    pub async fn list_articles(&self, token: Option<&str>) -> ClientResult<ArticlesResponse> {
        self.call(&ListArticlesRequest, token).await
    }

    pub async fn create_article(
        &self,
        fields: ArticleFields,
        token: Option<&str>,
    ) -> ClientResult<ArticleResponse> {
        self.call(&CreateArticleRequest(fields), token).await
    }

    pub async fn update_article(
        &self,
        article_id: ArticleId,
        fields: ArticleFields,
        token: Option<&str>,
    ) -> ClientResult<ArticleResponse> {
        self.call(&UpdateArticleRequest { article_id, fields }, token)
            .await
    }

    pub async fn delete_article(
        &self,
        article_id: ArticleId,
        token: Option<&str>,
    ) -> ClientResult<MessageResponse> {
        self.call(&DeleteArticleRequest { article_id }, token).await
    }
}
