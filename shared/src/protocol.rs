use crate::{
    ArticleFields, ArticleId, ArticleResponse, ArticlesResponse, Credentials, LoginResponse,
    MessageResponse,
};
use serde::de::DeserializeOwned;
use serde_json::json;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Ties an endpoint's request to its response schema and routing metadata.
///
/// Paths are relative to the endpoint's base path: the login base for
/// [`LoginRequest`], the articles collection for everything else.
pub trait ApiRequest {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the stored credential must be attached.
    const REQUIRES_AUTH: bool = true;
    /// Which base path the suffix is appended to.
    const BASE: EndpointBase = EndpointBase::Articles;

    /// Path suffix below the base path (empty for the base itself).
    fn path_suffix(&self) -> String {
        String::new()
    }

    /// JSON body, if any.
    fn body(&self) -> Option<serde_json::Value> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointBase {
    Login,
    Articles,
}

fn fields_body(fields: &ArticleFields) -> serde_json::Value {
    json!({
        "title": fields.title(),
        "text": fields.text(),
        "topic": fields.topic(),
    })
}

// =========================================================
// Request Definitions
// =========================================================

/// Exchange credentials for a token
#[derive(Debug, Clone)]
pub struct LoginRequest(pub Credentials);

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const REQUIRES_AUTH: bool = false;
    const BASE: EndpointBase = EndpointBase::Login;

    fn body(&self) -> Option<serde_json::Value> {
        Some(json!({
            "username": self.0.username(),
            "password": self.0.password,
        }))
    }
}

/// List all articles
#[derive(Debug, Clone, Copy)]
pub struct ListArticlesRequest;

impl ApiRequest for ListArticlesRequest {
    type Response = ArticlesResponse;
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Create a new article
#[derive(Debug, Clone)]
pub struct CreateArticleRequest(pub ArticleFields);

impl ApiRequest for CreateArticleRequest {
    type Response = ArticleResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn body(&self) -> Option<serde_json::Value> {
        Some(fields_body(&self.0))
    }
}

/// Replace the writable fields of an existing article
#[derive(Debug, Clone)]
pub struct UpdateArticleRequest {
    pub article_id: ArticleId,
    pub fields: ArticleFields,
}

impl ApiRequest for UpdateArticleRequest {
    type Response = ArticleResponse;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path_suffix(&self) -> String {
        format!("/{}", self.article_id)
    }

    fn body(&self) -> Option<serde_json::Value> {
        Some(fields_body(&self.fields))
    }
}

/// Delete an article
#[derive(Debug, Clone, Copy)]
pub struct DeleteArticleRequest {
    pub article_id: ArticleId,
}

impl ApiRequest for DeleteArticleRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path_suffix(&self) -> String {
        format!("/{}", self.article_id)
    }
}
