//! 文章管理客户端核心
//!
//! 与平台无关的状态机：视图层、HTTP 传输和会话存储都通过 trait 注入。
//! - `controller`: 请求生命周期与本地对账
//! - `collection` / `selection`: 由控制器独占修改的本地状态
//! - `route`: 路由定义与守卫
//! - `api` / `request`: 类型化端点与可替换的 HTTP 客户端

pub mod api;
pub mod collection;
pub mod config;
pub mod controller;
pub mod error;
pub mod request;
pub mod route;
pub mod selection;
pub mod session;

pub use api::ArticlesApi;
pub use collection::ArticleCollection;
pub use config::{AuthScheme, ClientConfig};
pub use controller::{ArticlesController, OperationOutcome, StateObserver, ViewState};
pub use error::{ClientError, ClientErrorStatus, ClientResult};
pub use request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use route::{AppRoute, GuardDecision, RouteGuard};
pub use selection::Selection;
pub use session::{MemorySessionStore, SessionStore};

#[cfg(not(target_arch = "wasm32"))]
pub use request::ReqwestHttpClient;

pub use articles_shared as shared;
