//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性，以及基于会话存储的守卫判断。

use crate::session::SessionStore;
use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    /// 文章管理 (需要认证)
    Articles,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" | "/login" => Self::Login,
            "/articles" => Self::Articles,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Articles => "/articles",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Articles)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的跳转目标
    pub fn auth_success_redirect() -> Self {
        Self::Articles
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// 守卫判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render(AppRoute),
    Redirect(AppRoute),
}

impl GuardDecision {
    pub fn allows(&self) -> bool {
        matches!(self, GuardDecision::Render(_))
    }
}

/// 路由守卫
///
/// 每次判定都直接读取会话存储，不缓存结果：
/// 会话中途被清除后，下一次渲染立即失去访问权。
pub struct RouteGuard<S: SessionStore> {
    session: S,
}

impl<S: SessionStore> RouteGuard<S> {
    pub fn new(session: S) -> Self {
        Self { session }
    }

    pub fn resolve(&self, route: AppRoute) -> GuardDecision {
        if route.requires_auth() && !self.session.has_token() {
            log::debug!("[Guard] Access denied to {}. Redirecting to login.", route);
            return GuardDecision::Redirect(AppRoute::auth_failure_redirect());
        }
        GuardDecision::Render(route)
    }

    pub fn session(&self) -> &S {
        &self.session
    }
}
