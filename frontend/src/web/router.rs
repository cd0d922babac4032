//! 路由服务模块 - 核心引擎
//!
//! 封装了 History API，所有对 window.history 的操作都集中在此模块。
//! 导航流程："请求 -> 守卫 -> 处理 -> 加载"。
//! 守卫判定来自 [`AppContext::guard`]，每次都重新读取会话存储。
//! 出口渲染的是守卫的判定结果而不是原始路由：
//! 凭据被控制器之外的途径清除（其他标签页登出、手动清理）后，下一次求值即重定向。

use articles_client::{AppRoute, GuardDecision};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::context::AppContext;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

fn replace_history_state(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

/// 路由器服务
///
/// 通过 Signal 驱动界面更新；认证状态通过注入的应用上下文判定。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// 外部存储变化（storage 事件）的计数
    session_tick: RwSignal<u64>,
    /// 当前路由的守卫判定
    decision: Memo<GuardDecision>,
    app: AppContext,
}

impl RouterService {
    fn new(app: AppContext) -> Self {
        let (current_route, set_route) = signal(AppRoute::from_path(&current_path()));
        let session_tick = RwSignal::new(0);
        // 视图状态变化和 storage 事件都会触发重新判定
        let decision = Memo::new(move |_| {
            app.state.track();
            session_tick.track();
            app.guard(current_route.get())
        });
        Self {
            current_route,
            set_route,
            session_tick,
            decision,
            app,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 导航到指定路径
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    /// 导航到指定路由
    ///
    /// `use_push` 为 false 时使用 replaceState（用于重定向和初次加载）
    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        let route = match self.app.guard(target) {
            GuardDecision::Render(route) => route,
            GuardDecision::Redirect(redirect) => {
                log::info!("[Router] Access denied to {}. Redirecting to {}.", target, redirect);
                redirect
            }
        };

        if use_push && route == target {
            push_history_state(route.to_path());
        } else {
            replace_history_state(route.to_path());
        }
        // 同一路由不重复挂载页面
        if self.current_route.get_untracked() != route {
            self.set_route.set(route);
        }
    }

    /// 浏览器后退/前进时同样执行守卫
    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            router.navigate_to_route(AppRoute::from_path(&current_path()), false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 其他标签页改动 token 时重新判定
    fn init_storage_listener(&self) {
        let router = *self;
        let config = self.app.controller().config().clone();
        let closure = Closure::<dyn Fn(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
            if config.is_token_key(ev.key().as_deref()) {
                log::debug!("[Router] session changed in another tab");
                router.session_tick.update(|n| *n += 1);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
        }

        closure.forget();
    }

    /// 处理控制器发出的导航请求
    fn setup_route_requests(&self) {
        let router = *self;
        Effect::new(move |_| {
            if let Some(route) = router.app.route_request.get() {
                log::debug!("[Router] navigation requested: {}", route);
                router.navigate_to_route(route, true);
            }
        });
    }

    /// 判定为重定向时同步地址栏和当前路由
    fn setup_auth_redirect(&self) {
        let router = *self;
        Effect::new(move |_| {
            if let GuardDecision::Redirect(redirect) = router.decision.get() {
                let route = router.current_route.get_untracked();
                log::info!("[Router] Session ended, leaving {}.", route);
                replace_history_state(redirect.to_path());
                router.set_route.set(redirect);
            }
        });
    }

    /// 实际要渲染的路由：守卫放行的路由，或者重定向目标
    fn rendered_route(&self) -> AppRoute {
        match self.decision.get() {
            GuardDecision::Render(route) | GuardDecision::Redirect(route) => route,
        }
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(app: AppContext) -> RouterService {
    let router = RouterService::new(app);

    // 初次加载也要经过守卫
    router.navigate_to_route(router.current_route.get_untracked(), false);
    router.init_popstate_listener();
    router.init_storage_listener();
    router.setup_route_requests();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// 应用上下文（提供守卫判定和导航请求）
    app: AppContext,
    children: Children,
) -> impl IntoView {
    provide_router(app);
    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();
    // 路由不变时不重新挂载页面
    let rendered = Memo::new(move |_| router.rendered_route());

    move || matcher(rendered.get())
}

/// 站内链接，点击时走路由服务而不是整页刷新
#[component]
pub fn Link(
    /// 目标路由
    to: AppRoute,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(to.to_path());
    };

    view! {
        <a href=to.to_path() on:click=on_click class="link link-hover">
            {children()}
        </a>
    }
}
