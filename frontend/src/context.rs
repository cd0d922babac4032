//! 应用上下文
//!
//! 持有控制器和视图状态信号，通过 Context 在组件间共享。
//! 控制器本身不是 Send 的，放在本地 StoredValue 中；组件只拿到可复制的句柄。

use std::future::Future;
use std::rc::Rc;

use articles_client::{
    AppRoute, ArticlesController, ClientConfig, GuardDecision, OperationOutcome, RouteGuard,
    StateObserver, ViewState,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web::{BrowserSession, FetchHttpClient};

pub type AppController = ArticlesController<FetchHttpClient, BrowserSession, SignalObserver>;

/// 把控制器的状态变化和导航请求写入信号
///
/// 路由服务监听 `route_request`，与控制器互不依赖。
pub struct SignalObserver {
    state: RwSignal<ViewState>,
    route_request: RwSignal<Option<AppRoute>>,
}

impl StateObserver for SignalObserver {
    fn state_changed(&self, state: &ViewState) {
        self.state.set(state.clone());
    }

    fn navigate(&self, route: AppRoute) {
        self.route_request.set(Some(route));
    }
}

#[derive(Clone, Copy)]
pub struct AppContext {
    /// 视图状态（只读使用）
    pub state: RwSignal<ViewState>,
    /// 控制器发出的导航请求
    pub route_request: RwSignal<Option<AppRoute>>,
    controller: StoredValue<Rc<AppController>, LocalStorage>,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        let state = RwSignal::new(ViewState::default());
        let route_request = RwSignal::new(None);
        let observer = SignalObserver {
            state,
            route_request,
        };
        let session = BrowserSession::new(config.token_key.clone());
        let controller = ArticlesController::new(config, FetchHttpClient, session, observer);

        Self {
            state,
            route_request,
            controller: StoredValue::new_local(Rc::new(controller)),
        }
    }

    pub fn controller(&self) -> Rc<AppController> {
        self.controller.get_value()
    }

    /// 在本地任务中执行一个控制器操作；结果已经反映在状态里，这里只记日志
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(Rc<AppController>) -> Fut + 'static,
        Fut: Future<Output = OperationOutcome> + 'static,
    {
        let controller = self.controller();
        spawn_local(async move {
            let outcome = op(controller).await;
            log::debug!("[App] operation finished: {:?}", outcome);
        });
    }

    /// 守卫判定，每次调用都重新读取会话存储（不追踪信号）
    pub fn guard(&self, route: AppRoute) -> GuardDecision {
        let controller = self.controller();
        RouteGuard::new(controller.session()).resolve(route)
    }
}

/// 从 Context 获取应用上下文
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// 编译期注入的配置变量
fn build_var(key: &str) -> Option<String> {
    let value = match key {
        "ARTICLES_API_URL" => option_env!("ARTICLES_API_URL"),
        "ARTICLES_LOGIN_PATH" => option_env!("ARTICLES_LOGIN_PATH"),
        "ARTICLES_PATH" => option_env!("ARTICLES_PATH"),
        "ARTICLES_TOKEN_KEY" => option_env!("ARTICLES_TOKEN_KEY"),
        "ARTICLES_AUTH_SCHEME" => option_env!("ARTICLES_AUTH_SCHEME"),
        _ => None,
    };
    value.map(str::to_string)
}

pub fn load_config() -> ClientConfig {
    ClientConfig::from_vars(build_var)
}
