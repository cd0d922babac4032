//! 文章管理前端应用
//!
//! 采用 Context-Driven 的架构：
//! - `context`: 控制器与视图状态信号
//! - `web::router`: 路由服务（History API + 守卫）
//! - `components`: UI 组件层
//!
//! 状态机和请求逻辑都在 `articles-client` 中，这里只负责渲染和转发用户操作。

mod context;
mod components {
    pub mod article_form;
    pub mod articles;
    pub mod login;
    pub mod status;
}

use crate::components::article_form::ArticleForm;
use crate::components::articles::ArticlesPage;
use crate::components::login::LoginPage;
use crate::components::status::{Message, NavBar, Spinner};
use crate::context::{AppContext, load_config};

use articles_client::AppRoute;
use leptos::prelude::*;

// 浏览器 API 封装：HTTP、LocalStorage、控制台日志和 History 路由
pub(crate) mod web {
    mod http;
    pub mod logger;
    pub mod router;
    mod storage;

    pub use http::FetchHttpClient;
    pub use storage::BrowserSession;
}

use web::router::{Router, RouterOutlet};

/// 路由匹配函数
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Articles => view! {
            <div class="space-y-8">
                <ArticleForm />
                <ArticlesPage />
            </div>
        }
        .into_any(),
        AppRoute::NotFound => view! {
            <div class="text-center py-16">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"Page not found"</p>
            </div>
        }
        .into_any(),
    }
}

/// 安装控制台日志
pub fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    web::logger::init(level);
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建应用上下文（控制器 + 视图状态）
    let app = AppContext::new(load_config());
    provide_context(app);

    let busy = Signal::derive(move || app.state.with(|s| s.busy));
    let message = Signal::derive(move || app.state.with(|s| s.message.clone()));

    view! {
        // 2. 路由器：守卫判定和导航请求都来自应用上下文
        <Router app=app>
            <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
                <div class="max-w-5xl mx-auto space-y-8">
                    <Spinner on=busy />
                    <NavBar />
                    <Message message=message />
                    // 请求在途时整体变淡
                    <div class=move || if busy.get() { "opacity-50 transition-opacity" } else { "transition-opacity" }>
                        <RouterOutlet matcher=route_matcher />
                    </div>
                </div>
            </div>
        </Router>
    }
}
