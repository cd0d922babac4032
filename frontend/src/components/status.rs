use crate::context::use_app;
use crate::web::router::Link;
use articles_client::AppRoute;
use leptos::prelude::*;

/// 在途请求指示器
#[component]
pub fn Spinner(#[prop(into)] on: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || on.get()>
            <div class="toast toast-top toast-start z-50">
                <span class="loading loading-spinner loading-md text-primary"></span>
            </div>
        </Show>
    }
}

/// 最近一次操作的单行消息
#[component]
pub fn Message(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || message.with(|m| !m.is_empty())>
            <div role="status" class="alert shadow">
                <span>{move || message.get()}</span>
            </div>
        </Show>
    }
}

/// 顶部导航栏：页面链接和登出按钮
#[component]
pub fn NavBar() -> impl IntoView {
    let app = use_app();
    let is_authenticated = move || {
        app.state.track();
        app.controller().is_authenticated()
    };

    let on_logout = move |_| app.controller().end_session();

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-4">
                <span class="text-xl font-bold">"Articles"</span>
                <Link to=AppRoute::Login>"Login"</Link>
                <Link to=AppRoute::Articles>"Articles"</Link>
            </div>
            <div class="flex-none">
                <Show when=is_authenticated>
                    <button on:click=on_logout class="btn btn-outline btn-error">
                        "Logout"
                    </button>
                </Show>
            </div>
        </div>
    }
}
