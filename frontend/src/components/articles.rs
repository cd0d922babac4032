use crate::context::use_app;
use articles_shared::{Article, ArticleId};
use leptos::prelude::*;

#[component]
pub fn ArticlesPage() -> impl IntoView {
    let app = use_app();

    // 挂载时拉取一次列表
    app.spawn(|ctrl| async move { ctrl.list_articles().await });

    let articles = move || app.state.with(|s| s.articles.iter().cloned().collect::<Vec<Article>>());
    // 编辑中或有请求在途时禁用行内操作
    let is_locked = move || app.state.with(|s| s.busy || s.selection.is_editing());
    let total = move || app.state.with(|s| s.articles.len());

    let on_edit = move |id: ArticleId| {
        app.controller().edit_article(id);
    };
    let on_delete = move |id: ArticleId| {
        app.spawn(move |ctrl| async move { ctrl.delete_article(id).await });
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="flex items-center justify-between p-6 pb-2">
                    <h3 class="card-title">"Articles"</h3>
                    <span class="badge badge-neutral">{total}</span>
                </div>
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Text"</th>
                                <th>"Topic"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || total() == 0>
                                <tr>
                                    <td colspan="4" class="text-center py-8 text-base-content/50">
                                        "No articles yet."
                                    </td>
                                </tr>
                            </Show>
                            {move || {
                                articles()
                                    .into_iter()
                                    .map(|article| {
                                        let id = article.article_id;
                                        view! {
                                            <tr>
                                                <td class="font-bold">{article.title}</td>
                                                <td>{article.text}</td>
                                                <td>
                                                    <span class="badge badge-ghost">{article.topic.as_str()}</span>
                                                </td>
                                                <td class="flex gap-2 justify-end">
                                                    <button
                                                        class="btn btn-sm btn-outline"
                                                        disabled=is_locked
                                                        on:click=move |_| on_edit(id)
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn-sm btn-outline btn-error"
                                                        disabled=is_locked
                                                        on:click=move |_| on_delete(id)
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
