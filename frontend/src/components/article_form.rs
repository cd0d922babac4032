//! 文章表单
//!
//! 同一个表单承担创建和编辑两种模式：选中文章时预填字段并提交更新，
//! 否则提交创建。字段校验完全交给 `ArticleFields::parse`。

use crate::context::use_app;
use articles_shared::{ArticleFields, TEXT_MAX_CHARS, TITLE_MAX_CHARS, Topic};
use leptos::prelude::*;

#[component]
pub fn ArticleForm() -> impl IntoView {
    let app = use_app();

    let (title, set_title) = signal(String::new());
    let (text, set_text) = signal(String::new());
    let (topic, set_topic) = signal(String::new());

    let current = Memo::new(move |_| app.state.with(|s| s.current_article().cloned()));
    let is_editing = move || current.with(Option::is_some);
    let is_busy = move || app.state.with(|s| s.busy);

    // 进入编辑时预填，退出编辑时清空
    Effect::new(move |_| match current.get() {
        Some(article) => {
            set_title.set(article.title);
            set_text.set(article.text);
            set_topic.set(article.topic.to_string());
        }
        None => {
            set_title.set(String::new());
            set_text.set(String::new());
            set_topic.set(String::new());
        }
    });

    let fields = Memo::new(move |_| {
        title.with(|title| text.with(|text| topic.with(|topic| ArticleFields::parse(title, text, topic))))
    });
    let validation_error = move || fields.with(|f| f.as_ref().err().map(ToString::to_string));

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Ok(fields) = fields.get_untracked() else {
            return;
        };
        if current.get_untracked().is_none() {
            // 创建模式下立即清空，编辑模式由选中状态驱动
            set_title.set(String::new());
            set_text.set(String::new());
            set_topic.set(String::new());
        }
        app.spawn(move |ctrl| async move { ctrl.submit_article(fields).await });
    };

    let on_cancel = move |_| app.controller().cancel_edit();

    view! {
        <div class="card bg-base-100 shadow-xl">
            <form class="card-body" on:submit=on_submit>
                <h3 class="card-title">
                    {move || if is_editing() { "Edit article" } else { "New article" }}
                </h3>

                <div class="form-control">
                    <label class="label" for="title">
                        <span class="label-text">"Title"</span>
                    </label>
                    <input
                        id="title"
                        type="text"
                        maxlength=TITLE_MAX_CHARS.to_string()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                        prop:value=title
                        class="input input-bordered"
                    />
                </div>

                <div class="form-control">
                    <label class="label" for="text">
                        <span class="label-text">"Text"</span>
                    </label>
                    <textarea
                        id="text"
                        maxlength=TEXT_MAX_CHARS.to_string()
                        on:input=move |ev| set_text.set(event_target_value(&ev))
                        prop:value=text
                        class="textarea textarea-bordered"
                    ></textarea>
                </div>

                <div class="form-control">
                    <label class="label" for="topic">
                        <span class="label-text">"Topic"</span>
                    </label>
                    <select
                        id="topic"
                        on:change=move |ev| set_topic.set(event_target_value(&ev))
                        prop:value=topic
                        class="select select-bordered"
                    >
                        <option value="">"-- Select topic --"</option>
                        {Topic::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <Show when=move || validation_error().is_some()>
                    <p class="text-sm text-base-content/60">{move || validation_error().unwrap_or_default()}</p>
                </Show>

                <div class="card-actions justify-end mt-4">
                    <Show when=is_editing>
                        <button type="button" class="btn btn-ghost" on:click=on_cancel>
                            "Cancel"
                        </button>
                    </Show>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || is_busy() || fields.with(Result::is_err)
                    >
                        {move || if is_editing() { "Save" } else { "Add article" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
