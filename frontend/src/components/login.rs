use crate::context::use_app;
use articles_shared::Credentials;
use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let app = use_app();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let credentials = Memo::new(move |_| Credentials::new(username.get(), password.get()).ok());
    let is_busy = move || app.state.with(|s| s.busy);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = credentials.get_untracked() else {
            return;
        };
        app.spawn(move |ctrl| async move { ctrl.authenticate(credentials).await });
    };

    view! {
        <div class="hero min-h-[60vh]">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Login"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                autocomplete="username"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                autocomplete="current-password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button
                                class="btn btn-primary"
                                disabled=move || is_busy() || credentials.with(Option::is_none)
                            >
                                "Login"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
