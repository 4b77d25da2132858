use crate::components::icons::Icon;
use crate::config::use_config;
use crate::display::text::UiText;
use crate::session::use_session;
use finboard_shared::LOGIN_PATH;
use leptos::prelude::*;

/// 未认证访客看到的唯一页面
#[component]
pub fn LandingPage() -> impl IntoView {
    let session = use_session();
    let config = use_config();
    let locale = config.locale;
    let login_url = format!("{}{}", config.api_base_url, LOGIN_PATH);

    let is_loading = move || session.state.with(|s| s.is_loading);

    view! {
        <Show
            when=move || !is_loading()
            fallback=|| {
                view! {
                    <div class="flex items-center justify-center min-h-screen">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            }
        >
            <div class="hero min-h-screen bg-base-200">
                <div class="hero-content flex-col text-center max-w-md">
                    <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                        <Icon name="credit-card" class="h-8 w-8" />
                    </div>
                    <h1 class="text-4xl font-bold">"FinBoard"</h1>
                    <p class="text-base-content/70">
                        {UiText::LandingTagline.get(locale)}
                    </p>
                    <a href={login_url.clone()} class="btn btn-primary">
                        {UiText::SignIn.get(locale)}
                    </a>
                </div>
            </div>
        </Show>
    }
}
