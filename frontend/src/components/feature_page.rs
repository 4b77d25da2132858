use crate::config::use_config;
use crate::display::text::UiText;
use crate::web::route::AppRoute;
use leptos::prelude::*;

/// 其余已认证路由共用的页面骨架
#[component]
pub fn FeaturePage(route: AppRoute) -> impl IntoView {
    let locale = use_config().locale;

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h1 class="card-title text-2xl">{route.title(locale)}</h1>
                <p class="text-base-content/70">{UiText::ComingSoon.get(locale)}</p>
            </div>
        </div>
    }
}
