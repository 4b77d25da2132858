use crate::components::icons::Icon;
use crate::config::use_config;
use crate::display::nav::{MOBILE_NAV, nav_items};
use crate::web::router::use_router;
use leptos::prelude::*;

/// 移动端底部导航
#[component]
pub fn MobileNav() -> impl IntoView {
    let router = use_router();
    let locale = use_config().locale;
    let current = router.current_route();

    view! {
        <div class="dock md:hidden">
            {move || {
                nav_items(MOBILE_NAV, current.get())
                    .map(|(target, selected)| {
                        view! {
                            <button
                                class={if selected { "dock-active" } else { "" }}
                                on:click=move |_| router.navigate(target.path)
                            >
                                <Icon name={target.icon} class="size-[1.2em]" />
                                <span class="dock-label">{target.label(locale)}</span>
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
