use crate::components::icons::Icon;
use crate::config::{Locale, use_config};
use crate::display::nav::{DESKTOP_NAV, NavTarget, nav_items};
use crate::display::text::UiText;
use crate::session::{logout, use_session};
use crate::web::router::use_router;
use finboard_shared::SessionState;
use leptos::prelude::*;

/// 单个导航项
///
/// 点击只发出导航意图，不关心结果。
#[component]
pub fn NavEntry(target: NavTarget, selected: bool, locale: Locale) -> impl IntoView {
    let router = use_router();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(target.path);
    };

    view! {
        <li>
            <a
                href={target.path}
                class={if selected { "menu-active" } else { "" }}
                aria-current={if selected { Some("page") } else { None }}
                on:click=on_click
            >
                <Icon name={target.icon} class="h-4 w-4" />
                {target.label(locale)}
            </a>
        </li>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let router = use_router();
    let session = use_session();
    let locale = use_config().locale;
    let current = router.current_route();

    let initials = move || session.state.with(SessionState::initials);

    let on_logout = move |_| logout(&session, &router);

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-2">
                <span class="btn btn-ghost text-xl">"FinBoard"</span>
                <ul class="menu menu-horizontal hidden md:flex gap-1">
                    {move || {
                        nav_items(DESKTOP_NAV, current.get())
                            .map(|(target, selected)| {
                                view! { <NavEntry target=target selected=selected locale=locale /> }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
            <div class="flex-none gap-2">
                <div class="avatar avatar-placeholder">
                    <div class="bg-primary text-primary-content w-10 rounded-full">
                        <span>{initials}</span>
                    </div>
                </div>
                <button
                    on:click=on_logout
                    class="btn btn-ghost btn-square"
                    title={UiText::SignOut.get(locale)}
                >
                    <Icon name="logout" class="h-5 w-5" />
                </button>
            </div>
        </div>
    }
}
