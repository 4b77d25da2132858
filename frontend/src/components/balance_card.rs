use crate::components::icons::Icon;
use crate::config::use_config;
use crate::display::balance::{BalancePresenter, clamp_progress, progress_width_style};
use crate::display::classify::classify_amount_color;
use crate::display::text::UiText;
use finboard_shared::AccountBalance;
use leptos::prelude::*;

/// 余额卡片
///
/// 可见性状态只存在于本组件内部，卸载即丢弃。
#[component]
pub fn BalanceCard(balance: AccountBalance) -> impl IntoView {
    let locale = use_config().locale;
    let presenter = RwSignal::new(BalancePresenter::new(locale));

    let AccountBalance {
        raw,
        currency,
        monthly_gain,
        savings_progress_percent,
    } = balance;

    let displayed = move || presenter.with(|p| p.render(&raw));
    let is_visible = move || presenter.with(BalancePresenter::is_visible);
    let gain_class = format!(
        "text-sm font-semibold {}",
        classify_amount_color(&monthly_gain).css_class()
    );

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h2 class="card-title text-base-content/70">
                        {UiText::AvailableBalance.get(locale)}
                    </h2>
                    <button
                        class="btn btn-ghost btn-circle btn-sm"
                        on:click=move |_| presenter.update(BalancePresenter::toggle_visibility)
                        title=move || {
                            if is_visible() {
                                UiText::HideBalance.get(locale)
                            } else {
                                UiText::ShowBalance.get(locale)
                            }
                        }
                    >
                        {move || {
                            let icon = if is_visible() { "eye-off" } else { "eye" };
                            view! { <Icon name=icon class="h-5 w-5" /> }
                        }}
                    </button>
                </div>

                <div class="flex items-baseline gap-2">
                    <span class="text-4xl font-bold font-mono tabular-nums">{displayed}</span>
                    <span class="text-lg text-base-content/60">{currency}</span>
                </div>

                <div class=gain_class>{monthly_gain} " " {UiText::ThisMonth.get(locale)}</div>

                <div class="mt-4 space-y-1">
                    <div class="flex justify-between text-sm text-base-content/70">
                        <span>{UiText::SavingsGoal.get(locale)}</span>
                        <span>{clamp_progress(savings_progress_percent)} "%"</span>
                    </div>
                    <div class="w-full h-2 rounded-full bg-base-200">
                        <div
                            class="h-2 rounded-full bg-primary transition-all"
                            style={progress_width_style(savings_progress_percent)}
                        ></div>
                    </div>
                </div>
            </div>
        </div>
    }
}
