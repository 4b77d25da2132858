use crate::api::BankApi;
use crate::components::balance_card::BalanceCard;
use crate::components::icons::Icon;
use crate::components::transaction_list::TransactionList;
use crate::config::use_config;
use crate::display::text::UiText;
use crate::schedule::{TaskError, use_guard};
use crate::web::route::AppRoute;
use finboard_shared::AccountOverview;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 错误提示的停留时间（毫秒）
const NOTIFICATION_MS: u32 = 3_000;

/// 概览区域当前应显示的内容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverviewPhase {
    Loading,
    Ready,
    /// 加载结束但没有数据：给出空状态和重试按钮
    Unavailable,
}

impl OverviewPhase {
    /// 已有数据时刷新失败仍保留旧数据
    fn of(has_data: bool, loading: bool) -> Self {
        match (has_data, loading) {
            (true, _) => OverviewPhase::Ready,
            (false, true) => OverviewPhase::Loading,
            (false, false) => OverviewPhase::Unavailable,
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_context::<BankApi>().expect("BankApi should be provided");
    let guard = use_guard();
    let locale = use_config().locale;

    let (overview, set_overview) = signal(Option::<AccountOverview>::None);
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let load_overview = move || {
        let api = api.clone();
        set_loading.set(true);
        spawn_local(async move {
            match api.fetch_overview().await {
                Ok(data) => set_overview.set(Some(data)),
                Err(e) => {
                    log::warn!("[Dashboard] Failed to load overview: {}", e);
                    set_error_msg.set(Some(UiText::OverviewLoadFailed.get(locale).to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    // 初始加载
    load_overview();

    // 3秒后清除通知
    Effect::new(move |_| {
        if error_msg.with(Option::is_some) {
            guard.guard(
                move || match set_error_msg.try_set(None) {
                    None => Ok(()),
                    Some(_) => Err(TaskError::failed("dashboard unmounted")),
                },
                NOTIFICATION_MS,
            );
        }
    });

    let reload = load_overview.clone();
    let retry = load_overview.clone();
    let phase = move || OverviewPhase::of(overview.with(Option::is_some), loading.get());

    view! {
        <div class="space-y-6">
            // 通知提示框
            <Show when=move || error_msg.with(Option::is_some)>
                <div class="toast toast-top toast-end z-50">
                    <div class="alert alert-error shadow-lg">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </div>
            </Show>

            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{AppRoute::Dashboard.title(locale)}</h1>
                <button
                    on:click=move |_| reload()
                    disabled=move || loading.get()
                    class="btn btn-ghost btn-circle"
                    title={UiText::Refresh.get(locale)}
                >
                    <Icon name="history" class="h-5 w-5" />
                </button>
            </div>

            {move || match phase() {
                OverviewPhase::Ready => {
                    match overview.get() {
                        Some(data) => {
                            view! {
                                <div class="grid gap-6 lg:grid-cols-2">
                                    <BalanceCard balance=data.balance />
                                    <TransactionList transactions=data.transactions />
                                </div>
                            }
                                .into_any()
                        }
                        None => ().into_any(),
                    }
                }
                OverviewPhase::Loading => {
                    view! {
                        <div class="flex justify-center py-16">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                        .into_any()
                }
                OverviewPhase::Unavailable => {
                    let retry = retry.clone();
                    view! {
                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body items-center text-center py-16">
                                <p class="text-base-content/70">
                                    {UiText::OverviewUnavailable.get(locale)}
                                </p>
                                <button class="btn btn-primary" on:click=move |_| retry()>
                                    {UiText::Retry.get(locale)}
                                </button>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_first_load_ends_in_unavailable_state() {
        assert_eq!(OverviewPhase::of(false, true), OverviewPhase::Loading);
        assert_eq!(OverviewPhase::of(false, false), OverviewPhase::Unavailable);
    }

    #[test]
    fn existing_data_survives_a_refresh() {
        assert_eq!(OverviewPhase::of(true, true), OverviewPhase::Ready);
        assert_eq!(OverviewPhase::of(true, false), OverviewPhase::Ready);
    }
}
