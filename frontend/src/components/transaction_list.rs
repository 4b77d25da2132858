use crate::components::icons::Icon;
use crate::config::use_config;
use crate::display::classify::DisplayToken;
use crate::display::text::UiText;
use crate::schedule::{Task, TaskError, use_guard};
use finboard_shared::Transaction;
use leptos::prelude::*;

/// 交易列表
///
/// 各行依次淡入：逐行的显示更新通过守卫的批量调度按列表顺序执行。
#[component]
pub fn TransactionList(transactions: Vec<Transaction>) -> impl IntoView {
    let locale = use_config().locale;
    let guard = use_guard();

    let revealed: Vec<RwSignal<bool>> = transactions.iter().map(|_| RwSignal::new(false)).collect();

    let tasks: Vec<Task> = revealed
        .iter()
        .copied()
        .map(|flag| {
            // 组件已卸载时信号被释放，set 会失败
            Box::new(move || match flag.try_set(true) {
                None => Ok(()),
                Some(_) => Err(TaskError::failed("row unmounted")),
            }) as Task
        })
        .collect();
    guard.batch(tasks);

    let is_empty = transactions.is_empty();

    let rows = transactions
        .into_iter()
        .zip(revealed)
        .map(|(tx, shown)| {
            let token = DisplayToken::for_transaction(&tx, locale);
            let row_class = move || {
                if shown.get() {
                    "flex items-center gap-4 py-3 transition-opacity duration-300 opacity-100"
                } else {
                    "flex items-center gap-4 py-3 transition-opacity duration-300 opacity-0"
                }
            };
            let icon_class = format!(
                "flex h-10 w-10 items-center justify-center rounded-full {}",
                token.icon_container.css_class()
            );
            let status_class = token.status.color.css_class();
            let status_label = token.status.label.into_owned();
            let amount_class = format!(
                "font-mono font-semibold tabular-nums {}",
                token.amount_color.css_class()
            );

            view! {
                <li class=row_class>
                    <div class=icon_class>
                        <Icon name={tx.icon} class="h-5 w-5" />
                    </div>
                    <div class="flex-1 min-w-0">
                        <div class="font-medium truncate">{tx.title}</div>
                        <div class="text-sm text-base-content/60 truncate">{tx.subtitle}</div>
                    </div>
                    <div class="flex flex-col items-end gap-1">
                        <span class=amount_class>{tx.amount.to_string()}</span>
                        <span class=status_class>{status_label}</span>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h3 class="card-title">{UiText::RecentTransactions.get(locale)}</h3>
                <Show when=move || is_empty>
                    <p class="text-center py-8 text-base-content/50">
                        {UiText::NoTransactions.get(locale)}
                    </p>
                </Show>
                <ul class="divide-y divide-base-200">{rows}</ul>
            </div>
        </div>
    }
}
