mod api;
mod components;
mod format;
mod models;
mod store;
mod upi;

use yew::prelude::*;

use components::{
    icon_file_text, icon_scan_frame, AiNotificationsCarousel, InsightsDashboard, QrScanner,
    TransactionsTable, UploadCsv,
};
use store::{
    InsightsHandle, InsightsState, NotificationsHandle, NotificationsState, TransactionsHandle,
    TransactionsState,
};

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Transactions,
    Insights,
}

#[function_component(App)]
fn app() -> Html {
    let transactions = use_reducer(TransactionsState::default);
    let insights = use_reducer(InsightsState::default);
    let notifications = use_reducer(NotificationsState::default);

    let active_tab = use_state(|| Tab::Transactions);
    let show_scanner = use_state(|| false);

    let has_data = insights.has_data();
    let error = transactions
        .error
        .clone()
        .or_else(|| insights.error.clone());
    let transaction_count = transactions.data.len();

    let open_scanner = {
        let show_scanner = show_scanner.clone();
        Callback::from(move |_| show_scanner.set(true))
    };
    let close_scanner = {
        let show_scanner = show_scanner.clone();
        Callback::from(move |_| show_scanner.set(false))
    };
    let view_insights = {
        let active_tab = active_tab.clone();
        Callback::from(move |_| active_tab.set(Tab::Insights))
    };

    let tab_button = |label: String, value: Tab| {
        let active = *active_tab == value;
        let active_tab = active_tab.clone();
        let class = if active {
            "px-5 py-2 rounded-xl text-sm font-bold bg-white shadow-sm text-indigo-600"
        } else {
            "px-5 py-2 rounded-xl text-sm font-medium text-slate-500 hover:text-slate-700"
        };
        html! {
            <button class={class} onclick={Callback::from(move |_| active_tab.set(value))}>
                { label }
            </button>
        }
    };

    html! {
        <ContextProvider<TransactionsHandle> context={transactions.clone()}>
        <ContextProvider<InsightsHandle> context={insights.clone()}>
        <ContextProvider<NotificationsHandle> context={notifications.clone()}>
            <div class="min-h-screen bg-slate-100">
                <header class="bg-white border-b border-slate-200">
                    <div class="max-w-6xl mx-auto px-6 py-5 flex items-center justify-between">
                        <div>
                            <h1 class="text-xl font-bold text-slate-800">{"Bank Insight Coach"}</h1>
                            <p class="text-sm text-slate-400">{"Upload statements, scan payments, understand your money"}</p>
                        </div>
                        <button
                            class="flex items-center gap-2 bg-indigo-600 text-white px-4 py-2 rounded-xl font-bold text-sm hover:bg-indigo-700 transition-colors"
                            onclick={open_scanner}
                        >
                            { icon_scan_frame() }
                            {"Scan & Pay"}
                        </button>
                    </div>
                </header>

                <main class="max-w-6xl mx-auto p-6 space-y-6">
                    <UploadCsv />

                    {
                        match &error {
                            Some(message) => html! {
                                <div class="bg-red-50 border border-red-200 text-red-700 text-sm rounded-2xl p-4">
                                    { message.clone() }
                                </div>
                            },
                            None => html! {},
                        }
                    }

                    {
                        if has_data {
                            html! {
                                <>
                                    <AiNotificationsCarousel />
                                    <div class="flex gap-2 bg-slate-200/60 rounded-2xl p-1 w-fit">
                                        { tab_button(format!("Transactions ({})", transaction_count), Tab::Transactions) }
                                        { tab_button("Insights".to_string(), Tab::Insights) }
                                    </div>
                                    {
                                        match *active_tab {
                                            Tab::Transactions => html! { <TransactionsTable /> },
                                            Tab::Insights => html! { <InsightsDashboard /> },
                                        }
                                    }
                                </>
                            }
                        } else {
                            html! {
                                <div class="bg-white rounded-2xl border border-slate-200 p-12 text-center text-slate-400">
                                    <div class="flex justify-center mb-3">{ icon_file_text() }</div>
                                    <h3 class="font-bold text-slate-600 text-lg">{"No Data Yet"}</h3>
                                    <p class="text-sm mt-1">{"Upload a bank statement CSV to see your transactions and insights."}</p>
                                </div>
                            }
                        }
                    }
                </main>

                {
                    if *show_scanner {
                        html! { <QrScanner on_close={close_scanner} on_view_insights={view_insights} /> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </ContextProvider<NotificationsHandle>>
        </ContextProvider<InsightsHandle>>
        </ContextProvider<TransactionsHandle>>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
