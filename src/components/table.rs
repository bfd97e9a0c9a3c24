use yew::prelude::*;

use super::{icon_search, icon_trending_down, icon_trending_up, icon_wallet};
use crate::format::{format_amount, format_txn_date};
use crate::models::TxnType;
use crate::store::{FilterType, TransactionsAction, TransactionsHandle};

#[derive(Clone, Copy, PartialEq)]
enum StatIcon {
    Income,
    Expense,
    Net,
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: &'static str,
    amount: f64,
    icon: StatIcon,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    let amount_class = match props.icon {
        StatIcon::Income => "text-2xl font-bold text-green-600 tracking-tight",
        StatIcon::Expense => "text-2xl font-bold text-red-600 tracking-tight",
        StatIcon::Net => {
            if props.amount < 0.0 {
                "text-2xl font-bold text-red-600 tracking-tight"
            } else {
                "text-2xl font-bold text-slate-800 tracking-tight"
            }
        }
    };
    html! {
        <div class="bg-white p-6 rounded-2xl shadow-sm border border-slate-200 flex justify-between items-start">
            <div>
                <p class="text-slate-400 text-[10px] font-bold mb-1 uppercase tracking-widest">{ props.title }</p>
                <h3 class={amount_class}>{ format!("₹{}", format_amount(props.amount.abs())) }</h3>
            </div>
            <div class="p-3 bg-slate-50 rounded-xl text-slate-500">
                {
                    match props.icon {
                        StatIcon::Income => icon_trending_up(),
                        StatIcon::Expense => icon_trending_down(),
                        StatIcon::Net => icon_wallet(),
                    }
                }
            </div>
        </div>
    }
}

/// Open category vocabulary: known names get a color, everything else the
/// neutral default.
fn category_badge(category: &str) -> &'static str {
    match category {
        "Food" => "bg-orange-100 text-orange-700",
        "Groceries" => "bg-green-100 text-green-700",
        "Transport" => "bg-blue-100 text-blue-700",
        "Shopping" => "bg-purple-100 text-purple-700",
        "Entertainment" => "bg-pink-100 text-pink-700",
        "Utilities" => "bg-yellow-100 text-yellow-700",
        "Salary" => "bg-emerald-100 text-emerald-700",
        _ => "bg-slate-100 text-slate-600",
    }
}

/// The transactions tab: canonical totals up top, then search/type/category
/// filters over the canonical list, then the filtered rows.
#[function_component(TransactionsTable)]
pub fn transactions_table() -> Html {
    let transactions = use_context::<TransactionsHandle>();
    let Some(transactions) = transactions else {
        return html! {};
    };

    let on_search = {
        let transactions = transactions.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                transactions.dispatch(TransactionsAction::SetSearchTerm(input.value()));
            }
        })
    };

    let set_filter = {
        let transactions = transactions.clone();
        Callback::from(move |filter: FilterType| {
            transactions.dispatch(TransactionsAction::SetFilterType(filter));
        })
    };

    let toggle_category = {
        let transactions = transactions.clone();
        Callback::from(move |category: String| {
            transactions.dispatch(TransactionsAction::ToggleCategory(category));
        })
    };

    let clear_categories = {
        let transactions = transactions.clone();
        Callback::from(move |_| transactions.dispatch(TransactionsAction::ClearCategoryFilters))
    };

    let total_income = transactions.total_income();
    let total_expense = transactions.total_expense();
    let categories = transactions.all_categories();
    let selected_count = transactions.selected_categories.len();
    let rows = transactions.filtered();

    let filter_button = |label: &'static str, value: FilterType| {
        let active = transactions.filter_type == value;
        let set_filter = set_filter.clone();
        let class = if active {
            "px-4 py-1.5 rounded-full text-sm font-medium bg-indigo-600 text-white"
        } else {
            "px-4 py-1.5 rounded-full text-sm font-medium bg-white border border-slate-200 text-slate-600 hover:bg-slate-50"
        };
        html! {
            <button class={class} onclick={Callback::from(move |_| set_filter.emit(value))}>
                { label }
            </button>
        }
    };

    html! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard title="Total Income" amount={total_income} icon={StatIcon::Income} />
                <StatCard title="Total Expenses" amount={total_expense} icon={StatIcon::Expense} />
                <StatCard title="Net Balance" amount={total_income - total_expense} icon={StatIcon::Net} />
            </div>

            <div class="bg-white rounded-2xl border border-slate-200 shadow-sm p-4 space-y-4">
                <div class="flex flex-col md:flex-row gap-3 md:items-center">
                    <div class="relative flex-1">
                        <span class="absolute left-3 top-1/2 -translate-y-1/2 text-slate-400">{ icon_search() }</span>
                        <input
                            class="w-full pl-10 pr-4 py-2 border border-slate-200 rounded-xl text-sm focus:outline-none focus:ring-2 focus:ring-indigo-200"
                            placeholder="Search by description or merchant..."
                            value={transactions.search_term.clone()}
                            oninput={on_search}
                        />
                    </div>
                    <div class="flex gap-2">
                        { filter_button("All", FilterType::All) }
                        { filter_button("Income", FilterType::Credit) }
                        { filter_button("Expenses", FilterType::Debit) }
                    </div>
                </div>

                {
                    if categories.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <div class="flex flex-wrap items-center gap-2">
                                { for categories.iter().map(|category| {
                                    let selected = transactions.selected_categories.contains(category);
                                    let toggle_category = toggle_category.clone();
                                    let name = category.clone();
                                    let class = if selected {
                                        "px-3 py-1 rounded-full text-xs font-medium bg-indigo-600 text-white"
                                    } else {
                                        "px-3 py-1 rounded-full text-xs font-medium bg-slate-100 text-slate-600 hover:bg-slate-200"
                                    };
                                    html! {
                                        <button key={category.clone()} class={class} onclick={Callback::from(move |_| toggle_category.emit(name.clone()))}>
                                            { category.clone() }
                                        </button>
                                    }
                                }) }
                                {
                                    if selected_count > 0 {
                                        html! {
                                            <>
                                                <span class="text-xs text-slate-400">
                                                    { format!("{} {} selected", selected_count, if selected_count == 1 { "category" } else { "categories" }) }
                                                </span>
                                                <button class="text-xs text-indigo-600 hover:underline" onclick={clear_categories}>
                                                    {"Clear All"}
                                                </button>
                                            </>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        }
                    }
                }
            </div>

            <div class="bg-white rounded-2xl shadow-sm border border-slate-200 overflow-hidden">
                <div class="overflow-x-auto">
                    <table class="w-full text-left border-collapse">
                        <thead>
                            <tr class="bg-slate-50 text-slate-400 text-[10px] uppercase tracking-widest">
                                <th class="px-6 py-4 font-bold">{"Date"}</th>
                                <th class="px-6 py-4 font-bold">{"Merchant"}</th>
                                <th class="px-6 py-4 font-bold">{"Description"}</th>
                                <th class="px-6 py-4 font-bold">{"Category"}</th>
                                <th class="px-6 py-4 font-bold text-right">{"Amount"}</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-slate-100">
                            {
                                if rows.is_empty() {
                                    html! {
                                        <tr>
                                            <td colspan="5" class="px-6 py-10 text-center text-sm text-slate-400">
                                                {"No transactions found"}
                                            </td>
                                        </tr>
                                    }
                                } else {
                                    html! {
                                        <>
                                            { for rows.iter().enumerate().map(|(i, txn)| {
                                                let (sign, amount_class) = match txn.txn_type {
                                                    TxnType::Credit => ("+", "text-green-600 font-semibold"),
                                                    TxnType::Debit => ("-", "text-red-600 font-semibold"),
                                                };
                                                html! {
                                                    <tr key={i} class="hover:bg-slate-50 text-sm">
                                                        <td class="px-6 py-3 text-slate-500 whitespace-nowrap">{ format_txn_date(txn.txn_date) }</td>
                                                        <td class="px-6 py-3 font-medium text-slate-800">{ txn.merchant.clone().unwrap_or_default() }</td>
                                                        <td class="px-6 py-3 text-slate-500">{ txn.description.clone().unwrap_or_default() }</td>
                                                        <td class="px-6 py-3">
                                                            {
                                                                match &txn.category {
                                                                    Some(category) if !category.is_empty() => html! {
                                                                        <span class={format!("px-2 py-1 rounded-full text-xs font-medium {}", category_badge(category))}>
                                                                            { category.clone() }
                                                                        </span>
                                                                    },
                                                                    _ => html! {},
                                                                }
                                                            }
                                                        </td>
                                                        <td class={format!("px-6 py-3 text-right whitespace-nowrap {}", amount_class)}>
                                                            { format!("{}₹{}", sign, format_amount(txn.amount.abs())) }
                                                        </td>
                                                    </tr>
                                                }
                                            }) }
                                        </>
                                    }
                                }
                            }
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
