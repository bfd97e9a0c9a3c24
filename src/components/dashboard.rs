use yew::prelude::*;

use crate::format::format_amount;
use crate::store::InsightsHandle;

const BAR_PALETTE: [&str; 7] = [
    "bg-indigo-500",
    "bg-emerald-500",
    "bg-amber-500",
    "bg-rose-500",
    "bg-sky-500",
    "bg-violet-500",
    "bg-lime-500",
];

#[derive(Properties, PartialEq)]
struct MetricCardProps {
    title: &'static str,
    value: String,
    caption: String,
}

#[function_component(MetricCard)]
fn metric_card(props: &MetricCardProps) -> Html {
    html! {
        <div class="bg-white p-6 rounded-2xl shadow-sm border border-slate-200">
            <p class="text-slate-400 text-[10px] font-bold mb-1 uppercase tracking-widest">{ props.title }</p>
            <h3 class="text-2xl font-bold text-slate-800 tracking-tight">{ props.value.clone() }</h3>
            <p class="text-xs text-slate-400 mt-1">{ props.caption.clone() }</p>
        </div>
    }
}

/// The insights tab: every aggregate of the payload rendered read-only.
/// Shows a spinner while a fetch is in flight and nothing at all before the
/// first successful one.
#[function_component(InsightsDashboard)]
pub fn insights_dashboard() -> Html {
    let insights = use_context::<InsightsHandle>();
    let Some(insights) = insights else {
        return html! {};
    };

    if insights.is_loading {
        return html! {
            <div class="flex items-center justify-center py-16">
                <div class="w-10 h-10 border-2 border-indigo-500 border-t-transparent rounded-full animate-spin"></div>
            </div>
        };
    }

    let Some(envelope) = insights.data.as_ref() else {
        return html! {};
    };
    let summary = &envelope.insights;

    let percent_of_spend = |amount: f64| {
        if summary.monthly_spend > 0.0 {
            amount / summary.monthly_spend * 100.0
        } else {
            0.0
        }
    };

    // top_merchants arrives keyed by name; rank by value for display
    let mut merchants: Vec<(&String, f64)> = summary
        .top_merchants
        .iter()
        .map(|(name, value)| (name, *value))
        .collect();
    merchants.sort_by(|a, b| b.1.total_cmp(&a.1));
    merchants.truncate(5);
    let merchant_max = merchants.first().map(|(_, value)| *value).unwrap_or(0.0);

    html! {
        <div class="space-y-6">
            <div class="bg-gradient-to-r from-indigo-600 to-violet-600 rounded-2xl p-6 text-white">
                <h2 class="text-xl font-bold">{"Financial Insights"}</h2>
                {
                    if summary.date_range.start_date.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <p class="text-sm text-indigo-100 mt-1">
                                { format!("{} to {}", summary.date_range.start_date, summary.date_range.end_date) }
                            </p>
                        }
                    }
                }
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <MetricCard
                    title="Total Income"
                    value={format!("₹{}", format_amount(summary.total_income))}
                    caption={format!("{} transactions", summary.total_income_transactions)}
                />
                <MetricCard
                    title="Total Expenses"
                    value={format!("₹{}", format_amount(summary.monthly_spend))}
                    caption={format!("{} transactions", summary.total_expense_transactions)}
                />
                <MetricCard
                    title="Total Savings"
                    value={format!("₹{}", format_amount(summary.total_savings))}
                    caption={format!("{:.1}% savings rate", summary.savings_rate)}
                />
                <MetricCard
                    title="Avg Transaction"
                    value={format!("₹{}", format_amount(summary.avg_transaction_value))}
                    caption={format!("{} total transactions", summary.total_transactions)}
                />
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <MetricCard
                    title="Daily Avg Spend"
                    value={format!("₹{}", format_amount(summary.daily_avg_spend))}
                    caption={"per day across the statement period".to_string()}
                />
                <MetricCard
                    title="Daily Avg Income"
                    value={format!("₹{}", format_amount(summary.daily_avg_income))}
                    caption={"per day across the statement period".to_string()}
                />
            </div>

            {
                if summary.category_totals.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="bg-white rounded-2xl border border-slate-200 shadow-sm p-6">
                            <h3 class="font-bold text-slate-800 text-lg mb-4">{"Spending by Category"}</h3>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                { for summary.category_totals.iter().enumerate().map(|(i, (category, amount))| {
                                    let percent = percent_of_spend(*amount);
                                    let bar = BAR_PALETTE[i % BAR_PALETTE.len()];
                                    html! {
                                        <div key={category.clone()} class="border border-slate-100 rounded-xl p-4">
                                            <div class="flex items-center justify-between text-sm mb-2">
                                                <span class="font-medium text-slate-700">{ category.clone() }</span>
                                                <span class="text-slate-500">{ format!("₹{}", format_amount(*amount)) }</span>
                                            </div>
                                            <div class="h-2 w-full bg-slate-100 rounded-full overflow-hidden">
                                                <div class={format!("h-full {}", bar)} style={format!("width: {}%", percent.min(100.0) as i32)}></div>
                                            </div>
                                            <p class="text-xs text-slate-400 mt-1">{ format!("{:.1}% of expenses", percent) }</p>
                                        </div>
                                    }
                                }) }
                            </div>
                        </div>
                    }
                }
            }

            {
                if merchants.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="bg-white rounded-2xl border border-slate-200 shadow-sm p-6">
                            <h3 class="font-bold text-slate-800 text-lg mb-4">{"Top Merchants"}</h3>
                            <div class="space-y-3">
                                { for merchants.iter().enumerate().map(|(i, (name, value))| {
                                    let width = if merchant_max > 0.0 { value / merchant_max * 100.0 } else { 0.0 };
                                    html! {
                                        <div key={(*name).clone()} class="flex items-center gap-3 text-sm">
                                            <span class="w-5 text-slate-400 font-bold">{ format!("{}", i + 1) }</span>
                                            <span class="w-36 truncate text-slate-700">{ (*name).clone() }</span>
                                            <div class="flex-1 h-2 bg-slate-100 rounded-full overflow-hidden">
                                                <div class="h-full bg-indigo-500" style={format!("width: {}%", width as i32)}></div>
                                            </div>
                                            <span class="text-slate-500 whitespace-nowrap">{ format!("₹{}", format_amount(*value)) }</span>
                                        </div>
                                    }
                                }) }
                            </div>
                        </div>
                    }
                }
            }

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {
                    match &summary.highest_spending_category {
                        Some(category) => html! {
                            <MetricCard
                                title="Top Spending Category"
                                value={category.clone()}
                                caption={"largest share of expenses".to_string()}
                            />
                        },
                        None => html! {},
                    }
                }
                {
                    match &summary.highest_spending_merchant {
                        Some(merchant) => html! {
                            <MetricCard
                                title="Top Spending Merchant"
                                value={merchant.clone()}
                                caption={"largest total billed".to_string()}
                            />
                        },
                        None => html! {},
                    }
                }
                <MetricCard
                    title="Smallest Transaction"
                    value={format!("₹{}", format_amount(summary.min_transaction_amount))}
                    caption={"across the whole statement".to_string()}
                />
                <MetricCard
                    title="Largest Transaction"
                    value={format!("₹{}", format_amount(summary.max_transaction_amount))}
                    caption={"across the whole statement".to_string()}
                />
            </div>

            <div class="bg-white rounded-2xl border border-slate-200 shadow-sm p-6">
                <h3 class="font-bold text-slate-800 text-lg mb-4">{"Transaction Mix"}</h3>
                <div class="space-y-3">
                    <div class="flex items-center gap-3 text-sm">
                        <span class="w-20 text-slate-500">{"Debits"}</span>
                        <div class="flex-1 h-2 bg-slate-100 rounded-full overflow-hidden">
                            <div class="h-full bg-red-400" style={format!("width: {}%", summary.transaction_type_distribution.debit_percentage.min(100.0) as i32)}></div>
                        </div>
                        <span class="text-slate-600 font-medium w-14 text-right">{ format!("{:.1}%", summary.transaction_type_distribution.debit_percentage) }</span>
                    </div>
                    <div class="flex items-center gap-3 text-sm">
                        <span class="w-20 text-slate-500">{"Credits"}</span>
                        <div class="flex-1 h-2 bg-slate-100 rounded-full overflow-hidden">
                            <div class="h-full bg-green-400" style={format!("width: {}%", summary.transaction_type_distribution.credit_percentage.min(100.0) as i32)}></div>
                        </div>
                        <span class="text-slate-600 font-medium w-14 text-right">{ format!("{:.1}%", summary.transaction_type_distribution.credit_percentage) }</span>
                    </div>
                    <p class="text-xs text-slate-400">
                        { format!("Expense to income ratio: {:.2}", summary.expense_to_income_ratio) }
                    </p>
                </div>
            </div>

            {
                if summary.weekly_spend.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="bg-white rounded-2xl border border-slate-200 shadow-sm p-6">
                            <h3 class="font-bold text-slate-800 text-lg mb-4">{"Weekly Spend"}</h3>
                            <div class="space-y-2">
                                { for summary.weekly_spend.iter().map(|(week, amount)| {
                                    // keys are "start/end" periods; the end date labels the week
                                    let label = week.split('/').nth(1).unwrap_or(week.as_str());
                                    html! {
                                        <div key={week.clone()} class="flex items-center justify-between text-sm">
                                            <span class="text-slate-500">{ format!("Week ending {}", label) }</span>
                                            <span class="font-medium text-slate-700">{ format!("₹{}", format_amount(*amount)) }</span>
                                        </div>
                                    }
                                }) }
                            </div>
                        </div>
                    }
                }
            }

            {
                if summary.daily_category_breakdown.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="bg-white rounded-2xl border border-slate-200 shadow-sm p-6">
                            <h3 class="font-bold text-slate-800 text-lg mb-4">{"Daily Category Breakdown"}</h3>
                            <div class="space-y-3">
                                { for summary.daily_category_breakdown.iter().map(|(day, per_category)| html! {
                                    <div key={day.clone()} class="flex flex-wrap items-center gap-2 text-sm">
                                        <span class="w-28 text-slate-500 whitespace-nowrap">{ day.clone() }</span>
                                        { for per_category.iter().map(|(category, amount)| html! {
                                            <span key={category.clone()} class="px-2 py-1 rounded-full bg-slate-100 text-slate-600 text-xs">
                                                { format!("{} ₹{}", category, format_amount(*amount)) }
                                            </span>
                                        }) }
                                    </div>
                                }) }
                            </div>
                        </div>
                    }
                }
            }
        </div>
    }
}
