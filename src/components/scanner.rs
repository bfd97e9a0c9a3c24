use chrono::Local;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{icon_arrow_left, icon_camera, icon_check, icon_close, icon_scan_frame, icon_upload};
use crate::api;
use crate::format::format_amount;
use crate::models::AiNotification;
use crate::store::{
    self, InsightsHandle, NotificationsHandle, PaymentAction, PaymentFlow, PaymentPhase,
    TransactionsHandle,
};
use crate::upi;

#[derive(Properties, PartialEq)]
pub struct QrScannerProps {
    pub on_close: Callback<()>,
    pub on_view_insights: Callback<()>,
}

/// Scan & Pay modal. Owns one [`PaymentFlow`] per open; closing the modal
/// abandons whatever was in flight without aborting it.
#[function_component(QrScanner)]
pub fn qr_scanner(props: &QrScannerProps) -> Html {
    let transactions = use_context::<TransactionsHandle>();
    let Some(transactions) = transactions else {
        return html! {};
    };
    let insights = use_context::<InsightsHandle>();
    let Some(insights) = insights else {
        return html! {};
    };
    let notifications = use_context::<NotificationsHandle>();
    let Some(notifications) = notifications else {
        return html! {};
    };

    let flow = use_reducer(PaymentFlow::default);
    let toast = use_state(|| None::<AiNotification>);

    let on_simulated_scan = {
        let flow = flow.clone();
        Callback::from(move |_| {
            flow.dispatch(PaymentAction::ScanStarted);
            let flow = flow.clone();
            spawn_local(async move {
                // stand-in for a real camera read
                TimeoutFuture::new(2_000).await;
                match upi::parse_upi_payload(upi::SIMULATED_SCAN_PAYLOAD) {
                    Ok(draft) => flow.dispatch(PaymentAction::DraftReady(draft)),
                    Err(err) => flow.dispatch(PaymentAction::ScanFailed(err.to_string())),
                }
            });
        })
    };

    let on_image_pick = {
        let flow = flow.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if !file.type_().starts_with("image/") {
                flow.dispatch(PaymentAction::ScanFailed(
                    "Please upload a valid image file".to_string(),
                ));
                return;
            }

            flow.dispatch(PaymentAction::ScanStarted);
            let flow = flow.clone();
            spawn_local(async move {
                let file = gloo_file::File::from(file);
                match gloo_file::futures::read_as_bytes(&file).await {
                    Ok(bytes) => match upi::decode_qr_image(&bytes) {
                        Ok(draft) => flow.dispatch(PaymentAction::DraftReady(draft)),
                        Err(err) => {
                            log::warn!("QR decode failed: {err}");
                            flow.dispatch(PaymentAction::ScanFailed(err.to_string()));
                        }
                    },
                    Err(err) => {
                        log::error!("could not read the picked file: {err}");
                        flow.dispatch(PaymentAction::ScanFailed("Failed to read file".to_string()));
                    }
                }
            });
        })
    };

    let on_amount_input = {
        let flow = flow.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                flow.dispatch(PaymentAction::AmountEdited(input.value()));
            }
        })
    };

    let on_notes_input = {
        let flow = flow.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                flow.dispatch(PaymentAction::NotesEdited(area.value()));
            }
        })
    };

    let on_pay = {
        let flow = flow.clone();
        let insights = insights.clone();
        let transactions = transactions.clone();
        let notifications = notifications.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            let request = match flow.submission() {
                Ok(request) => request,
                Err(message) => {
                    flow.dispatch(PaymentAction::SubmitBlocked(message));
                    return;
                }
            };
            flow.dispatch(PaymentAction::SubmitStarted);

            let flow = flow.clone();
            let insights = insights.clone();
            let transactions = transactions.clone();
            let notifications = notifications.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match api::submit_qr_payment(&request).await {
                    Ok(receipt) => {
                        log::info!(
                            "payment {} settled with status {}",
                            receipt.transaction_id,
                            receipt.status
                        );
                        let notification = receipt.ai_notification.clone();
                        flow.dispatch(PaymentAction::SubmitSucceeded(receipt));
                        TimeoutFuture::new(1_000).await;
                        if notification.is_some() {
                            toast.set(notification);
                        }
                        TimeoutFuture::new(1_000).await;
                        store::spawn_refresh(insights, transactions, notifications);
                    }
                    Err(err) => {
                        log::error!("payment failed: {err}");
                        flow.dispatch(PaymentAction::SubmitFailed(err.to_string()));
                    }
                }
            });
        })
    };

    let on_cancel = {
        let flow = flow.clone();
        Callback::from(move |_| flow.dispatch(PaymentAction::Cancelled))
    };

    let on_modal_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_view_insights = {
        let on_view_insights = props.on_view_insights.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_view_insights.emit(());
            on_close.emit(());
        })
    };

    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            toast.set(None);
        })
    };

    let on_toast_click = {
        let toast = toast.clone();
        let on_view_insights = props.on_view_insights.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            toast.set(None);
            on_view_insights.emit(());
            on_close.emit(());
        })
    };

    let error_banner = match &flow.error {
        Some(message) => html! {
            <div class="bg-red-50 border border-red-200 text-red-700 text-sm rounded-xl p-3 mb-4">
                { message.clone() }
            </div>
        },
        None => html! {},
    };

    let body = match flow.phase {
        PaymentPhase::Idle | PaymentPhase::Scanning => {
            let scanning = flow.phase == PaymentPhase::Scanning;
            html! {
                <div class="p-6">
                    { error_banner }
                    <div class="border-2 border-dashed border-slate-300 rounded-2xl h-56 flex flex-col items-center justify-center gap-3 text-slate-400">
                        {
                            if scanning {
                                html! {
                                    <>
                                        <div class="w-10 h-10 border-2 border-indigo-500 border-t-transparent rounded-full animate-spin"></div>
                                        <p class="text-sm">{"Reading QR Code..."}</p>
                                    </>
                                }
                            } else {
                                html! {
                                    <>
                                        { icon_scan_frame() }
                                        <p class="text-sm">{"Point at a UPI QR code or upload a picture of one"}</p>
                                    </>
                                }
                            }
                        }
                    </div>
                    {
                        if scanning {
                            html! {}
                        } else {
                            html! {
                                <div class="grid grid-cols-2 gap-3 mt-4">
                                    <button
                                        class="flex items-center justify-center gap-2 bg-indigo-600 text-white rounded-xl py-2.5 text-sm font-medium hover:bg-indigo-700"
                                        onclick={on_simulated_scan}
                                    >
                                        { icon_camera() }
                                        {"Start Camera Scan"}
                                    </button>
                                    <label class="flex items-center justify-center gap-2 bg-white border border-slate-200 text-slate-700 rounded-xl py-2.5 text-sm font-medium hover:bg-slate-50 cursor-pointer">
                                        <input type="file" accept="image/*" class="hidden" onchange={on_image_pick} />
                                        { icon_upload() }
                                        {"Upload QR Image"}
                                    </label>
                                </div>
                            }
                        }
                    }
                </div>
            }
        }
        PaymentPhase::Reviewing | PaymentPhase::Submitting => {
            let submitting = flow.phase == PaymentPhase::Submitting;
            let merchant = flow
                .draft
                .as_ref()
                .map(|draft| draft.merchant.clone())
                .unwrap_or_default();
            let upi_id = flow
                .draft
                .as_ref()
                .map(|draft| draft.upi_id.clone())
                .unwrap_or_default();
            html! {
                <div class="p-6">
                    { error_banner }
                    <div class="bg-slate-50 rounded-2xl p-4 mb-4">
                        <p class="font-bold text-slate-800">{ merchant }</p>
                        <p class="text-xs text-slate-400">{ upi_id }</p>
                        <p class="text-xs text-slate-400 mt-1">{ Local::now().format("%d %b %Y, %H:%M").to_string() }</p>
                    </div>
                    <label class="block text-xs font-bold text-slate-400 uppercase tracking-widest mb-1">{"Amount (₹)"}</label>
                    <input
                        type="number"
                        min="1"
                        step="0.01"
                        class="w-full border border-slate-200 rounded-xl px-4 py-2 text-lg font-bold text-slate-800 mb-4 focus:outline-none focus:ring-2 focus:ring-indigo-200"
                        placeholder="Enter amount"
                        value={flow.amount_input.clone()}
                        oninput={on_amount_input}
                        disabled={submitting}
                    />
                    <label class="block text-xs font-bold text-slate-400 uppercase tracking-widest mb-1">{"Note"}</label>
                    <textarea
                        rows="2"
                        class="w-full border border-slate-200 rounded-xl px-4 py-2 text-sm text-slate-700 mb-4 focus:outline-none focus:ring-2 focus:ring-indigo-200"
                        placeholder="What is this payment for?"
                        value={flow.notes_input.clone()}
                        oninput={on_notes_input}
                        disabled={submitting}
                    ></textarea>
                    <div class="grid grid-cols-2 gap-3">
                        <button
                            class="bg-white border border-slate-200 text-slate-700 rounded-xl py-2.5 text-sm font-medium hover:bg-slate-50"
                            onclick={on_cancel}
                            disabled={submitting}
                        >
                            {"Cancel"}
                        </button>
                        <button
                            class="bg-indigo-600 text-white rounded-xl py-2.5 text-sm font-medium hover:bg-indigo-700 disabled:opacity-50"
                            onclick={on_pay}
                            disabled={submitting || !flow.can_submit()}
                        >
                            { if submitting { "Processing..." } else { "Pay Now" } }
                        </button>
                    </div>
                </div>
            }
        }
        PaymentPhase::Succeeded => {
            let receipt = flow.receipt.clone();
            let paid_amount = flow
                .amount_input
                .trim()
                .parse::<f64>()
                .unwrap_or(0.0);
            let merchant = flow
                .draft
                .as_ref()
                .map(|draft| draft.merchant.clone())
                .unwrap_or_default();
            html! {
                <div class="p-6 text-center">
                    <div class="w-14 h-14 mx-auto rounded-full bg-green-100 text-green-600 flex items-center justify-center mb-3">
                        { icon_check() }
                    </div>
                    <h4 class="font-bold text-slate-800 text-lg">{"Payment Successful"}</h4>
                    <p class="text-2xl font-bold text-slate-800 mt-2">
                        { format!("₹{}", format_amount(paid_amount)) }
                    </p>
                    <p class="text-sm text-slate-500">{ format!("paid to {}", merchant) }</p>
                    <p class="text-xs text-slate-400 mt-1">{ flow.notes_input.trim().to_string() }</p>
                    {
                        match &receipt {
                            Some(receipt) => {
                                let short_id: String = receipt.transaction_id.chars().take(8).collect();
                                html! {
                                    <div class="bg-slate-50 rounded-2xl p-4 mt-4 text-left text-sm space-y-1">
                                        <div class="flex justify-between">
                                            <span class="text-slate-400">{"Reference"}</span>
                                            <span class="font-medium text-slate-700">{ format!("{}...", short_id) }</span>
                                        </div>
                                        <div class="flex justify-between">
                                            <span class="text-slate-400">{"Status"}</span>
                                            <span class="font-medium text-green-600">{ receipt.status.clone() }</span>
                                        </div>
                                        {
                                            match &receipt.transaction {
                                                Some(txn) => html! {
                                                    <>
                                                        <div class="flex justify-between">
                                                            <span class="text-slate-400">{"Date"}</span>
                                                            <span class="font-medium text-slate-700">{ txn.txn_date.clone() }</span>
                                                        </div>
                                                        {
                                                            match txn.balance {
                                                                Some(balance) => html! {
                                                                    <div class="flex justify-between">
                                                                        <span class="text-slate-400">{"Balance"}</span>
                                                                        <span class="font-medium text-slate-700">{ format!("₹{}", format_amount(balance)) }</span>
                                                                    </div>
                                                                },
                                                                None => html! {},
                                                            }
                                                        }
                                                    </>
                                                },
                                                None => html! {},
                                            }
                                        }
                                    </div>
                                }
                            }
                            None => html! {},
                        }
                    }
                    <button
                        class="mt-5 w-full bg-indigo-600 text-white rounded-xl py-2.5 text-sm font-medium hover:bg-indigo-700"
                        onclick={on_view_insights}
                    >
                        {"View Updated Insights"}
                    </button>
                </div>
            }
        }
    };

    html! {
        <div class="fixed inset-0 bg-black/60 z-50 flex items-center justify-center p-4">
            <div class="bg-white rounded-2xl w-full max-w-md shadow-xl overflow-hidden">
                <div class="flex items-center gap-3 px-5 py-4 border-b border-slate-100">
                    <button class="text-slate-400 hover:text-slate-600" onclick={on_modal_close}>
                        { icon_arrow_left() }
                    </button>
                    <h3 class="font-bold text-slate-800">{"Scan & Pay"}</h3>
                </div>
                { body }
            </div>
            {
                if let Some(note) = &*toast {
                    html! {
                        <div
                            class={format!("fixed top-4 right-4 z-[60] max-w-sm border-l-4 rounded-xl p-4 shadow-lg cursor-pointer bg-white {}", toast_accent(&note.severity))}
                            onclick={on_toast_click}
                        >
                            <div class="flex items-start justify-between gap-3">
                                <div>
                                    <h4 class="font-bold text-slate-800 text-sm">{ note.title.clone() }</h4>
                                    <p class="text-xs text-slate-600 mt-1">{ note.message.clone() }</p>
                                    <div class="flex items-center gap-2 mt-2 text-[10px] text-slate-400">
                                        <span>{ note.confidence.clone() }</span>
                                        <span>{ note.mode.clone() }</span>
                                    </div>
                                </div>
                                <button class="text-slate-400 hover:text-slate-600" onclick={dismiss_toast}>
                                    { icon_close() }
                                </button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn toast_accent(severity: &str) -> &'static str {
    match severity {
        "CRITICAL" | "ALERT" => "border-red-500",
        "WARNING" => "border-amber-500",
        _ => "border-sky-500",
    }
}
