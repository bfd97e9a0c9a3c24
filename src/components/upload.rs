use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{icon_check, icon_file_text, icon_upload};
use crate::api;
use crate::store::{self, InsightsHandle, TransactionsAction, TransactionsHandle};

/// Bank-statement upload: click-to-browse or drag & drop a CSV, then a short
/// settle pause before pulling fresh insights for the new rows.
#[function_component(UploadCsv)]
pub fn upload_csv() -> Html {
    let transactions = use_context::<TransactionsHandle>();
    let Some(transactions) = transactions else {
        return html! {};
    };
    let insights = use_context::<InsightsHandle>();
    let Some(insights) = insights else {
        return html! {};
    };

    let is_dragging = use_state(|| false);
    let upload_success = use_state(|| false);
    let file_name = use_state(|| None::<String>);

    let start_upload = {
        let transactions = transactions.clone();
        let insights = insights.clone();
        let upload_success = upload_success.clone();
        let file_name = file_name.clone();
        Callback::from(move |file: web_sys::File| {
            file_name.set(Some(file.name()));
            upload_success.set(false);
            transactions.dispatch(TransactionsAction::UploadStarted);

            let transactions = transactions.clone();
            let insights = insights.clone();
            let upload_success = upload_success.clone();
            spawn_local(async move {
                match api::upload_csv(file).await {
                    Ok(body) => {
                        log::info!("upload accepted: {}", body.trim());
                        transactions.dispatch(TransactionsAction::UploadFinished);
                        upload_success.set(true);
                        // give ingestion a moment before asking for insights
                        TimeoutFuture::new(1_000).await;
                        if !store::load_insights(&insights, &transactions).await {
                            upload_success.set(false);
                        }
                    }
                    Err(err) => {
                        log::error!("upload failed: {err}");
                        transactions.dispatch(TransactionsAction::UploadFailed(err.to_string()));
                    }
                }
            });
        })
    };

    let on_file_change = {
        let start_upload = start_upload.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                    start_upload.emit(file);
                }
            }
        })
    };

    let on_drag_over = {
        let is_dragging = is_dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            is_dragging.set(true);
        })
    };

    let on_drag_leave = {
        let is_dragging = is_dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            is_dragging.set(false);
        })
    };

    let on_drop = {
        let is_dragging = is_dragging.clone();
        let start_upload = start_upload.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            is_dragging.set(false);
            let file = e
                .data_transfer()
                .and_then(|data| data.files())
                .and_then(|files| files.get(0));
            // only real CSVs come through on the drop path
            if let Some(file) = file {
                if file.type_() == "text/csv" {
                    start_upload.emit(file);
                }
            }
        })
    };

    let uploading = transactions.is_loading;
    let zone_class = if *is_dragging {
        "border-2 border-dashed border-indigo-400 bg-indigo-50 rounded-xl p-8 text-center transition-colors"
    } else {
        "border-2 border-dashed border-slate-300 bg-white rounded-xl p-8 text-center transition-colors"
    };

    html! {
        <div class="bg-white rounded-2xl border border-slate-200 p-6 shadow-sm">
            <div class="flex items-center gap-2 mb-4">
                { icon_file_text() }
                <h3 class="font-bold text-slate-800 text-lg">{"Upload Bank Statement"}</h3>
            </div>
            <div class={zone_class} ondragover={on_drag_over} ondragleave={on_drag_leave} ondrop={on_drop}>
                <label class="cursor-pointer block">
                    <input type="file" accept=".csv" class="hidden" onchange={on_file_change} disabled={uploading} />
                    <div class="flex flex-col items-center gap-2 text-slate-500">
                        {
                            if uploading {
                                html! {
                                    <>
                                        <div class="w-8 h-8 border-2 border-indigo-500 border-t-transparent rounded-full animate-spin"></div>
                                        <p class="text-sm">
                                            { match &*file_name {
                                                Some(name) => format!("Uploading {}...", name),
                                                None => "Uploading...".to_string(),
                                            } }
                                        </p>
                                    </>
                                }
                            } else if *upload_success {
                                html! {
                                    <>
                                        <span class="text-green-600">{ icon_check() }</span>
                                        <p class="text-sm text-green-600 font-medium">{"Upload successful! Loading insights..."}</p>
                                    </>
                                }
                            } else if *is_dragging {
                                html! {
                                    <>
                                        { icon_upload() }
                                        <p class="text-sm font-medium text-indigo-600">{"Drop your CSV file here"}</p>
                                    </>
                                }
                            } else {
                                html! {
                                    <>
                                        { icon_upload() }
                                        <p class="text-sm">{"Drag and drop your CSV file here, or click to browse"}</p>
                                        <p class="text-xs text-slate-400">{"Only .csv statements are accepted"}</p>
                                    </>
                                }
                            }
                        }
                    </div>
                </label>
            </div>
        </div>
    }
}
