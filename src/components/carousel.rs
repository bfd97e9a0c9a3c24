use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{icon_close, icon_sparkles};
use crate::models::AiNotification;
use crate::store::{self, NotificationsHandle};

/// Card accent by severity and confidence. Open vocabulary on both axes;
/// anything unrecognized styles like INFO/MEDIUM.
fn card_accent(severity: &str, confidence: &str) -> &'static str {
    match (severity, confidence) {
        ("CRITICAL" | "ALERT", "HIGH") => "border-red-500 bg-red-50",
        ("CRITICAL" | "ALERT", _) => "border-red-300 bg-red-50",
        ("WARNING", "HIGH") => "border-amber-500 bg-amber-50",
        ("WARNING", _) => "border-amber-300 bg-amber-50",
        ("INFO", "HIGH") => "border-sky-500 bg-sky-50",
        _ => "border-sky-300 bg-sky-50",
    }
}

fn severity_chip(severity: &str) -> &'static str {
    match severity {
        "CRITICAL" | "ALERT" => "bg-red-100 text-red-700",
        "WARNING" => "bg-amber-100 text-amber-700",
        _ => "bg-sky-100 text-sky-700",
    }
}

fn confidence_chip(confidence: &str) -> &'static str {
    match confidence {
        "HIGH" => "bg-green-100 text-green-700",
        "LOW" => "bg-slate-100 text-slate-500",
        _ => "bg-blue-100 text-blue-700",
    }
}

/// Horizontal strip of the latest generated notifications, newest first with
/// countdown numbering. Clicking a card opens the full message in a modal.
#[function_component(AiNotificationsCarousel)]
pub fn ai_notifications_carousel() -> Html {
    let notifications = use_context::<NotificationsHandle>();
    let Some(notifications) = notifications else {
        return html! {};
    };
    let selected = use_state(|| None::<AiNotification>);

    {
        let notifications = notifications.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    store::load_ai_notifications(&notifications).await;
                });
                || ()
            },
            (),
        );
    }

    if notifications.is_loading && notifications.notifications.is_empty() {
        return html! {
            <div class="flex items-center gap-2 text-sm text-slate-400 py-2">
                <div class="w-4 h-4 border-2 border-indigo-400 border-t-transparent rounded-full animate-spin"></div>
                {"Loading AI insights..."}
            </div>
        };
    }

    if notifications.notifications.is_empty() {
        return html! {};
    }

    let close_modal = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    let total = notifications.notifications.len();

    html! {
        <div class="space-y-3">
            <div class="flex items-center gap-2">
                <span class="text-indigo-500">{ icon_sparkles() }</span>
                <h3 class="font-bold text-slate-800 text-lg">{"AI Insights"}</h3>
                <span class="text-xs text-slate-400">{ format!("{} notifications", total) }</span>
            </div>
            <div class="flex gap-4 overflow-x-auto pb-2">
                { for notifications.notifications.iter().rev().enumerate().map(|(i, note)| {
                    let display_number = total - i;
                    let accent = card_accent(&note.severity, &note.confidence);
                    let open = {
                        let selected = selected.clone();
                        let note = note.clone();
                        Callback::from(move |_| selected.set(Some(note.clone())))
                    };
                    html! {
                        <div
                            key={display_number}
                            class={format!("min-w-[280px] max-w-[280px] border-l-4 rounded-xl p-4 shadow-sm cursor-pointer hover:shadow-md transition-shadow {}", accent)}
                            onclick={open}
                        >
                            <div class="flex items-center justify-between mb-2">
                                <span class="text-[10px] font-bold text-slate-400">{ format!("#{}", display_number) }</span>
                                <span class={format!("px-2 py-0.5 rounded-full text-[10px] font-bold {}", confidence_chip(&note.confidence))}>
                                    { note.confidence.clone() }
                                </span>
                            </div>
                            <h4 class="font-bold text-slate-800 text-sm mb-1">{ note.title.clone() }</h4>
                            <p class="text-xs text-slate-600 line-clamp-3">{ note.message.clone() }</p>
                            <div class="flex items-center gap-2 mt-3">
                                <span class={format!("px-2 py-0.5 rounded-full text-[10px] font-bold {}", severity_chip(&note.severity))}>
                                    { note.severity.clone() }
                                </span>
                                <span class="text-[10px] text-slate-400">{ note.mode.clone() }</span>
                            </div>
                        </div>
                    }
                }) }
            </div>

            {
                if let Some(note) = &*selected {
                    html! {
                        <div class="fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4" onclick={close_modal.clone()}>
                            <div class="bg-white rounded-2xl max-w-lg w-full p-6 shadow-xl" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                                <div class="flex items-start justify-between mb-4">
                                    <h3 class="font-bold text-slate-800 text-lg pr-4">{ note.title.clone() }</h3>
                                    <button class="text-slate-400 hover:text-slate-600" onclick={close_modal.clone()}>
                                        { icon_close() }
                                    </button>
                                </div>
                                <p class="text-sm text-slate-600 whitespace-pre-wrap">{ note.message.clone() }</p>
                                <div class="grid grid-cols-3 gap-3 mt-6 text-center">
                                    <div class="bg-slate-50 rounded-xl p-3">
                                        <p class="text-[10px] text-slate-400 font-bold uppercase tracking-widest">{"Severity"}</p>
                                        <p class="text-sm font-medium text-slate-700 mt-1">{ note.severity.clone() }</p>
                                    </div>
                                    <div class="bg-slate-50 rounded-xl p-3">
                                        <p class="text-[10px] text-slate-400 font-bold uppercase tracking-widest">{"Confidence"}</p>
                                        <p class="text-sm font-medium text-slate-700 mt-1">{ note.confidence.clone() }</p>
                                    </div>
                                    <div class="bg-slate-50 rounded-xl p-3">
                                        <p class="text-[10px] text-slate-400 font-bold uppercase tracking-widest">{"Source"}</p>
                                        <p class="text-sm font-medium text-slate-700 mt-1">{ note.mode.clone() }</p>
                                    </div>
                                </div>
                                <button
                                    class="mt-6 w-full bg-indigo-600 text-white rounded-xl py-2 text-sm font-medium hover:bg-indigo-700"
                                    onclick={close_modal}
                                >
                                    {"Close"}
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_vocabulary_falls_back_to_the_info_medium_style() {
        assert_eq!(card_accent("INFO", "MEDIUM"), card_accent("NOVEL", "WHO_KNOWS"));
        assert_eq!(severity_chip("SOMETHING_NEW"), severity_chip("INFO"));
        assert_eq!(confidence_chip("MEDIUM"), confidence_chip("UNSPECIFIED"));
    }

    #[test]
    fn known_severities_get_distinct_accents() {
        let info = card_accent("INFO", "HIGH");
        let warning = card_accent("WARNING", "HIGH");
        let alert = card_accent("ALERT", "HIGH");
        let critical = card_accent("CRITICAL", "HIGH");
        assert_ne!(info, warning);
        assert_ne!(warning, alert);
        assert_eq!(alert, critical);
    }
}
