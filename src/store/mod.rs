//! Reducer-backed state containers shared through context, plus the loading
//! helpers that tie them to the backend. Every mutation goes through a named
//! action; components never poke at the state directly.

mod insights;
mod notifications;
mod payment;
mod transactions;

pub use insights::{InsightsAction, InsightsState};
pub use notifications::{NotificationsAction, NotificationsState};
pub use payment::{PaymentAction, PaymentFlow, PaymentPhase};
pub use transactions::{FilterType, TransactionsAction, TransactionsState};

use wasm_bindgen_futures::spawn_local;
use yew::UseReducerHandle;

use crate::api;

pub type TransactionsHandle = UseReducerHandle<TransactionsState>;
pub type InsightsHandle = UseReducerHandle<InsightsState>;
pub type NotificationsHandle = UseReducerHandle<NotificationsState>;

/// Fetches the insights payload. The envelope embeds the canonical
/// transaction list, so on success that list is pushed into the transactions
/// store before the envelope lands in the insights store. Returns whether
/// the fetch succeeded.
///
/// Overlapping calls are not fenced: the last response to resolve wins.
pub async fn load_insights(insights: &InsightsHandle, transactions: &TransactionsHandle) -> bool {
    insights.dispatch(InsightsAction::FetchStarted);
    match api::fetch_insights().await {
        Ok(envelope) => {
            log::info!("insights loaded with {} transactions", envelope.transactions.len());
            if envelope.transactions.is_empty() {
                log::warn!("insights payload carried no transactions");
            } else {
                transactions.dispatch(TransactionsAction::SetTransactions(
                    envelope.transactions.clone(),
                ));
            }
            insights.dispatch(InsightsAction::FetchSucceeded(envelope));
            true
        }
        Err(err) => {
            log::error!("insights fetch failed: {err}");
            insights.dispatch(InsightsAction::FetchFailed(err.to_string()));
            false
        }
    }
}

pub async fn load_ai_notifications(notifications: &NotificationsHandle) {
    notifications.dispatch(NotificationsAction::FetchStarted);
    match api::fetch_ai_notifications().await {
        Ok(list) => {
            log::info!("loaded {} AI notifications", list.len());
            notifications.dispatch(NotificationsAction::FetchSucceeded(list));
        }
        Err(err) => {
            log::error!("AI notification fetch failed: {err}");
            notifications.dispatch(NotificationsAction::FetchFailed(err.to_string()));
        }
    }
}

/// Fire-and-forget refresh of both AI-fed stores, used once a payment has
/// settled. Failures land in the stores' own error fields and nowhere else.
pub fn spawn_refresh(
    insights: InsightsHandle,
    transactions: TransactionsHandle,
    notifications: NotificationsHandle,
) {
    spawn_local(async move {
        load_insights(&insights, &transactions).await;
        load_ai_notifications(&notifications).await;
    });
}
