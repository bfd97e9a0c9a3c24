use std::rc::Rc;
use yew::prelude::*;

use crate::models::InsightsEnvelope;

/// Insights fetch lifecycle. A failed refresh keeps the previously loaded
/// envelope, so the dashboard keeps rendering stale numbers under the error
/// banner instead of going blank.
#[derive(Clone, PartialEq, Default)]
pub struct InsightsState {
    pub data: Option<InsightsEnvelope>,
    pub is_loading: bool,
    pub error: Option<String>,
}

pub enum InsightsAction {
    FetchStarted,
    FetchSucceeded(InsightsEnvelope),
    FetchFailed(String),
}

impl Reducible for InsightsState {
    type Action = InsightsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            InsightsAction::FetchStarted => {
                next.is_loading = true;
                next.error = None;
            }
            InsightsAction::FetchSucceeded(envelope) => {
                next.data = Some(envelope);
                next.is_loading = false;
                next.error = None;
            }
            InsightsAction::FetchFailed(message) => {
                next.is_loading = false;
                next.error = Some(message);
            }
        }
        Rc::new(next)
    }
}

impl InsightsState {
    /// True once a payload with at least one transaction has arrived; gates
    /// the whole data section of the page.
    pub fn has_data(&self) -> bool {
        self.data
            .as_ref()
            .map(|envelope| !envelope.transactions.is_empty())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, TxnType};

    fn envelope_with_one_txn() -> InsightsEnvelope {
        InsightsEnvelope {
            transactions: vec![Transaction {
                merchant: Some("Zomato".to_string()),
                category: Some("Food".to_string()),
                amount: 320.0,
                txn_type: TxnType::Debit,
                txn_date: None,
                description: None,
                balance: None,
            }],
            ..Default::default()
        }
    }

    fn reduce(state: InsightsState, action: InsightsAction) -> InsightsState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn fetch_failure_keeps_stale_data() {
        let loaded = reduce(
            InsightsState::default(),
            InsightsAction::FetchSucceeded(envelope_with_one_txn()),
        );
        assert!(loaded.has_data());

        let failed = reduce(
            loaded.clone(),
            InsightsAction::FetchFailed("Failed to fetch insights - Status: 500".to_string()),
        );
        assert_eq!(failed.data, loaded.data);
        assert_eq!(
            failed.error.as_deref(),
            Some("Failed to fetch insights - Status: 500")
        );
        assert!(!failed.is_loading);
    }

    #[test]
    fn starting_a_fetch_clears_the_error_but_not_the_data() {
        let mut state = reduce(
            InsightsState::default(),
            InsightsAction::FetchSucceeded(envelope_with_one_txn()),
        );
        state.error = Some("old error".to_string());

        let started = reduce(state, InsightsAction::FetchStarted);
        assert!(started.is_loading);
        assert_eq!(started.error, None);
        assert!(started.has_data());
    }

    #[test]
    fn empty_envelope_does_not_count_as_data() {
        let state = reduce(
            InsightsState::default(),
            InsightsAction::FetchSucceeded(InsightsEnvelope::default()),
        );
        assert!(!state.has_data());
    }

    // a fresh session renders the empty-state card: nothing may be loading
    // or failed before the first upload kicks off a fetch
    #[test]
    fn a_fresh_store_is_clean_until_something_loads() {
        let state = InsightsState::default();
        assert!(!state.has_data());
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
    }
}
