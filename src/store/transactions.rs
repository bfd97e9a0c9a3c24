use std::rc::Rc;
use yew::prelude::*;

use crate::models::{Transaction, TxnType};

/// Which transaction directions the table shows.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FilterType {
    #[default]
    All,
    Credit,
    Debit,
}

/// Owns the canonical transaction list plus the view filters over it and the
/// CSV upload lifecycle. The list only ever changes by wholesale replacement;
/// filter state deliberately survives a replacement.
#[derive(Clone, PartialEq, Default)]
pub struct TransactionsState {
    pub data: Vec<Transaction>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub search_term: String,
    pub filter_type: FilterType,
    pub selected_categories: Vec<String>,
}

pub enum TransactionsAction {
    SetTransactions(Vec<Transaction>),
    SetSearchTerm(String),
    SetFilterType(FilterType),
    /// Adds the category to the selection, or removes it if already present.
    /// The rest of the selection keeps its order.
    ToggleCategory(String),
    ClearCategoryFilters,
    UploadStarted,
    UploadFinished,
    UploadFailed(String),
}

impl Reducible for TransactionsState {
    type Action = TransactionsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TransactionsAction::SetTransactions(data) => next.data = data,
            TransactionsAction::SetSearchTerm(term) => next.search_term = term,
            TransactionsAction::SetFilterType(filter) => next.filter_type = filter,
            TransactionsAction::ToggleCategory(category) => {
                if let Some(pos) = next
                    .selected_categories
                    .iter()
                    .position(|c| *c == category)
                {
                    next.selected_categories.remove(pos);
                } else {
                    next.selected_categories.push(category);
                }
            }
            TransactionsAction::ClearCategoryFilters => next.selected_categories.clear(),
            TransactionsAction::UploadStarted => {
                next.is_loading = true;
                next.error = None;
            }
            TransactionsAction::UploadFinished => next.is_loading = false,
            TransactionsAction::UploadFailed(message) => {
                next.is_loading = false;
                next.error = Some(message);
            }
        }
        Rc::new(next)
    }
}

impl TransactionsState {
    fn matches(&self, txn: &Transaction) -> bool {
        let needle = self.search_term.to_lowercase();
        let text_matches = needle.is_empty()
            || field_contains(&txn.description, &needle)
            || field_contains(&txn.merchant, &needle);

        let type_matches = match self.filter_type {
            FilterType::All => true,
            FilterType::Credit => txn.txn_type == TxnType::Credit,
            FilterType::Debit => txn.txn_type == TxnType::Debit,
        };

        let category_matches = self.selected_categories.is_empty()
            || txn
                .category
                .as_ref()
                .map(|c| self.selected_categories.contains(c))
                .unwrap_or(false);

        text_matches && type_matches && category_matches
    }

    /// The rows the table shows: all three filters applied to the canonical
    /// list, backend order kept.
    pub fn filtered(&self) -> Vec<&Transaction> {
        self.data.iter().filter(|txn| self.matches(txn)).collect()
    }

    /// Every distinct non-empty category in the canonical list, sorted.
    pub fn all_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .data
            .iter()
            .filter_map(|txn| txn.category.clone())
            .filter(|c| !c.is_empty())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// Sum of CREDIT magnitudes over the whole list. Filters never touch the
    /// totals.
    pub fn total_income(&self) -> f64 {
        self.data
            .iter()
            .filter(|txn| txn.txn_type == TxnType::Credit)
            .map(|txn| txn.amount)
            .sum()
    }

    pub fn total_expense(&self) -> f64 {
        self.data
            .iter()
            .filter(|txn| txn.txn_type == TxnType::Debit)
            .map(|txn| txn.amount)
            .sum()
    }
}

fn field_contains(field: &Option<String>, needle: &str) -> bool {
    field
        .as_ref()
        .map(|value| value.to_lowercase().contains(needle))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(merchant: &str, category: &str, amount: f64, txn_type: TxnType) -> Transaction {
        Transaction {
            merchant: Some(merchant.to_string()),
            category: if category.is_empty() {
                None
            } else {
                Some(category.to_string())
            },
            amount,
            txn_type,
            txn_date: Some(1705276800000),
            description: Some(format!("{} purchase", merchant)),
            balance: None,
        }
    }

    fn sample_state() -> TransactionsState {
        TransactionsState {
            data: vec![
                txn("Zomato", "Food", 320.0, TxnType::Debit),
                txn("Acme Corp", "Salary", 50000.0, TxnType::Credit),
                txn("Big Bazaar", "Groceries", 1450.0, TxnType::Debit),
                txn("Uber", "Transport", 240.0, TxnType::Debit),
                txn("Refund Desk", "", 99.0, TxnType::Credit),
            ],
            ..Default::default()
        }
    }

    fn reduce(state: TransactionsState, action: TransactionsAction) -> TransactionsState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn filtered_is_a_subset_satisfying_every_predicate() {
        let mut state = sample_state();
        state.search_term = "a".to_string();
        state.filter_type = FilterType::Debit;
        state.selected_categories = vec!["Food".to_string(), "Groceries".to_string()];

        let rows = state.filtered();
        assert!(!rows.is_empty());
        for row in rows {
            assert!(state.data.contains(row));
            assert_eq!(row.txn_type, TxnType::Debit);
            assert!(state
                .selected_categories
                .contains(row.category.as_ref().unwrap()));
        }
    }

    #[test]
    fn empty_search_matches_rows_with_no_text_fields() {
        let mut state = sample_state();
        state.data.push(Transaction {
            merchant: None,
            category: None,
            amount: 10.0,
            txn_type: TxnType::Debit,
            txn_date: None,
            description: None,
            balance: None,
        });
        assert_eq!(state.filtered().len(), state.data.len());

        // but a non-empty search can never match it
        state.search_term = "anything".to_string();
        assert!(state
            .filtered()
            .iter()
            .all(|row| row.merchant.is_some() || row.description.is_some()));
    }

    #[test]
    fn search_is_case_insensitive_over_description_and_merchant() {
        let mut state = sample_state();
        state.search_term = "ZOMATO".to_string();
        assert_eq!(state.filtered().len(), 1);

        state.search_term = "purchase".to_string();
        assert_eq!(state.filtered().len(), state.data.len());
    }

    #[test]
    fn totals_ignore_every_filter() {
        let mut state = sample_state();
        let income = state.total_income();
        let expense = state.total_expense();
        assert_eq!(income, 50099.0);
        assert_eq!(expense, 2010.0);

        state.search_term = "zomato".to_string();
        state.filter_type = FilterType::Credit;
        state.selected_categories = vec!["Transport".to_string()];
        assert_eq!(state.total_income(), income);
        assert_eq!(state.total_expense(), expense);
    }

    #[test]
    fn all_categories_is_sorted_and_distinct() {
        let mut state = sample_state();
        state
            .data
            .push(txn("Swiggy", "Food", 250.0, TxnType::Debit));
        assert_eq!(
            state.all_categories(),
            vec!["Food", "Groceries", "Salary", "Transport"]
        );
    }

    #[test]
    fn toggle_category_is_an_involution() {
        let state = sample_state();
        let toggled = reduce(
            state.clone(),
            TransactionsAction::ToggleCategory("Food".to_string()),
        );
        assert_eq!(toggled.selected_categories, vec!["Food"]);

        let back = reduce(
            toggled,
            TransactionsAction::ToggleCategory("Food".to_string()),
        );
        assert_eq!(back.selected_categories, state.selected_categories);
    }

    #[test]
    fn toggle_keeps_the_order_of_the_rest() {
        let mut state = sample_state();
        state.selected_categories = vec!["Food".to_string(), "Transport".to_string(), "Salary".to_string()];
        let next = reduce(
            state,
            TransactionsAction::ToggleCategory("Transport".to_string()),
        );
        assert_eq!(next.selected_categories, vec!["Food", "Salary"]);
    }

    #[test]
    fn replacement_keeps_filter_state() {
        let mut state = sample_state();
        state.search_term = "food".to_string();
        state.selected_categories = vec!["Food".to_string()];
        let next = reduce(
            state,
            TransactionsAction::SetTransactions(vec![txn("New", "Other", 1.0, TxnType::Debit)]),
        );
        assert_eq!(next.data.len(), 1);
        assert_eq!(next.search_term, "food");
        assert_eq!(next.selected_categories, vec!["Food"]);
    }

    #[test]
    fn upload_lifecycle_flags() {
        let started = reduce(TransactionsState::default(), TransactionsAction::UploadStarted);
        assert!(started.is_loading);
        assert_eq!(started.error, None);

        let failed = reduce(
            started.clone(),
            TransactionsAction::UploadFailed("Failed to upload file".to_string()),
        );
        assert!(!failed.is_loading);
        assert_eq!(failed.error.as_deref(), Some("Failed to upload file"));

        let finished = reduce(started, TransactionsAction::UploadFinished);
        assert!(!finished.is_loading);
    }
}
