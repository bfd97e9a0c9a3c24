use std::rc::Rc;
use yew::prelude::*;

use crate::models::{PaymentReceipt, QrPaymentRequest};
use crate::upi::PaymentDraft;

/// Where the Scan & Pay flow currently is. Failures ride alongside in
/// [`PaymentFlow::error`]: a failed decode falls back to `Idle`, a rejected
/// submission falls back to `Reviewing` so the user can fix and retry.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PaymentPhase {
    #[default]
    Idle,
    Scanning,
    Reviewing,
    Submitting,
    Succeeded,
}

/// Component-local state machine behind the scanner modal. Nothing here is
/// shared; the modal owns one instance per open.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct PaymentFlow {
    pub phase: PaymentPhase,
    pub draft: Option<PaymentDraft>,
    pub amount_input: String,
    pub notes_input: String,
    pub receipt: Option<PaymentReceipt>,
    pub error: Option<String>,
}

pub enum PaymentAction {
    ScanStarted,
    /// A QR code resolved; moves to review with the editable fields
    /// pre-filled (amount only when the code carried a positive one).
    DraftReady(PaymentDraft),
    ScanFailed(String),
    AmountEdited(String),
    NotesEdited(String),
    SubmitStarted,
    /// A precondition failed before any request went out.
    SubmitBlocked(String),
    SubmitSucceeded(PaymentReceipt),
    SubmitFailed(String),
    /// Discards everything, from any state.
    Cancelled,
}

impl Reducible for PaymentFlow {
    type Action = PaymentAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PaymentAction::ScanStarted => {
                next.phase = PaymentPhase::Scanning;
                next.draft = None;
                next.error = None;
            }
            PaymentAction::DraftReady(draft) => {
                next.phase = PaymentPhase::Reviewing;
                next.amount_input = if draft.amount > 0.0 {
                    draft.amount.to_string()
                } else {
                    String::new()
                };
                next.notes_input = draft.purpose.clone();
                next.draft = Some(draft);
                next.error = None;
            }
            PaymentAction::ScanFailed(message) => {
                next.phase = PaymentPhase::Idle;
                next.error = Some(message);
            }
            PaymentAction::AmountEdited(value) => next.amount_input = value,
            PaymentAction::NotesEdited(value) => next.notes_input = value,
            PaymentAction::SubmitStarted => {
                next.phase = PaymentPhase::Submitting;
                next.error = None;
            }
            PaymentAction::SubmitBlocked(message) | PaymentAction::SubmitFailed(message) => {
                next.phase = PaymentPhase::Reviewing;
                next.error = Some(message);
            }
            PaymentAction::SubmitSucceeded(receipt) => {
                next.phase = PaymentPhase::Succeeded;
                next.receipt = Some(receipt);
                next.error = None;
            }
            PaymentAction::Cancelled => next = PaymentFlow::default(),
        }
        Rc::new(next)
    }
}

impl PaymentFlow {
    /// The pay button stays disabled until both editable fields hold
    /// something.
    pub fn can_submit(&self) -> bool {
        !self.amount_input.is_empty() && !self.notes_input.trim().is_empty()
    }

    /// Validates the edited draft into the request the backend takes. An
    /// `Err` means nothing may be sent; the message is shown inline.
    pub fn submission(&self) -> Result<QrPaymentRequest, String> {
        let amount = self.amount_input.trim().parse::<f64>().unwrap_or(0.0);
        if !amount.is_finite() || amount <= 0.0 {
            return Err("Please enter a valid amount".to_string());
        }

        let notes = self.notes_input.trim();
        if notes.is_empty() {
            return Err("Please add a note for this transaction".to_string());
        }

        let draft = self
            .draft
            .as_ref()
            .ok_or_else(|| "Nothing scanned yet".to_string())?;

        Ok(QrPaymentRequest {
            merchant: draft.merchant.clone(),
            upi_id: draft.upi_id.clone(),
            amount,
            purpose: notes.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(amount: f64) -> PaymentDraft {
        PaymentDraft {
            merchant: "Zomato".to_string(),
            upi_id: "zomato@icici".to_string(),
            amount,
            purpose: "Food Order".to_string(),
        }
    }

    fn reduce(flow: PaymentFlow, action: PaymentAction) -> PaymentFlow {
        (*Rc::new(flow).reduce(action)).clone()
    }

    fn reviewing(amount: f64) -> PaymentFlow {
        let flow = reduce(PaymentFlow::default(), PaymentAction::ScanStarted);
        reduce(flow, PaymentAction::DraftReady(draft(amount)))
    }

    #[test]
    fn happy_path_walks_idle_to_succeeded() {
        let flow = reduce(PaymentFlow::default(), PaymentAction::ScanStarted);
        assert_eq!(flow.phase, PaymentPhase::Scanning);

        let flow = reduce(flow, PaymentAction::DraftReady(draft(320.0)));
        assert_eq!(flow.phase, PaymentPhase::Reviewing);
        assert_eq!(flow.amount_input, "320");
        assert_eq!(flow.notes_input, "Food Order");

        let flow = reduce(flow, PaymentAction::SubmitStarted);
        assert_eq!(flow.phase, PaymentPhase::Submitting);

        let receipt = PaymentReceipt {
            transaction_id: "a1b2c3d4-rest".to_string(),
            status: "SUCCESS".to_string(),
            transaction: None,
            ai_notification: None,
        };
        let flow = reduce(flow, PaymentAction::SubmitSucceeded(receipt));
        assert_eq!(flow.phase, PaymentPhase::Succeeded);
        assert!(flow.receipt.is_some());
        assert_eq!(flow.error, None);
    }

    #[test]
    fn zero_amount_codes_leave_the_amount_field_empty() {
        let flow = reviewing(0.0);
        assert_eq!(flow.amount_input, "");
        assert_eq!(flow.notes_input, "Food Order");
        assert!(!flow.can_submit());
    }

    #[test]
    fn decode_failure_falls_back_to_idle_with_the_message() {
        let flow = reduce(PaymentFlow::default(), PaymentAction::ScanStarted);
        let flow = reduce(
            flow,
            PaymentAction::ScanFailed("No QR code found in image".to_string()),
        );
        assert_eq!(flow.phase, PaymentPhase::Idle);
        assert_eq!(flow.error.as_deref(), Some("No QR code found in image"));
        assert_eq!(flow.draft, None);
    }

    #[test]
    fn submit_failure_returns_to_reviewing_for_retry() {
        let flow = reduce(reviewing(320.0), PaymentAction::SubmitStarted);
        let flow = reduce(
            flow,
            PaymentAction::SubmitFailed("Insufficient balance".to_string()),
        );
        assert_eq!(flow.phase, PaymentPhase::Reviewing);
        assert_eq!(flow.error.as_deref(), Some("Insufficient balance"));
        // draft and edits survive, so retry needs no rescan
        assert!(flow.draft.is_some());
        assert_eq!(flow.amount_input, "320");
        assert!(flow.submission().is_ok());
    }

    #[test]
    fn cancel_resets_everything_from_any_state() {
        let flow = reduce(reviewing(320.0), PaymentAction::SubmitStarted);
        let flow = reduce(flow, PaymentAction::Cancelled);
        assert_eq!(flow, PaymentFlow::default());
    }

    #[test]
    fn submission_blocks_until_amount_and_notes_are_valid() {
        let mut flow = reviewing(320.0);

        flow.amount_input = "".to_string();
        flow.notes_input = "lunch".to_string();
        assert_eq!(
            flow.submission(),
            Err("Please enter a valid amount".to_string())
        );

        flow.amount_input = "0".to_string();
        assert_eq!(
            flow.submission(),
            Err("Please enter a valid amount".to_string())
        );

        flow.amount_input = "not a number".to_string();
        assert_eq!(
            flow.submission(),
            Err("Please enter a valid amount".to_string())
        );

        flow.amount_input = "50".to_string();
        flow.notes_input = "   ".to_string();
        assert_eq!(
            flow.submission(),
            Err("Please add a note for this transaction".to_string())
        );

        flow.notes_input = " lunch ".to_string();
        let request = flow.submission().unwrap();
        assert_eq!(request.amount, 50.0);
        assert_eq!(request.purpose, "lunch");
        assert_eq!(request.merchant, "Zomato");
        assert_eq!(request.upi_id, "zomato@icici");
    }

    #[test]
    fn edited_amount_overrides_the_scanned_one() {
        let mut flow = reviewing(320.0);
        flow = reduce(flow, PaymentAction::AmountEdited("450.50".to_string()));
        let request = flow.submission().unwrap();
        assert_eq!(request.amount, 450.5);
    }
}
