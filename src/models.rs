use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of the canonical transaction list, as embedded in the insights
/// payload. Keys are snake_case and `txn_date` is epoch milliseconds; rows
/// sourced from malformed CSV lines can carry nulls in the text fields.
#[derive(Clone, PartialEq, Deserialize, Serialize, Debug)]
pub struct Transaction {
    #[serde(default)]
    pub merchant: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub amount: f64,
    pub txn_type: TxnType,
    #[serde(default)]
    pub txn_date: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub balance: Option<f64>,
}

/// Direction of a transaction. `amount` is always a magnitude; this carries
/// the sign.
#[derive(Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Debug)]
#[serde(rename_all = "UPPERCASE")]
pub enum TxnType {
    Credit,
    Debit,
}

/// Everything `/api/transactions/insights` returns: the aggregate bundle
/// plus the authoritative transaction list it was computed over.
#[derive(Clone, PartialEq, Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct InsightsEnvelope {
    pub transactions: Vec<Transaction>,
    pub insights: InsightsSummary,
}

/// The aggregate bundle. Read-only on this side; replaced wholesale on every
/// fetch, never merged field by field. Missing fields fall back to defaults
/// so a partial payload degrades instead of failing the whole decode.
#[derive(Clone, PartialEq, Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct InsightsSummary {
    pub total_income: f64,
    pub monthly_spend: f64,
    pub total_savings: f64,
    pub savings_rate: f64,
    pub avg_transaction_value: f64,
    pub daily_avg_spend: f64,
    pub daily_avg_income: f64,
    pub expense_to_income_ratio: f64,
    pub min_transaction_amount: f64,
    pub max_transaction_amount: f64,
    pub total_transactions: u32,
    pub total_income_transactions: u32,
    pub total_expense_transactions: u32,
    pub highest_spending_category: Option<String>,
    pub highest_spending_merchant: Option<String>,
    pub category_totals: BTreeMap<String, f64>,
    pub top_categories: BTreeMap<String, f64>,
    pub top_merchants: BTreeMap<String, f64>,
    /// Keyed by "start/end" period strings.
    pub weekly_spend: BTreeMap<String, f64>,
    /// Day -> category -> spend for that day.
    pub daily_category_breakdown: BTreeMap<String, BTreeMap<String, f64>>,
    pub transaction_type_distribution: TypeDistribution,
    pub date_range: DateRange,
}

#[derive(Clone, PartialEq, Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct TypeDistribution {
    pub debit_percentage: f64,
    pub credit_percentage: f64,
}

#[derive(Clone, PartialEq, Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

/// One generated notification. `severity`, `confidence` and `mode` are open
/// vocabularies: the generator currently emits INFO/WARNING/ALERT,
/// LOW/MEDIUM/HIGH and RULE_BASED/LLM, but styling falls back to a default
/// for anything unrecognized rather than rejecting it.
#[derive(Clone, PartialEq, Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct AiNotification {
    pub title: String,
    pub message: String,
    pub severity: String,
    pub confidence: String,
    pub mode: String,
}

/// Body of `POST /api/payments/qr`. The payment service speaks camelCase.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QrPaymentRequest {
    pub merchant: String,
    pub upi_id: String,
    pub amount: f64,
    pub purpose: String,
}

/// Successful payment response.
#[derive(Clone, PartialEq, Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub transaction_id: String,
    pub status: String,
    #[serde(default)]
    pub transaction: Option<ReceiptTransaction>,
    #[serde(default)]
    pub ai_notification: Option<AiNotification>,
}

/// The ledger row the payment service created. Unlike the insights
/// transactions this is camelCase with a preformatted date string.
#[derive(Clone, PartialEq, Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptTransaction {
    #[serde(default)]
    pub txn_date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub merchant: Option<String>,
    pub amount: f64,
    pub txn_type: TxnType,
    #[serde(default)]
    pub balance: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insights_transaction_decodes_snake_case_with_nulls() {
        let raw = r#"{
            "merchant": "Zomato",
            "category": null,
            "amount": 450.0,
            "txn_type": "DEBIT",
            "txn_date": 1705276800000,
            "description": "Food order",
            "balance": 12000.5
        }"#;
        let txn: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(txn.merchant.as_deref(), Some("Zomato"));
        assert_eq!(txn.category, None);
        assert_eq!(txn.txn_type, TxnType::Debit);
        assert_eq!(txn.txn_date, Some(1705276800000));
    }

    #[test]
    fn envelope_tolerates_partial_insights() {
        let raw = r#"{
            "transactions": [],
            "insights": { "total_income": 1000.0, "category_totals": { "Food": 320.0 } }
        }"#;
        let envelope: InsightsEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.insights.total_income, 1000.0);
        assert_eq!(envelope.insights.monthly_spend, 0.0);
        assert!(envelope.insights.top_merchants.is_empty());
        assert_eq!(envelope.insights.date_range.start_date, "");
    }

    #[test]
    fn payment_request_serializes_camel_case() {
        let request = QrPaymentRequest {
            merchant: "Zomato".to_string(),
            upi_id: "zomato@icici".to_string(),
            amount: 320.0,
            purpose: "Food Order".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["upiId"], "zomato@icici");
        assert_eq!(json["purpose"], "Food Order");
    }

    #[test]
    fn receipt_decodes_with_optional_notification() {
        let raw = r#"{
            "transactionId": "a1b2c3d4-e5f6-7890-abcd-ef1234567890",
            "status": "SUCCESS",
            "transaction": {
                "txnDate": "2024-01-15T12:30:00",
                "amount": 320.0,
                "txnType": "DEBIT",
                "balance": 11680.5
            }
        }"#;
        let receipt: PaymentReceipt = serde_json::from_str(raw).unwrap();
        assert_eq!(receipt.status, "SUCCESS");
        assert!(receipt.ai_notification.is_none());
        let txn = receipt.transaction.unwrap();
        assert_eq!(txn.txn_type, TxnType::Debit);
        assert_eq!(txn.balance, Some(11680.5));
    }
}
