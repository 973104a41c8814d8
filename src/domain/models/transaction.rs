use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

// Not `FromRow`: SQLite has no decimal type, the repository decodes `amount` from text.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Transaction {
    pub id: String,
    pub club_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub receipt_url: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewTransactionParams {
    pub club_id: String,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub receipt_url: Option<String>,
    pub created_by: String,
}

impl Transaction {
    pub fn new(params: NewTransactionParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            club_id: params.club_id,
            kind: params.kind,
            amount: params.amount,
            category: params.category,
            description: params.description,
            receipt_url: params.receipt_url,
            created_by: params.created_by,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct Ledger {
    pub transactions: Vec<Transaction>,
    #[serde(with = "rust_decimal::serde::float")]
    pub income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub expense: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}
