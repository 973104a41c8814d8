use crate::domain::{
    models::transaction::{Transaction, TransactionKind},
    ports::TransactionRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;

pub struct SqliteTransactionRepo {
    pool: SqlitePool,
}

impl SqliteTransactionRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Stored shape: SQLite keeps the amount as decimal text.
#[derive(FromRow)]
struct TransactionRow {
    id: String,
    club_id: String,
    #[sqlx(rename = "type")]
    kind: TransactionKind,
    amount: String,
    category: String,
    description: String,
    receipt_url: Option<String>,
    created_by: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<TransactionRow> for Transaction {
    type Error = AppError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        let amount = Decimal::from_str(&row.amount)
            .map_err(|e| AppError::InternalWithMsg(format!("Corrupt amount '{}' on transaction {}: {}", row.amount, row.id, e)))?;

        Ok(Transaction {
            id: row.id,
            club_id: row.club_id,
            kind: row.kind,
            amount,
            category: row.category,
            description: row.description,
            receipt_url: row.receipt_url,
            created_by: row.created_by,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl TransactionRepository for SqliteTransactionRepo {
    async fn create(&self, transaction: &Transaction) -> Result<Transaction, AppError> {
        let row = sqlx::query_as::<_, TransactionRow>(
            "INSERT INTO transactions (id, club_id, type, amount, category, description, receipt_url, created_by, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&transaction.id).bind(&transaction.club_id).bind(transaction.kind)
            .bind(transaction.amount.normalize().to_string())
            .bind(&transaction.category).bind(&transaction.description).bind(&transaction.receipt_url)
            .bind(&transaction.created_by).bind(transaction.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        row.try_into()
    }

    async fn list_by_club(&self, club_id: &str) -> Result<Vec<Transaction>, AppError> {
        sqlx::query_as::<_, TransactionRow>("SELECT * FROM transactions WHERE club_id = ? ORDER BY created_at ASC")
            .bind(club_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }
}
