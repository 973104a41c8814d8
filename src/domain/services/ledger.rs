use std::sync::Arc;
use crate::domain::{
    models::{
        transaction::{Ledger, NewTransactionParams, Transaction, TransactionKind},
        user::User,
    },
    ports::{ClubRepository, TransactionRepository},
    services::policy::{authorize, Action},
};
use crate::error::AppError;
use rust_decimal::Decimal;
use tracing::info;

/// Totals are derived on every read and never stored.
pub fn summarize(transactions: Vec<Transaction>) -> Ledger {
    let (income, expense) = transactions.iter().fold((Decimal::ZERO, Decimal::ZERO), |(inc, exp), t| {
        match t.kind {
            TransactionKind::Income => (inc + t.amount, exp),
            TransactionKind::Expense => (inc, exp + t.amount),
        }
    });

    Ledger {
        transactions,
        income,
        expense,
        balance: income - expense,
    }
}

pub struct LedgerService {
    clubs: Arc<dyn ClubRepository>,
    transactions: Arc<dyn TransactionRepository>,
}

impl LedgerService {
    pub fn new(clubs: Arc<dyn ClubRepository>, transactions: Arc<dyn TransactionRepository>) -> Self {
        Self { clubs, transactions }
    }

    pub async fn record(&self, actor: &User, params: NewTransactionParams) -> Result<Transaction, AppError> {
        authorize(actor.role, Action::CreateTransaction)?;

        if params.amount < Decimal::ZERO {
            return Err(AppError::Validation("Amount must not be negative".into()));
        }
        self.clubs.find_by_id(&params.club_id).await?
            .ok_or(AppError::NotFound("Club not found".into()))?;

        let created = self.transactions.create(&Transaction::new(params)).await?;
        info!(transaction_id = %created.id, club_id = %created.club_id, kind = ?created.kind, "Transaction recorded");
        Ok(created)
    }

    pub async fn ledger(&self, actor: &User, club_id: &str) -> Result<Ledger, AppError> {
        authorize(actor.role, Action::ViewFinances)?;

        let transactions = self.transactions.list_by_club(club_id).await?;
        Ok(summarize(transactions))
    }
}
