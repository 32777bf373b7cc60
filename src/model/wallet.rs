use rust_decimal::Decimal;

use super::{Transaction, TransactionId, TransactionType};
use crate::rules::{self, RuleError};

/// A user's balance and transaction log.
///
/// The balance only changes through the rules, so it cannot be set from
/// outside the crate:
///
/// ```compile_fail
/// let mut wallet = wallet_cli::model::Wallet::new("User1");
/// wallet.balance = rust_decimal::Decimal::NEGATIVE_ONE;
/// ```
#[derive(Debug, Default)]
pub struct Wallet {
    pub user_name: String,
    pub(crate) balance: Decimal,

    pub(crate) transactions: Vec<Transaction>,
}

impl Wallet {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            ..Default::default()
        }
    }

    pub fn with_balance(user_name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            balance,
            ..Self::new(user_name)
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn find_transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| &tx.id == id)
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<TransactionId, RuleError> {
        let tx = Transaction::new(TransactionType::Deposit, amount, self.user_name.clone());
        rules::deposit(self, tx)
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<TransactionId, RuleError> {
        let tx = Transaction::new(TransactionType::Withdrawal, amount, self.user_name.clone());
        rules::withdrawal(self, tx)
    }

    pub fn send_money(
        &mut self,
        recipient: &mut Wallet,
        amount: Decimal,
    ) -> Result<TransactionId, RuleError> {
        rules::transfer(self, recipient, amount)
    }

    pub fn send_to_self(&mut self, amount: Decimal) -> Result<TransactionId, RuleError> {
        rules::transfer_to_self(self, amount)
    }
}
