use crate::{
    model::{Transaction, TransactionId, TransactionType, Wallet},
    rules::{self, Operation, RuleError},
};

/// Applies a withdrawal to a wallet, decreasing its balance and logging `tx`.
///
/// # Errors
///
/// Returns [`RuleError::InvalidWithdrawal`] if `tx.amount` is not positive or
/// exceeds `wallet.balance`.
///
/// # Panics
///
/// Panics if `tx.type` is not [`TransactionType::Withdrawal`].
pub fn withdrawal(wallet: &mut Wallet, tx: Transaction) -> Result<TransactionId, RuleError> {
    if !matches!(tx.r#type, TransactionType::Withdrawal) {
        panic!("failed to withdraw transaction: {tx:?}");
    }

    rules::check_positive_amount(Operation::Withdrawal, tx.amount)?;
    rules::check_sufficient_funds(Operation::Withdrawal, wallet, tx.amount)?;

    wallet.balance -= tx.amount;

    log::debug!("{} withdrew {} ({})", wallet.user_name, tx.amount, tx.id);

    let id = tx.id.clone();
    wallet.transactions.push(tx);

    Ok(id)
}
