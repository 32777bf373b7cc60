use crate::{
    model::{Transaction, TransactionId, TransactionType, Wallet},
    rules::{self, Operation, RuleError},
};

/// Applies a deposit to a wallet, increasing its balance and logging `tx`.
///
/// # Errors
///
/// - Returns [`RuleError::InvalidDeposit`] if `tx.amount` is not positive.
/// - Returns [`RuleError::BalanceOverflow`] if the new balance does not fit.
///
/// # Panics
///
/// Panics if `tx.type` is not [`TransactionType::Deposit`].
pub fn deposit(wallet: &mut Wallet, tx: Transaction) -> Result<TransactionId, RuleError> {
    if !matches!(tx.r#type, TransactionType::Deposit) {
        panic!("failed to deposit transaction: {tx:?}");
    }

    rules::check_positive_amount(Operation::Deposit, tx.amount)?;
    wallet.balance = rules::credited_balance(wallet, tx.amount)?;

    log::debug!("{} deposited {} ({})", wallet.user_name, tx.amount, tx.id);

    let id = tx.id.clone();
    wallet.transactions.push(tx);

    Ok(id)
}
