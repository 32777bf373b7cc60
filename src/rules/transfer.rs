use rust_decimal::Decimal;

use crate::{
    model::{Transaction, TransactionId, TransactionType, Wallet},
    rules::{self, Operation, RuleError},
};

/// Moves `amount` from `sender` to `recipient`.
///
/// The recipient is credited through a regular deposit, which logs a
/// [`TransactionType::Deposit`] entry with its own id and serial. Then the
/// sender logs a [`TransactionType::Sent`] entry without a serial number and
/// the recipient a [`TransactionType::Received`] entry with a fresh one. The
/// `Sent` and `Received` entries share the returned id.
///
/// # Errors
///
/// - Returns [`RuleError::InvalidTransfer`] if `amount` is not positive or
///   exceeds `sender.balance`.
/// - Returns [`RuleError::BalanceOverflow`] if the recipient cannot be credited.
pub fn transfer(
    sender: &mut Wallet,
    recipient: &mut Wallet,
    amount: Decimal,
) -> Result<TransactionId, RuleError> {
    rules::check_positive_amount(Operation::Transfer, amount)?;
    rules::check_sufficient_funds(Operation::Transfer, sender, amount)?;

    let credit = Transaction::new(TransactionType::Deposit, amount, recipient.user_name.clone());
    rules::deposit(recipient, credit)?;
    sender.balance -= amount;

    let id = TransactionId::generate();
    sender.transactions.push(Transaction::with_id(
        id.clone(),
        TransactionType::Sent,
        amount,
        recipient.user_name.clone(),
    ));
    recipient.transactions.push(Transaction::with_id(
        id.clone(),
        TransactionType::Received,
        amount,
        sender.user_name.clone(),
    ));

    log::debug!(
        "{} sent {} to {} ({})",
        sender.user_name,
        amount,
        recipient.user_name,
        id
    );

    Ok(id)
}

/// Sends `amount` from a wallet to itself.
///
/// The balance ends where it started, but the log gains a
/// [`TransactionType::Deposit`] entry followed by a [`TransactionType::Sent`]
/// and [`TransactionType::Received`] pair that share the returned id and
/// name the owner as counterparty.
///
/// # Errors
///
/// Returns [`RuleError::InvalidTransfer`] if `amount` is not positive or
/// exceeds `wallet.balance`.
pub fn transfer_to_self(wallet: &mut Wallet, amount: Decimal) -> Result<TransactionId, RuleError> {
    rules::check_positive_amount(Operation::Transfer, amount)?;
    rules::check_sufficient_funds(Operation::Transfer, wallet, amount)?;

    // the credit only restores the debited amount, so it cannot overflow
    wallet.balance -= amount;
    let credit = Transaction::new(TransactionType::Deposit, amount, wallet.user_name.clone());
    rules::deposit(wallet, credit)?;

    let id = TransactionId::generate();
    for r#type in [TransactionType::Sent, TransactionType::Received] {
        let tx = Transaction::with_id(id.clone(), r#type, amount, wallet.user_name.clone());
        wallet.transactions.push(tx);
    }

    log::debug!("{} sent {} to themselves ({})", wallet.user_name, amount, id);

    Ok(id)
}
