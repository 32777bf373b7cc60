use rust_decimal::Decimal;

use crate::model::Wallet;

mod deposit;
mod transfer;
mod withdrawal;

pub use deposit::deposit;
pub use transfer::{transfer, transfer_to_self};
pub use withdrawal::withdrawal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deposit,
    Withdrawal,
    Transfer,
}

impl Operation {
    fn rejected(self) -> RuleError {
        match self {
            Operation::Deposit => RuleError::InvalidDeposit,
            Operation::Withdrawal => RuleError::InvalidWithdrawal,
            Operation::Transfer => RuleError::InvalidTransfer,
        }
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RuleError {
    #[error("Deposit amount must be greater than zero")]
    InvalidDeposit,

    #[error("Withdrawal amount must be greater than zero and less than or equal to balance")]
    InvalidWithdrawal,

    #[error("Transfer amount must be greater than zero and less than or equal to balance")]
    InvalidTransfer,

    #[error("balance of {0} would overflow")]
    BalanceOverflow(String),
}

/// Checks that `amount` is strictly positive.
///
/// # Errors
///
/// Returns the rejection error of `op` if `amount` is zero or negative.
pub fn check_positive_amount(op: Operation, amount: Decimal) -> Result<(), RuleError> {
    if amount <= Decimal::ZERO {
        return Err(op.rejected());
    }
    Ok(())
}

/// Checks that the wallet balance covers `amount`.
///
/// # Errors
///
/// Returns the rejection error of `op` if `wallet.balance` is less than `amount`.
pub fn check_sufficient_funds(op: Operation, wallet: &Wallet, amount: Decimal) -> Result<(), RuleError> {
    if wallet.balance < amount {
        return Err(op.rejected());
    }
    Ok(())
}

/// Returns the wallet balance credited with `amount`.
///
/// # Errors
///
/// Returns [`RuleError::BalanceOverflow`] if the sum does not fit a [`Decimal`].
pub fn credited_balance(wallet: &Wallet, amount: Decimal) -> Result<Decimal, RuleError> {
    wallet
        .balance
        .checked_add(amount)
        .ok_or_else(|| RuleError::BalanceOverflow(wallet.user_name.clone()))
}
