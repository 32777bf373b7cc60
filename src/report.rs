//! Text views over a wallet: balance, transaction history, serial numbers,
//! and the CSV export of the transaction log.

use std::io;

use rust_decimal::Decimal;

use crate::model::{Transaction, TransactionType, Wallet};

pub const CURRENCY: &str = "Rs";
pub const NO_TRANSACTIONS: &str = "No transactions yet.";
pub const HIDDEN_SERIAL: &str = "Hidden";
pub const MISSING_SERIAL: &str = "None";

pub fn money(amount: Decimal) -> String {
    format!("{CURRENCY}{amount}")
}

pub fn balance(wallet: &Wallet) -> String {
    money(wallet.balance())
}

/// Serial number of `tx` as seen by `viewer`.
///
/// A received entry hides its serial from a viewer who is also its
/// counterparty. Entries without a serial render as [`MISSING_SERIAL`].
pub fn serial_label(tx: &Transaction, viewer: &str) -> String {
    if tx.r#type == TransactionType::Received && tx.counterparty == viewer {
        return HIDDEN_SERIAL.to_string();
    }
    tx.serial
        .as_ref()
        .map_or_else(|| MISSING_SERIAL.to_string(), ToString::to_string)
}

pub fn history(wallet: &Wallet) -> String {
    let transactions = wallet.transactions();
    if transactions.is_empty() {
        return NO_TRANSACTIONS.to_string();
    }

    let mut out = format!("Transaction History for {}:\n\n", wallet.user_name);
    for tx in transactions {
        let line = match tx.r#type {
            TransactionType::Sent => format!(
                "Transaction ID: {}, Type: {}, Amount: {}, To: {}\n",
                tx.id,
                tx.r#type,
                money(tx.amount),
                tx.counterparty
            ),
            _ => format!(
                "Transaction ID: {}, Serial Number: {}, Type: {}, Amount: {}\n",
                tx.id,
                serial_label(tx, &wallet.user_name),
                tx.r#type,
                money(tx.amount)
            ),
        };
        out.push_str(&line);
    }
    out
}

pub fn serial_numbers(wallet: &Wallet) -> String {
    let transactions = wallet.transactions();
    if transactions.is_empty() {
        return NO_TRANSACTIONS.to_string();
    }

    let mut out = format!("Serial Numbers for {}:\n\n", wallet.user_name);
    for tx in transactions {
        out.push_str(&format!(
            "Serial Number: {}, Amount: {}\n",
            serial_label(tx, &wallet.user_name),
            money(tx.amount)
        ));
    }
    out
}

/// Writes the wallet's log as CSV with an `id,serial,type,amount,counterparty` header.
///
/// # Errors
///
/// Returns any [`csv::Error`] raised while serializing or flushing.
pub fn write_csv<W: io::Write>(
    wallet: &Wallet,
    writer: &mut csv::Writer<W>,
) -> Result<(), csv::Error> {
    if wallet.transactions().is_empty() {
        writer.write_record(["id", "serial", "type", "amount", "counterparty"])?;
    }
    for tx in wallet.transactions() {
        writer.serialize(tx)?;
    }
    writer.flush()?;
    Ok(())
}
