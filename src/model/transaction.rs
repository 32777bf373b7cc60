use std::fmt;

use rand::Rng;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Number of decimal digits in a [`SerialNumber`].
pub const SERIAL_NUMBER_LEN: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Sent,
    Received,
}

impl TransactionType {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "Deposit",
            TransactionType::Withdrawal => "Withdrawal",
            TransactionType::Sent => "Sent",
            TransactionType::Received => "Received",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hex form of a random UUID, without hyphens.
///
/// Both halves of a transfer carry the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fifteen random decimal digits. Leading zeros are significant.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct SerialNumber(String);

impl SerialNumber {
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    pub fn generate_with<R: Rng>(rng: &mut R) -> Self {
        let digits = (0..SERIAL_NUMBER_LEN)
            .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
            .collect();
        Self(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of a wallet's transaction log.
///
/// `counterparty` is the wallet owner for deposits and withdrawals, the
/// recipient for [`TransactionType::Sent`] and the sender for
/// [`TransactionType::Received`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub serial: Option<SerialNumber>,
    pub r#type: TransactionType,
    pub amount: Decimal,
    pub counterparty: String,
}

impl Transaction {
    pub fn new(r#type: TransactionType, amount: Decimal, counterparty: impl Into<String>) -> Self {
        Self::with_id(TransactionId::generate(), r#type, amount, counterparty)
    }

    /// Builds an entry under an existing id. Every type except
    /// [`TransactionType::Sent`] gets a fresh serial number.
    pub fn with_id(
        id: TransactionId,
        r#type: TransactionType,
        amount: Decimal,
        counterparty: impl Into<String>,
    ) -> Self {
        let serial = match r#type {
            TransactionType::Sent => None,
            _ => Some(SerialNumber::generate()),
        };

        Self {
            id,
            serial,
            r#type,
            amount,
            counterparty: counterparty.into(),
        }
    }
}
