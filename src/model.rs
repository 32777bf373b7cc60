mod transaction;
mod wallet;

pub use transaction::{SERIAL_NUMBER_LEN, SerialNumber, Transaction, TransactionId, TransactionType};
pub use wallet::Wallet;
