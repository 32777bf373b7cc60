//! State behind the interactive front-end: the wallets, the active user and
//! the selected recipient.

use rust_decimal::Decimal;

use crate::{
    model::{TransactionId, Wallet},
    report,
    rules::RuleError,
};

pub const DEFAULT_USERS: [&str; 2] = ["User1", "User2"];

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error("unknown user: {0}")]
    UnknownUser(String),

    #[error("user names cannot be empty")]
    EmptyName,

    #[error("duplicate user: {0}")]
    DuplicateUser(String),

    #[error("at least two users are required, got {0}")]
    NotEnoughUsers(usize),

    #[error("opening balance cannot be negative: {0}")]
    NegativeOpeningBalance(Decimal),
}

#[derive(Debug)]
pub struct Session {
    wallets: Vec<Wallet>,
    current: usize,
    recipient: usize,
}

impl Session {
    /// Opens one wallet per name, each holding `opening_balance`.
    ///
    /// The first name becomes both the current user and the selected recipient.
    ///
    /// # Errors
    ///
    /// - Returns [`SessionError::NotEnoughUsers`] for fewer than two names.
    /// - Returns [`SessionError::NegativeOpeningBalance`] if `opening_balance` is below zero.
    /// - Returns [`SessionError::EmptyName`] for a blank name.
    /// - Returns [`SessionError::DuplicateUser`] if a name repeats.
    pub fn new<S: AsRef<str>>(users: &[S], opening_balance: Decimal) -> Result<Self, SessionError> {
        if users.len() < 2 {
            return Err(SessionError::NotEnoughUsers(users.len()));
        }
        if opening_balance < Decimal::ZERO {
            return Err(SessionError::NegativeOpeningBalance(opening_balance));
        }

        let mut wallets: Vec<Wallet> = Vec::with_capacity(users.len());
        for name in users {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(SessionError::EmptyName);
            }
            if wallets.iter().any(|wallet| wallet.user_name == name) {
                return Err(SessionError::DuplicateUser(name.to_string()));
            }
            wallets.push(Wallet::with_balance(name, opening_balance));
        }

        log::debug!("opened {} wallets", wallets.len());

        Ok(Self {
            wallets,
            current: 0,
            recipient: 0,
        })
    }

    pub fn wallets(&self) -> &[Wallet] {
        &self.wallets
    }

    pub fn wallet(&self, name: &str) -> Option<&Wallet> {
        self.wallets.iter().find(|wallet| wallet.user_name == name)
    }

    pub fn current_user(&self) -> &Wallet {
        &self.wallets[self.current]
    }

    pub fn recipient(&self) -> &Wallet {
        &self.wallets[self.recipient]
    }

    fn position(&self, name: &str) -> Result<usize, SessionError> {
        self.wallets
            .iter()
            .position(|wallet| wallet.user_name == name)
            .ok_or_else(|| SessionError::UnknownUser(name.to_string()))
    }

    pub fn select_user(&mut self, name: &str) -> Result<(), SessionError> {
        self.current = self.position(name)?;
        log::debug!("current user is now {name}");
        Ok(())
    }

    pub fn select_recipient(&mut self, name: &str) -> Result<(), SessionError> {
        self.recipient = self.position(name)?;
        log::debug!("recipient is now {name}");
        Ok(())
    }

    pub fn current_balance(&self) -> Decimal {
        self.current_user().balance()
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<TransactionId, SessionError> {
        Ok(self.wallets[self.current].deposit(amount)?)
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<TransactionId, SessionError> {
        Ok(self.wallets[self.current].withdraw(amount)?)
    }

    /// Sends `amount` from the current user to the selected recipient, who
    /// may be the current user.
    pub fn send(&mut self, amount: Decimal) -> Result<TransactionId, SessionError> {
        if self.current == self.recipient {
            return Ok(self.wallets[self.current].send_to_self(amount)?);
        }

        let (sender, recipient) = pair_mut(&mut self.wallets, self.current, self.recipient);
        Ok(sender.send_money(recipient, amount)?)
    }

    pub fn history(&self) -> String {
        report::history(self.current_user())
    }

    pub fn serial_numbers(&self) -> String {
        report::serial_numbers(self.current_user())
    }
}

/// Mutable borrows of two distinct wallets.
fn pair_mut(wallets: &mut [Wallet], a: usize, b: usize) -> (&mut Wallet, &mut Wallet) {
    assert_ne!(a, b, "cannot borrow the same wallet twice");
    if a < b {
        let (left, right) = wallets.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = wallets.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TransactionType;

    fn session() -> Session {
        Session::new(&DEFAULT_USERS, Decimal::ZERO).unwrap()
    }

    #[test]
    fn defaults_to_first_user_and_recipient() {
        let session = session();
        assert_eq!(session.current_user().user_name, "User1");
        assert_eq!(session.recipient().user_name, "User1");
        assert_eq!(session.current_balance(), Decimal::ZERO);
    }

    #[test]
    fn opening_balance_applies_to_every_wallet() {
        let session = Session::new(&DEFAULT_USERS, Decimal::from(50)).unwrap();
        assert!(
            session
                .wallets()
                .iter()
                .all(|wallet| wallet.balance() == Decimal::from(50))
        );
    }

    #[test]
    fn fewer_than_two_users_is_rejected() {
        assert!(matches!(
            Session::new(&["User1"], Decimal::ZERO),
            Err(SessionError::NotEnoughUsers(1))
        ));
    }

    #[test]
    fn duplicate_users_are_rejected() {
        assert!(matches!(
            Session::new(&["User1", "User1"], Decimal::ZERO),
            Err(SessionError::DuplicateUser(name)) if name == "User1"
        ));
    }

    #[test]
    fn negative_opening_balance_is_rejected() {
        assert!(matches!(
            Session::new(&DEFAULT_USERS, Decimal::NEGATIVE_ONE),
            Err(SessionError::NegativeOpeningBalance(_))
        ));
    }

    #[test]
    fn blank_user_name_is_rejected() {
        assert!(matches!(
            Session::new(&["User1", " "], Decimal::ZERO),
            Err(SessionError::EmptyName)
        ));
    }

    #[test]
    fn select_unknown_user_returns_error() {
        let mut session = session();
        assert!(matches!(
            session.select_user("User3"),
            Err(SessionError::UnknownUser(name)) if name == "User3"
        ));
        assert!(matches!(
            session.select_recipient("nobody"),
            Err(SessionError::UnknownUser(_))
        ));
        assert_eq!(session.current_user().user_name, "User1");
    }

    #[test]
    fn deposit_and_withdraw_act_on_current_user() {
        let mut session = session();
        session.select_user("User2").unwrap();
        session.deposit(Decimal::from(80)).unwrap();
        session.withdraw(Decimal::from(20)).unwrap();
        assert_eq!(session.current_balance(), Decimal::from(60));
        assert_eq!(session.wallet("User1").unwrap().balance(), Decimal::ZERO);
    }

    #[test]
    fn rule_errors_are_propagated() {
        let mut session = session();
        assert!(matches!(
            session.withdraw(Decimal::from(1)),
            Err(SessionError::Rule(RuleError::InvalidWithdrawal))
        ));
        assert!(matches!(
            session.deposit(Decimal::ZERO),
            Err(SessionError::Rule(RuleError::InvalidDeposit))
        ));
    }

    #[test]
    fn send_moves_money_to_selected_recipient() {
        let mut session = session();
        session.deposit(Decimal::from(100)).unwrap();
        session.select_recipient("User2").unwrap();
        let id = session.send(Decimal::from(40)).unwrap();

        let types: Vec<TransactionType> = session
            .wallet("User2")
            .unwrap()
            .transactions()
            .iter()
            .map(|tx| tx.r#type)
            .collect();
        assert_eq!(types, [TransactionType::Deposit, TransactionType::Received]);

        assert_eq!(session.current_balance(), Decimal::from(60));
        let user2 = session.wallet("User2").unwrap();
        assert_eq!(user2.balance(), Decimal::from(40));
        assert!(user2.find_transaction(&id).is_some());
    }

    #[test]
    fn send_works_from_a_later_wallet_to_an_earlier_one() {
        let mut session = session();
        session.select_user("User2").unwrap();
        session.deposit(Decimal::from(10)).unwrap();
        session.select_recipient("User1").unwrap();
        session.send(Decimal::from(10)).unwrap();
        assert_eq!(session.current_balance(), Decimal::ZERO);
        assert_eq!(session.wallet("User1").unwrap().balance(), Decimal::from(10));
    }

    #[test]
    fn send_to_default_recipient_goes_to_self() {
        let mut session = session();
        session.deposit(Decimal::from(100)).unwrap();
        let id = session.send(Decimal::from(10)).unwrap();

        assert_eq!(session.current_balance(), Decimal::from(100));
        let entries = session.current_user().transactions();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[2].id, id);
        assert_eq!(entries[3].id, id);
        assert!(session.serial_numbers().contains("Serial Number: Hidden, Amount: Rs10"));
    }

    #[test]
    fn send_to_self_more_than_balance_is_rejected() {
        let mut session = session();
        assert!(matches!(
            session.send(Decimal::from(1)),
            Err(SessionError::Rule(RuleError::InvalidTransfer))
        ));
        assert!(session.current_user().transactions().is_empty());
    }

    #[test]
    fn send_more_than_balance_is_rejected() {
        let mut session = session();
        session.select_recipient("User2").unwrap();
        assert!(matches!(
            session.send(Decimal::from(1)),
            Err(SessionError::Rule(RuleError::InvalidTransfer))
        ));
    }

    #[test]
    fn reports_follow_current_user() {
        let mut session = session();
        session.deposit(Decimal::from(5)).unwrap();
        assert!(session.history().starts_with("Transaction History for User1:"));
        session.select_user("User2").unwrap();
        assert_eq!(session.history(), report::NO_TRANSACTIONS);
        assert_eq!(session.serial_numbers(), report::NO_TRANSACTIONS);
    }
}
