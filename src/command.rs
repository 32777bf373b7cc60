//! Parsing of the line-oriented front-end commands.

use std::{path::PathBuf, str::FromStr};

use rust_decimal::Decimal;

pub const HELP: &str = "help";
pub const USER: &str = "user";
pub const RECIPIENT: &str = "to";
pub const DEPOSIT: &str = "deposit";
pub const WITHDRAW: &str = "withdraw";
pub const SEND: &str = "send";
pub const BALANCE: &str = "balance";
pub const HISTORY: &str = "history";
pub const SERIALS: &str = "serials";
pub const EXPORT: &str = "export";
pub const QUIT: &str = "quit";
pub const EXIT: &str = "exit";

pub const PROMPT: &str = "> ";

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("unrecognized command '{0}'; try `help`")]
    Unknown(String),

    #[error("usage: {0}")]
    MissingArgument(&'static str),

    #[error("too many arguments; usage: {0}")]
    TooManyArguments(&'static str),

    #[error("only whole non-negative numbers are allowed as the amount; got '{0}'")]
    InvalidAmount(String),
}

#[derive(Debug, PartialEq)]
pub enum Command {
    Help,
    SelectUser(String),
    SelectRecipient(String),
    Deposit(Decimal),
    Withdraw(Decimal),
    Send(Decimal),
    Balance,
    History,
    Serials,
    Export(PathBuf),
    Quit,
}

/// Lists every command with its short alias.
pub fn help() -> String {
    [
        format!("{HELP} (h)"),
        format!("{USER} <name> (u)"),
        format!("{RECIPIENT} <name> (r)"),
        format!("{DEPOSIT} <amount> (d)"),
        format!("{WITHDRAW} <amount> (w)"),
        format!("{SEND} <amount> (s)"),
        format!("{BALANCE} (b)"),
        format!("{HISTORY} (t)"),
        format!("{SERIALS} (n)"),
        format!("{EXPORT} <path> (e)"),
        format!("{QUIT} | {EXIT} (q)"),
    ]
    .join("\n")
}

/// Amount entry accepts a single run of digits, so signs, decimal points and
/// trailing words are rejected before a wallet ever sees the value.
fn parse_amount(args: &[&str], usage: &'static str) -> Result<Decimal, CommandError> {
    let word = match args {
        [] => return Err(CommandError::MissingArgument(usage)),
        [word] => *word,
        _ => return Err(CommandError::TooManyArguments(usage)),
    };
    if !word.chars().all(|c| c.is_ascii_digit()) {
        return Err(CommandError::InvalidAmount(word.to_string()));
    }
    Decimal::from_str(word).map_err(|_| CommandError::InvalidAmount(word.to_string()))
}

fn rest(words: &[&str], usage: &'static str) -> Result<String, CommandError> {
    let name = words.join(" ");
    let name = name.trim_matches(|c| c == '\'' || c == '"').trim();
    if name.is_empty() {
        return Err(CommandError::MissingArgument(usage));
    }
    Ok(name.to_string())
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parses a non-blank line. Names may span several words and may be quoted.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((first, args)) = words.split_first() else {
            return Err(CommandError::Unknown(String::new()));
        };

        let command = match first.to_lowercase().as_str() {
            HELP | "h" => Command::Help,
            USER | "u" => Command::SelectUser(rest(args, "user <name>")?),
            RECIPIENT | "r" => Command::SelectRecipient(rest(args, "to <name>")?),
            DEPOSIT | "d" => Command::Deposit(parse_amount(args, "deposit <amount>")?),
            WITHDRAW | "w" => Command::Withdraw(parse_amount(args, "withdraw <amount>")?),
            SEND | "s" => Command::Send(parse_amount(args, "send <amount>")?),
            BALANCE | "b" => Command::Balance,
            HISTORY | "t" => Command::History,
            SERIALS | "n" => Command::Serials,
            EXPORT | "e" => Command::Export(PathBuf::from(rest(args, "export <path>")?)),
            QUIT | EXIT | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_and_short_forms() {
        assert_eq!("help".parse::<Command>(), Ok(Command::Help));
        assert_eq!("h".parse::<Command>(), Ok(Command::Help));
        assert_eq!("d 100".parse::<Command>(), Ok(Command::Deposit(Decimal::from(100))));
        assert_eq!("withdraw 5".parse::<Command>(), Ok(Command::Withdraw(Decimal::from(5))));
        assert_eq!("S 7".parse::<Command>(), Ok(Command::Send(Decimal::from(7))));
        assert_eq!("b".parse::<Command>(), Ok(Command::Balance));
        assert_eq!("history".parse::<Command>(), Ok(Command::History));
        assert_eq!("n".parse::<Command>(), Ok(Command::Serials));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("Q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn user_names_can_span_words_and_be_quoted() {
        assert_eq!(
            "user 'Jane Doe'".parse::<Command>(),
            Ok(Command::SelectUser("Jane Doe".to_string()))
        );
        assert_eq!(
            "to User2".parse::<Command>(),
            Ok(Command::SelectRecipient("User2".to_string()))
        );
    }

    #[test]
    fn export_takes_a_path() {
        assert_eq!(
            "export out.csv".parse::<Command>(),
            Ok(Command::Export(PathBuf::from("out.csv")))
        );
    }

    #[test]
    fn missing_arguments() {
        assert_eq!(
            "deposit".parse::<Command>(),
            Err(CommandError::MissingArgument("deposit <amount>"))
        );
        assert_eq!(
            "user".parse::<Command>(),
            Err(CommandError::MissingArgument("user <name>"))
        );
    }

    #[test]
    fn extra_words_after_amount_are_rejected() {
        assert_eq!(
            "d 5 6".parse::<Command>(),
            Err(CommandError::TooManyArguments("deposit <amount>"))
        );
        assert_eq!(
            "send 10 User2".parse::<Command>(),
            Err(CommandError::TooManyArguments("send <amount>"))
        );
    }

    #[test]
    fn only_digits_are_accepted_as_amount() {
        for amount in ["-5", "1.5", "abc", "1e3", "+3"] {
            assert_eq!(
                format!("deposit {amount}").parse::<Command>(),
                Err(CommandError::InvalidAmount(amount.to_string()))
            );
        }
    }

    #[test]
    fn zero_amount_parses_and_is_left_to_the_wallet() {
        assert_eq!("deposit 0".parse::<Command>(), Ok(Command::Deposit(Decimal::ZERO)));
    }

    #[test]
    fn too_large_amount_is_rejected() {
        let huge = "9".repeat(40);
        assert_eq!(
            format!("deposit {huge}").parse::<Command>(),
            Err(CommandError::InvalidAmount(huge))
        );
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            "jump 3".parse::<Command>(),
            Err(CommandError::Unknown("jump".to_string()))
        );
    }

    #[test]
    fn help_lists_every_command() {
        let help = help();
        for name in [
            HELP, USER, RECIPIENT, DEPOSIT, WITHDRAW, SEND, BALANCE, HISTORY, SERIALS, EXPORT,
            QUIT, EXIT,
        ] {
            assert!(help.contains(name), "help is missing {name}");
        }
    }
}
