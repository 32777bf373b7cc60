use clap::Parser;
use log::LevelFilter;
use rust_decimal::Decimal;
use simple_logger::SimpleLogger;

use wallet_cli::{
    app,
    session::{DEFAULT_USERS, Session, SessionError},
};

/// Two-user wallet with an interactive prompt
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Comma separated wallet owners; the first one starts as the current user
    #[arg(short, long, value_delimiter = ',', default_values_t = DEFAULT_USERS.map(String::from))]
    users: Vec<String>,

    /// Balance every wallet opens with
    #[arg(short, long, default_value_t = Decimal::ZERO)]
    opening_balance: Decimal,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(short, long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Logger(#[from] log::SetLoggerError),
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    SimpleLogger::new()
        .with_level(LevelFilter::Error)
        .with_module_level("wallet_cli", cli.log_level)
        .init()?;

    let mut session = Session::new(cli.users.as_slice(), cli.opening_balance)?;
    log::info!(
        "wallets ready for {}",
        session
            .wallets()
            .iter()
            .map(|wallet| wallet.user_name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    app::run(
        &mut session,
        std::io::stdin().lock(),
        std::io::stdout(),
        std::io::stderr(),
    )?;

    Ok(())
}
