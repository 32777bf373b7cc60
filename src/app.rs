use std::io::{self, BufRead, Write};

use crate::{
    command::{self, Command, PROMPT},
    report,
    session::Session,
};

#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Quit,
}

/// Reads commands from `input` until `quit` or end of input.
///
/// Results go to `out`; rejected commands and wallet errors are reported on
/// `err` and the loop carries on.
///
/// # Errors
///
/// Fails only when reading `input` or writing `out`/`err` fails.
pub fn run<R: BufRead, W: Write, E: Write>(
    session: &mut Session,
    input: R,
    mut out: W,
    mut err: E,
) -> io::Result<()> {
    write_prompt(session, &mut out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write_prompt(session, &mut out)?;
            continue;
        }

        let flow = match line.parse::<Command>() {
            Ok(command) => execute(session, command, &mut out, &mut err)?,
            Err(error) => {
                writeln!(err, "Error: {error}")?;
                Flow::Continue
            }
        };

        if flow == Flow::Quit {
            break;
        }
        write_prompt(session, &mut out)?;
    }

    out.flush()
}

fn write_prompt<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    write!(out, "{} {PROMPT}", session.current_user().user_name)?;
    out.flush()
}

fn execute<W: Write, E: Write>(
    session: &mut Session,
    command: Command,
    out: &mut W,
    err: &mut E,
) -> io::Result<Flow> {
    let outcome = match command {
        Command::Help => Ok(command::help()),
        Command::SelectUser(name) => session.select_user(&name).map(|()| {
            format!(
                "Current user: {name}, balance: {}",
                report::money(session.current_balance())
            )
        }),
        Command::SelectRecipient(name) => session
            .select_recipient(&name)
            .map(|()| format!("Recipient: {name}")),
        Command::Deposit(amount) => session.deposit(amount).map(|id| {
            format!(
                "Deposited {}. Transaction ID: {id}",
                report::money(amount)
            )
        }),
        Command::Withdraw(amount) => session.withdraw(amount).map(|id| {
            format!("Withdrew {}. Transaction ID: {id}", report::money(amount))
        }),
        Command::Send(amount) => session.send(amount).map(|_| {
            format!(
                "Sent {} to {}",
                report::money(amount),
                session.recipient().user_name
            )
        }),
        Command::Balance => Ok(report::balance(session.current_user())),
        Command::History => Ok(session.history()),
        Command::Serials => Ok(session.serial_numbers()),
        Command::Export(path) => {
            match csv::Writer::from_path(&path)
                .and_then(|mut writer| report::write_csv(session.current_user(), &mut writer))
            {
                Ok(()) => {
                    log::info!("exported transactions to {}", path.display());
                    writeln!(out, "Exported to {}", path.display())?;
                }
                Err(error) => {
                    log::warn!("export to {} failed: {error}", path.display());
                    writeln!(err, "Error: {error}")?;
                }
            }
            return Ok(Flow::Continue);
        }
        Command::Quit => return Ok(Flow::Quit),
    };

    match outcome {
        Ok(message) => writeln!(out, "{}", message.trim_end())?,
        Err(error) => {
            log::warn!("{} rejected: {error}", session.current_user().user_name);
            writeln!(err, "Error: {error}")?;
        }
    }

    Ok(Flow::Continue)
}
