//! `f5ops shell` - Interactive bash/tmsh loop against one appliance.
//!
//! Single-threaded read-eval-print loop: `AwaitingInput -> Executing ->
//! AwaitingInput`, with the terminal `Quit` state reached only by the
//! literal input `quit` (or EOF/interrupt from the line editor). `quit`
//! never issues an HTTP call.

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::Context;
use crate::cli::args::ShellArgs;
use crate::prompt;
use f5ops::F5Error;

/// Literal input that terminates the loop
const QUIT: &str = "quit";

/// Next step of the loop, decided purely from one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellState {
    /// Nothing to do, prompt again
    AwaitingInput,
    /// Send this command to the appliance
    Executing(String),
    /// Terminate without any further HTTP call
    Quit,
}

/// Transition function of the loop's state machine.
#[must_use]
pub fn transition(line: &str) -> ShellState {
    let trimmed = line.trim();
    if trimmed == QUIT {
        ShellState::Quit
    } else if trimmed.is_empty() {
        ShellState::AwaitingInput
    } else {
        ShellState::Executing(trimmed.to_string())
    }
}

pub async fn execute(ctx: Context, args: ShellArgs) -> Result<()> {
    let host = ctx.resolve_bigip(args.bigip)?;
    let user = ctx.resolve_user(args.user)?;
    let password = prompt::password(&user)?;

    let client = ctx.client(&host, &user, &password)?;
    let mut editor = DefaultEditor::new()?;

    println!("{}", "-------------------------------------------------".dimmed());
    println!("--- bigip: {}, user: {}", host.cyan(), user.cyan());
    println!("--- Enter {} to exit", QUIT.red());
    println!("{}", "-------------------------------------------------".dimmed());

    loop {
        let line = match editor.readline("f5ops> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        match transition(&line) {
            ShellState::Quit => break,
            ShellState::AwaitingInput => {}
            ShellState::Executing(cmd) => {
                let _ = editor.add_history_entry(&cmd);

                // Non-2xx answers are printed and the loop keeps going;
                // only transport-level problems end the session.
                match client.util().bash(&cmd).await {
                    Ok(result) => print!("{}", result.output()),
                    Err(err @ (F5Error::Unauthorized | F5Error::Api { .. })) => {
                        eprintln!("{} {err}", "Error:".red().bold());
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_terminates_without_a_command() {
        assert_eq!(transition("quit"), ShellState::Quit);
        assert_eq!(transition("  quit  "), ShellState::Quit);
    }

    #[test]
    fn blank_lines_loop_back() {
        assert_eq!(transition(""), ShellState::AwaitingInput);
        assert_eq!(transition("   "), ShellState::AwaitingInput);
    }

    #[test]
    fn anything_else_executes() {
        assert_eq!(
            transition("tmsh list sys version"),
            ShellState::Executing("tmsh list sys version".to_string())
        );
        // quit only counts as the whole input
        assert_eq!(
            transition("quit now"),
            ShellState::Executing("quit now".to_string())
        );
    }
}
