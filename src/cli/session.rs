//! Interactive line-oriented puzzle session
//!
//! Generic over input and output so the loop can be driven by scripts in tests.

use std::io::{BufRead, Write};

use colored::Colorize;
use tracing::{debug, instrument};

use crate::application::services::PuzzleService;
use crate::application::{PuzzleState, Verdict};
use crate::cli::render;
use crate::config::Settings;
use crate::domain::DomainError;
use crate::infrastructure::{InfraError, InfraResult};

/// One parsed line of session input. Slots and problems are zero-based here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Step { slot: usize, delta: i32 },
    Select(usize),
    Check,
    Hint,
    Help,
    Quit,
    Redraw,
}

impl SessionCommand {
    /// Parse user input; numbers on screen are 1-based.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(SessionCommand::Redraw);
        }
        if let Some(rest) = line.strip_prefix('+') {
            return parse_number(rest, "slot").map(|slot| SessionCommand::Step { slot, delta: 1 });
        }
        if let Some(rest) = line.strip_prefix('-') {
            return parse_number(rest, "slot").map(|slot| SessionCommand::Step { slot, delta: -1 });
        }

        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let argument = parts.collect::<Vec<_>>().join(" ");
        match command {
            "p" | "problem" => parse_number(&argument, "problem").map(SessionCommand::Select),
            "c" | "check" => Ok(SessionCommand::Check),
            "h" | "hint" => Ok(SessionCommand::Hint),
            "?" | "help" => Ok(SessionCommand::Help),
            "q" | "quit" | "exit" => Ok(SessionCommand::Quit),
            other => Err(format!("unknown command: {other} (type ? for help)")),
        }
    }
}

fn parse_number(text: &str, what: &str) -> Result<usize, String> {
    match text.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("expected a {what} number starting at 1, got '{}'", text.trim())),
    }
}

/// Error text with 1-based numbers, as the user typed them.
fn on_screen(err: &DomainError) -> String {
    match err {
        DomainError::SlotOutOfRange { slot, slots } => {
            format!("no molecule {} (choose 1-{})", slot + 1, slots)
        }
        DomainError::ProblemNotFound { index, available } => {
            format!("no problem {} (choose 1-{})", index + 1, available)
        }
        other => other.to_string(),
    }
}

const HELP: &str = "\
  + <n>   increase coefficient n
  - <n>   decrease coefficient n
  p <n>   switch to problem n
  c       check the equation
  h       hint
  q       quit";

/// Drives one session until quit or end of input.
pub struct Session<'s, R, W> {
    service: &'s PuzzleService,
    settings: &'s Settings,
    input: R,
    output: W,
}

impl<'s, R: BufRead, W: Write> Session<'s, R, W> {
    pub fn new(service: &'s PuzzleService, settings: &'s Settings, input: R, output: W) -> Self {
        Self {
            service,
            settings,
            input,
            output,
        }
    }

    /// Run until `q` or end of input; returns the final state.
    #[instrument(skip_all, fields(problem = state.problem_index()))]
    pub fn run(mut self, mut state: PuzzleState<'static>) -> InfraResult<PuzzleState<'static>> {
        self.draw(&state)?;
        loop {
            if state.is_solved() {
                self.write(&render::render_success())?;
                let Some(line) = self.read_line()? else { break };
                if matches!(SessionCommand::parse(&line), Ok(SessionCommand::Quit)) {
                    break;
                }
                state = state.dismiss_success();
                self.draw(&state)?;
                continue;
            }

            self.prompt()?;
            let Some(line) = self.read_line()? else { break };
            let command = match SessionCommand::parse(&line) {
                Ok(command) => command,
                Err(message) => {
                    self.warn(&message)?;
                    continue;
                }
            };
            debug!("session command: {:?}", command);

            match command {
                SessionCommand::Step { slot, delta } => match state.apply_delta(slot, delta) {
                    Ok(next) => {
                        state = next;
                        self.draw(&state)?;
                    }
                    Err(e) => self.warn(&on_screen(&e))?,
                },
                SessionCommand::Select(index) => match state.select_problem(index) {
                    Ok(next) => {
                        state = next;
                        self.draw(&state)?;
                    }
                    Err(e) => self.warn(&on_screen(&e))?,
                },
                SessionCommand::Check => {
                    let (next, verdict) = state.check();
                    state = next;
                    if let Verdict::Unbalanced { mismatched } = verdict {
                        self.write(&render::render_failure_notice(&mismatched))?;
                        // blocks until acknowledged
                        if self.read_line()?.is_none() {
                            break;
                        }
                        self.draw(&state)?;
                    }
                }
                SessionCommand::Hint => match self.service.hint(&state) {
                    Some(hint) => self.write(&format!(
                        "{} [{}] {}: {} → {}",
                        "hint".yellow().bold(),
                        hint.slot + 1,
                        hint.formula,
                        hint.current,
                        hint.suggested
                    ))?,
                    None => self.write(&"no hint: the atom counts already match".dimmed())?,
                },
                SessionCommand::Help => self.write(HELP)?,
                SessionCommand::Quit => break,
                SessionCommand::Redraw => self.draw(&state)?,
            }
        }
        Ok(state)
    }

    fn draw(&mut self, state: &PuzzleState<'_>) -> InfraResult<()> {
        let board = render::render_board(state, self.settings);
        self.write(&board)
    }

    fn prompt(&mut self) -> InfraResult<()> {
        write!(self.output, "\n{} ", ">".cyan())
            .and_then(|_| self.output.flush())
            .map_err(|e| InfraError::io("write session output", e))
    }

    fn warn(&mut self, msg: &(impl std::fmt::Display + ?Sized)) -> InfraResult<()> {
        self.write(&format!("{}: {}", "Warning".yellow(), msg))
    }

    fn write(&mut self, msg: &(impl std::fmt::Display + ?Sized)) -> InfraResult<()> {
        writeln!(self.output, "{}", msg).map_err(|e| InfraError::io("write session output", e))
    }

    fn read_line(&mut self) -> InfraResult<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| InfraError::io("read session input", e))?;
        Ok((read > 0).then_some(line))
    }
}
