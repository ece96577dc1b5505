//! Command dispatch: maps parsed arguments onto services and renderers

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::generate;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::services::PuzzleService;
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::render;
use crate::cli::session::Session;
use crate::config::{global_config_path, Settings};
use crate::domain::{MoleculeInfo, ReactionProblem, Side};
use crate::exitcode;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::SelectionItem;
use crate::infrastructure::InfraError;

/// Run the parsed command; returns the process exit code.
pub fn execute_command(cli: &Cli) -> CliResult<i32> {
    if let Some(Commands::Completion { shell }) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(exitcode::OK);
    }

    let settings = Settings::load(cli.config.as_deref())?;
    if cli.no_color || !settings.color {
        colored::control::set_override(false);
    }
    let container = ServiceContainer::new(settings);

    match &cli.command {
        None => cmd_play(&container, None),
        Some(Commands::Play { problem }) => cmd_play(&container, *problem),
        Some(Commands::Select) => cmd_select(&container),
        Some(Commands::List) => cmd_list(&container.puzzle),
        Some(Commands::Show {
            problem,
            coefficients,
        }) => cmd_show(&container, *problem, coefficients),
        Some(Commands::Check {
            problem,
            coefficients,
        }) => cmd_check(&container.puzzle, *problem, coefficients),
        Some(Commands::Audit) => cmd_audit(&container.puzzle),
        Some(Commands::Config { command }) => cmd_config(&container.settings, command),
        Some(Commands::Completion { .. }) => Ok(exitcode::OK),
    }
}

/// Convert a 1-based problem number into a catalog index.
fn problem_index(service: &PuzzleService, number: usize) -> CliResult<usize> {
    let available = service.problems().len();
    if (1..=available).contains(&number) {
        Ok(number - 1)
    } else {
        Err(CliError::InvalidArgs(format!(
            "problem {number} not found, choose 1..={available}"
        )))
    }
}

#[instrument(skip(container))]
fn cmd_play(container: &ServiceContainer, problem: Option<usize>) -> CliResult<i32> {
    let number = problem.unwrap_or(container.settings.default_problem);
    let index = problem_index(&container.puzzle, number)?;
    play(container, index)
}

fn play(container: &ServiceContainer, index: usize) -> CliResult<i32> {
    let state = container.puzzle.start(index)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = Session::new(
        &container.puzzle,
        &container.settings,
        stdin.lock(),
        stdout.lock(),
    );
    let last = session.run(state)?;
    debug!(
        "session ended: problem={} solved={}",
        last.problem_index(),
        last.is_solved()
    );
    Ok(exitcode::OK)
}

/// Picker rows for the catalog: `1 水の合成  (H₂ + O₂ → H₂O)`.
pub fn selection_items(problems: &[ReactionProblem]) -> Vec<SelectionItem> {
    problems
        .iter()
        .enumerate()
        .map(|(index, problem)| SelectionItem {
            display: format!(
                "{} {}  ({})",
                index + 1,
                problem.title,
                equation_text(problem)
            ),
            value: index,
        })
        .collect()
}

/// Ask the container's selector for a problem; `None` when cancelled.
pub fn pick_problem(container: &ServiceContainer) -> CliResult<Option<usize>> {
    let items = selection_items(container.puzzle.problems());
    let selected = container
        .selector
        .select_one(&items, "problem> ")
        .map_err(|message| InfraError::Selector { message })?;
    Ok(selected.map(|item| item.value))
}

#[instrument(skip(container))]
fn cmd_select(container: &ServiceContainer) -> CliResult<i32> {
    match pick_problem(container)? {
        Some(index) => play(container, index),
        None => {
            output::info("No problem selected");
            Ok(exitcode::OK)
        }
    }
}

#[instrument(skip(service))]
fn cmd_list(service: &PuzzleService) -> CliResult<i32> {
    let mut root = Tree::new(render::APP_TITLE.to_string());
    for (index, problem) in service.problems().iter().enumerate() {
        let mut node = Tree::new(format!("{} {}", index + 1, problem.title));
        let sides = [
            (Side::Left, render::LEFT_HEADING),
            (Side::Right, render::RIGHT_HEADING),
        ];
        for (side, heading) in sides {
            let leaves = problem.side(side).iter().map(|molecule| {
                let composition = molecule
                    .atoms
                    .iter()
                    .map(|(atom, count)| format!("{atom}×{count}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                Tree::new(format!(
                    "{}  {}  [{}]",
                    molecule.formula, molecule.name, composition
                ))
            });
            node.push(Tree::new(heading.to_string()).with_leaves(leaves));
        }
        root.push(node);
    }
    output::info(&root);
    Ok(exitcode::OK)
}

#[instrument(skip(container))]
fn cmd_show(container: &ServiceContainer, problem: usize, coefficients: &[u32]) -> CliResult<i32> {
    let index = problem_index(&container.puzzle, problem)?;
    let values = (!coefficients.is_empty()).then_some(coefficients);
    let state = container.puzzle.start_with(index, values)?;
    output::info(&render::render_board(&state, &container.settings));
    Ok(exitcode::OK)
}

#[instrument(skip(service))]
fn cmd_check(service: &PuzzleService, problem: usize, coefficients: &[u32]) -> CliResult<i32> {
    let index = problem_index(service, problem)?;
    let evaluation = service.evaluate(index, coefficients)?;
    let problem = service.problem(index).map_err(ApplicationError::from)?;

    output::info(&render::render_equation(problem, coefficients));
    output::info(&render::render_diagnostics(&evaluation.rows));
    if evaluation.balanced {
        output::success(render::SUCCESS_TITLE);
        Ok(exitcode::OK)
    } else {
        output::failure(render::FAILURE_NOTICE);
        Ok(exitcode::UNBALANCED)
    }
}

#[instrument(skip(service))]
fn cmd_audit(service: &PuzzleService) -> CliResult<i32> {
    let entries = service.audit_catalog();
    output::header(&format!("Catalog audit ({} problems)", entries.len()));
    for entry in &entries {
        let label = format!("{} {}", entry.index + 1, entry.title);
        match entry.balanced {
            Some(true) => output::success(&label),
            Some(false) => output::failure(&format!(
                "{label}: reference coefficients do not balance"
            )),
            None => output::failure(&format!(
                "{label}: {} reference coefficients for {} slots",
                entry.reference_len, entry.slot_count
            )),
        }
    }
    if entries.iter().all(|entry| entry.is_ok()) {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::UNBALANCED)
    }
}

fn cmd_config(settings: &Settings, command: &ConfigCommands) -> CliResult<i32> {
    match command {
        ConfigCommands::Show => {
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Init { force } => {
            let path = global_config_path()
                .ok_or_else(|| CliError::Usage("cannot determine config directory".into()))?;
            if path.exists() && !force {
                output::warning(&format!(
                    "{} exists, use --force to overwrite",
                    path.display()
                ));
                return Ok(exitcode::USAGE);
            }
            Settings::write_template(&path)?;
            output::action("Created", &path.display());
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => {
                let state = if path.exists() { "exists" } else { "not found" };
                output::detail(&format!("global: {} ({state})", path.display()));
            }
            None => output::warning("no config directory on this platform"),
        },
    }
    io::stdout()
        .flush()
        .map_err(|e| InfraError::io("flush stdout", e))?;
    Ok(exitcode::OK)
}

/// Plain equation text for selector rows, e.g. `H₂ + O₂ → H₂O`.
fn equation_text(problem: &ReactionProblem) -> String {
    let side = |molecules: &[MoleculeInfo]| {
        molecules
            .iter()
            .map(|m| m.formula)
            .collect::<Vec<_>>()
            .join(" + ")
    };
    format!("{} → {}", side(problem.left), side(problem.right))
}
