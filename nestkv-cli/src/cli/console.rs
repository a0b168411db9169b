// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Console and script handlers for NestKV
//!
//! Interactive mode when stdin is a terminal, otherwise lines are read from
//! stdin one by one. Either way end-of-input ends the session exactly like END.

use colored::Colorize;
use rustyline::{error::ReadlineError, CompletionType, Config, EditMode, Editor};
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::Path;

use nestkv::{StepOutcome, TransactionEngine};

use super::output::{Rendered, ResultFormatter};

/// Handle the default (console) command
pub fn handle_console(
    prompt: &str,
    history: Option<&Path>,
    formatter: &ResultFormatter,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = TransactionEngine::new();

    if io::stdin().is_terminal() {
        run_interactive(&mut engine, prompt, history, formatter)
    } else {
        let stdin = io::stdin();
        run_lines(
            &mut engine,
            stdin.lock(),
            formatter,
            &mut io::stdout(),
            &mut io::stderr(),
        )?;
        Ok(())
    }
}

/// Handle the exec command (run a script file)
pub fn handle_exec(
    path: &Path,
    formatter: &ResultFormatter,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::open(path).map_err(|e| format!("Failed to open script {:?}: {}", path, e))?;
    let mut engine = TransactionEngine::new();

    let executed = run_lines(
        &mut engine,
        BufReader::new(file),
        formatter,
        &mut io::stdout(),
        &mut io::stderr(),
    )?;
    log::debug!("Executed {} lines from {:?}", executed, path);
    Ok(())
}

/// Interactive read-eval-print loop
fn run_interactive(
    engine: &mut TransactionEngine,
    prompt: &str,
    history: Option<&Path>,
    formatter: &ResultFormatter,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::builder()
        .edit_mode(EditMode::Emacs)
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .auto_add_history(false)
        .build();

    let mut rl = Editor::<(), _>::with_config(config)?;

    if let Some(path) = history {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let _ = rl.load_history(path);
    }

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    loop {
        let line = match rl.readline(&console_prompt(prompt, engine.depth())) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                engine.terminate();
                break;
            }
            Err(err) => {
                engine.terminate();
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        };

        if !line.trim().is_empty() {
            rl.add_history_entry(line.as_str())?;
        }

        let outcome = engine.step(&line);
        emit(formatter, &outcome, &mut stdout, &mut stderr)?;
        if outcome.is_terminate() {
            break;
        }
    }

    if let Some(path) = history {
        let _ = rl.save_history(path);
    }

    Ok(())
}

/// Feed lines from `reader` to the engine until END or end of input.
///
/// Every line reaches the engine, blank ones included, exactly as typed
/// input would. Returns the number of lines executed.
pub fn run_lines<R, O, E>(
    engine: &mut TransactionEngine,
    reader: R,
    formatter: &ResultFormatter,
    out: &mut O,
    err: &mut E,
) -> io::Result<usize>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let mut executed = 0;

    for line in reader.lines() {
        let line = line?;
        executed += 1;
        let outcome = engine.step(&line);
        emit(formatter, &outcome, out, err)?;
        if outcome.is_terminate() {
            return Ok(executed);
        }
    }

    engine.terminate();
    Ok(executed)
}

fn emit<O: Write, E: Write>(
    formatter: &ResultFormatter,
    outcome: &StepOutcome,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    match formatter.render(outcome) {
        Some(Rendered::Stdout(text)) => writeln!(out, "{}", text),
        Some(Rendered::Stderr(text)) => writeln!(err, "{}", text),
        None => Ok(()),
    }
}

/// Prompt with the open transaction depth, e.g. `[2]> `
fn console_prompt(prompt: &str, depth: usize) -> String {
    if depth == 0 {
        prompt.to_string()
    } else {
        format!("[{}]{}", depth, prompt)
    }
}
