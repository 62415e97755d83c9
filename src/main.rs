//! Thin command-line front end over `tablecalc-core`. Exists to exercise
//! the library interactively; none of the dependency-graph or evaluation
//! logic lives here.

mod error;

use std::io::{self, BufRead, Write};

use tablecalc_core::{CellValue, Position, Sheet};

use error::CliError;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        Some("-c") | Some("--command") => {
            let Some(formula) = args.get(1) else {
                eprintln!("usage: tablecalc -c '<formula>'");
                std::process::exit(2);
            };
            run_command_mode(formula)
        }
        Some(other) => {
            eprintln!("unrecognised argument: {other:?}");
            std::process::exit(2);
        }
        None => run_repl(),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// Evaluate a single formula against an otherwise-empty sheet and print its
/// value, for quick manual smoke-testing.
fn run_command_mode(formula: &str) -> Result<(), CliError> {
    let mut sheet = Sheet::new();
    let origin = Position::new(0, 0);
    sheet.set_cell(origin, &format!("={formula}"))?;
    let cell = sheet.get_cell(origin)?.expect("just written");
    let value = cell.get_value(&sheet);
    println!("{value}");
    if matches!(value, CellValue::Error(_)) {
        std::process::exit(1);
    }
    Ok(())
}

/// Read `<ref>=<text>` assignments from stdin, one per line, dumping the
/// sheet's evaluated values after each successful mutation. Errors are
/// reported to stderr without aborting the session.
fn run_repl() -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut sheet = Sheet::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match apply_assignment(&mut sheet, line) {
            Ok(()) => {
                let mut dump = String::new();
                sheet.print_values(&mut dump)?;
                write!(stdout, "{dump}")?;
                stdout.flush()?;
            }
            Err(err) => eprintln!("{err}"),
        }
    }
    Ok(())
}

fn apply_assignment(sheet: &mut Sheet, line: &str) -> Result<(), CliError> {
    let (reference, text) = line
        .split_once('=')
        .ok_or_else(|| CliError::BadAssignment(line.to_string()))?;
    let pos = Position::parse(reference).map_err(|e| CliError::Sheet(e.into()))?;
    sheet.set_cell(pos, text)?;
    Ok(())
}
