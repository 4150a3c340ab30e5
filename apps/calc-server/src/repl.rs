//! Interactive calculator loop on stdin/stdout.
//!
//! Reads an operator symbol (or `quit`), then two operands, and prints the
//! result or the error. Bad input never ends the loop; EOF and `quit` do.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use calc_core::{evaluate, Operation};

/// Run the read-evaluate-print loop until `quit` or EOF.
///
/// # Errors
/// Fails only on stdin/stdout I/O errors; user input mistakes are reported
/// and the loop continues.
pub fn run() -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to Calculator!");
    println!("Available operations: +, -, *, /, ^");
    println!("Enter 'quit' to exit");

    loop {
        let Some(symbol) = prompt(&mut lines, "\nEnter operation (+, -, *, /, ^): ")? else {
            println!("\nGoodbye!");
            break;
        };

        if symbol.eq_ignore_ascii_case("quit") {
            println!("Goodbye!");
            break;
        }

        let Some(operation) = Operation::from_symbol(&symbol) else {
            println!("Invalid operation. Please use +, -, *, /, or ^");
            continue;
        };

        let num1 = match read_number(&mut lines, "Enter first number: ")? {
            None => {
                println!("\nGoodbye!");
                break;
            }
            Some(Err(raw)) => {
                println!("{}", bad_number_message(&raw));
                continue;
            }
            Some(Ok(n)) => n,
        };

        let num2 = match read_number(&mut lines, "Enter second number: ")? {
            None => {
                println!("\nGoodbye!");
                break;
            }
            Some(Err(raw)) => {
                println!("{}", bad_number_message(&raw));
                continue;
            }
            Some(Ok(n)) => n,
        };

        match evaluate(operation, num1, num2) {
            Ok(result) => println!("Result: {result}"),
            Err(e) => println!("Error: {e}"),
        }
    }

    Ok(())
}

/// Error line for operand text that does not parse as a number.
fn bad_number_message(raw: &str) -> String {
    format!("Error: '{raw}' is not a number")
}

/// Print a prompt and read one trimmed line; `None` on EOF.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_owned())),
        None => Ok(None),
    }
}

/// Read one operand; outer `None` on EOF, inner `Err` carries the raw text
/// when it does not parse as a number.
fn read_number(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> Result<Option<std::result::Result<f64, String>>> {
    let Some(raw) = prompt(lines, text)? else {
        return Ok(None);
    };
    Ok(Some(raw.parse::<f64>().map_err(|_| raw)))
}
