use std::io::{self, IsTerminal, Write};

use crate::error::{AppError, AppResult};

pub fn is_interactive() -> bool {
    io::stdin().is_terminal()
}

/// Prompts until a non-empty answer is given. Fails when stdin is not a terminal.
pub fn prompt_required(prompt: &str, flag: &str) -> AppResult<String> {
    ensure_interactive(flag)?;
    loop {
        let value = prompt_line(prompt)?;
        if !value.is_empty() {
            return Ok(value);
        }
        eprintln!("value is required");
    }
}

pub fn prompt_optional(prompt: &str, flag: &str) -> AppResult<String> {
    ensure_interactive(flag)?;
    prompt_line(prompt)
}

/// Prints a numbered menu and reads a 1-based choice.
pub fn prompt_choice(title: &str, items: &[String], flag: &str) -> AppResult<usize> {
    ensure_interactive(flag)?;
    println!("{title}");
    for (index, item) in items.iter().enumerate() {
        println!("{}. {item}", index + 1);
    }

    let answer = prompt_line("Select number: ")?;
    answer
        .parse::<usize>()
        .map_err(|_| AppError::InvalidInput(format!("invalid selection `{answer}`")))
}

fn ensure_interactive(flag: &str) -> AppResult<()> {
    if is_interactive() {
        return Ok(());
    }

    Err(AppError::InvalidInput(format!(
        "{flag} is required when stdin is not a terminal"
    )))
}

fn prompt_line(prompt: &str) -> AppResult<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt}")?;
    stdout.flush()?;

    let mut value = String::new();
    if io::stdin().read_line(&mut value)? == 0 {
        return Err(AppError::InvalidInput(
            "stdin closed before an answer was given".to_string(),
        ));
    }
    Ok(value.trim().to_string())
}
