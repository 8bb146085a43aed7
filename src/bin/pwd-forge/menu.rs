//! Interactive menu loop.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use tracing::error;

use pwd_forge::{GenerationPolicy, Settings};

use crate::actions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    GenerateList,
    GenerateOne,
    CheckOne,
    CheckFile,
    Exit,
}

impl MenuChoice {
    const ENTRIES: [(MenuChoice, &'static str); 5] = [
        (MenuChoice::GenerateList, "Generate a list of secure passwords"),
        (MenuChoice::GenerateOne, "Generate one password with analysis"),
        (MenuChoice::CheckOne, "Check strength of a single password"),
        (MenuChoice::CheckFile, "Check strength of passwords from a file"),
        (MenuChoice::Exit, "Exit"),
    ];
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let index: usize = s.trim().parse().map_err(|_| ())?;
        index
            .checked_sub(1)
            .and_then(|i| Self::ENTRIES.get(i))
            .map(|(choice, _)| *choice)
            .ok_or(())
    }
}

/// Prints `message` and reads one line. `None` on end of input.
fn prompt(message: &str) -> io::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

pub async fn run_menu(settings: &Settings) -> Result<()> {
    println!(
        "--- Welcome to pwd-forge (using {} workers) ---",
        settings.workers
    );
    let policy = GenerationPolicy::with_length(settings.default_length);

    loop {
        println!("\nMenu:");
        for (i, (_, label)) in MenuChoice::ENTRIES.iter().enumerate() {
            println!("{}. {}", i + 1, label);
        }
        let Some(input) = prompt("Please enter your choice: ")? else {
            break;
        };

        let outcome = match input.parse::<MenuChoice>() {
            Ok(MenuChoice::GenerateList) => {
                let Some(count) = prompt("How many passwords to generate? ")? else {
                    break;
                };
                match count.trim().parse::<usize>() {
                    Ok(count) => actions::generate_list(settings, policy, count).await,
                    Err(_) => {
                        println!("Invalid number. Please enter an integer.");
                        Ok(())
                    }
                }
            }
            Ok(MenuChoice::GenerateOne) => actions::generate_one(settings, &policy),
            Ok(MenuChoice::CheckOne) => {
                let Some(password) = prompt("\nEnter the password to check: ")? else {
                    break;
                };
                actions::check_one(password);
                Ok(())
            }
            Ok(MenuChoice::CheckFile) => actions::check_file(settings, &settings.batch_path).await,
            Ok(MenuChoice::Exit) => break,
            Err(()) => {
                println!("Invalid choice. Please try again.");
                Ok(())
            }
        };

        if let Err(e) = outcome {
            error!("{:#}", e);
            println!("An error occurred: {:#}", e);
        }
    }

    println!("Exiting pwd-forge. Stay secure!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::GenerateList));
        assert_eq!(" 3 ".parse::<MenuChoice>(), Ok(MenuChoice::CheckOne));
        assert_eq!("5".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
    }

    #[test]
    fn test_menu_choice_rejects_invalid_input() {
        for input in ["", "0", "6", "exit", "-1"] {
            assert!(input.parse::<MenuChoice>().is_err(), "{input:?}");
        }
    }
}
