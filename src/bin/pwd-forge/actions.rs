//! What each command and menu entry does.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use tokio_util::sync::CancellationToken;

use pwd_forge::{
    GenerationPolicy, Settings, StrengthReport, classes_in, ensure_sample_file,
    generate_and_score, pool, read_passwords, score,
};

pub fn print_report(report: &StrengthReport) {
    println!("Password Strength: {}", report.classification);
    println!("Score: {}/{}", report.score, StrengthReport::MAX_SCORE);
    if !report.feedback.is_empty() {
        println!("Analysis:");
        for item in &report.feedback {
            println!("- {}", item);
        }
    }
}

/// Generates a single password and prints its analysis.
pub fn generate_one(settings: &Settings, policy: &GenerationPolicy) -> Result<()> {
    let mut rng = settings.random_source.rng();
    let (password, report) = generate_and_score(policy, &mut *rng)?;
    let password = password.expose_secret();

    println!("\nGenerated Password: {}", password);
    if classes_in(password).len() < policy.selected_classes().len() {
        println!(
            "Note: length {} is too short to include every selected character class.",
            policy.length
        );
    }
    print_report(&report);
    Ok(())
}

/// Generates `count` passwords on the worker pool.
pub async fn generate_list(settings: &Settings, policy: GenerationPolicy, count: usize) -> Result<()> {
    let start = Instant::now();
    let results = pool::generate_many(
        vec![policy; count],
        settings.random_source,
        settings.workers,
        CancellationToken::new(),
    )
    .await?;
    let elapsed = start.elapsed();

    for result in results {
        let password = result?;
        println!("  - {}", password.expose_secret());
    }
    println!(
        "\nGenerated {} passwords in {:.4} seconds.",
        count,
        elapsed.as_secs_f64()
    );
    Ok(())
}

pub fn check_one(password: String) {
    let report = score(&SecretString::new(password.into()));
    println!();
    print_report(&report);
}

/// Scores every line of the batch file on the worker pool.
///
/// A sample file is written first if `path` does not exist yet.
pub async fn check_file(settings: &Settings, path: &Path) -> Result<()> {
    if ensure_sample_file(path)? {
        println!("Created a sample '{}' file for you.", path.display());
    }

    let passwords = read_passwords(path)
        .with_context(|| format!("could not load passwords from {}", path.display()))?;
    let shown: Vec<String> = passwords
        .iter()
        .map(|p| p.expose_secret().to_string())
        .collect();

    println!("Checking {} passwords from '{}'...", passwords.len(), path.display());
    let start = Instant::now();
    let reports = pool::score_many(passwords, settings.workers, CancellationToken::new()).await?;
    let elapsed = start.elapsed();

    for (pwd, report) in shown.iter().zip(&reports) {
        println!(
            "  - Password: {:<20} | Strength: {:<12} | Score: {}/{}",
            pwd,
            report.classification,
            report.score,
            StrengthReport::MAX_SCORE
        );
    }
    println!(
        "\nChecked {} passwords in {:.4} seconds.",
        reports.len(),
        elapsed.as_secs_f64()
    );
    Ok(())
}
