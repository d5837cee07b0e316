use colored::*;
use keyrank::core::ScoredKeyword;
use keyrank::scoring::{InflectionPoint, STALE_AFTER_MINUTES};
use serde_json::json;

pub struct CliColors;

impl CliColors {
    pub fn error() -> Color {
        Color::TrueColor {
            r: 239,
            g: 68,
            b: 68,
        }
    }

    pub fn warning() -> Color {
        Color::TrueColor {
            r: 245,
            g: 158,
            b: 11,
        }
    }

    pub fn info() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }

    pub fn muted() -> Color {
        Color::TrueColor {
            r: 148,
            g: 163,
            b: 184,
        }
    }

    pub fn keyword() -> Color {
        Color::TrueColor {
            r: 168,
            g: 85,
            b: 247,
        }
    }
}

pub fn format_error(msg: &str) -> String {
    format!(
        "{} {}",
        "✗".color(CliColors::error()).bold(),
        msg.color(CliColors::error())
    )
}

pub fn format_warning(msg: &str) -> String {
    format!(
        "{} {}",
        "⚠".color(CliColors::warning()).bold(),
        msg.color(CliColors::warning())
    )
}

pub fn format_info(msg: &str) -> String {
    format!(
        "{} {}",
        "ℹ".color(CliColors::info()).bold(),
        msg.color(CliColors::info())
    )
}

/// Print an error on stderr, as JSON in machine mode
pub fn output_error(error: &keyrank::KeyrankError, output_format: &str) {
    if output_format == "json" {
        let code = match error {
            keyrank::KeyrankError::Scoring(_) => "SCORING_ERROR",
            keyrank::KeyrankError::Configuration(_) => "CONFIGURATION_ERROR",
            keyrank::KeyrankError::Logging(_) => "LOGGING_ERROR",
            keyrank::KeyrankError::Other(_) => "OTHER_ERROR",
        };
        let error_response = json!({
            "error": true,
            "code": code,
            "message": error.to_string(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&error_response).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        eprintln!("{}", format_error(&error.to_string()));
    }
}

pub fn print_picks(picks: &[String], output_format: &str) {
    if output_format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "picks": picks }))
                .unwrap_or_else(|_| "{}".to_string())
        );
        return;
    }

    if picks.is_empty() {
        println!("{}", format_warning("No keywords to pick"));
        return;
    }

    for (position, keyword) in picks.iter().enumerate() {
        println!(
            "{} {}",
            format!("{:>3}.", position + 1).color(CliColors::muted()),
            keyword.color(CliColors::keyword()).bold()
        );
    }
}

pub fn print_ranking(ranking: &[ScoredKeyword], output_format: &str) {
    if output_format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(ranking).unwrap_or_else(|_| "[]".to_string())
        );
        return;
    }

    if ranking.is_empty() {
        println!("{}", format_warning("No keywords registered"));
        return;
    }

    println!(
        "{}",
        format!(
            "{:>3}  {:<32} {:>5} {:>8} {:>7} {:>7} {:>9}",
            "#", "KEYWORD", "RANK", "AGE", "TIME", "RANK%", "SCORE"
        )
        .bold()
    );
    for (position, scored) in ranking.iter().enumerate() {
        let age = format!("{}m", scored.score.age_minutes);
        let age = if scored.score.age_minutes > STALE_AFTER_MINUTES {
            age.color(CliColors::muted())
        } else {
            age.normal()
        };
        println!(
            "{:>3}  {:<32} {:>5} {:>8} {:>7.2} {:>7.2} {:>9.3}",
            position + 1,
            scored.entry.text.color(CliColors::keyword()),
            scored.entry.rank,
            age,
            scored.score.time,
            scored.score.rank,
            scored.score.composite
        );
    }
}

pub fn print_coefficient_table(output_format: &str) {
    if output_format == "json" {
        let rows: Vec<_> = InflectionPoint::all()
            .map(|point| {
                let coefficients = point.coefficients();
                json!({
                    "inflection_point": point.minutes(),
                    "a1": coefficients.a1,
                    "a2": coefficients.a2,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".to_string())
        );
        return;
    }

    println!("{}", format!("{:>6} {:>10} {:>10}", "POINT", "A1", "A2").bold());
    for point in InflectionPoint::all() {
        let coefficients = point.coefficients();
        println!(
            "{:>6} {:>10} {:>10}",
            point.to_string(),
            coefficients.a1,
            coefficients.a2
        );
    }
}
