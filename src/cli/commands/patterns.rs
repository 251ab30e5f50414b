//! Patterns command - List the token shapes the detector knows about

use colored::Colorize;
use serde::Serialize;

use super::{OutputFormat, PatternsArgs};
use crate::detector::TOKEN_PATTERNS;
use crate::error::TokenLensError;
use crate::exit_codes;

#[derive(Serialize)]
struct PatternInfo<'a> {
    name: &'a str,
    description: &'a str,
    regex: &'a str,
}

pub fn execute(args: PatternsArgs) -> Result<i32, TokenLensError> {
    match args.format {
        OutputFormat::Json => {
            let patterns: Vec<PatternInfo> = TOKEN_PATTERNS
                .iter()
                .map(|p| PatternInfo {
                    name: p.name,
                    description: p.description,
                    regex: p.regex.as_str(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&patterns)?);
        }
        OutputFormat::Terminal => {
            println!("\n{}\n", "  KNOWN TOKEN SHAPES".bold());
            for pattern in TOKEN_PATTERNS.iter() {
                println!(
                    "  {} {}\n    {} {}",
                    "•".dimmed(),
                    pattern.name.cyan(),
                    "└─".dimmed(),
                    pattern.description.dimmed()
                );
            }
            println!();
        }
    }

    Ok(exit_codes::SUCCESS)
}
