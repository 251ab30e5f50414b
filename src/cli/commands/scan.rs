//! Scan command - Detect and analyze leaked GitHub tokens in a file

use colored::Colorize;

use super::{OutputFormat, ScanArgs};
use crate::analysis::{Classifier, Pipeline};
use crate::cli::output::{JsonOutput, ReportRenderer, TerminalOutput};
use crate::error::{OutputError, ScanError, TokenLensError};
use crate::exit_codes;
use crate::providers::GitHubResolver;

pub async fn execute(args: ScanArgs) -> Result<i32, TokenLensError> {
    // The API credential must be configured before a scan runs. Analysis
    // itself authenticates with each discovered candidate, so the value is
    // only checked here, at the boundary.
    if args.token.as_deref().map_or(true, |t| t.trim().is_empty()) {
        eprintln!(
            "{} GITHUB_TOKEN is not set (or pass --token)",
            "Error:".red().bold()
        );
        return Ok(exit_codes::CONFIG_ERROR);
    }

    let path = args.file.display().to_string();

    // Lossy decoding: malformed bytes become replacement characters, which
    // the detector treats as boundaries. A missing file is a usage error.
    let text = match std::fs::read(&args.file) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            let err = TokenLensError::from(ScanError::FileRead {
                path: path.clone(),
                source: e,
            });
            eprintln!("{} {}", "Error:".red().bold(), err);
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    // Assemble the pipeline
    let classifier = match args.high_risk_scopes {
        Some(scopes) => Classifier::with_high_risk_scopes(scopes),
        None => Classifier::new(),
    };
    let pipeline = Pipeline::new(GitHubResolver::new(), classifier);

    let report = pipeline.run(&path, &text).await;

    // Render the report
    let renderer: Box<dyn ReportRenderer> = match args.format {
        OutputFormat::Json => Box::new(JsonOutput::new()),
        OutputFormat::Terminal => Box::new(TerminalOutput::new()),
    };
    let rendered = renderer.render_report(&report)?;

    match args.output {
        Some(output_path) => {
            std::fs::write(&output_path, &rendered).map_err(|e| OutputError::FileWrite {
                path: output_path.display().to_string(),
                source: e,
            })?;
            eprintln!(
                "{} Report written to: {}",
                "Success:".green().bold(),
                output_path.display().to_string().cyan()
            );
        }
        None => println!("{}", rendered),
    }

    // Exit code for CI integration: any detected token is a finding,
    // whether or not it still resolves.
    let exit_code = if report.tokens_found > 0 {
        exit_codes::TOKENS_FOUND
    } else {
        exit_codes::SUCCESS
    };

    Ok(exit_code)
}
