//! Command-line argument definition and processing.

use clap::Parser;

/// guitarshop - browse a guitar shop catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "guitarshop")]
#[command(version)]
#[command(about = "Browse guitar brands, models, specs and musicians from the terminal", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// GraphQL endpoint to query instead of the one in settings.conf
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Print every brand and exit
    #[arg(short, long)]
    pub brands: bool,

    /// Print one page of a brand's models and exit (e.g., guitarshop -m BRAND_ID)
    #[arg(short, long, value_name = "BRAND_ID")]
    pub models: Option<String>,

    /// Search text for --models
    #[arg(short, long)]
    pub search: Option<String>,

    /// Type filter for --models (all, electric, acoustic, bass, classical)
    #[arg(short = 't', long = "type", default_value = "all")]
    pub r#type: String,

    /// One-based page for --models
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Print one model's details and exit
    #[arg(short, long, num_args = 2, value_names = ["BRAND_ID", "MODEL_ID"])]
    pub details: Vec<String>,
}

/// What: Run the print-and-exit mode selected on the command line, if any.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `Some(exit_code)` when a print mode ran, `None` to continue into the TUI.
///
/// Details:
/// - Modes are checked in the order brands, models, details; the first one given wins.
pub async fn process_args(args: &Args) -> Option<i32> {
    use crate::args::catalog;

    if args.brands {
        return Some(catalog::handle_brands(args.endpoint.clone()).await);
    }

    if let Some(brand_id) = &args.models {
        return Some(
            catalog::handle_models(
                args.endpoint.clone(),
                brand_id,
                args.search.as_deref().unwrap_or_default(),
                &args.r#type,
                args.page,
            )
            .await,
        );
    }

    if let [brand_id, model_id] = args.details.as_slice() {
        return Some(catalog::handle_details(args.endpoint.clone(), brand_id, model_id).await);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Print-mode flags parse into the expected fields
    ///
    /// - Input: `--models b1 --search strat --type bass --page 2`
    /// - Output: Fields populated; defaults untouched
    fn parses_models_flags() {
        let args = Args::try_parse_from([
            "guitarshop",
            "--models",
            "b1",
            "--search",
            "strat",
            "--type",
            "bass",
            "--page",
            "2",
        ])
        .expect("parse");
        assert_eq!(args.models.as_deref(), Some("b1"));
        assert_eq!(args.search.as_deref(), Some("strat"));
        assert_eq!(args.r#type, "bass");
        assert_eq!(args.page, 2);
        assert!(!args.brands);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn details_takes_exactly_two_ids() {
        let args =
            Args::try_parse_from(["guitarshop", "--details", "b1", "m7"]).expect("parse");
        assert_eq!(args.details, vec!["b1".to_string(), "m7".to_string()]);
        assert!(Args::try_parse_from(["guitarshop", "--details", "b1"]).is_err());
    }

    #[test]
    fn no_flags_means_tui() {
        let args = Args::try_parse_from(["guitarshop"]).expect("parse");
        assert!(args.details.is_empty());
        assert!(args.models.is_none());
        assert_eq!(args.page, 1);
        assert_eq!(args.r#type, "all");
    }
}
