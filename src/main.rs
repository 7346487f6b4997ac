use clap::Parser;
use colored::*;
use std::process;

use bias_lens::cli::{self, Args};
use bias_lens::BiasSession;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let config = match cli::resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Config error:".bright_red(), e);
            process::exit(1);
        }
    };

    let trigger = cli::resolve_trigger(&args);
    if trigger.is_none() && args.source_check.is_none() {
        eprintln!(
            "{}",
            "Nothing to do. Pass --text, --url, --selection, or --source-check.".bright_red()
        );
        process::exit(2);
    }

    println!("{}", "BIAS LENS".bright_cyan().bold());
    println!("{}: {}", "Service".bright_yellow(), config.base_url);

    let mut session = BiasSession::new(config);
    let mut failed = false;

    if let Some(trigger) = trigger {
        if let Err(e) = session.submit_analysis(&trigger).await {
            eprintln!("{} {}", "Analysis failed:".bright_red(), e);
            failed = true;
        }
    }

    if let Some(url) = &args.source_check {
        if let Err(e) = session.submit_source_check(url).await {
            eprintln!("{} {}", "Source check failed:".bright_red(), e);
            failed = true;
        }
    }

    if args.show_rewritten {
        session.toggle_view();
        session.print_last();
    }

    if args.flag {
        println!("{}", session.flag_article().bright_magenta());
    }

    if failed {
        process::exit(1);
    }
}
