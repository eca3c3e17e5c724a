use anyhow::Result;
use clap::Parser;

use release_prune::boundary::BoundaryWarning;
use release_prune::config;
use release_prune::host::{GithubHost, ReleaseHost};
use release_prune::selector;
use release_prune::strategy::Strategy;
use release_prune::ui;

#[derive(clap::Parser)]
#[command(
    name = "release-prune",
    about = "Select which releases of a repository to keep and prune the rest"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Repository in <owner>/<name> form")]
    repo: Option<String>,

    #[arg(short, long, help = "Retention strategy to apply")]
    strategy: Option<String>,

    #[arg(short, long, help = "API token (falls back to config file, then GITHUB_TOKEN)")]
    token: Option<String>,

    #[arg(long, help = "Delete the releases selected for removal")]
    execute: bool,

    #[arg(short, long, help = "Skip confirmation prompts")]
    force: bool,

    #[arg(long, help = "Show the recognized strategies and exit")]
    list: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("release-prune {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if args.list {
        ui::display_strategies();
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Decode the strategy before any network traffic so a bad token
    // aborts without touching the API
    let strategy_token = args
        .strategy
        .clone()
        .unwrap_or_else(|| config.strategy.clone());
    let strategy = match strategy_token.parse::<Strategy>() {
        Ok(strategy) => strategy,
        Err(e) => {
            ui::display_error(&e.to_string());
            ui::display_strategies();
            std::process::exit(1);
        }
    };

    let slug = match args.repo.clone().or_else(|| config.repository.clone()) {
        Some(slug) => slug,
        None => {
            ui::display_error("No repository specified (use --repo or set it in releaseprune.toml)");
            std::process::exit(1);
        }
    };
    let (owner, repo) = match config::parse_repository(&slug) {
        Ok(parts) => parts,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let token = config::resolve_token(args.token.clone(), &config);
    if token.is_none() {
        ui::display_boundary_warning(&BoundaryWarning::MissingToken);
    }

    let host = match GithubHost::new(&config.github.api_url, &owner, &repo, token) {
        Ok(host) => host,
        Err(e) => {
            ui::display_error(&format!("Failed to build API client: {}", e));
            std::process::exit(1);
        }
    };

    ui::display_status(&format!("Fetching releases from {}/{}...", owner, repo));
    let releases = match host.list_releases() {
        Ok(releases) => releases,
        Err(e) => {
            ui::display_error(&format!("Failed to list releases: {}", e));
            std::process::exit(1);
        }
    };
    ui::display_success(&format!("Found {} release(s)", releases.len()));

    if releases.is_empty() {
        ui::display_boundary_warning(&BoundaryWarning::NoReleases {
            repository: format!("{}/{}", owner, repo),
        });
        return Ok(());
    }

    let result = selector::select(&releases, &strategy);

    if !result.non_semver_tags.is_empty() {
        ui::display_boundary_warning(&BoundaryWarning::NonSemverTags {
            count: result.non_semver_tags.len(),
        });
    }

    ui::display_selection_report(&result, &strategy);

    if !args.execute {
        ui::display_status("Report-only mode: nothing was deleted. Re-run with --execute to delete.");
        return Ok(());
    }

    if result.delete.is_empty() {
        ui::display_success("Nothing to delete");
        return Ok(());
    }

    if !args.force {
        let prompt = format!(
            "Delete {} release(s) from {}/{}?",
            result.delete.len(),
            owner,
            repo
        );
        if !ui::confirm_action(&prompt)? {
            println!("Operation cancelled by user.");
            return Ok(());
        }
    }

    // Fail-closed: the first failed delete aborts the run
    for release in &result.delete {
        ui::display_status(&format!("Deleting release: {}", release.tag_name));
        if let Err(e) = host.delete_release(release) {
            ui::display_error(&format!(
                "Failed to delete release '{}': {}",
                release.tag_name, e
            ));
            std::process::exit(1);
        }
        ui::display_success(&format!("Deleted release: {}", release.tag_name));
    }

    println!(
        "\n\x1b[32m✓\x1b[0m Deleted {} release(s) from {}/{}\n",
        result.delete.len(),
        owner,
        repo
    );

    Ok(())
}
