use clap::Parser;
use dotenv::dotenv;
use indicatif::{ProgressBar, ProgressStyle};
use std::error::Error;
use tokio::fs::OpenOptions;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::time::Duration;
use tracing::{error, info};

use github_user_search_lib::{
    render_error, render_note, render_session, render_user, Args, Completion, PendingFetch,
    SearchConfig, SearchSession, Theme, UserFetcher,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    // Initialize the tracing logger on stderr, keeping stdout for results
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    // Load .env variables
    dotenv().ok();

    // Parse command line arguments
    let args = Args::parse();

    // Resolve the API base URL: environment first, then --api-url
    let mut config = SearchConfig::from_env().with_timeout(Duration::from_secs(args.timeout));
    if let Some(url) = &args.api_url {
        config = config.with_api_url(url.as_str());
    }
    info!("Searching users via {}", config.search_url());

    // Create HTTP client
    let fetcher = UserFetcher::new(config)?;
    let theme = if args.dark { Theme::Dark } else { Theme::Light };
    let mut session = SearchSession::with_theme(theme);

    // Start the search with page 1
    let Some(pending) = session.submit(args.criteria()) else {
        error!("No search criteria given");
        return Err("provide at least one of --username, --location or --min-repos".into());
    };

    // Create a spinner style shared by every request
    let spinner_style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")?
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

    let completion = fetch_with_spinner(&mut session, &fetcher, pending, &spinner_style).await;
    print!("{}", render_session(&session));
    if completion == Completion::Exhausted {
        println!("{}", render_note("No users found.", session.theme()));
    }

    let mut pages_loaded = 1;
    let mut stdin = BufReader::new(tokio::io::stdin()).lines();

    // Load further pages, either on request or up to --pages
    loop {
        if args.interactive {
            if session.is_exhausted() {
                break;
            }
            eprint!("[Enter] load more, [t] toggle theme, [q] quit: ");
            let Some(line) = stdin.next_line().await? else {
                break;
            };
            match line.trim() {
                "q" => break,
                "t" => {
                    session.toggle_theme();
                    print!("{}", render_session(&session));
                    continue;
                }
                _ => {}
            }
        } else if pages_loaded >= args.pages {
            break;
        }

        // Nothing left to ask for once the search failed or ran out
        let Some(pending) = session.load_more() else {
            break;
        };
        let completion = fetch_with_spinner(&mut session, &fetcher, pending, &spinner_style).await;
        pages_loaded += 1;

        // Print only what this page added
        match completion {
            Completion::Loaded { added } => {
                let results = session.results();
                for user in &results[results.len() - added..] {
                    println!("{}", render_user(user, session.theme()));
                }
            }
            Completion::Exhausted => {
                println!("{}", render_note("No more users.", session.theme()))
            }
            Completion::Failed(e) => println!("{}", render_error(e, session.theme())),
            Completion::Discarded => {}
        }
    }

    // Write results to file
    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(session.results())?;
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .await?;
        file.write_all(json.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await?;
        info!("Saved {} users to '{}'", session.results().len(), path);
    }

    Ok(())
}

/// Run one fetch while showing a spinner.
async fn fetch_with_spinner(
    session: &mut SearchSession,
    fetcher: &UserFetcher,
    pending: PendingFetch,
    style: &ProgressStyle,
) -> Completion {
    let pb = ProgressBar::new_spinner();
    pb.set_style(style.clone());
    pb.set_message(format!("Searching... page {}", pending.page));
    pb.enable_steady_tick(Duration::from_millis(80));

    let completion = session.run(fetcher, pending).await;

    pb.finish_and_clear();
    completion
}
