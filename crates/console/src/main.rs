mod input;

use std::sync::Arc;

use input::{Command, HELP};
use profile_follow_services::services::{
    app::FollowApp,
    follow_config::FollowConfig,
    graphql::ProfileService,
    store::{Action, ViewModel},
    view::PageView,
};
use profile_follow_utils::logging::init_tracing;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};

fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    init_tracing("info")?;
    match dotenv {
        Ok(path) => tracing::info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => tracing::warn!("Failed to load .env file: {}", e),
    }

    // One event loop: the store is only touched from this thread.
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run())
}

async fn run() -> anyhow::Result<()> {
    let config = FollowConfig::from_env()?;
    tracing::info!(
        "Starting profile-follow v{} against {}",
        env!("CARGO_PKG_VERSION"),
        config.endpoint
    );

    let viewer_login = config.viewer_login.clone();
    let service = ProfileService::new(config)?;
    let mut app = FollowApp::new(Arc::new(service), viewer_login);
    let mut updates = app.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    app.dispatch(Action::Start);
    render(&mut stdout, app.model()).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("stdin closed, exiting");
                    break;
                };
                match Command::parse(&line) {
                    Command::Quit => break,
                    Command::Help => {
                        stdout.write_all(format!("{HELP}\n\n").as_bytes()).await?;
                        stdout.flush().await?;
                    }
                    Command::ToggleFollow => app.dispatch(Action::ToggleFollow),
                    Command::Search(term) => {
                        app.dispatch(Action::EditDraft(term));
                        app.dispatch(Action::SubmitSearch);
                    }
                }
            }
            () = app.process_next_completion() => {}
            changed = updates.changed() => {
                changed?;
                let model = updates.borrow_and_update().clone();
                render(&mut stdout, &model).await?;
            }
        }
    }

    Ok(())
}

async fn render(stdout: &mut Stdout, model: &ViewModel) -> std::io::Result<()> {
    let page = PageView::from_model(model);
    stdout.write_all(format!("{page}\n\n").as_bytes()).await?;
    stdout.flush().await
}
