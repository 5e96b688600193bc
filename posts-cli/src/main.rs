use std::process;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use posts_client::{FeedState, FeedView, PostSource, PostsClient, Presentation};
use tracing::info;

mod logging;
mod render;
mod settings;

use logging::init_logging;
use render::render;
use settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "posts-cli", version, about = "Первые публикации JSONPlaceholder в терминале")]
struct Cli {
    /// Адрес списка постов (иначе POSTS_API_URL или JSONPlaceholder).
    #[arg(long)]
    endpoint: Option<String>,

    /// Оформление карточек: tailwind (с автором) или bootstrap (компактно).
    #[arg(long, default_value_t = Presentation::Tailwind)]
    style: Presentation,

    /// Вывести загруженные посты как JSON вместо карточек.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let settings = Settings::from_env()?.with_endpoint(cli.endpoint)?;
    init_logging(&settings.log_level)?;

    let client = PostsClient::with_timeouts(
        settings.endpoint.clone(),
        settings.connect_timeout,
        settings.timeout,
    )
    .context("не удалось создать HTTP-клиент")?;

    let mut state = FeedState::new();
    if !cli.json {
        eprint!("{}", render(state.view(), cli.style));
    }

    info!(endpoint = %client.endpoint(), "loading feed");
    state.settle(client.fetch_posts().await);

    match state.view() {
        FeedView::Loading | FeedView::Error(_) => Err(anyhow!(
            render(state.view(), cli.style).trim_end().to_string()
        )),
        FeedView::Loaded(posts) if cli.json => {
            let raw = serde_json::to_string_pretty(posts).context("не удалось сериализовать посты")?;
            println!("{raw}");
            Ok(())
        }
        FeedView::Loaded(_) => {
            print!("{}", render(state.view(), cli.style));
            Ok(())
        }
    }
}
