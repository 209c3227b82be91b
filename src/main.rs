use anyhow::Result;
use clap::Parser;
use freesound_dl::commands::{self, Config, SearchOptions};
use freesound_dl::runtime::RealRuntime;
use std::path::PathBuf;

/// freesound-dl - search and download sounds from Freesound
///
/// The API key is read from --token or the FREESOUND_API_KEY environment variable.
///
/// Examples:
///   freesound-dl search piano --filter "duration:[0 TO 30]" --sort score
///   freesound-dl download 1234 piano.wav
#[derive(Parser, Debug)]
#[command(author, version = env!("FREESOUND_DL_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Freesound API key (also via FREESOUND_API_KEY)
    #[arg(
        long,
        short = 't',
        env = "FREESOUND_API_KEY",
        hide_env_values = true,
        value_name = "KEY",
        global = true
    )]
    token: Option<String>,

    /// API base URL (defaults to https://freesound.org/apiv2)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds (defaults to 10)
    #[arg(
        long,
        value_name = "SECS",
        global = true,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: Option<u64>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Search sounds by text
    Search(SearchArgs),

    /// Download a sound by id
    Download(DownloadArgs),
}

#[derive(clap::Args, Debug)]
struct SearchArgs {
    /// Text to search for
    query: String,

    /// Filter expression, e.g. "type:wav duration:[10 TO 60]"
    #[arg(long)]
    filter: Option<String>,

    /// Sort key, e.g. score, downloads_desc, duration_asc
    #[arg(long)]
    sort: Option<String>,

    /// Page of results to fetch
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,

    /// Results per page
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(1..))]
    page_size: u32,

    /// Collapse results from the same pack
    #[arg(long)]
    group_by_pack: bool,

    /// Field weights, e.g. "tag:4,description:3"
    #[arg(long)]
    weights: Option<String>,

    /// Plain text search without filters, sorting or field selection
    #[arg(long)]
    simple: bool,

    /// Pretty-print the JSON response
    #[arg(long)]
    pretty: bool,
}

#[derive(clap::Args, Debug)]
struct DownloadArgs {
    /// Sound id
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    id: u64,

    /// Destination file (its directory must exist)
    #[arg(value_name = "PATH")]
    output: PathBuf,
}

impl From<SearchArgs> for SearchOptions {
    fn from(args: SearchArgs) -> Self {
        SearchOptions {
            query: args.query,
            filter: args.filter,
            sort: args.sort,
            page: args.page,
            page_size: args.page_size,
            group_by_pack: args.group_by_pack,
            weights: args.weights,
            simple: args.simple,
            pretty: args.pretty,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = Config {
        token: cli.token,
        api_url: cli.api_url,
        timeout_secs: cli.timeout,
    };
    let client = config.connect(RealRuntime)?;
    let mut stdout = std::io::stdout();

    match cli.command {
        Commands::Search(args) => commands::search(&client, &args.into(), &mut stdout).await?,
        Commands::Download(args) => {
            commands::download(&client, args.id, &args.output, &mut stdout).await?
        }
    }
    Ok(())
}
