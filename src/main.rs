use clap::{
    ArgAction, Args, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use kkbox_sdk::{
    cli::{self, ArtistList, CategoryKind, PageOptions, Settings, StationKind},
    config,
    kkbox::search::SearchFilter,
    types::{SearchType, Territory, WidgetType},
    warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name = "kkbox",
  bin_name = "kkbox",
  about = env!("CARGO_PKG_DESCRIPTION"),
  styles = styles(),
)]
struct Cli {
    /// Territory the catalog requests are scoped to (TW, HK, SG, MY, JP)
    #[clap(long, global = true, value_parser = cli::parse_territory)]
    territory: Option<Territory>,

    /// Print the raw response envelope as JSON instead of a table
    #[clap(long, global = true)]
    raw: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch an access token with the client credentials and cache it
    Auth(AuthOptions),

    /// Search tracks, albums, artists and playlists
    Search(SearchOptions),

    /// Show a track and its widget URI
    Track(IdOptions),

    /// Show an album, or its tracks
    Album(AlbumOptions),

    /// Show an artist, or one of its lists
    Artist(ArtistOptions),

    /// Show a shared playlist, or its tracks
    Playlist(PlaylistOptions),

    /// List featured playlists
    Featured(PageArgs),

    /// Browse featured playlist or new release categories
    Categories(CategoriesOptions),

    /// Browse new hits playlists
    Hits(HitsOptions),

    /// Browse mood or genre stations
    Stations(StationsOptions),

    /// Browse charts
    Charts(ChartsOptions),

    /// Print the embeddable widget URI of a resource
    Widget(WidgetOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Maximum number of items per page
    #[clap(long)]
    pub limit: Option<u32>,

    /// Index of the first item
    #[clap(long)]
    pub offset: Option<u32>,

    /// Follow the paging cursor until the last page
    #[clap(long)]
    pub all: bool,
}

impl From<PageArgs> for PageOptions {
    fn from(args: PageArgs) -> Self {
        PageOptions {
            limit: args.limit,
            offset: args.offset,
            all: args.all,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct AuthOptions {
    /// Request a new token even if the cached one is still valid
    #[clap(long)]
    pub force: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SearchOptions {
    /// Keywords to search for
    pub query: String,

    /// Result type(s) to include; can be repeated
    #[clap(
        long = "type",
        value_parser = cli::parse_search_type,
        action = ArgAction::Append,
        num_args = 1
    )]
    pub types: Vec<SearchType>,

    /// Keep only tracks whose name contains this text
    #[clap(long)]
    pub track: Option<String>,

    /// Keep only results whose album name contains this text
    #[clap(long)]
    pub album: Option<String>,

    /// Keep only results whose artist name contains this text
    #[clap(long)]
    pub artist: Option<String>,

    /// Keep only playlists whose title contains this text
    #[clap(long)]
    pub playlist: Option<String>,

    /// Keep only tracks and albums available in this territory
    #[clap(long, value_parser = cli::parse_territory)]
    pub available_territory: Option<Territory>,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Debug, Clone)]
pub struct IdOptions {
    pub id: String,
}

#[derive(Args, Debug, Clone)]
pub struct AlbumOptions {
    pub id: String,

    /// List the album's tracks
    #[clap(long)]
    pub tracks: bool,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ArtistOptions {
    pub id: String,

    /// List instead of showing the artist
    #[clap(long, value_enum)]
    pub list: Option<ArtistList>,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Debug, Clone)]
pub struct PlaylistOptions {
    pub id: String,

    /// List the playlist's tracks
    #[clap(long)]
    pub tracks: bool,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Debug, Clone)]
pub struct CategoriesOptions {
    #[clap(value_enum)]
    pub kind: CategoryKind,

    /// Category to show; lists all categories when omitted
    pub id: Option<String>,

    /// List the playlists or albums of the category
    #[clap(long, requires = "id")]
    pub items: bool,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Debug, Clone)]
pub struct HitsOptions {
    /// Playlist to show; lists all new hits playlists when omitted
    pub id: Option<String>,

    /// List the playlist's tracks
    #[clap(long, requires = "id")]
    pub tracks: bool,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Debug, Clone)]
pub struct StationsOptions {
    #[clap(value_enum)]
    pub kind: StationKind,

    /// Station to show; lists all stations when omitted
    pub id: Option<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ChartsOptions {
    /// Chart playlist to show; lists all charts when omitted
    pub id: Option<String>,

    /// List the chart's tracks
    #[clap(long, requires = "id")]
    pub tracks: bool,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Debug, Clone)]
pub struct WidgetOptions {
    pub id: String,

    /// Widget type: song, album or playlist
    #[clap(long = "type", value_parser = cli::parse_widget_type, default_value = "song")]
    pub widget_type: WidgetType,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();
    let settings = Settings {
        territory: cli.territory.unwrap_or_else(config::kkbox_territory),
        raw: cli.raw,
    };

    match cli.command {
        Command::Auth(opt) => cli::auth(opt.force).await,
        Command::Search(opt) => {
            let filter = SearchFilter {
                track: opt.track,
                album: opt.album,
                artist: opt.artist,
                playlist: opt.playlist,
                available_territory: opt.available_territory,
            };
            cli::search(settings, opt.query, opt.types, filter, opt.page.into()).await
        }
        Command::Track(opt) => cli::track(settings, opt.id).await,
        Command::Album(opt) => cli::album(settings, opt.id, opt.tracks, opt.page.into()).await,
        Command::Artist(opt) => cli::artist(settings, opt.id, opt.list, opt.page.into()).await,
        Command::Playlist(opt) => {
            cli::playlist(settings, opt.id, opt.tracks, opt.page.into()).await
        }
        Command::Featured(page) => cli::featured(settings, page.into()).await,
        Command::Categories(opt) => {
            cli::categories(settings, opt.kind, opt.id, opt.items, opt.page.into()).await
        }
        Command::Hits(opt) => cli::hits(settings, opt.id, opt.tracks, opt.page.into()).await,
        Command::Stations(opt) => {
            cli::stations(settings, opt.kind, opt.id, opt.page.into()).await
        }
        Command::Charts(opt) => cli::charts(settings, opt.id, opt.tracks, opt.page.into()).await,
        Command::Widget(opt) => cli::widget(&opt.id, opt.widget_type),
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
