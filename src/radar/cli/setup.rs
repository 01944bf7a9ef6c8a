use clap::{Parser, Subcommand};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "radar", bin_name = "radar", version = get_version())]
#[command(about = "Pin short notes to places on a map", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Map(MapCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Add a note at a coordinate
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Latitude in degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lng: f64,

        /// Note text (words are joined with spaces)
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// List notes
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Delete a note (later notes are renumbered)
    #[command(alias = "rm", display_order = 3)]
    Delete {
        /// Id of the note, as shown by `list`
        id: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum MapCommands {
    /// Add a note where a click on the default map view would land
    #[command(display_order = 10)]
    Click {
        /// Horizontal viewport pixel, from the left edge
        #[arg(allow_negative_numbers = true)]
        x: f64,

        /// Vertical viewport pixel, from the top edge
        #[arg(allow_negative_numbers = true)]
        y: f64,

        /// Note text (words are joined with spaces)
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Show the marker layer for the default map view
    #[command(display_order = 11)]
    Markers,

    /// Start an interactive map session
    #[command(display_order = 12)]
    Session,
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 20)]
    Config {
        /// Configuration key (center, zoom, min-zoom, max-zoom, click-while-open, id-policy)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
