use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "menu-colors", about = "Pick and preview restaurant menu brand colors")]
pub struct Cli {
    /// Log debug output to the log file
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a background color as light or dark
    Classify {
        /// Hex (#rgb, #rrggbb) or rgb()/rgba() color
        color: String,
    },
    /// Convert an HSL triple to a hex color
    Hex {
        /// Hue in degrees (wraps at 360)
        #[arg(allow_negative_numbers = true)]
        hue: f64,
        /// Saturation percentage, 0-100
        saturation: f64,
        /// Lightness percentage, 0-100
        lightness: f64,
    },
    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Set a value: default-primary, default-secondary or redraw-debounce-ms
    Set { key: String, value: String },
}
