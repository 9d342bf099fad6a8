use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chat-entities")]
#[command(author, version)]
#[command(about = "Extract links, emotes, mentions, tags and spans from chat messages")]
#[command(after_help = "\
EXAMPLES:

    # Extract entities from a single message
    chat-entities --emote Kappa --nick alice 'alice: Kappa https://example.com'

    # One message per line from stdin
    cat chat.log | chat-entities

    # Show the merged tree as well
    chat-entities --tree '||spoiler a.com||'

CONFIGURATION:

Emotes, nicks, tags and modifiers are read from ~/.config/chat-entities/config.toml
unless --config is given. Example:

    emotes = [\"Kappa\", \"PEPE\"]
    nicks = [\"alice\", \"bob\"]
    emote_manifest = \"~/chat/emote-manifest.json\"
    max_depth = 64
    detect_links = true")]
pub struct Cli {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Additional emote name (repeatable)
    #[arg(long = "emote", value_name = "NAME")]
    pub emotes: Vec<String>,

    /// Additional nick (repeatable)
    #[arg(long = "nick", value_name = "NAME")]
    pub nicks: Vec<String>,

    /// Print the merged tree after each result
    #[arg(long)]
    pub tree: bool,

    /// Messages to process; read one per line from stdin when omitted
    pub messages: Vec<String>,
}
