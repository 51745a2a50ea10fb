use std::path::PathBuf;

use clap::Parser;

/// medchat: a terminal health-question chat backed by Gemini.
#[derive(Parser, Debug)]
#[command(name = "medchat", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. debug, medchat=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Ask a single question and exit.
    #[arg(short = 'p', long)]
    pub prompt: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
