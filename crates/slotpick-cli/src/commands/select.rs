use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use slotpick_core::{select_smart_slots, Config, TimeSlot};

#[derive(Args)]
pub struct SelectArgs {
    /// Path to a JSON array of slots (reads stdin when omitted)
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Override the configured timezone
    #[arg(long)]
    pub timezone: Option<String>,
    /// Override the configured maximum number of suggestions
    #[arg(long)]
    pub max: Option<usize>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SelectArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let tz = super::resolve_timezone(args.timezone.as_deref(), &config)?;
    let max_slots = args.max.unwrap_or(config.scheduling.max_slots);

    let raw = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let slots: Vec<TimeSlot> = serde_json::from_str(&raw)?;

    let selected = select_smart_slots(&slots, tz, max_slots);
    super::print_slots(&selected, tz, args.json)
}
