use chrono::{Duration, NaiveDate, TimeZone, Utc};
use clap::Args;
use slotpick_core::provider::AvailabilityProvider;
use slotpick_core::{select_smart_slots, CalComProvider, Config};

#[derive(Args)]
pub struct SuggestArgs {
    /// Day to suggest times for (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Override the configured timezone
    #[arg(long)]
    pub timezone: Option<String>,
    /// Override the configured maximum number of suggestions
    #[arg(long)]
    pub max: Option<usize>,
    /// Override the configured booking duration (minutes)
    #[arg(long)]
    pub duration: Option<i64>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SuggestArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let tz = super::resolve_timezone(args.timezone.as_deref(), &config)?;
    let max_slots = args.max.unwrap_or(config.scheduling.max_slots);
    let duration = args.duration.unwrap_or(config.provider.duration_minutes);

    // The requested day, as a whole local day in the recipient's zone.
    let date = args
        .date
        .unwrap_or_else(|| Utc::now().with_timezone(&tz).date_naive());
    let midnight = date.and_hms_opt(0, 0, 0).ok_or("invalid date")?;
    let day_start = tz
        .from_local_datetime(&midnight)
        .earliest()
        .ok_or_else(|| format!("no local midnight on {date} in {tz}"))?
        .with_timezone(&Utc);
    let day_end = day_start + Duration::days(1);

    let provider = CalComProvider::new(
        &config.provider.base_url,
        config.provider.event_type_id,
        duration,
    )?;

    let runtime = tokio::runtime::Runtime::new()?;
    let slots = runtime.block_on(provider.fetch_slots(day_start, day_end))?;

    let selected = select_smart_slots(&slots, tz, max_slots);
    super::print_slots(&selected, tz, args.json)
}
