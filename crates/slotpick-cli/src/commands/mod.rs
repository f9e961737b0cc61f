pub mod config;
pub mod select;
pub mod suggest;

use chrono_tz::Tz;
use slotpick_core::TimeSlot;

/// Print selected slots, localized to the given zone, or as JSON.
pub(crate) fn print_slots(
    slots: &[TimeSlot],
    tz: Tz,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(slots)?);
        return Ok(());
    }

    if slots.is_empty() {
        println!("no slots available");
        return Ok(());
    }

    for slot in slots {
        println!("{}", slot.start.with_timezone(&tz).format("%a %Y-%m-%d %H:%M %Z"));
    }
    Ok(())
}

/// Resolve the zone to use: an explicit override beats the configured one.
pub(crate) fn resolve_timezone(
    override_name: Option<&str>,
    config: &slotpick_core::Config,
) -> Result<Tz, Box<dyn std::error::Error>> {
    match override_name {
        Some(name) => name
            .parse()
            .map_err(|_| format!("unknown timezone: {name}").into()),
        None => Ok(config.timezone()?),
    }
}
