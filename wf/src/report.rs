//! Result reporting: ordering, compass mapping, and table rendering

use tracing::debug;

use crate::domain::Outcome;

/// 16-point compass rose, clockwise from north
const COMPASS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW", "NNW",
];

/// Width of the horizontal rules framing the table
const RULE_WIDTH: usize = 86;

/// Map wind direction degrees to a 16-point compass code
///
/// Each sector spans 22.5 degrees centered on its compass point. A value
/// exactly on a sector boundary belongs to the lower sector, and values
/// wrap at 360.
pub fn compass_point(deg: f64) -> &'static str {
    let idx = (((deg + 11.25) / 22.5).ceil() as i64 - 1).rem_euclid(16) as usize;
    COMPASS[idx]
}

/// Render outcomes as a fixed-width table, ordered by state
///
/// Sorting happens here, once, after aggregation is complete. Arrival order
/// out of the runner carries no meaning and is deliberately ignored.
pub fn render(mut outcomes: Vec<Outcome>) -> String {
    debug!(count = outcomes.len(), "render: called");
    outcomes.sort_by(|a, b| a.city.state.cmp(&b.city.state));

    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "{:<15} | {:<18} | {:>9} | {:>7} | {:>3} | {}\n",
        "STATE", "CAPITAL", "TEMP", "WIND", "DIR", "AT"
    ));
    out.push_str(&rule);
    out.push('\n');

    for outcome in &outcomes {
        match &outcome.result {
            Ok(current) => {
                let dir = compass_point(current.wind_direction);
                out.push_str(&format!(
                    "{:<15} | {:<18} | {:>6.1}° | {:>5.1} | {:>3} | {}\n",
                    outcome.city.state,
                    outcome.city.name,
                    current.temperature,
                    current.wind_speed,
                    dir,
                    current.time
                ));
            }
            Err(e) => {
                out.push_str(&format!(
                    "{:<15} | {:<18} | {:>9} | {:>7} | {:>3} | {}\n",
                    outcome.city.state, outcome.city.name, "ERR", "-", "-", e
                ));
            }
        }
    }

    out.push_str(&rule);
    out.push('\n');
    out
}
