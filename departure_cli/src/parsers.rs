use std::time::Duration;

use departure_optimizer::geo_point::GeoPoint;

/// Accepts `1s`, `500ms`, `PT2S` or a bare number of seconds.
pub fn parse_delay(input: &str) -> Result<Duration, String> {
    if let Ok(seconds) = input.parse::<u64>() {
        return Ok(Duration::from_secs(seconds));
    }

    let duration = input
        .parse::<jiff::SignedDuration>()
        .map_err(|err| format!("Invalid delay '{input}': {err}"))?;

    Duration::try_from(duration).map_err(|_| format!("Delay '{input}' must not be negative"))
}

pub fn parse_point(input: &str) -> Result<GeoPoint, String> {
    input.parse::<GeoPoint>().map_err(|err| err.to_string())
}
