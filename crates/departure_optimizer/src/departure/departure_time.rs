use jiff::{
    Timestamp, Zoned,
    civil::{Date, Time},
    tz::TimeZone,
};

pub const DEPARTURE_TIME_ZONE: &str = "Europe/Kyiv";

pub fn departure_time_zone() -> Result<TimeZone, jiff::Error> {
    TimeZone::get(DEPARTURE_TIME_ZONE)
}

/// Current date in `time_zone`.
pub fn today(time_zone: &TimeZone) -> Date {
    Timestamp::now().to_zoned(time_zone.clone()).date()
}

/// `hour:00:00` on `date` in `time_zone`.
pub fn departure_timestamp(date: Date, hour: i8, time_zone: &TimeZone) -> Result<Zoned, jiff::Error> {
    let time = Time::new(hour, 0, 0, 0)?;

    date.to_datetime(time).to_zoned(time_zone.clone())
}

/// RFC 3339 with a colon-delimited offset, e.g. `2024-06-15T08:00:00+03:00`.
pub fn format_departure(departure: &Zoned) -> String {
    departure.strftime("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// Local `HH:MM` in `time_zone` of a timestamp produced by [`format_departure`].
pub fn departure_hour(timestamp: &str, time_zone: &TimeZone) -> Result<String, jiff::Error> {
    let timestamp: Timestamp = timestamp.parse()?;

    Ok(timestamp
        .to_zoned(time_zone.clone())
        .strftime("%H:%M")
        .to_string())
}
