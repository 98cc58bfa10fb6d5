use crate::error::DepartureError;

pub const EARLIEST_DEPARTURE_HOUR: i8 = 8;
pub const LATEST_DEPARTURE_HOUR: i8 = 22;

/// Candidate departure hours `[start, end)` within business hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourWindow {
    start: i8,
    end: i8,
}

impl HourWindow {
    pub fn new(start: i8, end: i8) -> Result<Self, DepartureError> {
        if start < EARLIEST_DEPARTURE_HOUR || end > LATEST_DEPARTURE_HOUR || start >= end {
            return Err(DepartureError::InvalidWindow { start, end });
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> i8 {
        self.start
    }

    pub fn end(&self) -> i8 {
        self.end
    }

    /// Every candidate hour, `end` excluded.
    pub fn hours(&self) -> impl ExactSizeIterator<Item = i8> {
        self.start..self.end
    }
}
