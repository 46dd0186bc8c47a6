use chrono::NaiveDate;

/// Query key for the range start.
pub const FROM_KEY: &str = "from";
/// Query key for the range end.
pub const TO_KEY: &str = "to";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Two-endpoint calendar selection. Either endpoint may be absent; a
/// from-only range is a valid "from this date onward" state. When both
/// endpoints are present the constructor keeps `from <= to` by swapping,
/// never by rejecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        match (from, to) {
            (Some(start), Some(end)) if start > end => Self {
                from: Some(end),
                to: Some(start),
            },
            _ => Self { from, to },
        }
    }

    pub fn between(a: NaiveDate, b: NaiveDate) -> Self {
        Self::new(Some(a), Some(b))
    }

    pub fn from(&self) -> Option<NaiveDate> {
        self.from
    }

    pub fn to(&self) -> Option<NaiveDate> {
        self.to
    }

    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Membership test with open endpoints: an absent endpoint does not
    /// constrain that side.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }

    /// Inclusive day count of a complete range.
    pub fn day_count(&self) -> Option<i64> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some((to - from).num_days() + 1),
            _ => None,
        }
    }

    /// Reads the `from`/`to` pair back out of stored scalars. A malformed
    /// date is treated as absent, never as an error.
    pub fn parse(from: Option<&str>, to: Option<&str>) -> Self {
        Self::new(parse_date(from), parse_date(to))
    }

    /// Endpoint values in their stored form.
    pub fn query_values(&self) -> (Option<String>, Option<String>) {
        (
            self.from.map(|date| date.format(DATE_FORMAT).to_string()),
            self.to.map(|date| date.format(DATE_FORMAT).to_string()),
        )
    }
}

fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(|text| NaiveDate::parse_from_str(text, DATE_FORMAT).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("test date should be valid")
    }

    #[test]
    fn constructor_orders_endpoints() {
        let range = DateRange::between(date(2026, 3, 10), date(2026, 3, 1));

        assert_eq!(range.from(), Some(date(2026, 3, 1)));
        assert_eq!(range.to(), Some(date(2026, 3, 10)));
    }

    #[test]
    fn from_only_range_is_open_ended() {
        let range = DateRange::new(Some(date(2026, 1, 1)), None);

        assert!(!range.is_complete());
        assert!(range.contains(date(2030, 12, 31)));
        assert!(!range.contains(date(2025, 12, 31)));
    }

    #[test]
    fn day_count_is_inclusive() {
        let range = DateRange::between(date(2026, 3, 1), date(2026, 3, 31));

        assert_eq!(range.day_count(), Some(31));
    }

    #[test]
    fn malformed_date_parses_to_absent() {
        let range = DateRange::parse(Some("not-a-date"), Some("2026-02-31"));

        assert!(range.is_empty());
    }

    #[test]
    fn query_values_round_trip() {
        let range = DateRange::between(date(2026, 3, 1), date(2026, 3, 31));

        let (from, to) = range.query_values();
        let parsed = DateRange::parse(from.as_deref(), to.as_deref());

        assert_eq!(parsed, range);
    }
}
