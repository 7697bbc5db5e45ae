//! Built-in locale data.

use chrono::Weekday;

/// Name tables and separators used when rendering previews.
#[derive(Debug, Clone, PartialEq)]
pub struct Locale {
    pub decimal_separator: char,
    pub thousands_separator: char,
    pub am_string: &'static str,
    pub pm_string: &'static str,
    pub month_names_short: [&'static str; 12],
    pub month_names_full: [&'static str; 12],
    pub day_names_short: [&'static str; 7],
    pub day_names_full: [&'static str; 7],
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Locale {
    /// US English locale.
    pub fn en_us() -> Self {
        Locale {
            decimal_separator: '.',
            thousands_separator: ',',
            am_string: "AM",
            pm_string: "PM",
            month_names_short: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            month_names_full: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            day_names_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            day_names_full: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ],
        }
    }

    /// Full month name for a 1-based month; empty when out of range.
    pub fn month_full(&self, month: u32) -> &'static str {
        month_index(month)
            .map(|i| self.month_names_full[i])
            .unwrap_or_default()
    }

    pub fn month_short(&self, month: u32) -> &'static str {
        month_index(month)
            .map(|i| self.month_names_short[i])
            .unwrap_or_default()
    }

    /// First letter of the month name.
    pub fn month_letter(&self, month: u32) -> String {
        self.month_full(month)
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default()
    }

    pub fn weekday_full(&self, weekday: Weekday) -> &'static str {
        self.day_names_full[weekday.num_days_from_sunday() as usize]
    }

    pub fn weekday_short(&self, weekday: Weekday) -> &'static str {
        self.day_names_short[weekday.num_days_from_sunday() as usize]
    }
}

fn month_index(month: u32) -> Option<usize> {
    (1..=12).contains(&month).then(|| (month - 1) as usize)
}
