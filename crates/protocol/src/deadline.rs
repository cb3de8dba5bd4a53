//! Deadline annotation for card badges.
//!
//! All functions take `today` explicitly; the caller decides which calendar
//! day it is (usually the local date at render time).

use chrono::NaiveDate;

/// How pressing a deadline is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeadlineUrgency {
    /// The deadline is in the past.
    Overdue,
    /// Due today or within the next three days.
    Soon,
    /// Further out.
    Neutral,
}

/// Number of days ahead that still count as "soon".
pub const SOON_WINDOW_DAYS: i64 = 3;

/// Number of days ahead that are shown as "Nd left" rather than a date.
pub const COUNTDOWN_WINDOW_DAYS: i64 = 7;

impl DeadlineUrgency {
    /// Classifies a deadline relative to `today`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use tracker_protocol::DeadlineUrgency;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    /// let yesterday = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
    /// assert_eq!(DeadlineUrgency::classify(yesterday, today), DeadlineUrgency::Overdue);
    /// assert_eq!(DeadlineUrgency::classify(today, today), DeadlineUrgency::Soon);
    /// ```
    #[must_use]
    pub fn classify(deadline: NaiveDate, today: NaiveDate) -> Self {
        match days_until(deadline, today) {
            d if d < 0 => Self::Overdue,
            d if d <= SOON_WINDOW_DAYS => Self::Soon,
            _ => Self::Neutral,
        }
    }
}

/// Returns the signed number of calendar days from `today` to `deadline`.
#[must_use]
pub fn days_until(deadline: NaiveDate, today: NaiveDate) -> i64 {
    deadline.signed_duration_since(today).num_days()
}

/// Returns the short text shown on a card for its deadline.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tracker_protocol::deadline_label;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
///
/// assert_eq!(deadline_label(d(7), today), "3d overdue");
/// assert_eq!(deadline_label(d(10), today), "Today");
/// assert_eq!(deadline_label(d(11), today), "Tomorrow");
/// assert_eq!(deadline_label(d(15), today), "5d left");
/// assert_eq!(deadline_label(d(25), today), "Jan 25");
/// ```
#[must_use]
pub fn deadline_label(deadline: NaiveDate, today: NaiveDate) -> String {
    match days_until(deadline, today) {
        d if d < 0 => format!("{}d overdue", d.unsigned_abs()),
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        d if d <= COUNTDOWN_WINDOW_DAYS => format!("{d}d left"),
        _ => deadline.format("%b %-d").to_string(),
    }
}

/// Everything the renderer needs to draw a deadline badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineBadge {
    /// Colour class of the badge.
    pub urgency: DeadlineUrgency,
    /// Text of the badge.
    pub label: String,
}

impl DeadlineBadge {
    /// Builds the badge for a deadline, or `None` when the card has no deadline.
    #[must_use]
    pub fn for_deadline(deadline: Option<NaiveDate>, today: NaiveDate) -> Option<Self> {
        deadline.map(|deadline| Self {
            urgency: DeadlineUrgency::classify(deadline, today),
            label: deadline_label(deadline, today),
        })
    }
}
