use crate::domain::speaker::Speaker;
use crate::domain::venue::Venue;
use crate::utils::error::GuardResult;
use crate::utils::guard;
use chrono::{DateTime, Duration, Local};
use std::fmt;
use std::sync::{Arc, OnceLock};

pub const MIN_EVENT_MINUTES: i64 = 30;

/// A scheduled event held at a [`Venue`], optionally led by a [`Speaker`].
#[derive(Debug)]
pub struct Event {
    event_id: i32,
    title: String,
    event_date: DateTime<Local>,
    duration: Duration,
    event_code: String,
    description: Option<String>,
    requirements: Option<String>,
    notes: Option<String>,
    // Unset until first read or explicit assignment.
    venue: OnceLock<Arc<Venue>>,
    main_speaker: Option<Arc<Speaker>>,
}

impl Event {
    pub fn new(
        event_id: i32,
        title: &str,
        event_date: DateTime<Local>,
        duration: Duration,
    ) -> GuardResult<Self> {
        guard::require_positive(event_id, "eventId")?;
        let title = guard::require_non_blank(Some(title), "title")?;
        guard::require_not_past(&event_date, "eventDate")?;
        guard::require_min_duration(duration, Duration::minutes(MIN_EVENT_MINUTES), "duration")?;

        tracing::debug!(event_id, %event_date, "event created");
        Ok(Self {
            event_id,
            title: title.trim().to_string(),
            event_date,
            duration,
            event_code: String::new(),
            description: None,
            requirements: None,
            notes: None,
            venue: OnceLock::new(),
            main_speaker: None,
        })
    }

    pub fn event_id(&self) -> i32 {
        self.event_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn event_date(&self) -> DateTime<Local> {
        self.event_date
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn event_code(&self) -> &str {
        &self.event_code
    }

    /// Fails on `None`; otherwise stores the trimmed code.
    pub fn set_event_code<'a>(&mut self, code: impl Into<Option<&'a str>>) -> GuardResult<()> {
        let code = guard::require_non_null(code.into(), "code")?;
        self.event_code = code.trim().to_string();
        Ok(())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description<'a>(&mut self, description: impl Into<Option<&'a str>>) {
        self.description = guard::try_normalize(description.into());
    }

    pub fn requirements(&self) -> &str {
        self.requirements.as_deref().unwrap_or_default()
    }

    pub fn set_requirements<'a>(&mut self, requirements: impl Into<Option<&'a str>>) {
        self.requirements = requirements.into().map(str::to_string);
    }

    pub fn notes(&self) -> &str {
        self.notes.as_deref().unwrap_or_default()
    }

    pub fn set_notes<'a>(&mut self, notes: impl Into<Option<&'a str>>) {
        self.notes = notes.into().map(str::to_string);
    }

    /// The assigned venue, or the shared default venue if none was assigned.
    ///
    /// The default is resolved on first read and kept for later reads.
    pub fn venue(&self) -> &Arc<Venue> {
        self.venue.get_or_init(Venue::default_venue)
    }

    pub fn assign_venue(&mut self, venue: impl Into<Option<Arc<Venue>>>) -> GuardResult<()> {
        let venue = guard::require_non_null(venue.into(), "venue")?;
        tracing::debug!(
            event_id = self.event_id,
            venue_id = venue.venue_id(),
            "venue assigned"
        );
        self.venue = OnceLock::from(venue);
        Ok(())
    }

    pub fn main_speaker(&self) -> Option<&Arc<Speaker>> {
        self.main_speaker.as_ref()
    }

    pub fn assign_main_speaker(
        &mut self,
        speaker: impl Into<Option<Arc<Speaker>>>,
    ) -> GuardResult<()> {
        let speaker = guard::require_non_null(speaker.into(), "speaker")?;
        tracing::debug!(
            event_id = self.event_id,
            speaker_id = speaker.speaker_id(),
            "main speaker assigned"
        );
        self.main_speaker = Some(speaker);
        Ok(())
    }
}

/// Renders a duration as `H:MM`, hours not wrapped at 24.
pub fn format_duration(duration: Duration) -> String {
    let total_minutes = duration.num_minutes();
    format!("{}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Duration is shown as total hours, so 26 h renders as `26:00` rather than wrapping at a day.
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {} - Duração: {} - Local: {}",
            self.title,
            self.event_code,
            self.event_date.format("%d/%m/%Y %H:%M"),
            format_duration(self.duration),
            self.venue().name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::hours(8)), "8:00");
        assert_eq!(format_duration(Duration::minutes(30)), "0:30");
        assert_eq!(format_duration(Duration::minutes(95)), "1:35");
        assert_eq!(format_duration(Duration::hours(26)), "26:00");
    }

    #[test]
    fn test_event_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Event>();
    }
}
