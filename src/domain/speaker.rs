use crate::utils::error::{GuardError, GuardResult};
use crate::utils::guard;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A conference speaker. Identity is `speaker_id`.
#[derive(Debug, Clone)]
pub struct Speaker {
    speaker_id: i32,
    full_name: String,
    email: String,
    biography: Option<String>,
    company: Option<String>,
    linkedin_profile: Option<String>,
}

impl Speaker {
    /// Checks run in order: id, name, email presence, email format.
    pub fn new(speaker_id: i32, full_name: &str, email: &str) -> GuardResult<Self> {
        guard::require_positive(speaker_id, "speakerId")?;
        let full_name = guard::require_non_blank(Some(full_name), "fullName")?;
        let email = guard::require_non_blank(Some(email), "email")?;

        if !guard::is_valid_email(Some(email)) {
            return Err(GuardError::invalid_argument(
                "email",
                "Email deve conter o caractere '@'.",
            ));
        }

        let speaker = Self {
            speaker_id,
            full_name: full_name.trim().to_string(),
            email: email.trim().to_string(),
            biography: None,
            company: None,
            linkedin_profile: None,
        };
        tracing::debug!(speaker_id, "speaker created");
        Ok(speaker)
    }

    pub fn speaker_id(&self) -> i32 {
        self.speaker_id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn biography(&self) -> Option<&str> {
        self.biography.as_deref()
    }

    pub fn set_biography<'a>(&mut self, biography: impl Into<Option<&'a str>>) {
        self.biography = guard::try_normalize(biography.into());
    }

    /// Empty when no company was set.
    pub fn company(&self) -> &str {
        self.company.as_deref().unwrap_or_default()
    }

    /// Stored as given, without trimming.
    pub fn set_company<'a>(&mut self, company: impl Into<Option<&'a str>>) {
        self.company = company.into().map(str::to_string);
    }

    pub fn linkedin_profile(&self) -> &str {
        self.linkedin_profile.as_deref().unwrap_or_default()
    }

    pub fn set_linkedin_profile<'a>(&mut self, profile: impl Into<Option<&'a str>>) {
        self.linkedin_profile = profile.into().map(str::to_string);
    }
}

impl PartialEq for Speaker {
    fn eq(&self, other: &Self) -> bool {
        self.speaker_id == other.speaker_id
    }
}

impl Eq for Speaker {}

impl Hash for Speaker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.speaker_id.hash(state);
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {}", self.full_name, self.email, self.company())
    }
}
