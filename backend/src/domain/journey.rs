//! Journey data model.
//!
//! A [`JourneyDraft`] is validated journey content without identity; a
//! [`Journey`] adds the generated id and the server-side creation timestamp.
//! Partial updates are expressed as a [`JourneyPatch`] and re-run the full
//! draft validation, so the date-range invariant holds after every update.
//! Timestamps are truncated to microseconds, the precision PostgreSQL keeps.

use chrono::{DateTime, SubsecRound, Utc};

use super::ids::JourneyId;
use super::user::Username;
use super::validation::{Field, FieldViolation, bounded_text, required_text};

/// Longest accepted title or location, in characters.
pub const TITLE_MAX: usize = 256;
/// Longest accepted description, in characters.
pub const DESCRIPTION_MAX: usize = 4000;

/// Raw journey content as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyFields {
    pub title: String,
    pub location: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub description: String,
    pub logged_in_user_name: String,
}

/// Validated journey content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyDraft {
    title: String,
    location: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    description: String,
    logged_in_user_name: Username,
}

impl JourneyDraft {
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn logged_in_user_name(&self) -> &Username {
        &self.logged_in_user_name
    }

    fn to_fields(&self) -> JourneyFields {
        JourneyFields {
            title: self.title.clone(),
            location: self.location.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description.clone(),
            logged_in_user_name: self.logged_in_user_name.to_string(),
        }
    }
}

impl TryFrom<JourneyFields> for JourneyDraft {
    type Error = FieldViolation;

    fn try_from(fields: JourneyFields) -> Result<Self, Self::Error> {
        let title = required_text(Field::Title, &fields.title, TITLE_MAX)?;
        let location = required_text(Field::Location, &fields.location, TITLE_MAX)?;
        if fields.end_date < fields.start_date {
            return Err(FieldViolation::EndBeforeStart);
        }
        let description = bounded_text(Field::Description, &fields.description, DESCRIPTION_MAX)?;
        let logged_in_user_name =
            Username::parse(Field::LoggedInUserName, &fields.logged_in_user_name)?;
        Ok(Self {
            title,
            location,
            start_date: fields.start_date.trunc_subsecs(6),
            end_date: fields.end_date.trunc_subsecs(6),
            description,
            logged_in_user_name,
        })
    }
}

/// Stored journey.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use journal_backend::domain::{Journey, JourneyDraft, JourneyFields, JourneyId};
///
/// let start = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
/// let draft = JourneyDraft::try_from(JourneyFields {
///     title: "Trip".into(),
///     location: "Japan".into(),
///     start_date: start,
///     end_date: start,
///     description: String::new(),
///     logged_in_user_name: "elenaG".into(),
/// })
/// .expect("valid draft");
/// let journey = Journey::new(JourneyId::random(), draft, start);
/// assert_eq!(journey.title(), "Trip");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    id: JourneyId,
    created: DateTime<Utc>,
    content: JourneyDraft,
}

impl Journey {
    pub fn new(id: JourneyId, content: JourneyDraft, created: DateTime<Utc>) -> Self {
        Self {
            id,
            created: created.trunc_subsecs(6),
            content,
        }
    }

    pub fn id(&self) -> &JourneyId {
        &self.id
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn content(&self) -> &JourneyDraft {
        &self.content
    }

    pub fn title(&self) -> &str {
        self.content.title()
    }

    pub fn location(&self) -> &str {
        self.content.location()
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.content.start_date()
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.content.end_date()
    }

    pub fn description(&self) -> &str {
        self.content.description()
    }

    pub fn logged_in_user_name(&self) -> &Username {
        self.content.logged_in_user_name()
    }

    /// Apply `patch`, returning the updated journey.
    ///
    /// Identity and creation time are preserved. Absent patch fields keep
    /// their current values; the merged content is validated as a whole.
    pub fn apply(&self, patch: &JourneyPatch) -> Result<Self, FieldViolation> {
        let mut fields = self.content.to_fields();
        if let Some(title) = &patch.title {
            fields.title.clone_from(title);
        }
        if let Some(location) = &patch.location {
            fields.location.clone_from(location);
        }
        if let Some(start_date) = patch.start_date {
            fields.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            fields.end_date = end_date;
        }
        if let Some(description) = &patch.description {
            fields.description.clone_from(description);
        }
        if let Some(owner) = &patch.logged_in_user_name {
            fields.logged_in_user_name.clone_from(owner);
        }
        let content = JourneyDraft::try_from(fields)?;
        Ok(Self {
            id: self.id,
            created: self.created,
            content,
        })
    }
}

/// Partial journey update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JourneyPatch {
    pub title: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub logged_in_user_name: Option<String>,
}

impl JourneyPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.location.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.description.is_none()
            && self.logged_in_user_name.is_none()
    }
}
