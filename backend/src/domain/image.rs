//! Journey image records.
//!
//! Images reference their journey by a free-form `journeyId` string and carry
//! denormalised copies of the owner and journey title. None of these links are
//! checked against other collections.

use url::Url;

use super::ids::ImageId;
use super::user::Username;
use super::validation::{Field, FieldViolation, required_text};

/// Longest accepted `journeyId` reference, in characters.
pub const JOURNEY_REF_MAX: usize = 64;
/// Longest accepted image address, in characters.
pub const IMG_ADDRESS_MAX: usize = 2048;
/// Longest accepted journey title copy, in characters.
pub const JOURNEY_TITLE_MAX: usize = 256;

/// Raw image fields as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFields {
    pub journey_id: String,
    pub img_address: String,
    pub username: String,
    pub journey_title: String,
}

/// Validated image content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDraft {
    journey_id: String,
    img_address: String,
    username: Username,
    journey_title: String,
}

impl ImageDraft {
    pub fn journey_id(&self) -> &str {
        self.journey_id.as_str()
    }

    /// Address exactly as submitted, minus surrounding whitespace.
    pub fn img_address(&self) -> &str {
        self.img_address.as_str()
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn journey_title(&self) -> &str {
        self.journey_title.as_str()
    }
}

impl TryFrom<ImageFields> for ImageDraft {
    type Error = FieldViolation;

    fn try_from(fields: ImageFields) -> Result<Self, Self::Error> {
        let journey_id = required_text(Field::JourneyId, &fields.journey_id, JOURNEY_REF_MAX)?;
        let img_address = parse_img_address(&fields.img_address)?;
        let username = Username::new(&fields.username)?;
        let journey_title =
            required_text(Field::JourneyTitle, &fields.journey_title, JOURNEY_TITLE_MAX)?;
        Ok(Self {
            journey_id,
            img_address,
            username,
            journey_title,
        })
    }
}

fn parse_img_address(raw: &str) -> Result<String, FieldViolation> {
    let address = required_text(Field::ImgAddress, raw, IMG_ADDRESS_MAX)?;
    let parsed = Url::parse(&address).map_err(|_| FieldViolation::InvalidUrl {
        field: Field::ImgAddress,
    })?;
    if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
        return Err(FieldViolation::InvalidUrl {
            field: Field::ImgAddress,
        });
    }
    // `Url` normalises (e.g. appends a trailing slash); store what was sent.
    Ok(address)
}

/// Stored image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    id: ImageId,
    content: ImageDraft,
}

impl Image {
    pub fn new(id: ImageId, content: ImageDraft) -> Self {
        Self { id, content }
    }

    pub fn id(&self) -> &ImageId {
        &self.id
    }

    pub fn journey_id(&self) -> &str {
        self.content.journey_id()
    }

    pub fn img_address(&self) -> &str {
        self.content.img_address()
    }

    pub fn username(&self) -> &Username {
        self.content.username()
    }

    pub fn journey_title(&self) -> &str {
        self.content.journey_title()
    }
}
