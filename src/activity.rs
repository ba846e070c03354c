//! Activity stream payload.
//!
//! ```
//! # use vanity::Activity;
//! let activity = Activity::new("Assaf", "shared")
//!     .object("http://bit.ly/GLUa9S")
//!     .location("San Francisco, CA")
//!     .label("funny");
//! ```
use serde::Serialize;

/// An actor/verb/object event posted to `POST /v1/activity`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    /// Unique activity identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Who performed the activity.
    pub actor: Actor,
    /// What was performed.
    pub verb: String,
    /// Object associated with the activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<ActivityObject>,
    /// Location name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Labels.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

impl Activity {
    /// Create an activity with the mandatory actor and verb.
    pub fn new(actor: impl Into<Actor>, verb: impl Into<String>) -> Self {
        Activity {
            id: None,
            actor: actor.into(),
            verb: verb.into(),
            object: None,
            location: None,
            labels: Vec::new(),
        }
    }

    /// Set the unique activity identifier.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the object of the activity.
    pub fn object(mut self, object: impl Into<ActivityObject>) -> Self {
        self.object = Some(object.into());
        self
    }

    /// Set the location name.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Add a label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }
}

/// Activity actor.
///
/// If you only have a display name, convert it from a string. If you only have an id, the server
/// makes up a display name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    /// Actor identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Name shown for the actor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Avatar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

impl From<&str> for Actor {
    fn from(value: &str) -> Self {
        Actor {
            display_name: Some(value.to_owned()),
            ..Default::default()
        }
    }
}

impl From<String> for Actor {
    fn from(value: String) -> Self {
        Actor {
            display_name: Some(value),
            ..Default::default()
        }
    }
}

/// Activity object. Without a display name the server shows the URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityObject {
    /// Object URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Name shown for the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Object thumbnail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

impl From<&str> for ActivityObject {
    fn from(value: &str) -> Self {
        ActivityObject {
            display_name: Some(value.to_owned()),
            ..Default::default()
        }
    }
}

impl From<String> for ActivityObject {
    fn from(value: String) -> Self {
        ActivityObject {
            display_name: Some(value),
            ..Default::default()
        }
    }
}

/// Image with optional dimensions in pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    /// Image URL.
    pub url: String,
    /// Width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}
