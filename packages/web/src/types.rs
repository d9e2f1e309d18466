//! Type definitions for the doctor roster, sessions and API payloads

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// Doctor Types
// ============================================================================

/// Medical specialty a doctor can be listed under.
///
/// The serialized form is the exact display string; matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialty {
    Dentist,
    #[serde(rename = "General Physician")]
    GeneralPhysician,
    Dermatologist,
    Pediatrician,
    Gastroenterologist,
    Neurologist,
    Gynecologist,
}

impl Specialty {
    pub const ALL: [Specialty; 7] = [
        Specialty::Dentist,
        Specialty::GeneralPhysician,
        Specialty::Dermatologist,
        Specialty::Pediatrician,
        Specialty::Gastroenterologist,
        Specialty::Neurologist,
        Specialty::Gynecologist,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Specialty::Dentist => "Dentist",
            Specialty::GeneralPhysician => "General Physician",
            Specialty::Dermatologist => "Dermatologist",
            Specialty::Pediatrician => "Pediatrician",
            Specialty::Gastroenterologist => "Gastroenterologist",
            Specialty::Neurologist => "Neurologist",
            Specialty::Gynecologist => "Gynecologist",
        }
    }

    /// Icon shown in the home page specialty shortcuts.
    pub fn icon(&self) -> &'static str {
        match self {
            // No dedicated dentist artwork yet
            Specialty::Dentist => "/assets/specialties/Dermatologist.svg",
            Specialty::GeneralPhysician => "/assets/specialties/General_physician.svg",
            Specialty::Dermatologist => "/assets/specialties/Dermatologist.svg",
            Specialty::Pediatrician => "/assets/specialties/Pediatricians.svg",
            Specialty::Gastroenterologist => "/assets/specialties/Gastroenterologist.svg",
            Specialty::Neurologist => "/assets/specialties/Neurologist.svg",
            Specialty::Gynecologist => "/assets/specialties/Gynecologist.svg",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown specialty: {0:?}")]
pub struct UnknownSpecialty(pub String);

impl FromStr for Specialty {
    type Err = UnknownSpecialty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Specialty::ALL
            .into_iter()
            .find(|specialty| specialty.label() == s)
            .ok_or_else(|| UnknownSpecialty(s.to_string()))
    }
}

/// A directory entry for a doctor available for booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub specialty: Specialty,
    pub image: String,
    pub available: bool,
}

impl Doctor {
    pub fn availability_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Not Available"
        }
    }
}

// ============================================================================
// Session Types
// ============================================================================

pub const DEFAULT_AVATAR: &str = "/images/default.png";

/// The currently signed-in user as reported by the auth service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub avatar_url: Option<String>,
}

impl Session {
    pub fn avatar(&self) -> &str {
        self.avatar_url.as_deref().unwrap_or(DEFAULT_AVATAR)
    }
}

/// Session document returned by `GET /api/auth/session`.
///
/// Anonymous visitors get an empty object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionResponse {
    pub user: Option<SessionUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

impl SessionResponse {
    pub fn into_session(self) -> Option<Session> {
        let user = self.user?;
        let name = user.name.or(user.email).unwrap_or_default();
        Some(Session {
            name,
            avatar_url: user.image,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsrfResponse {
    pub csrf_token: String,
}

// ============================================================================
// Subscription Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionRequest {
    pub email: String,
}

// ============================================================================
// Appointment Types
// ============================================================================

/// Appointment identifiers come back as numbers or as document ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AppointmentId {
    Number(i64),
    Text(String),
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentId::Number(n) => write!(f, "{n}"),
            AppointmentId::Text(s) => f.write_str(s),
        }
    }
}

/// Appointment dates arrive as strings or as epoch milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AppointmentDate {
    Text(String),
    EpochMillis(i64),
}

/// One entry of the appointments list.
///
/// Fields with an unexpected JSON type are treated as absent so a single odd
/// entry still renders as a row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(default, alias = "_id", deserialize_with = "lenient_id")]
    pub id: Option<AppointmentId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub patient_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<AppointmentDate>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub doctor_email: Option<String>,
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

fn lenient_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<AppointmentId>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(AppointmentId::Text(text)),
        Value::Number(n) => Some(match n.as_i64() {
            Some(n) => AppointmentId::Number(n),
            None => AppointmentId::Text(n.to_string()),
        }),
        _ => None,
    })
}

fn lenient_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<AppointmentDate>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(AppointmentDate::Text(text)),
        Value::Number(n) => n.as_i64().map(AppointmentDate::EpochMillis),
        _ => None,
    })
}
