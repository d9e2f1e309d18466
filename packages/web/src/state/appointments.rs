//! Appointments table state and row formatting

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

use super::request::{RequestTicket, RequestTracker};
use crate::api::ApiError;
use crate::types::{Appointment, AppointmentDate};

pub const NO_PATIENT: &str = "N/A";
pub const NO_DATE: &str = "No Date Available";
pub const NO_EMAIL: &str = "No Email Available";
pub const NO_APPOINTMENTS: &str = "No appointments available";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentsError {
    #[error("Unexpected response format")]
    UnexpectedFormat,

    #[error("Failed to fetch appointments")]
    Fetch,
}

impl From<ApiError> for AppointmentsError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::UnexpectedFormat => AppointmentsError::UnexpectedFormat,
            ApiError::Network(_) | ApiError::Status(_) => AppointmentsError::Fetch,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Vec<Appointment>),
    Failed(AppointmentsError),
}

/// One rendered table row, placeholders already applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRow {
    pub key: String,
    pub patient: String,
    pub date: String,
    pub doctor_email: String,
}

/// Format `2024-03-05` (or an RFC 3339 timestamp) as `March 5, 2024`
pub fn format_long_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })?;

    Some(date.format("%B %-d, %Y").to_string())
}

/// Format a UTC epoch-milliseconds timestamp the same way
pub fn format_epoch_millis(ms: i64) -> Option<String> {
    let date = DateTime::from_timestamp_millis(ms)?.date_naive();
    Some(date.format("%B %-d, %Y").to_string())
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl AppointmentRow {
    pub fn from_appointment(index: usize, appointment: &Appointment) -> Self {
        let date = match &appointment.date {
            // Unparseable dates are shown as sent
            Some(AppointmentDate::Text(raw)) if !raw.is_empty() => {
                format_long_date(raw).unwrap_or_else(|| raw.clone())
            }
            Some(AppointmentDate::EpochMillis(ms)) => {
                format_epoch_millis(*ms).unwrap_or_else(|| ms.to_string())
            }
            _ => NO_DATE.to_string(),
        };

        Self {
            key: appointment
                .id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| format!("row-{index}")),
            patient: present(&appointment.patient_name)
                .unwrap_or(NO_PATIENT)
                .to_string(),
            date,
            doctor_email: present(&appointment.doctor_email)
                .unwrap_or(NO_EMAIL)
                .to_string(),
        }
    }
}

pub fn appointment_rows(appointments: &[Appointment]) -> Vec<AppointmentRow> {
    appointments
        .iter()
        .enumerate()
        .map(|(index, appointment)| AppointmentRow::from_appointment(index, appointment))
        .collect()
}

/// Appointments list owned by one mounted table
#[derive(Debug, Clone, Default)]
pub struct AppointmentsTable {
    state: LoadState,
    tracker: RequestTracker,
}

impl AppointmentsTable {
    pub fn new(tracker: RequestTracker) -> Self {
        Self {
            state: LoadState::Loading,
            tracker,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn tracker(&self) -> &RequestTracker {
        &self.tracker
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// Enter the loading state and take a ticket for the fetch
    pub fn begin_load(&mut self) -> RequestTicket {
        self.state = LoadState::Loading;
        self.tracker.begin()
    }

    /// Store the fetch result. Returns false if the ticket was superseded.
    pub fn finish(
        &mut self,
        ticket: &RequestTicket,
        result: Result<Vec<Appointment>, ApiError>,
    ) -> bool {
        if !self.tracker.is_current(ticket) {
            debug!("Ignoring appointments response for a superseded request");
            return false;
        }

        self.state = match result {
            Ok(appointments) => LoadState::Loaded(appointments),
            Err(e) => LoadState::Failed(e.into()),
        };
        true
    }

    /// Rows to render; `None` while loading or after an error
    pub fn rows(&self) -> Option<Vec<AppointmentRow>> {
        match &self.state {
            LoadState::Loaded(appointments) => Some(appointment_rows(appointments)),
            LoadState::Loading | LoadState::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<AppointmentsError> {
        match &self.state {
            LoadState::Failed(err) => Some(*err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_dates() {
        assert_eq!(format_long_date("2024-03-05").as_deref(), Some("March 5, 2024"));
        assert_eq!(format_long_date("2023-12-25").as_deref(), Some("December 25, 2023"));
    }

    #[test]
    fn formats_timestamps() {
        assert_eq!(
            format_long_date("2024-03-05T09:30:00.000Z").as_deref(),
            Some("March 5, 2024")
        );
        assert_eq!(
            format_long_date("2024-03-05T09:30:00").as_deref(),
            Some("March 5, 2024")
        );
    }

    #[test]
    fn formats_epoch_milliseconds() {
        assert_eq!(format_epoch_millis(1709596800000).as_deref(), Some("March 5, 2024"));
        assert_eq!(format_epoch_millis(i64::MAX), None);
    }

    #[test]
    fn garbage_dates_are_kept_verbatim() {
        let appointment = Appointment {
            id: None,
            patient_name: None,
            date: Some(AppointmentDate::Text("next tuesday".to_string())),
            doctor_email: None,
        };
        let row = AppointmentRow::from_appointment(0, &appointment);
        assert_eq!(row.date, "next tuesday");
        assert_eq!(row.key, "row-0");
    }

    #[test]
    fn empty_strings_use_placeholders() {
        let appointment = Appointment {
            id: None,
            patient_name: Some(String::new()),
            date: Some(AppointmentDate::Text(String::new())),
            doctor_email: Some(String::new()),
        };
        let row = AppointmentRow::from_appointment(3, &appointment);
        assert_eq!(row.patient, NO_PATIENT);
        assert_eq!(row.date, NO_DATE);
        assert_eq!(row.doctor_email, NO_EMAIL);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            AppointmentsError::UnexpectedFormat.to_string(),
            "Unexpected response format"
        );
        assert_eq!(
            AppointmentsError::Fetch.to_string(),
            "Failed to fetch appointments"
        );
    }
}
