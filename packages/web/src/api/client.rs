//! HTTP client for the clinic backend

use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use super::endpoints::{APPOINTMENTS, CSRF_TOKEN, SESSION, SIGN_OUT, SUBSCRIBE};
use super::ApiError;
use crate::types::{Appointment, CsrfResponse, Session, SessionResponse, SubscriptionRequest};

/// How the backend answered a subscription request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Subscribed,
    AlreadySubscribed,
}

/// Map a subscription response status to an outcome.
///
/// 409 is a regular business answer (the address is already on the list),
/// everything else outside 2xx is a failure.
pub fn classify_subscribe_status(status: StatusCode) -> Result<SubscribeOutcome, ApiError> {
    if status.is_success() {
        Ok(SubscribeOutcome::Subscribed)
    } else if status == StatusCode::CONFLICT {
        Ok(SubscribeOutcome::AlreadySubscribed)
    } else {
        Err(ApiError::Status(status))
    }
}

/// Decode the appointments payload, which must be a JSON array.
///
/// Every entry becomes one appointment; entries that are not objects render
/// as an all-placeholder row.
pub fn parse_appointments(payload: Value) -> Result<Vec<Appointment>, ApiError> {
    match payload {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|item| {
                serde_json::from_value(item).unwrap_or_else(|e| {
                    debug!(error = %e, "Appointment entry is not an object");
                    Appointment::default()
                })
            })
            .collect()),
        _ => {
            warn!("Appointments payload is not an array");
            Err(ApiError::UnexpectedFormat)
        }
    }
}

/// Client for the backend REST endpoints
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    /// Create a client for the given origin
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Subscribe an email address to the newsletter
    pub async fn subscribe(&self, email: &str) -> Result<SubscribeOutcome, ApiError> {
        let request = SubscriptionRequest {
            email: email.to_string(),
        };

        let response = self
            .client
            .post(self.url(SUBSCRIBE))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        debug!(%status, "Subscription response");
        classify_subscribe_status(status)
    }

    /// Fetch all appointments
    pub async fn fetch_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        let response = self.client.get(self.url(APPOINTMENTS)).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Appointments request failed");
            return Err(ApiError::Status(status));
        }

        let body = response.text().await?;
        let payload: Value = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "Appointments response is not JSON");
            ApiError::UnexpectedFormat
        })?;

        parse_appointments(payload)
    }

    /// Fetch the current session, `None` when signed out
    pub async fn fetch_session(&self) -> Result<Option<Session>, ApiError> {
        let response = self.client.get(self.url(SESSION)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body = response.text().await?;
        // Some auth backends answer `null` for anonymous visitors
        let session: Option<SessionResponse> =
            serde_json::from_str(&body).map_err(|_| ApiError::UnexpectedFormat)?;

        Ok(session.and_then(SessionResponse::into_session))
    }

    /// End the current session
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        let response = self.client.get(self.url(CSRF_TOKEN)).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        let csrf: CsrfResponse = response
            .json()
            .await
            .map_err(|_| ApiError::UnexpectedFormat)?;

        let response = self
            .client
            .post(self.url(SIGN_OUT))
            .form(&[("csrfToken", csrf.csrf_token.as_str()), ("json", "true")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn conflict_means_already_subscribed() {
        assert_eq!(
            classify_subscribe_status(StatusCode::CONFLICT).unwrap(),
            SubscribeOutcome::AlreadySubscribed
        );
        assert_eq!(
            classify_subscribe_status(StatusCode::CREATED).unwrap(),
            SubscribeOutcome::Subscribed
        );
        assert!(matches!(
            classify_subscribe_status(StatusCode::INTERNAL_SERVER_ERROR),
            Err(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR))
        ));
        assert!(classify_subscribe_status(StatusCode::BAD_REQUEST).is_err());
    }

    #[test]
    fn only_arrays_are_accepted() {
        assert!(parse_appointments(json!([])).unwrap().is_empty());
        assert!(matches!(
            parse_appointments(json!({})),
            Err(ApiError::UnexpectedFormat)
        ));
        assert!(matches!(
            parse_appointments(json!("nope")),
            Err(ApiError::UnexpectedFormat)
        ));
    }

    #[test]
    fn odd_entries_still_produce_one_appointment_each() {
        let appointments = parse_appointments(json!([
            { "id": 1, "patientName": "Jane" },
            null,
            3,
            { "id": 1.5, "patientName": 42 }
        ]))
        .unwrap();

        assert_eq!(appointments.len(), 4);
        assert_eq!(appointments[0].patient_name.as_deref(), Some("Jane"));
        assert_eq!(appointments[1], Appointment::default());
        assert_eq!(appointments[2], Appointment::default());
        assert_eq!(appointments[3].patient_name, None);
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.url(SUBSCRIBE), "http://localhost:3000/api/subs");
    }
}
