//! External links: calendar booking deep link and product purchase link.

use serde::{Deserialize, Serialize};

use crate::types::{ProductRecord, TreatmentRecord};

/// Google Calendar event editor.
pub const CALENDAR_BASE_URL: &str = "https://calendar.google.com/calendar/r/eventedit";

/// Texts used to pre-fill the calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingTemplate {
    /// Event title is `"{title_prefix}: {name}"`.
    pub title_prefix: String,
    /// First line of the event details.
    pub greeting: String,
    pub treatment_label: String,
    pub duration_label: String,
    /// Omitted from the link when empty.
    pub location: String,
}

impl BookingTemplate {
    pub fn english() -> Self {
        Self {
            title_prefix: "Appointment".to_string(),
            greeting: "Hi! I would like to book this appointment.".to_string(),
            treatment_label: "Treatment".to_string(),
            duration_label: "Duration".to_string(),
            location: String::new(),
        }
    }

    pub fn spanish() -> Self {
        Self {
            title_prefix: "Turno Estética".to_string(),
            greeting: "¡Hola! Quisiera reservar este turno.".to_string(),
            treatment_label: "Tratamiento".to_string(),
            duration_label: "Duración".to_string(),
            location: String::new(),
        }
    }

    #[must_use]
    pub fn with_location(self, location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..self
        }
    }

    /// Event title for `treatment`.
    pub fn title(&self, treatment: &TreatmentRecord) -> String {
        format!("{}: {}", self.title_prefix, treatment.name)
    }

    /// Event details for `treatment`.
    pub fn details(&self, treatment: &TreatmentRecord) -> String {
        format!(
            "{}\n{}: {}\n{}: {} min.",
            self.greeting,
            self.treatment_label,
            treatment.name,
            self.duration_label,
            treatment.duration_minutes
        )
    }
}

impl Default for BookingTemplate {
    fn default() -> Self {
        Self::english()
    }
}

/// Calendar deep link that pre-fills a booking for `treatment`.
pub fn calendar_link(treatment: &TreatmentRecord, template: &BookingTemplate) -> String {
    let mut link = format!(
        "{CALENDAR_BASE_URL}?text={}&details={}",
        urlencoding::encode(&template.title(treatment)),
        urlencoding::encode(&template.details(treatment)),
    );
    if !template.location.is_empty() {
        link.push_str("&location=");
        link.push_str(&urlencoding::encode(&template.location));
    }
    link
}

/// Stored purchase link, verbatim. `None` means the purchase action is disabled.
pub fn purchase_link(product: &ProductRecord) -> Option<&str> {
    product.external_purchase_link.as_deref()
}
