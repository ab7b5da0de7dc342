//! Session state — the top-level estimator state and the booking dialog
//! draft, modeled as an explicit draft/commit pair.
//!
//! The dialog holds its own copy of dimensions/product. Edits made while
//! composing a request touch only the draft; they are promoted into
//! top-level state on successful submit, and discarded on cancel. That is
//! the whole state machine: Closed → Open on `open_dialog`, Open → Closed
//! on `cancel_dialog` or a validated `submit`.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::booking::composer::{compose_default_message, compose_outbound_url};
use crate::booking::validation::validate_contact;
use crate::catalog::{find_by_key, product, ProductKey};
use crate::errors::AppError;
use crate::estimator::{estimate_raw, Estimate};

/// How the customer wants to be contacted back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreferredChannel {
    WhatsApp,
    Call,
}

impl PreferredChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferredChannel::WhatsApp => "WhatsApp",
            PreferredChannel::Call => "Call",
        }
    }
}

impl fmt::Display for PreferredChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dialog-local booking request. Exists only while the dialog is open;
/// merged into top-level state on submit, dropped on cancel.
#[derive(Debug, Clone, Serialize)]
pub struct BookingDraft {
    #[serde(rename = "width")]
    pub width_raw: String,
    #[serde(rename = "height")]
    pub height_raw: String,
    pub product: ProductKey,
    pub name: String,
    pub phone: String,
    pub preferred: PreferredChannel,
    pub rush_visit: bool,
    pub message: String,
}

impl BookingDraft {
    pub fn quick_estimate(&self) -> Estimate {
        estimate_raw(&self.width_raw, &self.height_raw, product(self.product))
    }
}

/// The in-memory session: top-level dimension/product state plus the
/// optional open dialog. Dimensions are kept as the raw strings the user
/// typed (post input-sanitization), like the widget's text fields.
#[derive(Debug, Clone)]
pub struct Session {
    pub width_raw: String,
    pub height_raw: String,
    pub product: ProductKey,
    pub dialog: Option<BookingDraft>,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            width_raw: "200".to_string(),
            height_raw: "300".to_string(),
            product: ProductKey::Sheer,
            dialog: None,
        }
    }
}

/// PATCH body for the top-level estimator state.
#[derive(Debug, Default, Deserialize)]
pub struct SessionUpdate {
    pub width: Option<String>,
    pub height: Option<String>,
    pub product: Option<String>,
}

/// PATCH body for the open dialog.
#[derive(Debug, Default, Deserialize)]
pub struct DraftUpdate {
    pub width: Option<String>,
    pub height: Option<String>,
    pub product: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub preferred: Option<PreferredChannel>,
    pub rush_visit: Option<bool>,
    pub message: Option<String>,
}

/// POST body for submit — last-moment overrides merged into the draft
/// before validation.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub preferred: Option<PreferredChannel>,
    pub rush_visit: Option<bool>,
    pub message: Option<String>,
}

/// Result of a successful submit. `request` is the committed booking
/// request, returned to the caller and logged — never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitOutcome {
    pub request_id: Uuid,
    pub outbound_url: String,
    pub request: BookingDraft,
}

impl Session {
    /// Applies a top-level dimension/product update. Dimension strings are
    /// sanitized to digits and dots the way the widget's inputs are.
    pub fn apply_update(&mut self, update: SessionUpdate) -> Result<(), AppError> {
        if let Some(w) = update.width {
            self.width_raw = sanitize_dimension(&w);
        }
        if let Some(h) = update.height {
            self.height_raw = sanitize_dimension(&h);
        }
        if let Some(raw) = update.product {
            self.product = find_by_key(&raw)?.key;
        }
        Ok(())
    }

    /// Fresh estimate for the current top-level state.
    pub fn current_estimate(&self) -> Estimate {
        estimate_raw(&self.width_raw, &self.height_raw, product(self.product))
    }

    /// Closed → Open. Seeds the draft from the current top-level values and
    /// composes the default message. Reopening replaces any stale draft —
    /// contact fields start blank on every open.
    pub fn open_dialog(&mut self, currency: &str) -> &BookingDraft {
        let message = compose_default_message(
            product(self.product),
            &self.width_raw,
            &self.height_raw,
            currency,
        );
        self.dialog.insert(BookingDraft {
            width_raw: self.width_raw.clone(),
            height_raw: self.height_raw.clone(),
            product: self.product,
            name: String::new(),
            phone: String::new(),
            preferred: PreferredChannel::WhatsApp,
            rush_visit: true,
            message,
        })
    }

    /// Edits the open draft. Changing dimensions or product recomposes the
    /// default message; an explicit `message` in the same update wins, so a
    /// hand-written text survives contact-field edits.
    pub fn edit_draft(
        &mut self,
        update: DraftUpdate,
        currency: &str,
    ) -> Result<&BookingDraft, AppError> {
        let new_product = match &update.product {
            Some(raw) => Some(find_by_key(raw)?.key),
            None => None,
        };

        let draft = self.dialog.as_mut().ok_or_else(dialog_closed)?;

        let mut recompose = false;
        if let Some(w) = update.width {
            draft.width_raw = sanitize_dimension(&w);
            recompose = true;
        }
        if let Some(h) = update.height {
            draft.height_raw = sanitize_dimension(&h);
            recompose = true;
        }
        if let Some(key) = new_product {
            draft.product = key;
            recompose = true;
        }
        if recompose {
            draft.message = compose_default_message(
                product(draft.product),
                &draft.width_raw,
                &draft.height_raw,
                currency,
            );
        }

        if let Some(name) = update.name {
            draft.name = name;
        }
        if let Some(phone) = update.phone {
            draft.phone = phone;
        }
        if let Some(preferred) = update.preferred {
            draft.preferred = preferred;
        }
        if let Some(rush) = update.rush_visit {
            draft.rush_visit = rush;
        }
        if let Some(message) = update.message {
            draft.message = message;
        }

        Ok(&*draft)
    }

    /// Open → Closed, discarding every edit. Top-level state is untouched.
    pub fn cancel_dialog(&mut self) -> Result<(), AppError> {
        if self.dialog.take().is_none() {
            return Err(dialog_closed());
        }
        Ok(())
    }

    /// Validated submit: merges last-moment overrides, gates on contact
    /// validation (a rejected submit leaves the dialog open with its edits
    /// intact), then commits — the draft's dimensions/product become the new
    /// top-level state and the dialog closes.
    pub fn submit(
        &mut self,
        request: SubmitRequest,
        business_number: &str,
    ) -> Result<SubmitOutcome, AppError> {
        {
            let draft = self.dialog.as_mut().ok_or_else(dialog_closed)?;
            if let Some(name) = request.name {
                draft.name = name;
            }
            if let Some(phone) = request.phone {
                draft.phone = phone;
            }
            if let Some(preferred) = request.preferred {
                draft.preferred = preferred;
            }
            if let Some(rush) = request.rush_visit {
                draft.rush_visit = rush;
            }
            if let Some(message) = request.message {
                draft.message = message;
            }
            validate_contact(&draft.name, &draft.phone)?;
        }

        let Some(draft) = self.dialog.take() else {
            return Err(dialog_closed());
        };

        let outbound_url = compose_outbound_url(
            &draft.message,
            &draft.name,
            &draft.phone,
            draft.preferred.as_str(),
            business_number,
        );

        // Commit boundary: promote the draft into top-level state.
        self.width_raw = draft.width_raw.clone();
        self.height_raw = draft.height_raw.clone();
        self.product = draft.product;

        Ok(SubmitOutcome {
            request_id: Uuid::new_v4(),
            outbound_url,
            request: draft,
        })
    }
}

fn dialog_closed() -> AppError {
    AppError::Conflict("No open booking dialog".to_string())
}

/// Mirrors the widget's input sanitizer: keep digits and dots, drop the rest.
fn sanitize_dimension(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}
