//! Booking flow — contact validation, message composition, and the
//! draft/commit dialog state machine behind the /api/v1/booking routes.
//!
//! The outbound WhatsApp link is the export format of a booking request;
//! the server never performs the navigation itself.

pub mod composer;
pub mod handlers;
pub mod session;
pub mod validation;
