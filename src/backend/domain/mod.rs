//! Domain services for the booking app.
//!
//! Two concerns live here: the fixed reservation dataset with its calendar
//! projection, and the pending-session ledger with its credit math.

pub mod models;
pub mod reservation_service;
pub mod session_service;

pub use reservation_service::ReservationService;
pub use session_service::{FinalizeOutcome, SessionService};
