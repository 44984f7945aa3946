//! # Modals Module
//!
//! Modal dialog components. The booking app has a single modal: the booking
//! confirmation dialog shown after selecting an available slot.

pub mod booking_confirmation;
