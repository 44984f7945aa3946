//! # Backend Module
//!
//! This backend module provides direct access to domain services and storage
//! for the egui frontend. There is no server and no IO/REST layer:
//! - All operations are synchronous
//! - Availability data is a fixed in-process dataset
//! - Pending sessions live in a single local storage slot

use anyhow::Result;
use log::info;
use std::sync::Arc;

pub mod domain;
pub mod storage;

use storage::json::JsonConnection;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub reservation_service: domain::ReservationService,
    pub session_service: domain::SessionService,
}

impl Backend {
    /// Create a new backend instance with all services
    pub fn new() -> Result<Self> {
        let data_dir = JsonConnection::default_data_dir();
        let connection = JsonConnection::new(data_dir)?;

        let session_repository = storage::json::SessionRepository::new(connection);
        let session_service = domain::SessionService::new(Arc::new(session_repository));
        let reservation_service = domain::ReservationService::new();
        info!(
            "Loaded {} reservation records",
            reservation_service.reservations().len()
        );

        Ok(Backend {
            reservation_service,
            session_service,
        })
    }
}
