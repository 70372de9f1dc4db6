//! HTTP API layer: handlers and DTOs.
//!
//! A thin wrapper around [`crate::application::services::LinkService`];
//! no business rules live here.

pub mod dto;
pub mod handlers;
