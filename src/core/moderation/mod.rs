// Core moderation module - the per-guild warning ledger.

pub mod moderation_models;
pub mod warning_service;

pub use moderation_models::*;
pub use warning_service::*;
