//! Initiative Compass - AI Initiative Intake and Portfolio Insights
//!
//! This crate guides teams through structured questionnaire flows that
//! score proposed AI initiatives, and rolls reported metrics up into
//! portfolio-level dashboard views.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
