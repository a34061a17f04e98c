//! Judging Platform - Investment opportunity judging dashboard backend
//!
//! Judges browse a catalogue of investment opportunities, score them on a
//! five-criterion rubric and attach a recommendation. The crate aggregates
//! those judgments into per-opportunity averages, dashboard analytics, a
//! judge directory and a CSV export, keeps per-user favorites and a capped
//! comparison set, and pushes changes to WebSocket clients.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
