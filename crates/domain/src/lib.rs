//! # irpanel-domain
//!
//! Pure domain model for the irpanel device control panel.
//!
//! ## Responsibilities
//! - Name the device's CGI endpoints (`temp`, `ir/aircon`)
//! - Define the **IR command** (ordered form fields) and its query encoding
//! - Define the **device response** of a completed GET and the transport error
//! - Define the **result view** (text + tone) and the rule that turns an
//!   outcome into what a result area shows
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod endpoint;
pub mod error;
pub mod ir_command;
pub mod response;
pub mod result_view;
