//! # irpanel-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceGateway` — one GET against the device's CGI endpoints
//!   - `ResultSink` — a result area that can be cleared and rendered into
//!   - `IrForm` — the current values of the IR command form
//! - Define the **driving/inbound** use-case:
//!   - `PanelController` — fetch temperature, submit IR command, clear on
//!     form change, initial load
//!
//! ## Dependency rule
//! Depends on `irpanel-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
