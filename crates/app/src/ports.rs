//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! None of the port futures are required to be `Send`: the browser adapter
//! runs them on a single-threaded executor.

pub mod device_gateway;
pub mod ir_form;
pub mod result_sink;

pub use device_gateway::DeviceGateway;
pub use ir_form::IrForm;
pub use result_sink::ResultSink;
