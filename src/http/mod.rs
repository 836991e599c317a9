//! Request execution: the transport seam, single probes, and the timed loop.
mod client;
mod driver;
mod probe;
mod target;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{ClientSettings, ReqwestTransport, build_client};
pub use driver::{DriverSettings, run_loop};
pub use probe::{Transport, probe, progress_line};
pub use target::compose_url;
