pub mod prober;
pub mod selector;

pub use prober::{HttpProber, Probe, DEFAULT_PROBE_TIMEOUT};
pub use selector::{SelectionError, Selector};
