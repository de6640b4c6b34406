pub mod master;
pub mod sink;

pub use master::{InMemoryMasterRegistry, MasterCapabilities, MasterSource};
pub use sink::{PageSink, SinkError, VecSink};
