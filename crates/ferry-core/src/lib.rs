pub mod error;
pub mod launch;
pub mod map;
pub mod metrics;
pub mod ports;
pub mod store;
pub mod task;
pub mod transport;

pub use error::CoreError;
pub use launch::LaunchCoordinator;
pub use map::{TaskInfoBuilder, build_task_info, build_task_info_with, targets_for};
pub use metrics::{CallKind, CallOutcome, DegradedReason, MetricsBackend, MetricsHandle};
pub use ports::{PortAllocator, ports};
pub use store::{ApplicationStore, MemoryStore, StoreError};
pub use task::TaskBuilder;
pub use transport::{CallResponse, Transport, TransportError};

pub mod prelude {
    pub use crate::error::CoreError;
    pub use crate::launch::LaunchCoordinator;
    pub use crate::map::TaskInfoBuilder;
    pub use crate::ports::PortAllocator;
    pub use crate::store::ApplicationStore;
    pub use crate::task::TaskBuilder;
    pub use crate::transport::Transport;
}
