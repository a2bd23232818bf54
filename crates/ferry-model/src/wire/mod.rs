//! JSON shapes of the master's v1 scheduler API.
//!
//! Only the subset the launch pipeline reads or writes is modeled. Field names follow
//! the master's protobuf definitions, enums are encoded as their upper-case names.
mod common;
pub use common::{AgentId, FrameworkId, OfferId, Range, Ranges, Resource, Scalar, TaskId, ValueType};

mod offer;
pub use offer::Offer;

mod task_info;
pub use task_info::{
    CommandInfo, CommandUri, ContainerInfo, ContainerType, DockerInfo, DockerNetwork,
    Environment, HealthCheck, HealthCheckType, HttpCheckInfo, Label, Labels, NetworkInfo,
    Parameter, PortMapping, TaskInfo, TcpCheckInfo, Variable, Volume, VolumeMode,
};

mod call;
pub use call::{
    Accept, Call, CallType, DurationInfo, Filters, Kill, KillPolicy, Launch, Operation,
    OperationType,
};
