mod domain;
pub use domain::{Env, KeyValue, Labels, Parameter};
pub use domain::{PARAM_IP, PORTS_RESOURCE, RESERVED_OVERLAY_NETWORK};

mod error;
pub use error::{ModelError, ModelResult};

mod app;
pub use app::{
    Application, Container, Docker, HealthCheck, HealthProtocol, KillPolicy, NetworkMode,
    PlacementMode, PortMapping, Version, Volume, VolumeMode,
};

mod task;
pub use task::Task;

mod target;
pub use target::{Target, TargetChange, TargetChangeEvent};

pub mod wire;
pub use wire::Offer;
