mod application;
pub use application::{Application, PlacementMode};

mod network;
pub use network::NetworkMode;

mod health;
pub use health::{HealthCheck, HealthProtocol};

mod version;
pub use version::{Container, Docker, KillPolicy, PortMapping, Version, Volume, VolumeMode};
