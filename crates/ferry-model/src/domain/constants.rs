//! Well-known names shared by the model and the launch pipeline.

/// Name of the overlay network reserved for ferry-managed containers.
///
/// A version declaring this network is attached to it as a user-defined docker network
/// instead of receiving per-port host bindings.
pub const RESERVED_OVERLAY_NETWORK: &str = "ferry";

/// Docker parameter key carrying the pinned address of a fixed-mode instance.
pub const PARAM_IP: &str = "ip";

/// Resource name under which the master advertises port ranges.
pub const PORTS_RESOURCE: &str = "ports";
