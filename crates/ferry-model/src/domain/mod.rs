mod kv;
pub use kv::KeyValue;

mod env;
pub use env::Env;

mod labels;
pub use labels::Labels;

mod constants;
pub use constants::{PARAM_IP, PORTS_RESOURCE, RESERVED_OVERLAY_NETWORK};

/// Docker run parameter (`--key=value`) passed through to the container runtime.
pub type Parameter = KeyValue;
