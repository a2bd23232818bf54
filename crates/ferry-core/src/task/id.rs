use std::time::{SystemTime, UNIX_EPOCH};

use ferry_model::Application;

/// Derived task name: `{ordinal}.{app}.{run_as}.{cluster}`.
pub fn make_task_name(ordinal: u64, app: &Application) -> String {
    format!("{ordinal}.{}.{}.{}", app.id, app.run_as, app.cluster_id)
}

/// Globally unique task id: `{unix-nanos}-{name}`.
///
/// Two ids only collide when the same name is built twice within one nanosecond.
pub fn make_task_id(name: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{nanos}-{name}")
}
