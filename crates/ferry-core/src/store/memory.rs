use std::{collections::HashMap, sync::RwLock};

use async_trait::async_trait;
use ferry_model::Application;
use tracing::trace;

use crate::store::{ApplicationStore, StoreError};

/// In-process application store.
///
/// The instance counter is advanced under the map's write lock, which makes
/// `next_instance` a single read-modify-write.
#[derive(Debug, Default)]
pub struct MemoryStore {
    apps: RwLock<HashMap<String, Application>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an application record.
    pub fn insert(&self, app: Application) -> Result<(), StoreError> {
        let mut apps = self.apps.write().map_err(|_| poisoned())?;
        apps.insert(app.id.clone(), app);
        Ok(())
    }
}

impl FromIterator<Application> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = Application>>(iter: I) -> Self {
        let apps = iter.into_iter().map(|a| (a.id.clone(), a)).collect();
        Self {
            apps: RwLock::new(apps),
        }
    }
}

#[async_trait]
impl ApplicationStore for MemoryStore {
    async fn fetch_application(&self, app_id: &str) -> Result<Option<Application>, StoreError> {
        let apps = self.apps.read().map_err(|_| poisoned())?;
        Ok(apps.get(app_id).cloned())
    }

    async fn next_instance(&self, app_id: &str) -> Result<u64, StoreError> {
        let mut apps = self.apps.write().map_err(|_| poisoned())?;
        let app = apps
            .get_mut(app_id)
            .ok_or_else(|| StoreError::Missing(app_id.to_string()))?;

        let ordinal = app.instances;
        app.instances += 1;
        trace!(app = app_id, ordinal, "instance counter advanced");
        Ok(ordinal)
    }
}

fn poisoned() -> StoreError {
    StoreError::Unavailable("application map lock poisoned".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferry_model::PlacementMode;

    fn app(id: &str, instances: u64) -> Application {
        Application {
            id: id.into(),
            run_as: "ops".into(),
            cluster_id: "dc1".into(),
            instances,
            mode: PlacementMode::Elastic,
        }
    }

    #[tokio::test]
    async fn next_instance_returns_pre_increment_value() {
        let store: MemoryStore = [app("web", 3)].into_iter().collect();

        assert_eq!(store.next_instance("web").await.unwrap(), 3);
        assert_eq!(store.next_instance("web").await.unwrap(), 4);

        let stored = store.fetch_application("web").await.unwrap().unwrap();
        assert_eq!(stored.instances, 5);
    }

    #[tokio::test]
    async fn missing_application() {
        let store = MemoryStore::new();
        assert!(store.fetch_application("nope").await.unwrap().is_none());
        assert!(matches!(
            store.next_instance("nope").await,
            Err(StoreError::Missing(id)) if id == "nope"
        ));
    }

    #[tokio::test]
    async fn insert_replaces_record() {
        let store = MemoryStore::new();
        store.insert(app("web", 1)).unwrap();
        store.insert(app("web", 9)).unwrap();

        let stored = store.fetch_application("web").await.unwrap().unwrap();
        assert_eq!(stored.instances, 9);
    }
}
