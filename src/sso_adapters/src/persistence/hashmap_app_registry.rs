use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use sso_core::{App, AppId, AppRegistry, AppRegistryError};

#[derive(Default, Clone)]
pub struct HashMapAppRegistry {
    apps: Arc<RwLock<HashMap<AppId, App>>>,
}

impl HashMapAppRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_apps(apps: impl IntoIterator<Item = App>) -> Self {
        let apps = apps.into_iter().map(|app| (app.id, app)).collect();
        Self {
            apps: Arc::new(RwLock::new(apps)),
        }
    }

    pub async fn add_app(&self, app: App) {
        let mut apps = self.apps.write().await;
        apps.insert(app.id, app);
    }
}

#[async_trait::async_trait]
impl AppRegistry for HashMapAppRegistry {
    async fn app(&self, app_id: AppId) -> Result<App, AppRegistryError> {
        let apps = self.apps.read().await;
        apps.get(&app_id)
            .cloned()
            .ok_or(AppRegistryError::AppNotFound)
    }
}
