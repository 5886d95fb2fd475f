//! Connection to the SurrealDB instance that stores study groups.

use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::{Client, Ws};
use surrealdb::opt::auth::Root;
use tracing::info;

/// The `[database]` section of the service config file.
///
/// Every field is optional in the file; missing ones take the local
/// development defaults below.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    /// `host:port` of the WebSocket endpoint.
    pub url: String,
    pub namespace: String,
    /// Database holding the `study_group` and `sequence` tables.
    pub database: String,
    pub username: String,
    /// Overridable from the environment so it need not sit in the file.
    pub password: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: "127.0.0.1:8000".into(),
            namespace: "studygroups".into(),
            database: "main".into(),
            username: "root".into(),
            password: "root".into(),
        }
    }
}

/// Open handle to the study group store.
#[derive(Clone)]
pub struct DbManager {
    db: Surreal<Client>,
}

impl DbManager {
    /// Open the store described by `config`.
    ///
    /// The handle is scoped to the configured namespace and database, so
    /// migrations and repository queries can run on it directly.
    pub async fn connect(config: &DbConfig) -> Result<Self, surrealdb::Error> {
        info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "Opening study group store"
        );

        let db = Surreal::new::<Ws>(&config.url).await?;

        db.signin(Root {
            username: config.username.clone(),
            password: config.password.clone(),
        })
        .await?;

        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await?;

        info!(namespace = %config.namespace, "Study group store ready");

        Ok(Self { db })
    }

    /// Client handed to `run_migrations` and the repository.
    pub fn client(&self) -> &Surreal<Client> {
        &self.db
    }
}
