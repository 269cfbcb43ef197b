use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 9001,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    /// sqlx SQLite URL, e.g. `sqlite://contacts.db` or `sqlite::memory:`
    pub url: String,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: "sqlite://contacts.db".into(),
        }
    }
}

/// Runtime settings for the contacts server.
///
/// Layered: built-in defaults, then an optional `config.toml`, then environment
/// variables with `_` as the nesting separator (`SERVER_PORT`, `DATABASE_URL`). A `.env`
/// file is loaded into the environment first if present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub database: Database,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 9001)?
            .set_default("database.url", "sqlite://contacts.db")?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::default().separator("_").try_parsing(true))
            .build()?;

        config.try_deserialize()
    }

    /// `host:port` to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
