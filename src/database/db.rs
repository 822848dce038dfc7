use mongodb::bson::doc;
use mongodb::{Client, options::ClientOptions};

const DEFAULT_DB_NAME: &str = "agrimitra";

/// Shared handle to the document store. The driver connects lazily, so
/// building this does not require the deployment to be reachable.
#[derive(Clone)]
pub struct Database {
    pub client: Client,
}

impl Database {
    pub async fn init(uri: &str) -> mongodb::error::Result<Self> {
        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.app_name = Some("agrimitra-backend".to_string());

        let client = Client::with_options(client_options)?;

        Ok(Self { client })
    }

    /// Round-trip a ping to check the deployment is actually reachable.
    pub async fn ping(&self) -> mongodb::error::Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        Ok(())
    }

    /// The database named in the connection string, falling back to the
    /// default name when the URI has no path component.
    pub fn database(&self) -> mongodb::Database {
        self.client
            .default_database()
            .unwrap_or_else(|| self.client.database(DEFAULT_DB_NAME))
    }
}
