//! Database connection and initialization.

use common::DatabaseConfig;
use sea_orm::{
    sea_query::Index, ConnectOptions, ConnectionTrait, Database as SeaDatabase,
    DatabaseConnection, DbErr, Schema, Statement,
};

use crate::repository::entities::customer::{self, EMAIL_UNIQUE_INDEX};

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Connect and make sure the customers table exists.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        let db = Self { connection };
        db.ensure_schema().await?;

        tracing::info!("Database connected and schema ready");
        Ok(db)
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Create the customers table and its named unique email index if missing.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        let backend = self.connection.get_database_backend();
        let mut table = Schema::new(backend).create_table_from_entity(customer::Entity);
        table.if_not_exists();

        let email_index = Index::create()
            .name(EMAIL_UNIQUE_INDEX)
            .table(customer::Entity)
            .col(customer::Column::Email)
            .unique()
            .if_not_exists()
            .to_owned();

        self.connection.execute(backend.build(&table)).await?;
        self.connection.execute(backend.build(&email_index)).await?;
        Ok(())
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
