pub mod connection {
    use std::time::Duration;

    use sqlx::postgres::PgPoolOptions;
    use sqlx::PgPool;

    use crate::config::AppConfig;

    pub async fn create_pool(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .min_connections(1)
            .max_connections(5)
            .acquire_timeout(Duration::from_millis(1000 * 5))
            .idle_timeout(Duration::from_millis(1000 * 30))
            .max_lifetime(Duration::from_millis(1000 * 10))
            .connect(config.database_url.as_str())
            .await?;

        // bounded connectivity check; the process must not come up without
        // a reachable database
        sqlx::query("SELECT 1").execute(&pool).await?;

        Ok(pool)
    }
}

pub mod store {
    use async_trait::async_trait;
    use futures::TryStreamExt;
    use sqlx::postgres::PgRow;
    use sqlx::{PgPool, Row};

    use crate::domain::entity::UserEntity;
    use crate::domain::service::UserStore;
    use crate::error::persistence::PersistenceError;

    /// Persistence port implementation over a PostgreSQL pool.
    ///
    /// Owns the pool handle acquired at startup; `shutdown` releases it.
    pub struct PgUserStore {
        pool: PgPool,
    }

    impl PgUserStore {
        pub fn new(pool: PgPool) -> Self {
            Self { pool }
        }
    }

    impl From<&PgRow> for UserEntity {
        fn from(row: &PgRow) -> Self {
            Self {
                id: row.get("id"),
                first_name: row.get("first_name"),
                last_name: row.get("last_name"),
                email: row.get("email"),
                country: row.get("country"),
            }
        }
    }

    #[async_trait]
    impl UserStore for PgUserStore {
        async fn exists_with_email(&self, email: &str) -> Result<bool, PersistenceError> {
            let row = sqlx::query("SELECT 1 FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

            Ok(row.is_some())
        }

        async fn insert(&self, entity: &UserEntity) -> Result<(), PersistenceError> {
            sqlx::query(concat!(
                "INSERT INTO users (id, first_name, last_name, email, country) ",
                "VALUES ($1, $2, $3, $4, $5)",
            ))
            .bind(&entity.id)
            .bind(&entity.first_name)
            .bind(&entity.last_name)
            .bind(&entity.email)
            .bind(&entity.country)
            .execute(&self.pool)
            .await?;

            Ok(())
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<UserEntity>, PersistenceError> {
            let row = sqlx::query(concat!(
                "SELECT id, first_name, last_name, email, country ",
                "FROM users WHERE id = $1",
            ))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

            Ok(row.as_ref().map(UserEntity::from))
        }

        async fn find_all(&self) -> Result<Vec<UserEntity>, PersistenceError> {
            let mut rows =
                sqlx::query("SELECT id, first_name, last_name, email, country FROM users")
                    .fetch(&self.pool);

            let mut entities = Vec::new();
            while let Some(row) = rows.try_next().await? {
                entities.push(UserEntity::from(&row));
            }

            Ok(entities)
        }

        async fn shutdown(&self) {
            tracing::info!("closing the database connection pool");
            self.pool.close().await;
        }
    }
}
