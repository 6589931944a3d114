use async_trait::async_trait;

use crate::domain::entity::UserEntity;
use crate::error::persistence::PersistenceError;
use crate::error::service::IdentifierError;

/// Persistence port consumed by the user service.
///
/// Implemented over the database driver in `infra`; tests substitute an
/// in-memory double.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Whether any stored user carries this email.
    async fn exists_with_email(&self, email: &str) -> Result<bool, PersistenceError>;

    /// Persist a new entity.
    async fn insert(&self, entity: &UserEntity) -> Result<(), PersistenceError>;

    /// Fetch a single entity. Absent is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: &str) -> Result<Option<UserEntity>, PersistenceError>;

    /// Fetch every stored entity.
    async fn find_all(&self) -> Result<Vec<UserEntity>, PersistenceError>;

    /// Release storage resources. Idempotent, invoked once on teardown.
    async fn shutdown(&self);
}

/// Produces practically globally-unique identifiers for new entities.
pub trait GenerateIdentifier: Send + Sync {
    fn generate(&self) -> Result<String, IdentifierError>;
}
