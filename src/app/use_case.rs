use async_trait::async_trait;

use crate::app::resource::User;
use crate::domain::service::{GenerateIdentifier, UserStore};
use crate::domain::transform;
use crate::domain::validation::ValidateUser;
use crate::error::resource::ValidationError;
use crate::error::service::ServiceError;

/// Classification of a service operation result.
///
/// Every operation resolves to exactly one variant, carrying the
/// type-appropriate payload or error detail.
#[derive(Debug)]
pub enum ServiceOutcome<T> {
    /// Operation completed; carries the result payload.
    Success(T),
    /// The submitted resource failed validation; carries the error list.
    InvalidData(Vec<ValidationError>),
    /// A stored user already carries the submitted email.
    Conflict,
    /// A well-defined negative lookup result, distinct from failure.
    NotFound,
    /// A backend failure, opaque to the client.
    Error(ServiceError),
}

/// Operations over the user resource, consumed by the HTTP boundary.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Validate and create a user resource.
    async fn create_user(&self, resource: User) -> ServiceOutcome<User>;

    /// Fetch an individual user according to an identifier.
    async fn get_user(&self, id: &str) -> ServiceOutcome<User>;

    /// Fetch every stored user.
    async fn get_all_users(&self) -> ServiceOutcome<Vec<User>>;

    /// Release backing resources on process teardown.
    async fn shutdown(&self);
}

pub struct UserService<S, G, V> {
    store: S,
    ids: G,
    validator: V,
}

impl<S, G, V> UserService<S, G, V> {
    pub fn new(store: S, ids: G, validator: V) -> Self {
        Self {
            store,
            ids,
            validator,
        }
    }
}

#[async_trait]
impl<S, G, V> UserApi for UserService<S, G, V>
where
    S: UserStore,
    G: GenerateIdentifier,
    V: ValidateUser,
{
    async fn create_user(&self, mut resource: User) -> ServiceOutcome<User> {
        let errors = self.validator.validate(&resource);
        if !errors.is_empty() {
            return ServiceOutcome::InvalidData(errors);
        }

        match self.store.exists_with_email(&resource.email).await {
            Ok(true) => return ServiceOutcome::Conflict,
            Ok(false) => {}
            Err(err) => return ServiceOutcome::Error(err.into()),
        }

        // valid and free of conflicts; stamp a fresh unique identifier on
        // the resource before it becomes an entity
        resource.id = match self.ids.generate() {
            Ok(id) => id,
            Err(err) => return ServiceOutcome::Error(err.into()),
        };

        let entity = transform::to_entity(&resource);
        if let Err(err) = self.store.insert(&entity).await {
            return ServiceOutcome::Error(err.into());
        }

        ServiceOutcome::Success(resource)
    }

    async fn get_user(&self, id: &str) -> ServiceOutcome<User> {
        match self.store.find_by_id(id).await {
            Ok(Some(entity)) => {
                let id = entity.id.clone();
                let mut resource = transform::to_rest(entity);
                // single-item conversion leaves the identifier empty; a fetch
                // by identifier is identifier-significant, so re-attach it
                resource.id = id;
                ServiceOutcome::Success(resource)
            }
            Ok(None) => ServiceOutcome::NotFound,
            Err(err) => ServiceOutcome::Error(err.into()),
        }
    }

    async fn get_all_users(&self) -> ServiceOutcome<Vec<User>> {
        match self.store.find_all().await {
            Ok(entities) => ServiceOutcome::Success(transform::to_rest_array(entities)),
            Err(err) => ServiceOutcome::Error(err.into()),
        }
    }

    async fn shutdown(&self) {
        self.store.shutdown().await;
    }
}
