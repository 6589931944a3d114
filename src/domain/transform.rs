//! Conversions between the wire resource and the storage entity.

use crate::app::resource::User;
use crate::domain::entity::UserEntity;

/// Convert a REST resource into a storage entity, identifier included.
pub fn to_entity(resource: &User) -> UserEntity {
    UserEntity {
        id: resource.id.clone(),
        first_name: resource.first_name.clone(),
        last_name: resource.last_name.clone(),
        email: resource.email.clone(),
        country: resource.country.clone(),
    }
}

/// Convert a storage entity into a REST resource.
///
/// Leaves the identifier empty: callers that need it re-attach it after an
/// identifier-significant lookup, and batch conversion re-attaches it in
/// [`to_rest_array`].
pub fn to_rest(entity: UserEntity) -> User {
    User {
        id: String::new(),
        first_name: entity.first_name,
        last_name: entity.last_name,
        email: entity.email,
        country: entity.country,
    }
}

/// Convert a batch of entities, re-attaching each entity's identifier.
///
/// Order-preserving, equal in length to the input.
pub fn to_rest_array(entities: Vec<UserEntity>) -> Vec<User> {
    entities
        .into_iter()
        .map(|entity| {
            let id = entity.id.clone();
            let mut resource = to_rest(entity);
            resource.id = id;
            resource
        })
        .collect()
}
