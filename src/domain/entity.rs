/// Storage representation of a user.
///
/// Isomorphic to the REST resource except for identifier handling: an entity
/// always carries its identifier, the primary key under which it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntity {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
}
