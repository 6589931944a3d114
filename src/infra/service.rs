use uuid::Uuid;

use crate::domain::service::GenerateIdentifier;
use crate::error::service::IdentifierError;

/// Identifier generation backed by random v4 UUIDs in canonical string form.
pub struct UuidGenerator;

impl GenerateIdentifier for UuidGenerator {
    fn generate(&self) -> Result<String, IdentifierError> {
        Ok(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn generates_canonical_identifiers() {
        let id = UuidGenerator.generate().unwrap();

        assert_eq!(Uuid::parse_str(&id).unwrap().to_string(), id);
    }

    #[test]
    fn generated_identifiers_differ() {
        assert_ne!(
            UuidGenerator.generate().unwrap(),
            UuidGenerator.generate().unwrap()
        );
    }
}
