use uuid::Uuid;

use crate::types::ElementId;

/// Source of element identifiers.
///
/// Every call must return an identifier that has not been returned before
/// within the same run.
pub trait IdGenerator {
    fn next_id(&mut self) -> ElementId;
}

/// Random v4 UUIDs rendered as 32 lowercase hex digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> ElementId {
        generate_element_id()
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> ElementId {
        (**self).next_id()
    }
}

/// Generate a fresh random element ID
pub fn generate_element_id() -> ElementId {
    ElementId::new(Uuid::new_v4().simple().to_string())
}
