use crate::application::ports::util::IdGenerator;
use uuid::Uuid;

#[derive(Default, Clone)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct_and_non_empty() {
        let ids = UuidGenerator;
        let a = ids.generate();
        let b = ids.generate();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }
}
