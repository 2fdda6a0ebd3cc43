// src/application/ports/util.rs

/// Source of fresh article identifiers. Generated values are expected to be
/// collision-free in practice; the storage uniqueness constraint backstops
/// the unlikely exception.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}
