// src/application/ports/util.rs

/// Produces a slug candidate from a display name. The category is part of
/// the contract but unused by the default scheme; a category-aware scheme
/// only has to touch the implementation.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, name: &str, category: Option<&str>) -> String;
}
