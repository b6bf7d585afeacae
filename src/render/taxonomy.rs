//! Style taxonomy capability
//!
//! Registering a beer style with a host content system is an effectful,
//! host-side operation. The renderer takes it as an injected capability so
//! the core stays pure and testable without a host present.

/// Host-side style term storage
pub trait StyleTaxonomy {
    /// Ensure a term exists for the style name; returns a link to its
    /// category page when the host has one
    fn lookup_or_register(&mut self, style_name: &str) -> Option<String>;
}
