mod application;
mod product;

pub use application::Application;
pub use product::ProductRepository;

/// Base trait associating an error type with a storage implementation.
///
/// Adapter errors surface through this associated type and are mapped to
/// HTTP 500 responses at the route layer; the core never inspects them
/// beyond their `Display` output.
pub trait Repository {
    /// The error produced by the underlying store
    type Error: std::error::Error + Send + Sync + 'static;
}
