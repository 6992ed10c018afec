use super::ProductRepository;

/// The state threaded through the HTTP surface.
///
/// Axum imposes `Clone + Send + Sync + 'static` on router state; declaring
/// the bounds here, once, keeps them out of every handler signature.
pub trait Application: Clone + Send + Sync + 'static {
    /// The storage adapter backing the product endpoints
    type Repository: ProductRepository + Send + Sync + 'static;

    /// The repository, if a connection was established at startup.
    ///
    /// `None` means the process is serving in degraded mode: the startup
    /// connection failed under the `degrade` policy, and every store-backed
    /// endpoint answers 500 until a restart.
    fn database(&self) -> Option<&Self::Repository>;
}
