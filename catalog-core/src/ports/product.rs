use crate::models::{NewProduct, Product, ProductId, ProductUpdate};

/// Repository interface for product storage.
///
/// All id-addressed mutations are atomic: an operation against an id that
/// does not exist performs no write and reports the absence through its
/// return value (`None` or `false`), never through an error.
pub trait ProductRepository: super::Repository {
    /// List every product, most expensive first.
    fn list_products(&self) -> impl Future<Output = Result<Vec<Product>, Self::Error>> + Send;

    /// Fetch a single product by id.
    ///
    /// # Returns
    ///
    /// The product if it exists, `None` otherwise.
    fn find_product(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, Self::Error>> + Send;

    /// Insert a new product and return it with its store-assigned id.
    ///
    /// Availability defaults to `true`.
    fn create_product(
        &self,
        new: NewProduct,
    ) -> impl Future<Output = Result<Product, Self::Error>> + Send;

    /// Replace every mutable field of an existing product.
    ///
    /// # Returns
    ///
    /// The updated product, or `None` if the id does not exist (in which
    /// case nothing was written).
    fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> impl Future<Output = Result<Option<Product>, Self::Error>> + Send;

    /// Negate the availability flag of an existing product.
    ///
    /// Applying this twice returns the record to its original state.
    ///
    /// # Returns
    ///
    /// The toggled product, or `None` if the id does not exist.
    fn toggle_availability(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, Self::Error>> + Send;

    /// Hard-delete a product. No tombstone is kept.
    ///
    /// # Returns
    ///
    /// `true` if a row was removed, `false` if the id did not exist.
    fn delete_product(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Delete every product row. Used by the maintenance CLI, not the API.
    fn clear_products(&self) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
