use crate::Db;
use catalog_core::{
    models::{NewProduct, Product, ProductId, ProductUpdate},
    ports::{ProductRepository, Repository},
};

/// Row mapping for the `products` table.
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    price: f64,
    availability: bool,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            availability: row.availability,
        }
    }
}

impl Repository for Db {
    type Error = sqlx::Error;
}

impl ProductRepository for Db {
    async fn list_products(&self) -> Result<Vec<Product>, Self::Error> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            select
                id, name, price, availability
            from
                products
            order by
                price desc
            "#,
        )
        .fetch_all(&self.reader)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_product(&self, id: ProductId) -> Result<Option<Product>, Self::Error> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            select
                id, name, price, availability
            from
                products
            where
                id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.reader)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn create_product(&self, new: NewProduct) -> Result<Product, Self::Error> {
        // availability takes its column default (true)
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            insert into
                products (name, price)
            values
                ($1, $2)
            returning
                id, name, price, availability
            "#,
        )
        .bind(new.name)
        .bind(new.price)
        .fetch_one(&self.writer)
        .await?;

        Ok(row.into())
    }

    async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Option<Product>, Self::Error> {
        // single atomic persist: a missing id updates nothing and returns
        // no row, so there is no partial-mutation window
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            update
                products
            set
                name = $1, price = $2, availability = $3
            where
                id = $4
            returning
                id, name, price, availability
            "#,
        )
        .bind(update.name)
        .bind(update.price)
        .bind(update.availability)
        .bind(id)
        .fetch_optional(&self.writer)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn toggle_availability(&self, id: ProductId) -> Result<Option<Product>, Self::Error> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            update
                products
            set
                availability = not availability
            where
                id = $1
            returning
                id, name, price, availability
            "#,
        )
        .bind(id)
        .fetch_optional(&self.writer)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete_product(&self, id: ProductId) -> Result<bool, Self::Error> {
        let result = sqlx::query(
            r#"
            delete from
                products
            where
                id = $1
            "#,
        )
        .bind(id)
        .execute(&self.writer)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn clear_products(&self) -> Result<(), Self::Error> {
        sqlx::query("delete from products")
            .execute(&self.writer)
            .await?;

        Ok(())
    }
}
