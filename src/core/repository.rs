use async_trait::async_trait;
use crate::core::errors::CatalogResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // appends an entity and returns the new number of records
    async fn create(&self, entity: &Entity) -> CatalogResult<usize>;

    // get the first entity with matching id
    async fn get(&self, id: &str) -> CatalogResult<Entity>;

    // all entities in insertion order
    async fn find_all(&self) -> CatalogResult<Vec<Entity>>;
}
