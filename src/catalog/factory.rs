use std::sync::Arc;
use crate::albums::repository::AlbumRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;

pub fn create_catalog_service(album_repository: Arc<dyn AlbumRepository>) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(album_repository))
}
