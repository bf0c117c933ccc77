use std::sync::Arc;
use crate::albums::domain::model::AlbumEntity;
use crate::albums::repository::AlbumRepository;
use crate::albums::repository::memory_album_repository::MemoryAlbumRepository;

pub fn seed_albums() -> Vec<AlbumEntity> {
    vec![
        AlbumEntity::new("1", "Blue Train", "John Coltrane", 56.99),
        AlbumEntity::new("2", "Jeru", "Gerry Mulligan", 17.99),
        AlbumEntity::new("3", "Sarah Vaughan and Clifford Brown", "Sarah Vaughan", 39.99),
    ]
}

pub fn create_album_repository(seed: bool) -> Arc<dyn AlbumRepository> {
    if seed {
        Arc::new(MemoryAlbumRepository::with_albums(seed_albums()))
    } else {
        Arc::new(MemoryAlbumRepository::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::albums::factory::create_album_repository;
    use crate::albums::repository::AlbumRepository;

    #[tokio::test]
    async fn test_should_seed_repository() {
        let repo = create_album_repository(true);
        let albums = repo.find_all().await.expect("should list albums");
        assert_eq!(3, albums.len());
        assert_eq!("Blue Train", albums[0].title.as_str());
        assert_eq!("Jeru", albums[1].title.as_str());
        assert_eq!("Sarah Vaughan", albums[2].artist.as_str());
        assert_eq!(39.99, albums[2].price);
    }

    #[tokio::test]
    async fn test_should_create_empty_repository() {
        let repo = create_album_repository(false);
        assert_eq!(0, repo.count().await.expect("should count"));
    }
}
