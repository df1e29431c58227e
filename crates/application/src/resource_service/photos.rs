use super::*;

/// Application service for photo CRUD.
#[derive(Clone)]
pub struct PhotoService {
    engine: ResourceEngine<Photo>,
}

impl PhotoService {
    /// Creates a new photo service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn ResourceRepository>) -> Self {
        Self {
            engine: ResourceEngine::new(repository),
        }
    }

    /// Validates and persists a new photo.
    pub async fn create(&self, input: Option<&Value>) -> AppResult<CreatedResource> {
        self.engine.create(input).await
    }

    /// Loads a photo by id.
    pub async fn get(&self, id: ResourceId) -> AppResult<Photo> {
        self.engine.get(id).await
    }

    /// Replaces the supplied photo fields, keeping id and owners.
    pub async fn update(&self, id: ResourceId, input: Option<&Value>) -> AppResult<ResourceLinks> {
        self.engine.update(id, input).await
    }

    /// Deletes a photo by id.
    pub async fn delete(&self, id: ResourceId) -> AppResult<()> {
        self.engine.delete(id).await
    }
}
