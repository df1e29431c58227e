use super::*;

const ALREADY_REVIEWED: &str = "User has already posted a review of this business";

/// Application service for review CRUD with one review per user and business.
#[derive(Clone)]
pub struct ReviewService {
    engine: ResourceEngine<Review>,
}

impl ReviewService {
    /// Creates a new review service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn ResourceRepository>) -> Self {
        Self {
            engine: ResourceEngine::new(repository),
        }
    }

    /// Validates and persists a new review unless the user already reviewed the business.
    pub async fn create(&self, input: Option<&Value>) -> AppResult<CreatedResource> {
        let fields = ResourceEngine::<Review>::prepare(input)?;
        let ownership = ResourceEngine::<Review>::ownership_of(&fields)?;

        let existing = self.engine.list_by_business(ownership.businessid).await?;
        if has_existing_review(&existing, ownership.userid, ownership.businessid) {
            return Err(AppError::Forbidden(ALREADY_REVIEWED.to_owned()));
        }

        // The scan above races concurrent creates; the store's unique key settles it.
        match self.engine.insert(fields).await {
            Err(AppError::Conflict(_)) => Err(AppError::Forbidden(ALREADY_REVIEWED.to_owned())),
            result => result,
        }
    }

    /// Loads a review by id.
    pub async fn get(&self, id: ResourceId) -> AppResult<Review> {
        self.engine.get(id).await
    }

    /// Replaces the supplied review fields, keeping id and owners.
    pub async fn update(&self, id: ResourceId, input: Option<&Value>) -> AppResult<ResourceLinks> {
        self.engine.update(id, input).await
    }

    /// Deletes a review by id.
    pub async fn delete(&self, id: ResourceId) -> AppResult<()> {
        self.engine.delete(id).await
    }
}
