use super::*;

/// CRUD orchestration shared by every resource kind.
pub(super) struct ResourceEngine<R> {
    repository: Arc<dyn ResourceRepository>,
    resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceEngine<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceEngine<R> {
    pub(super) fn new(repository: Arc<dyn ResourceRepository>) -> Self {
        Self {
            repository,
            resource: PhantomData,
        }
    }

    pub(super) fn invalid_body() -> AppError {
        AppError::Validation(format!(
            "Request body is not a valid {} object",
            R::KIND.as_str()
        ))
    }

    pub(super) fn not_found(id: ResourceId) -> AppError {
        AppError::NotFound(format!("{} '{id}' does not exist", R::KIND.as_str()))
    }

    /// Validates the payload and projects it onto the schema.
    pub(super) fn prepare(input: Option<&Value>) -> AppResult<FieldMap> {
        let schema = R::KIND.schema();
        if !schema.validate(input) {
            return Err(Self::invalid_body());
        }

        let Some(object) = input.and_then(Value::as_object) else {
            return Err(Self::invalid_body());
        };

        let fields = schema.extract(object);
        schema
            .check_field_types(&fields)
            .map_err(|_| Self::invalid_body())?;

        Ok(fields)
    }

    pub(super) fn ownership_of(fields: &FieldMap) -> AppResult<Ownership> {
        Ownership::from_fields(fields).ok_or_else(Self::invalid_body)
    }

    pub(super) async fn insert(&self, fields: FieldMap) -> AppResult<CreatedResource> {
        let ownership = Self::ownership_of(&fields)?;
        let id = self.repository.insert(R::KIND, fields).await?;

        Ok(CreatedResource {
            id,
            links: ResourceLinks::new(R::KIND, id, ownership.businessid),
        })
    }

    pub(super) async fn create(&self, input: Option<&Value>) -> AppResult<CreatedResource> {
        let fields = Self::prepare(input)?;
        self.insert(fields).await
    }

    pub(super) async fn get(&self, id: ResourceId) -> AppResult<R> {
        self.repository
            .select_by_id(R::KIND, id)
            .await?
            .map(R::from_row)
            .transpose()?
            .ok_or_else(|| Self::not_found(id))
    }

    pub(super) async fn update(
        &self,
        id: ResourceId,
        input: Option<&Value>,
    ) -> AppResult<ResourceLinks> {
        let existing = self.get(id).await?;
        let fields = Self::prepare(input)?;

        if !check_ownership_unchanged(&existing, &fields) {
            return Err(AppError::Forbidden(format!(
                "Updated {} cannot modify businessid or userid",
                R::KIND.as_str()
            )));
        }

        // A concurrent delete between the load and the write leaves nothing to update.
        let affected = self.repository.update(R::KIND, id, fields).await?;
        if affected == 0 {
            return Err(Self::not_found(id));
        }

        Ok(ResourceLinks::new(
            R::KIND,
            existing.id(),
            existing.ownership().businessid,
        ))
    }

    pub(super) async fn delete(&self, id: ResourceId) -> AppResult<()> {
        let affected = self.repository.delete_by_id(R::KIND, id).await?;
        if affected == 0 {
            return Err(Self::not_found(id));
        }

        Ok(())
    }

    pub(super) async fn list_by_business(&self, businessid: i64) -> AppResult<Vec<R>> {
        self.repository
            .list_by_business(R::KIND, businessid)
            .await?
            .into_iter()
            .map(R::from_row)
            .collect()
    }
}
