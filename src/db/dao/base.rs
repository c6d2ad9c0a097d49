use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult, IntoActiveModel, Order,
    PrimaryKeyTrait, QueryOrder, QuerySelect, Select,
};
use uuid::Uuid;

use super::base_traits::{HasCreatedAtColumn, HasIdActiveModel, TimestampedActiveModel};
use super::error::{DaoLayerError, DaoResult};

#[derive(Debug, serde::Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub has_next: bool,
}

#[async_trait::async_trait]
pub trait DaoBase: Clone + Send + Sync + Sized
where
    <Self::Entity as EntityTrait>::Model:
        FromQueryResult + IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send + Sync,
    <Self::Entity as EntityTrait>::ActiveModel:
        ActiveModelTrait<Entity = Self::Entity> + HasIdActiveModel + TimestampedActiveModel + Send,
    <<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType:
        From<Uuid> + Send + Sync,
    Self::Entity: HasCreatedAtColumn,
{
    type Entity: EntityTrait + Send + Sync;
    const MAX_PAGE_SIZE: u64 = 100;

    fn from_db(db: DatabaseConnection) -> Self;

    fn new(db: &DatabaseConnection) -> Self {
        Self::from_db(db.clone())
    }

    fn db(&self) -> &DatabaseConnection;

    /// Inserts with a fresh v4 id and both timestamps set to now.
    async fn create(
        &self,
        data: impl IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send,
    ) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        let now = Utc::now().fixed_offset();
        let mut active = data.into_active_model();
        active.set_id(Uuid::new_v4());
        active.set_created_at(now);
        active.set_updated_at(now);
        active.insert(self.db()).await.map_err(DaoLayerError::Db)
    }

    async fn find_by_id(&self, id: Uuid) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        let model = Self::Entity::find_by_id(id)
            .one(self.db())
            .await
            .map_err(DaoLayerError::Db)?;

        model.ok_or(DaoLayerError::NotFound {
            entity: std::any::type_name::<Self::Entity>(),
            id,
        })
    }

    /// One page of rows. Pages are 1-based; one extra row is fetched to
    /// compute `has_next`.
    async fn find(
        &self,
        page: u64,
        page_size: u64,
        order: Option<(<Self::Entity as EntityTrait>::Column, Order)>,
        apply: impl FnOnce(Select<Self::Entity>) -> Select<Self::Entity> + Send,
    ) -> DaoResult<PaginatedResponse<<Self::Entity as EntityTrait>::Model>> {
        if page == 0 || page_size == 0 || page_size > Self::MAX_PAGE_SIZE {
            return Err(DaoLayerError::InvalidPagination { page, page_size });
        }

        let filtered = apply(Self::Entity::find());
        let ordered = match order {
            Some((column, order)) => filtered.order_by(column, order),
            None => filtered.order_by_desc(Self::Entity::created_at_column()),
        };
        let fetch_size = page_size.saturating_add(1);
        let offset = page.saturating_sub(1).saturating_mul(page_size);
        let mut data = ordered
            .limit(fetch_size)
            .offset(offset)
            .all(self.db())
            .await
            .map_err(DaoLayerError::Db)?;

        let has_next = data.len() > page_size as usize;
        if has_next {
            data.truncate(page_size as usize);
        }

        Ok(PaginatedResponse {
            data,
            page,
            page_size,
            has_next,
        })
    }

    /// Walks every page of `find` and concatenates the rows.
    async fn find_all<F>(
        &self,
        order: Option<(<Self::Entity as EntityTrait>::Column, Order)>,
        apply: F,
    ) -> DaoResult<Vec<<Self::Entity as EntityTrait>::Model>>
    where
        F: Fn(Select<Self::Entity>) -> Select<Self::Entity> + Clone + Send,
    {
        let mut rows = Vec::new();
        let mut page = 1;
        loop {
            let mut response = self
                .find(page, Self::MAX_PAGE_SIZE, order.clone(), apply.clone())
                .await?;
            rows.append(&mut response.data);
            if !response.has_next {
                return Ok(rows);
            }
            page = page.saturating_add(1);
        }
    }

    async fn update<F>(&self, id: Uuid, apply: F) -> DaoResult<<Self::Entity as EntityTrait>::Model>
    where
        F: for<'a> FnOnce(&'a mut <Self::Entity as EntityTrait>::ActiveModel) + Send,
    {
        let model = self.find_by_id(id).await?;

        let mut active = model.into_active_model();
        apply(&mut active);
        active.set_updated_at(Utc::now().fixed_offset());

        active.update(self.db()).await.map_err(DaoLayerError::Db)
    }

    async fn delete(&self, id: Uuid) -> DaoResult<Uuid> {
        let result = Self::Entity::delete_by_id(id)
            .exec(self.db())
            .await
            .map_err(DaoLayerError::Db)?;

        if result.rows_affected == 0 {
            return Err(DaoLayerError::NotFound {
                entity: std::any::type_name::<Self::Entity>(),
                id,
            });
        }

        Ok(id)
    }
}
