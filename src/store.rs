use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder,
    Set, SqlErr, TransactionTrait,
    sea_query::{Expr, NullOrdering},
};
use tracing::{debug, info};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::{NewMovie, ReviewUpdate},
};

pub const MAX_TITLE_LEN: usize = 250;
pub const MAX_DESCRIPTION_LEN: usize = 500;
pub const MAX_IMG_URL_LEN: usize = 250;

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All movies ascending by rating, unrated first, ties in insertion order.
    pub async fn list_all(&self) -> AppResult<Vec<movie::Model>> {
        let movies = movie::Entity::find()
            .order_by_with_nulls(movie::Column::Rating, Order::Asc, NullOrdering::First)
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?;
        debug!(count = movies.len(), "listed movies");
        Ok(movies)
    }

    pub async fn get(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    pub async fn create(&self, new: NewMovie) -> AppResult<movie::Model> {
        let new = NewMovie {
            title: new.title.trim().to_string(),
            img_url: new.img_url.trim().to_string(),
            ..new
        };
        validate_new_movie(&new)?;

        let title = new.title.clone();
        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(new.title),
            year: Set(new.year),
            description: Set(new.description),
            rating: Set(None),
            ranking: Set(None),
            review: Set(None),
            img_url: Set(new.img_url),
        };

        let created = model.insert(&self.db).await.map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::DuplicateTitle(title.clone()),
            _ => AppError::Database(err),
        })?;

        info!(movie_id = created.id, movie = %created, "added movie");
        Ok(created)
    }

    pub async fn update(&self, id: i32, update: ReviewUpdate) -> AppResult<movie::Model> {
        let existing = self.get(id).await?;

        let mut model: movie::ActiveModel = existing.into();
        model.rating = Set(Some(update.rating));
        model.review = Set(update.review);
        let updated = model.update(&self.db).await?;

        info!(movie_id = id, rating = update.rating, "updated review");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(id.to_string()));
        }
        info!(movie_id = id, "deleted movie");
        Ok(())
    }

    /// Persists each movie's computed rank in one transaction.
    /// Rows deleted since the listing was read are skipped.
    pub async fn save_ranking(&self, movies: &[movie::Model]) -> AppResult<()> {
        let txn = self.db.begin().await?;

        for m in movies {
            movie::Entity::update_many()
                .col_expr(movie::Column::Ranking, Expr::value(m.ranking))
                .filter(movie::Column::Id.eq(m.id))
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;
        debug!(count = movies.len(), "saved rankings");
        Ok(())
    }
}

fn validate_new_movie(new: &NewMovie) -> AppResult<()> {
    if new.title.is_empty() {
        return Err(AppError::Validation("title is required".into()));
    }
    if new.img_url.is_empty() {
        return Err(AppError::Validation("poster url is required".into()));
    }
    if new.year <= 0 {
        return Err(AppError::Validation(format!("year {} is not valid", new.year)));
    }
    check_len("title", &new.title, MAX_TITLE_LEN)?;
    check_len("description", &new.description, MAX_DESCRIPTION_LEN)?;
    check_len("poster url", &new.img_url, MAX_IMG_URL_LEN)?;
    Ok(())
}

fn check_len(field: &str, value: &str, max: usize) -> AppResult<()> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!("{field} must be at most {max} characters")));
    }
    Ok(())
}
