//! PostgreSQL store implementation.

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DbConn, DbErr, EntityTrait, QueryOrder};

use posts_core::domain::{Post, PostDraft};
use posts_core::error::RepoError;
use posts_core::ports::PostStore;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post store.
pub struct PostgresPostStore {
    db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    #[cfg(test)]
    pub(crate) fn into_connection(self) -> DbConn {
        self.db
    }
}

fn repo_error(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        _ => {
            let err_str = err.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint(err_str)
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.map(Into::into))
    }

    async fn save(&self, draft: PostDraft) -> Result<Post, RepoError> {
        // Only an explicit id may replace a row. A new draft is a plain insert
        // so a sequence value colliding with a client-chosen id fails instead
        // of overwriting that post.
        let replace = draft.id.is_some();
        let active_model: post::ActiveModel = draft.into();
        let insert = PostEntity::insert(active_model);
        let insert = if replace {
            insert.on_conflict(
                OnConflict::column(post::Column::Id)
                    .update_columns([
                        post::Column::UserId,
                        post::Column::Title,
                        post::Column::Body,
                        post::Column::Version,
                    ])
                    .to_owned(),
            )
        } else {
            insert
        };
        let model = insert
            .exec_with_returning(&self.db)
            .await
            .map_err(repo_error)?;

        tracing::debug!(post_id = model.id, replace, "Post saved");
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(repo_error)?;

        if result.rows_affected == 0 {
            tracing::debug!(post_id = id, "Delete matched no post");
        }

        Ok(())
    }
}
