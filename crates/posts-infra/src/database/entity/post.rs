//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use posts_core::domain::{Post, PostDraft};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub version: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            body: model.body,
            version: model.version,
        }
    }
}

/// Conversion from Domain PostDraft to SeaORM ActiveModel.
///
/// A draft without an ID leaves the column unset so the sequence assigns one.
impl From<PostDraft> for ActiveModel {
    fn from(draft: PostDraft) -> Self {
        Self {
            id: draft.id.map_or(NotSet, Set),
            user_id: Set(draft.user_id),
            title: Set(draft.title),
            body: Set(draft.body),
            version: Set(draft.version),
        }
    }
}
