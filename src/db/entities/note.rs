use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub updated_at: DateTimeWithTimeZone,
    #[sea_orm(indexed)]
    pub notebook_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub contents: String,
    #[sea_orm(belongs_to, from = "notebook_id", to = "id", on_delete = "Cascade")]
    pub notebook: HasOne<super::notebook::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

crate::impl_base_entity!(Entity, ActiveModel);
