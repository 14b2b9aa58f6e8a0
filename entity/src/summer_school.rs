use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "summer_school")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub year: i32,
    pub project_name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub tech: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub repo: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub demos: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub advisors: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub requirements: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
