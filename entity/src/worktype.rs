use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "worktype")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "type", unique)]
    pub kind: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::thesis::Entity")]
    Thesis,
}

impl Related<super::thesis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Thesis.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
