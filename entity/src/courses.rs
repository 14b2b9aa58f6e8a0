use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::thesis::Entity")]
    Thesis,
    #[sea_orm(has_many = "super::curriculum::Entity")]
    Curriculum,
}

impl Related<super::thesis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Thesis.def()
    }
}

impl Related<super::curriculum::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Curriculum.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
