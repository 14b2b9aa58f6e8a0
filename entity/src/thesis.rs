use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "thesis")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name_ru: String,
    pub name_en: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub author: String,
    #[sea_orm(unique)]
    pub text_uri: Option<String>,
    pub presentation_uri: Option<String>,
    pub supervisor_review_uri: Option<String>,
    pub reviewer_review_uri: Option<String>,
    pub source_uri: Option<String>,
    pub publish_year: i32,
    pub type_id: i32,
    pub course_id: i32,
    pub supervisor_id: i32,
    pub reviewer_id: Option<i32>,
    pub recomended: bool,
    pub temporary: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::worktype::Entity",
        from = "Column::TypeId",
        to = "super::worktype::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Worktype,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Courses,
    #[sea_orm(
        belongs_to = "super::staff::Entity",
        from = "Column::SupervisorId",
        to = "super::staff::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Supervisor,
    #[sea_orm(
        belongs_to = "super::staff::Entity",
        from = "Column::ReviewerId",
        to = "super::staff::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Reviewer,
}

impl Related<super::worktype::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Worktype.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
