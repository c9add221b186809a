use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "discipline")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub teacher_id: i32,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::user::Entity",
        from = "Column::TeacherId",
        to = "crate::user::Column::Id"
    )]
    Teacher,
    #[sea_orm(has_many = "crate::test::Entity")]
    Test,
    #[sea_orm(has_many = "crate::user_discipline::Entity")]
    UserDiscipline,
}

impl Related<crate::test::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Test.def()
    }
}

impl Related<crate::user_discipline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserDiscipline.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
