use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::user_discipline::Entity")]
    UserDiscipline,
    #[sea_orm(has_many = "crate::attempt::Entity")]
    Attempt,
}

impl Related<crate::user_discipline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserDiscipline.def()
    }
}

impl Related<crate::attempt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attempt.def()
    }
}

impl Related<crate::discipline::Entity> for Entity {
    fn to() -> RelationDef {
        crate::user_discipline::Relation::Discipline.def()
    }

    fn via() -> Option<RelationDef> {
        Some(crate::user_discipline::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
