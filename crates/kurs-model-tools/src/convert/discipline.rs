use crate::convert::FromDbModel;
use kurs_entity::discipline::Model as DisciplineModel;
use kurs_model::discipline::{Discipline, DisciplineDetail, StudentRef};

impl FromDbModel<DisciplineModel> for Discipline {
    fn from_db_model(model: DisciplineModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

impl FromDbModel<DisciplineModel> for DisciplineDetail {
    fn from_db_model(model: DisciplineModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            teacher_id: model.teacher_id,
        }
    }
}

impl FromDbModel<i32> for StudentRef {
    fn from_db_model(user_id: i32) -> Self {
        Self { user_id }
    }
}
