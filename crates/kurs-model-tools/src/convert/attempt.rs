use crate::convert::FromDbModel;
use kurs_entity::attempt::Status as AttemptStatusModel;
use kurs_model::progress::AttemptStatus;

impl FromDbModel<AttemptStatusModel> for AttemptStatus {
    fn from_db_model(model: AttemptStatusModel) -> Self {
        match model {
            AttemptStatusModel::InProgress => Self::InProgress,
            AttemptStatusModel::Completed => Self::Completed,
        }
    }
}
