use crate::convert::FromDbModel;
use kurs_entity::user::Model as UserModel;
use kurs_model::user::User;

impl FromDbModel<UserModel> for User {
    fn from_db_model(model: UserModel) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
        }
    }
}
