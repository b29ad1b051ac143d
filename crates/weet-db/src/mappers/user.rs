//! User entity <-> model mapper

use weet_core::entities::User;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            handle: model.handle,
            username: model.username,
            email: model.email,
            user_description: model.user_description,
            profile_image: model.profile_image,
            banner_image: model.banner_image,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
