//! Follow-related entity <-> model mappers

use weet_core::entities::{FollowStatus, ProfileView, User};

use crate::models::{FollowStatusModel, ProfileViewModel};

impl From<FollowStatusModel> for FollowStatus {
    fn from(model: FollowStatusModel) -> Self {
        FollowStatus::new(model.is_follower, model.is_followee)
    }
}

impl From<ProfileViewModel> for ProfileView {
    fn from(model: ProfileViewModel) -> Self {
        ProfileView {
            user: User {
                handle: model.handle,
                username: model.username,
                email: model.email,
                user_description: model.user_description,
                profile_image: model.profile_image,
                banner_image: model.banner_image,
                created_at: model.created_at,
                updated_at: model.updated_at,
            },
            follow_status: FollowStatus::new(model.is_follower, model.is_followee),
        }
    }
}
