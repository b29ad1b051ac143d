//! Validation service
//!
//! Composes the pure field rules from weet-core with the uniqueness
//! lookups only the database can answer, producing the per-field reports
//! served by the /validate endpoints.

use tracing::instrument;

use weet_core::validation::{self as rules, FieldReport};

use crate::dto::{
    SignUpReport, UpdateProfileReport, ValidateSignUpRequest, ValidateUpdateProfileRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Validation service
pub struct ValidationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ValidationService<'a> {
    /// Create a new ValidationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Per-field report for a registration attempt
    #[instrument(skip(self, request))]
    pub async fn sign_up(&self, request: &ValidateSignUpRequest) -> ServiceResult<SignUpReport> {
        let mut handle = rules::handle_format(&request.handle);
        if self.ctx.user_repo().handle_exists(&request.handle).await? {
            handle.flag("Handle is already in use.");
        }

        let mut email = rules::email_format(&request.email);
        if self.ctx.user_repo().email_exists(&request.email).await? {
            email.flag("Email is already in use.");
        }

        Ok(SignUpReport {
            handle,
            username: rules::username(&request.username),
            password: rules::password(&request.password),
            email,
        })
    }

    /// Per-field report for a profile update by `owner`. The newPassword
    /// entry is omitted entirely when no new password was supplied.
    #[instrument(skip(self, request), fields(handle = %owner))]
    pub async fn update_profile(
        &self,
        owner: &str,
        request: &ValidateUpdateProfileRequest,
    ) -> ServiceResult<UpdateProfileReport> {
        let mut email = rules::email_format(&request.email);
        // A taken email passes only when it is the owner's current one
        if let Some(holder) = self.ctx.user_repo().find_by_email(&request.email).await? {
            if holder.handle != owner {
                email.flag("Email is already in use.");
            }
        }

        let new_password = request.new_password.as_deref().map(|new| {
            rules::new_password(new, request.old_password.as_deref().unwrap_or(""))
        });

        Ok(UpdateProfileReport {
            username: rules::username(&request.username),
            email,
            user_description: optional(request.user_description.as_deref(), rules::description),
            profile_picture: optional(request.profile_picture.as_deref(), rules::picture_url),
            banner_picture: optional(request.banner_picture.as_deref(), rules::picture_url),
            new_password,
        })
    }
}

/// Absent optional fields pass trivially; present ones run the field rule
fn optional(value: Option<&str>, rule: fn(&str) -> FieldReport) -> FieldReport {
    match value {
        Some(value) => rule(value),
        None => FieldReport::valid(),
    }
}
