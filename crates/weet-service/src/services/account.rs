//! Account service
//!
//! Handles registration, authentication, profile update, and account
//! deletion.

use tracing::{info, instrument, warn};

use weet_common::auth::{hash_password, verify_password};
use weet_common::AppError;
use weet_core::entities::User;
use weet_core::validation::{FIELD_MAX, FIELD_MIN};
use weet_core::DomainError;

use crate::dto::{LogInRequest, SignUpRequest, TokenResponse, UpdateProfileRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Account service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account and sign a token for it
    #[instrument(skip(self, request), fields(handle = %request.handle))]
    pub async fn register(&self, request: SignUpRequest) -> ServiceResult<TokenResponse> {
        require_present("handle", &request.handle)?;
        require_present("username", &request.username)?;
        require_present("password", &request.password)?;
        require_present("email", &request.email)?;

        // Pre-checks give precise messages; the unique constraints on
        // users remain the backstop against concurrent registration
        if self.ctx.user_repo().handle_exists(&request.handle).await? {
            return Err(DomainError::HandleTaken.into());
        }
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailTaken.into());
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user = User::new(request.handle, request.username, request.email);
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(handle = %user.handle, "Account registered");

        let token = self
            .ctx
            .jwt_service()
            .sign(&user.handle)
            .map_err(ServiceError::from)?;

        Ok(TokenResponse::new(token))
    }

    /// Authenticate a handle/password pair and sign a token
    #[instrument(skip(self, request), fields(handle = %request.handle))]
    pub async fn authenticate(&self, request: LogInRequest) -> ServiceResult<TokenResponse> {
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(&request.handle)
            .await?
            .ok_or_else(|| {
                warn!(handle = %request.handle, "Login failed: unknown handle");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(handle = %request.handle, "Login failed: password mismatch");
            return Err(AppError::InvalidCredentials.into());
        }

        info!(handle = %request.handle, "Account logged in");

        let token = self
            .ctx
            .jwt_service()
            .sign(&request.handle)
            .map_err(ServiceError::from)?;

        Ok(TokenResponse::new(token))
    }

    /// Update a profile after re-authenticating with the old password;
    /// rotates the stored hash when a new password is supplied
    #[instrument(skip(self, request), fields(handle = %handle))]
    pub async fn update(
        &self,
        handle: &str,
        request: UpdateProfileRequest,
    ) -> ServiceResult<TokenResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_handle(handle)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", handle))?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(handle)
            .await?
            .ok_or_else(|| ServiceError::App(AppError::InvalidCredentials))?;

        let old_ok = verify_password(&request.old_password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;
        if !old_ok {
            warn!(handle = %handle, "Profile update failed: old password mismatch");
            return Err(AppError::InvalidCredentials.into());
        }

        // A changed email may not belong to another account
        if request.email != user.email {
            if let Some(owner) = self.ctx.user_repo().find_by_email(&request.email).await? {
                if owner.handle != user.handle {
                    return Err(DomainError::EmailTaken.into());
                }
            }
        }

        let new_hash = match request.new_password.as_deref() {
            Some(new_password) => {
                if new_password == request.old_password {
                    return Err(DomainError::ValidationError(
                        "New password cannot be the same as the old password.".to_string(),
                    )
                    .into());
                }
                let len = new_password.chars().count();
                if !(FIELD_MIN..=FIELD_MAX).contains(&len) {
                    return Err(DomainError::ValidationError(
                        "Password must be between 8 and 20 characters long.".to_string(),
                    )
                    .into());
                }
                Some(
                    hash_password(new_password)
                        .map_err(|e| ServiceError::internal(e.to_string()))?,
                )
            }
            None => None,
        };

        user.username = request.username;
        user.email = request.email;
        if let Some(description) = request.user_description {
            user.user_description = Some(description);
        }
        if let Some(picture) = request.profile_picture {
            user.profile_image = Some(picture);
        }
        if let Some(banner) = request.banner_picture {
            user.banner_image = Some(banner);
        }

        self.ctx
            .user_repo()
            .update(&user, new_hash.as_deref())
            .await?;

        info!(handle = %handle, rotated_password = new_hash.is_some(), "Profile updated");

        let token = self
            .ctx
            .jwt_service()
            .sign(&user.handle)
            .map_err(ServiceError::from)?;

        Ok(TokenResponse::new(token))
    }

    /// Delete an account; dependent rows cascade at the storage layer
    #[instrument(skip(self))]
    pub async fn delete(&self, handle: &str) -> ServiceResult<()> {
        self.ctx.user_repo().delete(handle).await?;
        info!(handle = %handle, "Account deleted");
        Ok(())
    }
}

fn require_present(field: &'static str, value: &str) -> ServiceResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField(field).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_present() {
        assert!(require_present("handle", "testhandle1").is_ok());
        assert!(require_present("handle", "").is_err());
        assert!(require_present("handle", "   ").is_err());
    }
}
