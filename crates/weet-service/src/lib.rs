//! # weet-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    BodyToken, ChecksResponse, CreateWeetRequest, EditWeetRequest, HealthResponse, LogInRequest,
    MessageResponse, ProfileResponse, ReadinessResponse, ResultListResponse, ResultResponse,
    SignUpReport, SignUpRequest, StatsResponse, TokenRequest, TokenResponse, UpdateProfileReport,
    UpdateProfileRequest, UserEnvelope, UserInfoResponse, ValidateSignUpRequest, ValidateUpdateProfileRequest,
    WeetResponse,
};
pub use services::{
    AccountService, FollowService, ProfileService, ReactionService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, SessionService, TimelineService,
    ValidationService, WeetService,
};
