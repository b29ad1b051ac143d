//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs

pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    BodyToken, CreateWeetRequest, EditWeetRequest, LogInRequest, SignUpRequest, TokenRequest,
    UpdateProfileRequest, ValidateSignUpRequest, ValidateUpdateProfileRequest,
};

// Re-export commonly used response types
pub use responses::{
    ChecksResponse, HealthResponse, MessageResponse, ProfileResponse, ReadinessResponse,
    ResultListResponse, ResultResponse, SignUpReport, StatsResponse, TokenResponse,
    UpdateProfileReport, UserEnvelope, UserInfoResponse, WeetResponse,
};
