pub mod requests;
pub mod responses;

pub use requests::{ChangePasswordRequest, LoginRequest, ValidateRecoveryRequest};
pub use responses::{LoginResponse, RecoveryValidationResponse, RefreshTokenResponse};
