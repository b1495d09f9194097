//! # Invite Client Prelude
//!
//! Convenient single import for the commonly used types and traits of the
//! invite client.
//!
//! ## Usage
//!
//! ```rust
//! use invite_client::prelude::*;
//!
//! let config = Config::new("alice".into(), "secret".into());
//! let auth = VrcAuth::new(&config);
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the invite client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Authentication handler for the VRChat API
pub use crate::session::auth::VrcAuth;

/// Authenticator trait and session state
pub use crate::session::interface::{VrcAuthenticator, VrcSession};

/// Cookie extraction from API responses
pub use crate::session::response::cookie_value;

// ============================================================================
// CORE SERVICES
// ============================================================================

/// Invite service trait and implementation
pub use crate::application::invite::{InviteService, InviteServiceImpl};

/// Full-session orchestration
pub use crate::application::runner::run_invite_session;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use tokio;
pub use tracing::{debug, error, info, warn};
