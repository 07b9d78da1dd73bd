//! Authentication and authorization
//!
//! - [`JwtService`] - token validation
//! - [`AccessList`] - live organizer access list
//! - [`require_organizer`] - admin route guard
//! - [`CurrentUser`] / [`Guest`] - handler extractors

pub mod access_list;
pub mod extractor;
pub mod guard;
pub mod jwt;
pub mod middleware;

pub use access_list::AccessList;
pub use extractor::Guest;
pub use guard::{GuardRejection, REJECTION_BODY, is_authenticated, resolve_user};
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService, TokenType};
pub use middleware::require_organizer;
