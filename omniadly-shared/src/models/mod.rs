//! Records exchanged with the OmniAdly REST API.

pub mod billing;
pub mod code;
pub mod envelope;
pub mod profile;
pub mod role;
pub mod user;

pub use billing::{Payment, Subscription};
pub use code::{CodeOrLabel, PaymentStatus, ProfileStatus, ProfileType};
pub use envelope::{ApiResponse, PaginatedResponse};
pub use profile::{Brand, BrandListing, BrandRecord, Profile, SocialAccount, SocialAccountRecord, Team};
pub use role::Role;
pub use user::{AdminUser, LoginRequest, LoginResponse, User, UserDetail};
