//! Session layer — the logged-in user, their profile, and their documents.

pub mod profile;
pub mod store;

pub use profile::{
    BusinessModel, InvestmentType, InvestorStatus, LegalEntityType, OnboardingAnswers, Sector,
    UserProfile,
};
pub use store::{SessionStore, User, UserDocument};
