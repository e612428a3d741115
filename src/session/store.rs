//! Session store — login, logout, onboarding commit, document records.
//!
//! An explicit context object owning the persisted [`User`]; nothing here
//! is a hidden singleton. The caller constructs one per session and passes
//! it where the journey needs a profile.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Service;
use crate::error::{SessionError, StorageError};
use crate::store::traits::read_lenient;
use crate::store::{storage_keys, Storage};

use super::profile::{InvestorStatus, OnboardingAnswers, UserProfile};

/// Metadata of an uploaded document. The bytes themselves are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDocument {
    pub id: Uuid,
    pub file_name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    /// The journey service this document was submitted for.
    pub service_id: String,
    pub service_name: String,
    pub uploaded_at: DateTime<Utc>,
}

/// The persisted session record: who is logged in, their profile, their
/// submitted documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub profile: UserProfile,
    #[serde(default)]
    pub documents: Vec<UserDocument>,
}

/// Session context: owns the current [`User`] and keeps storage in sync.
pub struct SessionStore {
    storage: Arc<dyn Storage>,
    user: Option<User>,
}

impl SessionStore {
    /// Rehydrate the session from storage.
    ///
    /// An unparseable user record is dropped from storage and the session
    /// starts logged out; this is never fatal.
    pub fn load(storage: Arc<dyn Storage>) -> Result<Self, StorageError> {
        let user = match read_lenient::<User>(storage.as_ref(), storage_keys::USER)? {
            Some(user) => Some(user),
            None => {
                // read_lenient already logged if the record was corrupt;
                // clear it so the next load is clean.
                if storage.read(storage_keys::USER)?.is_some() {
                    storage.remove(storage_keys::USER)?;
                }
                None
            }
        };
        Ok(Self { storage, user })
    }

    /// Whether a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The current user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The current user's profile, if any.
    pub fn current_profile(&self) -> Option<&UserProfile> {
        self.user.as_ref().map(|u| &u.profile)
    }

    /// Log in, creating the default profile for `investor_status`.
    ///
    /// Mock authentication: any email is accepted, and logging in over an
    /// existing session replaces it.
    pub fn login(
        &mut self,
        email: &str,
        investor_status: InvestorStatus,
    ) -> Result<&User, StorageError> {
        let user = User {
            email: email.to_string(),
            profile: UserProfile::at_login(investor_status),
            documents: Vec::new(),
        };
        self.user = Some(user);
        self.persist()?;
        Ok(self.user.as_ref().expect("user was just set"))
    }

    /// Log out and remove the user record.
    ///
    /// The journey status map is intentionally left in storage, so a
    /// returning user on the same machine sees their old checklist state.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.user = None;
        self.storage.remove(storage_keys::USER)
    }

    /// Finalize onboarding: merge the answers and mark the profile
    /// onboarded.
    pub fn complete_onboarding(
        &mut self,
        answers: OnboardingAnswers,
    ) -> Result<&UserProfile, crate::error::Error> {
        let user = self.user.as_mut().ok_or(SessionError::NotAuthenticated)?;
        user.profile.apply_onboarding(answers);
        self.persist()?;
        Ok(&self.user.as_ref().expect("user is set").profile)
    }

    /// Record submitted documents for a service. Metadata only.
    pub fn add_documents(
        &mut self,
        service: &Service,
        files: impl IntoIterator<Item = (String, u64, String)>,
    ) -> Result<usize, crate::error::Error> {
        let user = self.user.as_mut().ok_or(SessionError::NotAuthenticated)?;
        let uploaded_at = Utc::now();
        let mut added = 0;
        for (file_name, size_bytes, mime_type) in files {
            user.documents.push(UserDocument {
                id: Uuid::new_v4(),
                file_name,
                size_bytes,
                mime_type,
                service_id: service.id.clone(),
                service_name: service.name.clone(),
                uploaded_at,
            });
            added += 1;
        }
        self.persist()?;
        Ok(added)
    }

    fn persist(&self) -> Result<(), StorageError> {
        let Some(user) = self.user.as_ref() else {
            return Ok(());
        };
        let value = serde_json::to_value(user)?;
        self.storage.write(storage_keys::USER, &value)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::journey::{StatusStore, StepStatus};
    use crate::session::profile::{
        BusinessModel, InvestmentType, LegalEntityType, Sector,
    };
    use crate::store::MemoryStorage;

    fn answers() -> OnboardingAnswers {
        OnboardingAnswers {
            investment_type: InvestmentType::Gulf,
            legal_entity_type: LegalEntityType::Llc,
            sector: Sector::Tourism,
            capital: dec!(2_000_000),
            business_model: BusinessModel::Standard,
            has_saudi_partner: None,
        }
    }

    fn service() -> Service {
        Service {
            id: "cr-issue".to_string(),
            name: "Commercial Registration".to_string(),
            agency: "Ministry of Commerce".to_string(),
            short_description: String::new(),
            documents: vec![],
            conditions: vec![],
            fees: String::new(),
            time: String::new(),
        }
    }

    #[test]
    fn starts_logged_out() {
        let session = SessionStore::load(Arc::new(MemoryStorage::new())).unwrap();
        assert!(!session.is_authenticated());
        assert!(session.current_profile().is_none());
    }

    #[test]
    fn login_persists_the_default_profile() {
        let storage = Arc::new(MemoryStorage::new());
        {
            let mut session = SessionStore::load(storage.clone()).unwrap();
            session.login("investor@example.com", InvestorStatus::New).unwrap();
        }
        let session = SessionStore::load(storage).unwrap();
        let user = session.current_user().unwrap();
        assert_eq!(user.email, "investor@example.com");
        assert!(!user.profile.has_onboarded);
    }

    #[test]
    fn onboarding_commit_roundtrips() {
        let storage = Arc::new(MemoryStorage::new());
        {
            let mut session = SessionStore::load(storage.clone()).unwrap();
            session.login("a@b.c", InvestorStatus::New).unwrap();
            let profile = session.complete_onboarding(answers()).unwrap();
            assert!(profile.has_onboarded);
        }
        let session = SessionStore::load(storage).unwrap();
        let profile = session.current_profile().unwrap();
        assert!(profile.has_onboarded);
        assert_eq!(profile.investment_type, InvestmentType::Gulf);
        assert_eq!(profile.sector, Some(Sector::Tourism));
        assert_eq!(profile.capital, dec!(2_000_000));
    }

    #[test]
    fn onboarding_requires_a_session() {
        let mut session = SessionStore::load(Arc::new(MemoryStorage::new())).unwrap();
        let err = session.complete_onboarding(answers()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Session(SessionError::NotAuthenticated)
        ));
    }

    #[test]
    fn logout_clears_the_user_but_keeps_journey_statuses() {
        let storage = Arc::new(MemoryStorage::new());
        let mut session = SessionStore::load(storage.clone()).unwrap();
        session.login("a@b.c", InvestorStatus::New).unwrap();

        let mut statuses = StatusStore::load(storage.clone(), &[]).unwrap();
        statuses.set("cr-issue", StepStatus::Completed).unwrap();

        session.logout().unwrap();
        assert!(!session.is_authenticated());
        assert!(!storage.contains_key(storage_keys::USER));
        assert!(storage.contains_key(storage_keys::JOURNEY_STATUSES));
    }

    #[test]
    fn corrupt_user_record_is_dropped_and_cleared() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .write(storage_keys::USER, &serde_json::json!({"email": 42}))
            .unwrap();
        let session = SessionStore::load(storage.clone()).unwrap();
        assert!(!session.is_authenticated());
        assert!(!storage.contains_key(storage_keys::USER));
    }

    #[test]
    fn login_replaces_a_previous_session() {
        let mut session = SessionStore::load(Arc::new(MemoryStorage::new())).unwrap();
        session.login("first@example.com", InvestorStatus::New).unwrap();
        session.complete_onboarding(answers()).unwrap();

        session.login("second@example.com", InvestorStatus::Existing).unwrap();
        let user = session.current_user().unwrap();
        assert_eq!(user.email, "second@example.com");
        // Fresh profile, not the onboarded one.
        assert_eq!(user.profile.investor_status, InvestorStatus::Existing);
        assert!(user.profile.sector.is_none());
    }

    #[test]
    fn documents_record_metadata_only() {
        let storage = Arc::new(MemoryStorage::new());
        let mut session = SessionStore::load(storage.clone()).unwrap();
        session.login("a@b.c", InvestorStatus::New).unwrap();

        let added = session
            .add_documents(
                &service(),
                [
                    ("articles.pdf".to_string(), 120_000, "application/pdf".to_string()),
                    ("ids.zip".to_string(), 54_321, "application/zip".to_string()),
                ],
            )
            .unwrap();
        assert_eq!(added, 2);

        let session = SessionStore::load(storage).unwrap();
        let docs = &session.current_user().unwrap().documents;
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].service_id, "cr-issue");
        assert_eq!(docs[0].file_name, "articles.pdf");
        assert_ne!(docs[0].id, docs[1].id);
    }

    #[test]
    fn add_documents_requires_a_session() {
        let mut session = SessionStore::load(Arc::new(MemoryStorage::new())).unwrap();
        let err = session
            .add_documents(&service(), [("x.pdf".to_string(), 1, "application/pdf".to_string())])
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Session(SessionError::NotAuthenticated)
        ));
    }
}
