//! Profile use cases

use crate::domain::format::ProfileCodec;
use crate::domain::{Address, Profile};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, FlatFile, LoadReport, QuestlogRepository};
use tracing::info;

/// Service for viewing and editing the user profile
pub struct ProfileService {
    repository: FileSystemRepository,
}

impl ProfileService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ProfileService { repository }
    }

    fn profile_file(&self) -> Result<FlatFile<ProfileCodec>> {
        let config = self.repository.load_config()?;
        Ok(self.repository.profile_file(&config))
    }

    fn load(file: &FlatFile<ProfileCodec>) -> Result<Profile> {
        let mut profile = Profile::default();
        if let LoadReport::Failed(e) = file.load(&mut profile) {
            return Err(e);
        }
        Ok(profile)
    }

    /// Load the profile; a missing file yields an empty profile
    pub fn show(&self) -> Result<Profile> {
        Self::load(&self.profile_file()?)
    }

    /// Set one field by key and save
    pub fn set(&self, key: &str, value: &str) -> Result<Profile> {
        let file = self.profile_file()?;
        let mut profile = Self::load(&file)?;

        profile.set(key, value)?;
        file.save(&profile).into_result()?;

        info!(key, "profile updated");
        Ok(profile)
    }

    /// Add an address and save
    pub fn add_address(&self, address: Address) -> Result<Profile> {
        let file = self.profile_file()?;
        let mut profile = Self::load(&file)?;

        profile.add_address(address)?;
        file.save(&profile).into_result()?;

        info!(addresses = profile.addresses.len(), "address added");
        Ok(profile)
    }
}
