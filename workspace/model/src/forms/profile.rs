use common::{AvatarUpload, UpdateProfileRequest};
use tracing::{debug, instrument};

use super::{is_blank, missing, Editable};
use crate::entities::profile::Profile;
use crate::error::{ModelError, Result};

/// Edit buffer for the profile form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    pub name: String,
    pub bio: String,
    pub location: String,
    pub website: String,
    /// Image currently shown in the avatar slot.
    pub avatar_preview: Option<String>,
    /// Set once the user picks a new file.
    pub new_avatar: Option<AvatarUpload>,
    had_avatar: bool,
}

/// A single edit on the profile form.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileChange {
    Name(String),
    Bio(String),
    Location(String),
    Website(String),
    Avatar(AvatarUpload),
    RemoveAvatar,
}

impl ProfileDraft {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            bio: profile.bio.clone().unwrap_or_default(),
            location: profile.location.clone().unwrap_or_default(),
            website: profile.website.clone().unwrap_or_default(),
            avatar_preview: profile.avatar.clone(),
            new_avatar: None,
            had_avatar: profile.avatar.is_some(),
        }
    }

    pub fn set_avatar(&mut self, upload: AvatarUpload) {
        self.avatar_preview = Some(upload.data_url.clone());
        self.new_avatar = Some(upload);
    }

    pub fn remove_avatar(&mut self) {
        self.avatar_preview = None;
        self.new_avatar = None;
    }

    #[instrument(skip(self), fields(name = %self.name))]
    pub fn submit(&self) -> Result<UpdateProfileRequest> {
        let missing = missing([("name", !is_blank(&self.name))]);
        if !missing.is_empty() {
            debug!(?missing, "Profile form has blank required fields");
            return Err(ModelError::MissingFields(missing));
        }

        Ok(UpdateProfileRequest {
            name: self.name.clone(),
            bio: self.bio.clone(),
            location: self.location.clone(),
            website: self.website.clone(),
            avatar: self.new_avatar.clone(),
            remove_avatar: self.had_avatar && self.avatar_preview.is_none(),
        })
    }
}

impl Editable for ProfileDraft {
    type Change = ProfileChange;

    fn apply(&mut self, change: ProfileChange) {
        match change {
            ProfileChange::Name(name) => self.name = name,
            ProfileChange::Bio(bio) => self.bio = bio,
            ProfileChange::Location(location) => self.location = location,
            ProfileChange::Website(website) => self.website = website,
            ProfileChange::Avatar(upload) => self.set_avatar(upload),
            ProfileChange::RemoveAvatar => self.remove_avatar(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::MockStore;
    use crate::store::CookbookStore;

    fn upload() -> AvatarUpload {
        AvatarUpload {
            file_name: "me.png".into(),
            data_url: "data:image/png;base64,AAAA".into(),
        }
    }

    #[test]
    fn test_prefill_and_submit_unchanged() {
        let profile = MockStore::new().current_user();
        let request = ProfileDraft::from_profile(&profile).submit().unwrap();
        assert_eq!(request.name, profile.name);
        assert_eq!(request.bio, profile.bio.unwrap_or_default());
        assert!(request.avatar.is_none());
        assert!(!request.remove_avatar);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut draft = ProfileDraft::from_profile(&MockStore::new().current_user());
        draft.name = "  ".into();
        assert_eq!(draft.submit().unwrap_err(), ModelError::MissingFields(vec!["name"]));
    }

    #[test]
    fn test_new_avatar_then_remove() {
        let mut profile = MockStore::new().current_user();
        profile.avatar = Some("https://example.com/old.png".into());
        let mut draft = ProfileDraft::from_profile(&profile);

        draft.set_avatar(upload());
        assert_eq!(draft.avatar_preview.as_deref(), Some("data:image/png;base64,AAAA"));
        assert_eq!(draft.submit().unwrap().avatar, Some(upload()));

        draft.remove_avatar();
        let request = draft.submit().unwrap();
        assert!(request.avatar.is_none());
        assert!(request.remove_avatar);
    }

    #[test]
    fn test_avatar_applied_after_typing_keeps_bio() {
        let mut draft = ProfileDraft::from_profile(&MockStore::new().current_user());
        draft.apply(ProfileChange::Bio("Sourdough every Sunday".into()));
        draft.apply(ProfileChange::Avatar(upload()));

        let request = draft.submit().unwrap();
        assert_eq!(request.bio, "Sourdough every Sunday");
        assert_eq!(request.avatar, Some(upload()));
    }
}
