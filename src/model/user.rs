use crate::{
    dto::user::{UserAttributesDto, UserDto},
    error::{validation::ValidationErrors, AppError},
    model::blank,
};

/// Access profile attached to every user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Admin,
    Client,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Client => "client",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Self::Admin),
            "client" => Some(Self::Client),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub profile: Profile,
}

impl User {
    /// Converts an entity model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let profile = Profile::parse(&entity.profile).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown profile '{}' stored for user {}",
                entity.profile, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            profile,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            profile: self.profile.as_str().to_string(),
        }
    }
}

/// Client-supplied user attributes for create and update operations.
#[derive(Debug, Clone, Default)]
pub struct UserParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

impl UserParams {
    pub fn from_dto(dto: UserAttributesDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            profile: dto.profile,
            password: dto.password,
            password_confirmation: dto.password_confirmation,
        }
    }

    /// Fills unsupplied attributes from the current record so update
    /// validation sees the full resulting state. Credentials are never
    /// backfilled; an absent password means "keep the stored digest".
    pub fn merge_into(self, current: &User) -> UserParams {
        UserParams {
            name: self.name.or_else(|| Some(current.name.clone())),
            email: self.email.or_else(|| Some(current.email.clone())),
            profile: self
                .profile
                .or_else(|| Some(current.profile.as_str().to_string())),
            password: self.password,
            password_confirmation: self.password_confirmation,
        }
    }

    /// Validates the attribute set. `new_record` requires a password; on
    /// update the password is only checked when one was supplied.
    pub fn validate(&self, new_record: bool) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if blank(&self.name) {
            errors.add("name", "can't be blank");
        }

        if blank(&self.email) {
            errors.add("email", "can't be blank");
        } else if !valid_email_format(self.email.as_deref().unwrap_or_default()) {
            errors.add("email", "is invalid");
        }

        if blank(&self.profile) {
            errors.add("profile", "can't be blank");
        } else if Profile::parse(self.profile.as_deref().unwrap_or_default()).is_none() {
            errors.add("profile", "is not included in the list");
        }

        match self.password.as_deref() {
            None | Some("") if new_record => errors.add("password", "can't be blank"),
            Some(password) if password.len() < 6 => {
                errors.add("password", "is too short (minimum is 6 characters)");
            }
            _ => {}
        }

        if let (Some(password), Some(confirmation)) = (
            self.password.as_deref(),
            self.password_confirmation.as_deref(),
        ) {
            if password != confirmation {
                errors.add("password_confirmation", "doesn't match Password");
            }
        }

        errors
    }
}

/// Finalized attributes for inserting a user, produced after validation.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub profile: Profile,
    pub password_digest: String,
}

/// Column-level changes for an update; unset fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile: Option<Profile>,
    pub password_digest: Option<String>,
}

fn valid_email_format(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !email.contains(char::is_whitespace)
}
