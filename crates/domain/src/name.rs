use derive_more::{AsRef, Deref, Display};

/// Display name of a user profile, stored trimmed.
#[derive(AsRef, Deref, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[as_ref(str)]
pub struct Name(String);

impl Name {
    pub const MIN_CHARS: usize = 2;
    pub const MAX_CHARS: usize = 64;

    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed = name.trim();
        match trimmed.chars().count() {
            0 => Err(NameError::Empty),
            n if n < Self::MIN_CHARS => Err(NameError::TooShort(n)),
            n if n > Self::MAX_CHARS => Err(NameError::TooLong(n)),
            _ => Ok(Self(trimmed.to_string())),
        }
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for Name {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Name is required")]
    Empty,
    #[error("Name must be at least {min} characters", min = Name::MIN_CHARS)]
    TooShort(usize),
    #[error("Name must be at most {max} characters", max = Name::MAX_CHARS)]
    TooLong(usize),
}
