use serde::{
    Deserialize, Deserializer, Serialize,
    de::{Error, Unexpected},
};
use thiserror::Error;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
pub struct Author {
    pub name: AuthorName,
    pub avatar: String,
}

/// A non-empty author name. The empty string is reserved as the
/// "no filter" sentinel of the author selection, so it can never name a
/// real author.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Serialize)]
#[serde(transparent)]
pub struct AuthorName(String);

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Error)]
#[error("The author name is empty")]
pub struct InvalidAuthorNameError(String);

impl AuthorName {
    pub fn new(name: String) -> Result<Self, InvalidAuthorNameError> {
        if name.is_empty() {
            Err(InvalidAuthorNameError(name))
        } else {
            Ok(AuthorName(name))
        }
    }

    #[must_use]
    pub fn get(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for AuthorName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let inner = String::deserialize(deserializer)?;
        AuthorName::new(inner)
            .map_err(|err| Error::invalid_value(Unexpected::Str(&err.0), &"AuthorName"))
    }
}
