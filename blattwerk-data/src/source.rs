use crate::record::{PostRecord, RecordError};
use blattwerk_common::model::post::Post;
use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};
use thiserror::Error;

pub type Result<T, E = DataError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Error reading the post collection: {0}")]
    Io(#[from] io::Error),
    #[error("Error parsing the post collection: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// The data-source collaborator: a flat JSON document holding the fixed
/// post collection, parsed once at startup.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash)]
pub struct PostSource {
    path: PathBuf,
}

impl PostSource {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<Post>> {
        let file = File::open(&self.path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl io::Read) -> Result<Vec<Post>> {
        let records: Vec<PostRecord> = serde_json::from_reader(reader)?;
        let posts = records
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<_, RecordError>>()?;

        Ok(posts)
    }
}
