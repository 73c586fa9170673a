use crate::error::ArtifactError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// Where a piece of generated code came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Diagram,
    Mockup,
}

/// A generated source file, as kept by a store or written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeArtifact {
    pub id: u64,
    pub diagram_id: Option<u64>,
    pub code: String,
    pub language: String,
    pub component_name: String,
    pub source_kind: SourceKind,
}

impl CodeArtifact {
    /// Saves the artifact to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes =
            encode_to_vec(self, standard()).map_err(|e| ArtifactError::Encode(e.to_string()))?;
        let mut file = fs::File::create(path).map_err(|source| ArtifactError::Io {
            path: path.to_string(),
            source,
        })?;
        file.write_all(&bytes).map_err(|source| ArtifactError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(())
    }

    /// Loads an artifact from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path).map_err(|source| ArtifactError::Io {
            path: path.to_string(),
            source,
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|source| ArtifactError::Io {
                path: path.to_string(),
                source,
            })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes an artifact from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(artifact, _)| artifact) // bincode 2 returns (data, bytes_read)
            .map_err(|e| ArtifactError::Decode(e.to_string()))
    }
}
