//! Diagram and generated-code storage keyed by integer ids.

use crate::diagram::{CodeArtifact, Diagram, GenerationSettings, SourceKind};
use crate::error::StoreError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

pub const DEFAULT_LANGUAGE: &str = "typescript";

/// A diagram as kept by a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDiagram {
    pub id: u64,
    pub name: String,
    pub diagram: Diagram,
    pub settings: GenerationSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDiagram {
    pub name: String,
    pub diagram: Diagram,
    pub settings: GenerationSettings,
}

/// A partial update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramPatch {
    pub name: Option<String>,
    pub diagram: Option<Diagram>,
    pub settings: Option<GenerationSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCodeArtifact {
    pub diagram_id: Option<u64>,
    pub code: String,
    pub component_name: String,
    /// Defaults to `typescript`.
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub source_kind: Option<SourceKind>,
}

/// CRUD surface of the graph store. The generator only ever reads from it.
pub trait DiagramStore: Send + Sync {
    fn create_diagram(&self, new: NewDiagram) -> Result<StoredDiagram, StoreError>;
    fn get_diagram(&self, id: u64) -> Result<Option<StoredDiagram>, StoreError>;
    /// All diagrams in ascending id order.
    fn list_diagrams(&self) -> Result<Vec<StoredDiagram>, StoreError>;
    fn update_diagram(
        &self,
        id: u64,
        patch: DiagramPatch,
    ) -> Result<Option<StoredDiagram>, StoreError>;
    fn delete_diagram(&self, id: u64) -> Result<bool, StoreError>;

    fn create_code(&self, new: NewCodeArtifact) -> Result<CodeArtifact, StoreError>;
    /// The first artifact recorded for a diagram.
    fn code_for_diagram(&self, diagram_id: u64) -> Result<Option<CodeArtifact>, StoreError>;
}

#[derive(Debug)]
struct Tables {
    diagrams: AHashMap<u64, StoredDiagram>,
    artifacts: AHashMap<u64, CodeArtifact>,
    next_diagram_id: u64,
    next_artifact_id: u64,
}

/// An in-process store. Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                diagrams: AHashMap::new(),
                artifacts: AHashMap::new(),
                next_diagram_id: 1,
                next_artifact_id: 1,
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables.write().map_err(|_| StoreError::Poisoned)
    }
}

impl DiagramStore for MemoryStore {
    fn create_diagram(&self, new: NewDiagram) -> Result<StoredDiagram, StoreError> {
        let mut tables = self.write()?;
        let id = tables.next_diagram_id;
        tables.next_diagram_id += 1;

        let stored = StoredDiagram {
            id,
            name: new.name,
            diagram: new.diagram,
            settings: new.settings,
        };
        tables.diagrams.insert(id, stored.clone());
        debug!(id, "diagram created");
        Ok(stored)
    }

    fn get_diagram(&self, id: u64) -> Result<Option<StoredDiagram>, StoreError> {
        Ok(self.read()?.diagrams.get(&id).cloned())
    }

    fn list_diagrams(&self) -> Result<Vec<StoredDiagram>, StoreError> {
        let tables = self.read()?;
        let mut all: Vec<StoredDiagram> = tables.diagrams.values().cloned().collect();
        all.sort_by_key(|d| d.id);
        Ok(all)
    }

    fn update_diagram(
        &self,
        id: u64,
        patch: DiagramPatch,
    ) -> Result<Option<StoredDiagram>, StoreError> {
        let mut tables = self.write()?;
        let Some(existing) = tables.diagrams.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = patch.name {
            existing.name = name;
        }
        if let Some(diagram) = patch.diagram {
            existing.diagram = diagram;
        }
        if let Some(settings) = patch.settings {
            existing.settings = settings;
        }
        Ok(Some(existing.clone()))
    }

    fn delete_diagram(&self, id: u64) -> Result<bool, StoreError> {
        Ok(self.write()?.diagrams.remove(&id).is_some())
    }

    fn create_code(&self, new: NewCodeArtifact) -> Result<CodeArtifact, StoreError> {
        let mut tables = self.write()?;
        let id = tables.next_artifact_id;
        tables.next_artifact_id += 1;

        let artifact = CodeArtifact {
            id,
            diagram_id: new.diagram_id,
            code: new.code,
            language: new
                .language
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            component_name: new.component_name,
            source_kind: new.source_kind.unwrap_or_default(),
        };
        tables.artifacts.insert(id, artifact.clone());
        debug!(id, diagram_id = ?artifact.diagram_id, "code artifact stored");
        Ok(artifact)
    }

    fn code_for_diagram(&self, diagram_id: u64) -> Result<Option<CodeArtifact>, StoreError> {
        let tables = self.read()?;
        Ok(tables
            .artifacts
            .values()
            .filter(|a| a.diagram_id == Some(diagram_id))
            .min_by_key(|a| a.id)
            .cloned())
    }
}
