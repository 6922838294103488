//! Static MIME type table binding each supported graph format to a layout
//! engine, plus the host registration records derived from it.

mod descriptors;

pub use descriptors::{
    DocumentWidgetFactoryOptions, ExtensionDescriptor, FileTypeDescriptor, extension_descriptors,
};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Layout algorithm understood by the external engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineId {
    /// Hierarchical layout for directed graphs.
    Dot,
    /// Spring model layout.
    Neato,
    /// Force-directed placement.
    Fdp,
    /// Multiscale force-directed placement for large graphs.
    Sfdp,
    Twopi,
    Circo,
    Osage,
    Patchwork,
}

impl EngineId {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Neato => "neato",
            Self::Fdp => "fdp",
            Self::Sfdp => "sfdp",
            Self::Twopi => "twopi",
            Self::Circo => "circo",
            Self::Osage => "osage",
            Self::Patchwork => "patchwork",
        }
    }
}

impl fmt::Display for EngineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One supported graph format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphFileType {
    pub mime_type: &'static str,
    pub engine: EngineId,
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

pub const DOT_MIME_TYPE: &str = "text/vnd.graphviz";

pub static GRAPH_FILE_TYPES: [GraphFileType; 8] = [
    GraphFileType {
        mime_type: DOT_MIME_TYPE,
        engine: EngineId::Dot,
        name: "dot",
        extensions: &[".gv", ".dot"],
    },
    GraphFileType {
        mime_type: "text/vnd.graphviz.neato",
        engine: EngineId::Neato,
        name: "neato",
        extensions: &[".neato"],
    },
    GraphFileType {
        mime_type: "text/vnd.graphviz.fdp",
        engine: EngineId::Fdp,
        name: "fdp",
        extensions: &[".fdp"],
    },
    GraphFileType {
        mime_type: "text/vnd.graphviz.sfdp",
        engine: EngineId::Sfdp,
        name: "sfdp",
        extensions: &[".sfdp"],
    },
    GraphFileType {
        mime_type: "text/vnd.graphviz.twopi",
        engine: EngineId::Twopi,
        name: "twopi",
        extensions: &[".twopi"],
    },
    GraphFileType {
        mime_type: "text/vnd.graphviz.circo",
        engine: EngineId::Circo,
        name: "circo",
        extensions: &[".circo"],
    },
    GraphFileType {
        mime_type: "text/vnd.graphviz.osage",
        engine: EngineId::Osage,
        name: "osage",
        extensions: &[".osage"],
    },
    GraphFileType {
        mime_type: "text/vnd.graphviz.patchwork",
        engine: EngineId::Patchwork,
        name: "patchwork",
        extensions: &[".patchwork"],
    },
];

#[must_use]
pub fn lookup(mime_type: &str) -> Option<&'static GraphFileType> {
    GRAPH_FILE_TYPES
        .iter()
        .find(|file_type| file_type.mime_type == mime_type)
}

pub fn mime_types() -> impl Iterator<Item = &'static str> {
    GRAPH_FILE_TYPES.iter().map(|file_type| file_type.mime_type)
}

/// File type matching a path's extension (case-insensitive).
#[must_use]
pub fn lookup_by_path(path: &str) -> Option<&'static GraphFileType> {
    let lowered = path.to_ascii_lowercase();
    GRAPH_FILE_TYPES.iter().find(|file_type| {
        file_type
            .extensions
            .iter()
            .any(|extension| lowered.ends_with(extension))
    })
}
