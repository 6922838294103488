use serde::Serialize;

use super::{GRAPH_FILE_TYPES, GraphFileType};

const EXTENSION_ID_PREFIX: &str = "graphviz-view";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTypeDescriptor {
    pub name: String,
    pub extensions: Vec<String>,
    pub mime_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentWidgetFactoryOptions {
    pub name: String,
    pub primary_file_type: String,
    pub file_types: Vec<String>,
    pub default_for: Vec<String>,
}

/// Registration record a host consumes to route a file type to the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionDescriptor {
    pub id: String,
    pub name: String,
    pub rank: i32,
    pub data_type: String,
    /// Rendered markup is not sanitized by the host.
    pub safe: bool,
    pub file_types: Vec<FileTypeDescriptor>,
    pub document_widget_factory_options: DocumentWidgetFactoryOptions,
}

impl From<&GraphFileType> for ExtensionDescriptor {
    fn from(file_type: &GraphFileType) -> Self {
        let name = file_type.name.to_owned();
        Self {
            id: format!("{EXTENSION_ID_PREFIX}.{name}"),
            name: name.clone(),
            rank: 0,
            data_type: "string".to_owned(),
            safe: false,
            file_types: vec![FileTypeDescriptor {
                name: name.clone(),
                extensions: file_type
                    .extensions
                    .iter()
                    .map(|extension| (*extension).to_owned())
                    .collect(),
                mime_types: vec![file_type.mime_type.to_owned()],
            }],
            document_widget_factory_options: DocumentWidgetFactoryOptions {
                name: name.clone(),
                primary_file_type: name.clone(),
                file_types: vec![name.clone()],
                default_for: vec![name],
            },
        }
    }
}

/// One descriptor per registered graph file type, in table order.
#[must_use]
pub fn extension_descriptors() -> Vec<ExtensionDescriptor> {
    GRAPH_FILE_TYPES
        .iter()
        .map(ExtensionDescriptor::from)
        .collect()
}
