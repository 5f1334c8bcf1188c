//! Manifest serialization and persistence.
//!
//! Manifests are rendered as block-style YAML with keys in the order the
//! generation produced them. Writing creates parent directories as needed.

use std::path::{Path, PathBuf};

use crate::collector;
use crate::document::Document;
use crate::error::GenError;
use crate::generate::Generation;
use crate::settings::OutputSettings;

/// Render a manifest as YAML.
pub fn to_yaml(manifest: &Document, what: &'static str) -> Result<String, GenError> {
    serde_yaml::to_string(manifest).map_err(|e| GenError::SerializeError { what, source: e })
}

/// Write a rendered manifest to `path`, creating parent directories.
pub fn write_manifest(path: &Path, content: &str) -> Result<(), GenError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| GenError::WriteError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, content).map_err(|e| GenError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), "Successfully wrote manifest");
    Ok(())
}

/// One rendered manifest and where it belongs.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedManifest {
    pub what: &'static str,
    pub path: PathBuf,
    pub content: String,
}

/// Render every manifest the outputs ask for, without touching the disk.
///
/// The pipeline manifest comes first, then receivers, then the collector
/// manifest when a path for it is configured.
pub fn render_all(
    generation: &Generation,
    outputs: &OutputSettings,
) -> Result<Vec<RenderedManifest>, GenError> {
    let mut rendered = vec![
        RenderedManifest {
            what: "pipeline manifest",
            path: outputs.pipelines.clone(),
            content: to_yaml(&generation.result.pipeline_manifest(), "pipeline manifest")?,
        },
        RenderedManifest {
            what: "receiver manifest",
            path: outputs.receivers.clone(),
            content: to_yaml(&generation.result.receiver_manifest(), "receiver manifest")?,
        },
    ];
    if let Some(path) = &outputs.collector {
        let manifest = collector::collector_manifest(generation, &outputs.includes());
        rendered.push(RenderedManifest {
            what: "collector manifest",
            path: path.clone(),
            content: to_yaml(&manifest, "collector manifest")?,
        });
    }
    Ok(rendered)
}

/// Write rendered manifests in order.
pub fn persist(rendered: &[RenderedManifest]) -> Result<(), GenError> {
    for manifest in rendered {
        write_manifest(&manifest.path, &manifest.content)?;
    }
    Ok(())
}
