//! Output files of a capture.
//!
//! For process `app`, device 1 and pipeline 3 the writer produces
//! `app_device_1_pipeline_3.json` and one `app_device_1_pipeline_3.<stage>.spv`
//! per shader stage, plus `app_objectResInfo_1.hpp` for the device's
//! reservation counters.

use super::Capture;
use crate::config::CaptureSettings;
use crate::document::{generate_pipeline_value, GeneratorOptions, PipelineUuid};
use crate::error::{PcJsonError, Result, ResultExt};
use crate::model::{DeviceId, ShaderStageFlags};
use crate::reservation::{header, ReservationSnapshot};
use std::fs;
use std::path::{Path, PathBuf};

/// File name suffix of a shader stage
pub fn stage_suffix(stage: ShaderStageFlags) -> Option<&'static str> {
    match stage {
        ShaderStageFlags::VERTEX => Some("vert"),
        ShaderStageFlags::TESSELLATION_CONTROL => Some("tcs"),
        ShaderStageFlags::TESSELLATION_EVALUATION => Some("tes"),
        ShaderStageFlags::GEOMETRY => Some("geom"),
        ShaderStageFlags::FRAGMENT => Some("frag"),
        ShaderStageFlags::COMPUTE => Some("compute"),
        _ => None,
    }
}

fn pipeline_stem(process: &str, device: DeviceId, pipeline_index: u32) -> String {
    format!("{}_device_{}_pipeline_{}", process, device, pipeline_index)
}

/// `<process>_device_<d>_pipeline_<p>.<stage>.spv`
pub fn shader_file_name(
    process: &str,
    device: DeviceId,
    pipeline_index: u32,
    stage: ShaderStageFlags,
) -> Result<String> {
    let suffix = stage_suffix(stage).ok_or_else(|| {
        PcJsonError::Capture(format!("Unrecognized shader stage: {:?}", stage))
    })?;
    Ok(format!(
        "{}.{}.spv",
        pipeline_stem(process, device, pipeline_index),
        suffix
    ))
}

/// `<process>_device_<d>_pipeline_<p>.json`
pub fn pipeline_json_file_name(process: &str, device: DeviceId, pipeline_index: u32) -> String {
    format!("{}.json", pipeline_stem(process, device, pipeline_index))
}

/// UUID member of a generated document
fn document_uuid(document: &serde_json::Value) -> Result<PipelineUuid> {
    document
        .get("PipelineUUID")
        .and_then(PipelineUuid::from_json)
        .ok_or_else(|| PcJsonError::schema("PipelineUUID", "Invalid PipelineUUID format"))
}

/// Writes capture artifacts into one directory.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    /// Writer for the configured output directory
    pub fn from_settings(settings: &CaptureSettings) -> Result<Self> {
        Self::new(settings.resolve_output_dir()?)
    }

    /// Writer for `dir`, creating it if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(PcJsonError::from)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write(&self, name: &str, contents: &[u8]) -> Result<PathBuf> {
        let path = self.dir.join(name);
        fs::write(&path, contents)
            .map_err(PcJsonError::from)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("Wrote {} ({} bytes)", path.display(), contents.len());
        Ok(path)
    }

    /// Write the shader binaries and the pipeline JSON of `capture`.
    ///
    /// Returns the UUID written into the document.
    pub fn write_capture(&self, capture: &Capture, options: &GeneratorOptions) -> Result<PipelineUuid> {
        for shader in &capture.shaders {
            self.write(&shader.filename, shader.code.as_slice())?;
        }

        let generated = generate_pipeline_value(&capture.document, options)?;
        for message in &generated.messages {
            tracing::warn!("{}", message);
        }
        let uuid = document_uuid(&generated.value)?;
        let text = if options.pretty {
            serde_json::to_string_pretty(&generated.value)?
        } else {
            serde_json::to_string(&generated.value)?
        };
        let name = pipeline_json_file_name(&capture.process, capture.device, capture.pipeline_index);
        self.write(&name, text.as_bytes())?;
        tracing::info!("Captured pipeline {} as {} ({})", capture.pipeline_index, name, uuid);
        Ok(uuid)
    }

    /// Write the reservation header of one device
    pub fn write_reservation_header(
        &self,
        process: &str,
        device: DeviceId,
        snapshot: &ReservationSnapshot,
    ) -> Result<PathBuf> {
        let text = header::render_header(process, device, snapshot);
        self.write(&header::header_file_name(process, device), text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_file_names() {
        assert_eq!(
            shader_file_name("app", DeviceId(1), 3, ShaderStageFlags::FRAGMENT).unwrap(),
            "app_device_1_pipeline_3.frag.spv"
        );
        assert_eq!(
            shader_file_name("app", DeviceId(2), 0, ShaderStageFlags::COMPUTE).unwrap(),
            "app_device_2_pipeline_0.compute.spv"
        );
        let err = shader_file_name(
            "app",
            DeviceId(1),
            0,
            ShaderStageFlags::VERTEX | ShaderStageFlags::FRAGMENT,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Unrecognized shader stage"));
    }

    #[test]
    fn test_pipeline_json_file_name() {
        assert_eq!(
            pipeline_json_file_name("app", DeviceId(4), 7),
            "app_device_4_pipeline_7.json"
        );
    }

    #[test]
    fn test_writer_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("out");
        let writer = ArtifactWriter::new(&dir).unwrap();
        assert!(dir.is_dir());
        let path = writer.write("a.spv", &[1, 2, 3]).unwrap();
        assert_eq!(fs::read(path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_document_uuid_must_be_present() {
        let uuid = document_uuid(&serde_json::json!({ "PipelineUUID": vec![9u8; 16] })).unwrap();
        assert_eq!(uuid, PipelineUuid([9; 16]));

        let err = document_uuid(&serde_json::json!({})).unwrap_err();
        assert!(err.to_string().contains("Invalid PipelineUUID format"));
        assert!(document_uuid(&serde_json::json!({ "PipelineUUID": [1, 2] })).is_err());
    }
}
