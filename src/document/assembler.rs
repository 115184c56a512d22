//! Pipeline document generation and parsing.

use super::uuid::{content_uuid, PipelineUuid};
use super::{
    side_table_handle, ComputePipelineState, GeneratorOptions, GraphicsPipelineState, Named,
    PipelineDocument, PipelineResources, PipelineState, RenderPassState, ShaderFileName, UuidMode,
};
use crate::codec::{kind_of, Decoder, Encoder, Generated, JsonField, Segment};
use crate::error::{PcJsonError, Result, ResultExt};
use crate::model::handle::{Handle, ObjectCategory, ObjectHandle};
use crate::names::NameRegistry;
use serde_json::{Map, Value};

/// Side tables in document order, with the category of their entries
const SIDE_TABLES: [(&str, ObjectCategory); 3] = [
    ("YcbcrSamplers", ObjectCategory::SamplerYcbcrConversion),
    ("ImmutableSamplers", ObjectCategory::Sampler),
    ("DescriptorSetLayouts", ObjectCategory::DescriptorSetLayout),
];

// ==================== Generation ====================

/// Generate the JSON text of a pipeline document.
pub fn generate_pipeline_json(
    document: &PipelineDocument,
    options: &GeneratorOptions,
) -> Result<Generated<String>> {
    let generated = generate_pipeline_value(document, options)?;
    let text = if options.pretty {
        serde_json::to_string_pretty(&generated.value)?
    } else {
        serde_json::to_string(&generated.value)?
    };
    Ok(generated.map(|_| text))
}

/// Generate a pipeline document as a JSON tree.
///
/// The returned tree carries the final `PipelineUUID`, either the document's
/// own or the content hash selected by `options.uuid_mode`.
pub fn generate_pipeline_value(
    document: &PipelineDocument,
    options: &GeneratorOptions,
) -> Result<Generated<Value>> {
    let resources = document.resources();
    if resources.shader_file_names.is_empty() {
        return Err(PcJsonError::ContentPolicy(
            "a pipeline document needs at least one shader file name".to_string(),
        ));
    }

    let registry = side_table_registry(resources)?;
    check_references(resources, &registry)?;

    let mut normalized = document.clone();
    normalized.eliminate_irrelevant_handles();

    let mut enc = Encoder::with_registry(&registry);
    let mut root = Map::new();
    root.insert(
        "EnabledExtensions".to_string(),
        Value::Array(
            document
                .enabled_extensions
                .iter()
                .map(|ext| Value::from(ext.as_str()))
                .collect(),
        ),
    );

    let key = normalized.state.key();
    let state = enc.scoped(Segment::Field(key), |enc| match &normalized.state {
        PipelineState::Compute(state) => encode_compute(state, enc),
        PipelineState::Graphics(state) => encode_graphics(state, enc),
    })?;
    root.insert(key.to_string(), state);

    let mut tree = Value::Object(root);
    let uuid = match options.uuid_mode {
        UuidMode::Provided => document.pipeline_uuid,
        UuidMode::ContentHash => content_uuid(&tree, false)?,
        UuidMode::ContentHashExcludingFilenames => content_uuid(&tree, true)?,
    };
    if let Some(root) = tree.as_object_mut() {
        root.insert("PipelineUUID".to_string(), uuid.to_json());
    }

    tracing::debug!(
        "Generated {} document {} ({} warnings)",
        key,
        uuid,
        enc.messages().len()
    );
    Ok(Generated::new(tree, enc.into_messages()))
}

/// Bind every side-table name to the handle of its entry
fn side_table_registry(resources: &PipelineResources) -> Result<NameRegistry> {
    fn register<T>(
        registry: &mut NameRegistry,
        category: ObjectCategory,
        entries: &[Named<T>],
    ) -> Result<()> {
        for (i, entry) in entries.iter().enumerate() {
            registry.insert(category, entry.name.as_str(), Handle(i as u64 + 1))?;
        }
        Ok(())
    }

    let mut registry = NameRegistry::new();
    register(
        &mut registry,
        ObjectCategory::SamplerYcbcrConversion,
        &resources.ycbcr_samplers,
    )?;
    register(
        &mut registry,
        ObjectCategory::Sampler,
        &resources.immutable_samplers,
    )?;
    register(
        &mut registry,
        ObjectCategory::DescriptorSetLayout,
        &resources.descriptor_set_layouts,
    )?;
    Ok(registry)
}

/// Every reference into a side table must name one of its entries
fn check_references(resources: &PipelineResources, registry: &NameRegistry) -> Result<()> {
    fn require<H: ObjectHandle>(registry: &NameRegistry, handle: H, path: String) -> Result<()> {
        if handle.is_null() {
            return Ok(());
        }
        registry
            .require_name(H::CATEGORY, handle.handle())
            .map(|_| ())
            .with_context(|| path)
    }

    for (i, layout) in resources.pipeline_layout.set_layouts.iter().enumerate() {
        require(registry, *layout, format!("PipelineLayout.pSetLayouts[{}]", i))?;
    }
    for layout in &resources.descriptor_set_layouts {
        for (j, binding) in layout.value.bindings.iter().enumerate() {
            for sampler in binding.samplers() {
                require(
                    registry,
                    sampler,
                    format!("{}.pBindings[{}]->pImmutableSamplers", layout.name, j),
                )?;
            }
        }
    }
    for sampler in &resources.immutable_samplers {
        if let Some(conversion) = sampler.value.ycbcr_conversion() {
            require(
                registry,
                conversion,
                format!("{}.pNext->conversion", sampler.name),
            )?;
        }
    }
    Ok(())
}

fn encode_side_table<T: JsonField>(
    enc: &mut Encoder<'_>,
    obj: &mut Map<String, Value>,
    key: &str,
    entries: &[Named<T>],
) -> Result<()> {
    if entries.is_empty() {
        return Ok(());
    }
    let items = enc.scoped(Segment::Field(key), |enc| {
        let mut items = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let item = enc.scoped(Segment::Index(i), |enc| {
                let mut pair = Map::new();
                enc.field(&mut pair, &entry.name, &entry.value)?;
                Ok(Value::Object(pair))
            })?;
            items.push(item);
        }
        Ok(items)
    })?;
    obj.insert(key.to_string(), Value::Array(items));
    Ok(())
}

fn encode_resources(
    resources: &PipelineResources,
    enc: &mut Encoder<'_>,
    obj: &mut Map<String, Value>,
) -> Result<()> {
    encode_side_table(enc, obj, "YcbcrSamplers", &resources.ycbcr_samplers)?;
    encode_side_table(enc, obj, "ImmutableSamplers", &resources.immutable_samplers)?;
    encode_side_table(
        enc,
        obj,
        "DescriptorSetLayouts",
        &resources.descriptor_set_layouts,
    )?;
    enc.field(obj, "PipelineLayout", &resources.pipeline_layout)?;
    enc.field(obj, "ShaderFileNames", &resources.shader_file_names)?;
    if let Some(features) = &resources.device_features {
        enc.field(obj, "PhysicalDeviceFeatures", features)?;
    }
    Ok(())
}

fn encode_compute(state: &ComputePipelineState, enc: &mut Encoder<'_>) -> Result<Value> {
    let mut obj = Map::new();
    encode_resources(&state.resources, enc, &mut obj)?;
    enc.field(&mut obj, "ComputePipeline", &state.pipeline)?;
    Ok(Value::Object(obj))
}

fn encode_graphics(state: &GraphicsPipelineState, enc: &mut Encoder<'_>) -> Result<Value> {
    let mut obj = Map::new();
    encode_resources(&state.resources, enc, &mut obj)?;
    enc.field(&mut obj, "GraphicsPipeline", &state.pipeline)?;
    match &state.render_pass {
        RenderPassState::V1(rp) => enc.field(&mut obj, "Renderpass", rp)?,
        RenderPassState::V2(rp) => enc.field(&mut obj, "Renderpass2", rp)?,
    }
    Ok(Value::Object(obj))
}

// ==================== Parsing ====================

/// Parse the JSON text of a pipeline document.
pub fn parse_pipeline_json(text: &str) -> Result<Generated<PipelineDocument>> {
    let value: Value = serde_json::from_str(text)?;
    parse_pipeline_value(&value)
}

/// Parse a pipeline document tree.
///
/// Side-table names are registered before any body is decoded, so entries
/// may reference names that appear later in the document.
pub fn parse_pipeline_value(value: &Value) -> Result<Generated<PipelineDocument>> {
    let root = value.as_object().ok_or_else(|| {
        PcJsonError::schema(
            "<root>",
            format!("Expected an object, found {}", kind_of(value)),
        )
    })?;

    let (key, state_value) = if let Some(v) = root.get("GraphicsPipelineState") {
        ("GraphicsPipelineState", v)
    } else if let Some(v) = root.get("ComputePipelineState") {
        ("ComputePipelineState", v)
    } else {
        return Err(PcJsonError::schema(
            "<root>",
            "Unknown pipeline type (no GraphicsPipelineState or ComputePipelineState is found)",
        ));
    };
    let state_obj = state_value
        .as_object()
        .ok_or_else(|| PcJsonError::schema(key, format!("Invalid {} format", key)))?;

    let registry = register_side_table_names(key, state_obj)?;
    let mut dec = Decoder::with_registry(&registry);

    let pipeline_uuid = parse_uuid(root, &mut dec)?;
    let enabled_extensions = parse_extensions(root, &mut dec)?;

    let state = dec.scoped(Segment::Field(key), |dec| {
        let resources = decode_resources(state_obj, dec)?;
        if key == "GraphicsPipelineState" {
            decode_graphics(state_obj, resources, dec).map(PipelineState::Graphics)
        } else {
            decode_compute(state_obj, resources, dec).map(PipelineState::Compute)
        }
    })?;

    tracing::debug!(
        "Parsed {} document {} ({} warnings)",
        key,
        pipeline_uuid,
        dec.messages().len()
    );
    let document = PipelineDocument {
        state,
        enabled_extensions,
        pipeline_uuid,
    };
    Ok(Generated::new(document, dec.into_messages()))
}

/// Single `{name: body}` member of a side-table element
fn side_table_entry<'v>(
    element: &'v Value,
    table: &str,
    location: impl Fn() -> String,
) -> Result<(&'v String, &'v Value)> {
    let obj = element
        .as_object()
        .ok_or_else(|| PcJsonError::schema(location(), format!("Invalid {} format", table)))?;
    let mut members = obj.iter();
    match (members.next(), members.next()) {
        (Some(entry), None) => Ok(entry),
        (Some(_), Some(_)) => Err(PcJsonError::schema(
            location(),
            format!("Invalid {} format containing multiple keys in element", table),
        )),
        (None, _) => Err(PcJsonError::schema(
            location(),
            format!("Invalid {} format with an empty element", table),
        )),
    }
}

fn register_side_table_names(state_key: &str, state: &Map<String, Value>) -> Result<NameRegistry> {
    let mut registry = NameRegistry::new();
    for (table, category) in SIDE_TABLES {
        let Some(value) = state.get(table) else {
            continue;
        };
        let elements = value.as_array().ok_or_else(|| {
            PcJsonError::schema(
                format!("{}.{}", state_key, table),
                format!("Invalid {} format", table),
            )
        })?;
        for (i, element) in elements.iter().enumerate() {
            let (name, _) = side_table_entry(element, table, || {
                format!("{}.{}[{}]", state_key, table, i)
            })?;
            registry
                .insert(category, name.as_str(), Handle(i as u64 + 1))
                .with_context(|| format!("{}.{}[{}]", state_key, table, i))?;
        }
    }
    Ok(registry)
}

fn decode_side_table<T: JsonField>(
    state: &Map<String, Value>,
    table: &str,
    dec: &mut Decoder<'_>,
) -> Result<Vec<Named<T>>> {
    let Some(value) = state.get(table) else {
        return Ok(Vec::new());
    };
    let elements = value
        .as_array()
        .ok_or_else(|| dec.error(format!("Invalid {} format", table)))?;
    dec.scoped(Segment::Field(table), |dec| {
        let mut entries = Vec::with_capacity(elements.len());
        for (i, element) in elements.iter().enumerate() {
            let entry = dec.scoped(Segment::Index(i), |dec| {
                let location = dec.location().as_str().to_string();
                let (name, body) = side_table_entry(element, table, || location.clone())?;
                let value = dec.scoped(Segment::Field(name.as_str()), |dec| T::from_json(body, dec))?;
                Ok(Named::new(name.as_str(), value))
            })?;
            entries.push(entry);
        }
        Ok(entries)
    })
}

fn decode_resources(state: &Map<String, Value>, dec: &mut Decoder<'_>) -> Result<PipelineResources> {
    let ycbcr_samplers = decode_side_table(state, "YcbcrSamplers", dec)?;
    let immutable_samplers = decode_side_table(state, "ImmutableSamplers", dec)?;
    let descriptor_set_layouts = decode_side_table(state, "DescriptorSetLayouts", dec)?;

    if !state.contains_key("PipelineLayout") {
        return Err(dec.error("Missing PipelineLayout"));
    }
    let pipeline_layout = dec.field(state, "PipelineLayout")?;

    let shader_file_names: Vec<ShaderFileName> = match state.get("ShaderFileNames") {
        None => return Err(dec.error("Missing ShaderFileNames")),
        Some(Value::Array(_)) => dec.field(state, "ShaderFileNames")?,
        Some(_) => return Err(dec.error("Invalid ShaderFileNames format")),
    };
    if shader_file_names.is_empty() {
        return Err(PcJsonError::ContentPolicy(
            "ShaderFileNames must list at least one shader".to_string(),
        ));
    }

    let device_features = if state.contains_key("PhysicalDeviceFeatures") {
        Some(dec.field(state, "PhysicalDeviceFeatures")?)
    } else {
        None
    };

    Ok(PipelineResources {
        ycbcr_samplers,
        immutable_samplers,
        descriptor_set_layouts,
        pipeline_layout,
        shader_file_names,
        device_features,
    })
}

fn decode_compute(
    state: &Map<String, Value>,
    resources: PipelineResources,
    dec: &mut Decoder<'_>,
) -> Result<ComputePipelineState> {
    if !state.contains_key("ComputePipeline") {
        return Err(dec.error("Missing ComputePipeline"));
    }
    Ok(ComputePipelineState {
        resources,
        pipeline: dec.field(state, "ComputePipeline")?,
    })
}

fn decode_graphics(
    state: &Map<String, Value>,
    resources: PipelineResources,
    dec: &mut Decoder<'_>,
) -> Result<GraphicsPipelineState> {
    if !state.contains_key("GraphicsPipeline") {
        return Err(dec.error("Missing GraphicsPipeline"));
    }
    let pipeline = dec.field(state, "GraphicsPipeline")?;
    let render_pass = if state.contains_key("Renderpass") {
        RenderPassState::V1(dec.field(state, "Renderpass")?)
    } else if state.contains_key("Renderpass2") {
        RenderPassState::V2(dec.field(state, "Renderpass2")?)
    } else {
        return Err(dec.error("Missing both Renderpass and Renderpass2"));
    };
    Ok(GraphicsPipelineState {
        resources,
        pipeline,
        render_pass,
    })
}

fn parse_uuid(root: &Map<String, Value>, dec: &mut Decoder<'_>) -> Result<PipelineUuid> {
    match root.get("PipelineUUID") {
        Some(value) => PipelineUuid::from_json(value)
            .ok_or_else(|| PcJsonError::schema("PipelineUUID", "Invalid PipelineUUID format")),
        None => {
            dec.warn("No PipelineUUID");
            Ok(PipelineUuid::default())
        }
    }
}

fn parse_extensions(root: &Map<String, Value>, dec: &mut Decoder<'_>) -> Result<Vec<String>> {
    let Some(value) = root.get("EnabledExtensions") else {
        return Ok(Vec::new());
    };
    let items = value
        .as_array()
        .ok_or_else(|| PcJsonError::schema("EnabledExtensions", "Invalid EnabledExtensions format"))?;
    dec.scoped(Segment::Field("EnabledExtensions"), |dec| {
        let mut names = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            names.push(dec.scoped(Segment::Index(i), |dec| String::from_json(item, dec))?);
        }
        Ok(names)
    })
}

/// Handle of the side-table entry called `name`, if the document has one
pub fn find_side_table_entry<H: ObjectHandle, T>(entries: &[Named<T>], name: &str) -> Option<H> {
    entries
        .iter()
        .position(|entry| entry.name == name)
        .map(side_table_handle)
}
