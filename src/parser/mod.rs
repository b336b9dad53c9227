use anyhow::{Result, anyhow};

use crate::model::{PartDescriptor, PartType, RawDescriptor};

/// Parse a part descriptor from its JSON text.
///
/// The descriptor is a single object with three recognised slots:
///   • "main"  – entry-point source file (required, non-empty)
///   • "files" – auxiliary source files, compiled in listed order
///   • "type"  – only the value "auto" is special; anything else is a
///               form part
///
/// Unknown slots are ignored so descriptors written for richer tools
/// still load.
pub fn load(json: &str) -> Result<PartDescriptor> {
    let raw: RawDescriptor =
        serde_json::from_str(json).map_err(|e| anyhow!("invalid descriptor: {e}"))?;
    cook(raw)
}

/// Validate the raw descriptor into the builder-facing form.
pub fn cook(raw: RawDescriptor) -> Result<PartDescriptor> {
    let main = match raw.main {
        Some(m) if !m.is_empty() => m,
        Some(_) => return Err(anyhow!("invalid descriptor: `main` is empty")),
        None => return Err(anyhow!("invalid descriptor: missing `main`")),
    };

    let files = raw
        .files
        .unwrap_or_default()
        .into_iter()
        .map(Into::into)
        .collect();

    let part_type = match raw.part_type.as_ref().and_then(|v| v.as_str()) {
        Some("auto") => PartType::Auto,
        _ => PartType::Form,
    };

    Ok(PartDescriptor {
        main: main.into(),
        files,
        part_type,
    })
}
