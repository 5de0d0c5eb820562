//! Reads `<items><item key=".." uuid=".."/></items>` reference files

use crate::core::constants::{file_names, reference_types, xml_names};
use crate::core::utils::FileUtils;
use crate::error::{DistroError, DistroResult};
use crate::metadata::config::MetadataConfig;
use indexmap::IndexMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::path::Path;
use tracing::{info, warn};

/// Load the `key -> uuid` items of one reference file.
///
/// A missing file is not an error: the type simply has no references.
pub fn load_metadata_items(path: &Path) -> DistroResult<IndexMap<String, String>> {
    if !path.is_file() {
        warn!("No metadata file at {}, skipping", path.display());
        return Ok(IndexMap::new());
    }

    let content = FileUtils::read_with_context(path, "metadata file")?;
    let items = parse_metadata_items(&path.display().to_string(), &content)?;
    info!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

/// Parse the items of an `<items>` document
pub fn parse_metadata_items(origin: &str, xml: &str) -> DistroResult<IndexMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut items = IndexMap::new();
    let mut depth = 0usize;
    let mut saw_root = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                check_root(origin, e, depth, &mut saw_root)?;
                if depth == 1 && e.name().as_ref() == xml_names::ITEM.as_bytes() {
                    let (key, uuid) = read_item(origin, e, items.len())?;
                    items.insert(key, uuid);
                }
                depth += 1;
            }
            Ok(Event::Empty(ref e)) => {
                check_root(origin, e, depth, &mut saw_root)?;
                if depth == 1 && e.name().as_ref() == xml_names::ITEM.as_bytes() {
                    let (key, uuid) = read_item(origin, e, items.len())?;
                    items.insert(key, uuid);
                }
            }
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DistroError::xml(
                    origin,
                    format!("at position {}: {e}", reader.buffer_position()),
                ))
            }
            _ => {}
        }
    }

    if !saw_root {
        return Err(DistroError::config(
            origin,
            "<root>",
            format!("missing <{}> root element", xml_names::ITEMS),
        ));
    }
    Ok(items)
}

/// Load `concepts.xml` and `forms.xml` from `dir`
pub fn load_from_directory(dir: &Path) -> DistroResult<MetadataConfig> {
    FileUtils::ensure_directory(dir)?;

    let mut config = MetadataConfig::new();
    for (file_name, reference_type) in [
        (file_names::CONCEPTS_XML, reference_types::CONCEPT),
        (file_names::FORMS_XML, reference_types::FORM),
    ] {
        let items = load_metadata_items(&dir.join(file_name))?;
        config.add_references(reference_type, items);
    }
    Ok(config)
}

fn check_root(origin: &str, e: &BytesStart, depth: usize, saw_root: &mut bool) -> DistroResult<()> {
    if depth != 0 {
        return Ok(());
    }
    if e.name().as_ref() != xml_names::ITEMS.as_bytes() {
        return Err(DistroError::config(
            origin,
            "<root>",
            format!(
                "expected <{}> root element, found <{}>",
                xml_names::ITEMS,
                String::from_utf8_lossy(e.name().as_ref())
            ),
        ));
    }
    *saw_root = true;
    Ok(())
}

fn read_item(origin: &str, e: &BytesStart, index: usize) -> DistroResult<(String, String)> {
    let mut key = None;
    let mut uuid = None;

    for attr in e.attributes() {
        let attr = attr.map_err(|err| DistroError::xml(origin, err))?;
        let value = attr
            .unescape_value()
            .map_err(|err| DistroError::xml(origin, err))?
            .into_owned();
        match attr.key.as_ref() {
            k if k == xml_names::KEY.as_bytes() => key = Some(value),
            k if k == xml_names::UUID.as_bytes() => uuid = Some(value),
            _ => {}
        }
    }

    let key_path = format!("{}[{index}]", xml_names::ITEM);
    let key = key.ok_or_else(|| {
        DistroError::config(origin, key_path.as_str(), "item has no 'key' attribute")
    })?;
    let uuid = uuid.ok_or_else(|| {
        DistroError::config(origin, key_path.as_str(), format!("item '{key}' has no 'uuid' attribute"))
    })?;
    Ok((key, uuid))
}
