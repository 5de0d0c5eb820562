//! Structural checks and `<macros>` extraction for form XML

use crate::core::constants::xml_names;
use crate::error::{DistroError, DistroResult};
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;
use std::path::Path;

/// Check that `xml` is well formed with an `<htmlform>` root element.
///
/// Beyond what the reader enforces on its own, this rejects an unclosed root,
/// a second top-level element, text outside the root, repeated attributes and
/// undefined entity references.
pub fn check_form_structure(path: &Path, xml: &str) -> DistroResult<()> {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    let mut root: Option<String> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| unable_to_parse(path, &reader, e))?;

        match &event {
            Event::Start(e) | Event::Empty(e) => {
                if depth == 0 {
                    if let Some(root) = &root {
                        return Err(malformed(
                            path,
                            &reader,
                            format!("content after the root <{root}> element"),
                        ));
                    }
                    root = Some(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                }
                for attr in e.attributes() {
                    let attr = attr.map_err(|err| unable_to_parse(path, &reader, err.into()))?;
                    attr.unescape_value()
                        .map_err(|err| unable_to_parse(path, &reader, err))?;
                }
                if matches!(event, Event::Start(_)) {
                    depth += 1;
                }
            }
            Event::End(e) => {
                if depth == 0 {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    return Err(malformed(path, &reader, format!("unexpected </{name}>")));
                }
                depth -= 1;
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| unable_to_parse(path, &reader, e))?;
                if depth == 0 && !text.trim().is_empty() {
                    return Err(malformed(path, &reader, "text outside the root element"));
                }
            }
            Event::CData(_) if depth == 0 => {
                return Err(malformed(path, &reader, "CDATA outside the root element"));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(malformed(
            path,
            &reader,
            format!("unclosed <{}> element", root.as_deref().unwrap_or_default()),
        ));
    }

    match root.as_deref() {
        Some(xml_names::HTMLFORM) => Ok(()),
        _ => Err(DistroError::form(
            path,
            format!("has no root <{}> node", xml_names::HTMLFORM),
        )),
    }
}

/// A form with its `<macros>` element taken out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMacros {
    /// Text content of the removed element
    pub definitions: String,
    /// The form XML without the element
    pub xml: String,
}

/// Remove the `<macros>` child of the root element, returning its text.
///
/// Returns `None` when the root has no such child. Only the first direct child
/// is taken; everything else is written back as it was read.
pub fn extract_macros(path: &Path, xml: &str) -> DistroResult<Option<ExtractedMacros>> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::new());
    let mut depth = 0usize;
    let mut in_macros = false;
    let mut found = false;
    let mut definitions = String::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| unable_to_parse(path, &reader, e))?;

        if in_macros {
            match &event {
                Event::Start(_) => depth += 1,
                Event::End(_) => {
                    depth -= 1;
                    if depth == 1 {
                        in_macros = false;
                    }
                }
                Event::Text(text) => {
                    let text = text
                        .unescape()
                        .map_err(|e| unable_to_parse(path, &reader, e))?;
                    definitions.push_str(&text);
                }
                Event::CData(cdata) => {
                    definitions.push_str(&String::from_utf8_lossy(cdata));
                }
                _ => {}
            }
            continue;
        }

        match &event {
            Event::Start(e) if depth == 1 && !found && is_macros(e.name().as_ref()) => {
                found = true;
                in_macros = true;
                depth += 1;
                continue;
            }
            Event::Empty(e) if depth == 1 && !found && is_macros(e.name().as_ref()) => {
                found = true;
                continue;
            }
            Event::Start(_) => depth += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }

        writer
            .write_event(event)
            .map_err(|e| DistroError::form(path, format!("Unable to write form: {e}")))?;
    }

    if !found {
        return Ok(None);
    }

    let xml = String::from_utf8(writer.into_inner())
        .map_err(|e| DistroError::form(path, format!("Unable to write form: {e}")))?;
    Ok(Some(ExtractedMacros { definitions, xml }))
}

fn is_macros(name: &[u8]) -> bool {
    name == xml_names::MACROS.as_bytes()
}

fn unable_to_parse(path: &Path, reader: &Reader<&[u8]>, err: quick_xml::Error) -> DistroError {
    malformed(path, reader, err.to_string())
}

fn malformed(path: &Path, reader: &Reader<&[u8]>, reason: impl std::fmt::Display) -> DistroError {
    DistroError::form(
        path,
        format!("Unable to parse at position {}: {reason}", reader.buffer_position()),
    )
}
