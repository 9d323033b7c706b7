// casemark/src/profile.rs
//! Viewer metadata profile generation.
//!
//! After a redaction run, the host viewer needs a metadata profile that
//! shows the redacted copy of each touched field, falling back to the
//! original property when no copy exists. [`save_redaction_profile`] emits
//! that profile as a small XML document: the fixed `Position` and `Name`
//! columns, then one derived field per updated property whose
//! `first-non-blank` coalesces the prefixed custom field with the original
//! property.
//!
//! The document is rendered fully in memory and written in one call, so a
//! render failure produces no partial file (there is no atomic rename).
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::info;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::results::RedactionResults;
use crate::settings::RedactionSettings;

const PROFILE_NAMESPACE: &str = "http://nuix.com/fbi/metadata-profile";

/// Renders the metadata profile document for the given run results.
pub fn render_redaction_profile(
    results: &RedactionResults,
    settings: &RedactionSettings,
) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("metadata-profile");
    root.push_attribute(("xmlns", PROFILE_NAMESPACE));
    writer.write_event(Event::Start(root))?;
    writer.write_event(Event::Start(BytesStart::new("metadata-list")))?;

    write_special_field(&mut writer, "Position", "101")?;
    write_special_field(&mut writer, "Name", "191")?;

    for property_name in &results.updated_properties {
        let mut derived = BytesStart::new("metadata");
        derived.push_attribute(("type", "DERIVED"));
        derived.push_attribute(("name", property_name.as_str()));
        derived.push_attribute(("default-column-width", "198"));
        writer.write_event(Event::Start(derived))?;
        writer.write_event(Event::Start(BytesStart::new("first-non-blank")))?;

        let custom_field_name = format!(
            "{}{}",
            settings.custom_metadata_field_prefix, property_name
        );
        write_field_reference(&mut writer, "CUSTOM", &custom_field_name)?;
        write_field_reference(&mut writer, "PROPERTY", property_name)?;

        writer.write_event(Event::End(BytesEnd::new("first-non-blank")))?;
        writer.write_event(Event::End(BytesEnd::new("metadata")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("metadata-list")))?;
    writer.write_event(Event::End(BytesEnd::new("metadata-profile")))?;

    String::from_utf8(writer.into_inner()).context("Rendered profile was not valid UTF-8")
}

/// Renders and writes the metadata profile to the destination path. I/O
/// errors propagate to the caller.
pub fn save_redaction_profile<P: AsRef<Path>>(
    destination: P,
    results: &RedactionResults,
    settings: &RedactionSettings,
) -> Result<()> {
    let destination = destination.as_ref();
    info!("Saving redaction profile to: {}", destination.display());
    let contents = render_redaction_profile(results, settings)?;
    fs::write(destination, contents)
        .with_context(|| format!("Failed to write redaction profile {}", destination.display()))
}

fn write_special_field<W: Write>(writer: &mut Writer<W>, name: &str, width: &str) -> Result<()> {
    let mut field = BytesStart::new("metadata");
    field.push_attribute(("type", "SPECIAL"));
    field.push_attribute(("name", name));
    field.push_attribute(("default-column-width", width));
    writer.write_event(Event::Empty(field))?;
    Ok(())
}

fn write_field_reference<W: Write>(
    writer: &mut Writer<W>,
    field_type: &str,
    name: &str,
) -> Result<()> {
    let mut field = BytesStart::new("metadata");
    field.push_attribute(("type", field_type));
    field.push_attribute(("name", name));
    writer.write_event(Event::Empty(field))?;
    Ok(())
}
