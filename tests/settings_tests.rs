// tests/settings_tests.rs
//! Integration tests for loading redaction settings from YAML.

use anyhow::Result;
use casemark::RedactionSettings;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn load_from_file_applies_defaults_for_omitted_fields() -> Result<()> {
    let yaml_content = r#"
entity_names:
  - email
  - phone-number
custom_metadata_field_prefix: "Custom"
only_record_changes: false
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    let settings = RedactionSettings::load_from_file(file.path())?;

    assert_eq!(settings.entity_names.len(), 2);
    assert!(settings.entity_names.contains("email"));
    assert_eq!(settings.custom_metadata_field_prefix, "Custom");
    assert!(!settings.only_record_changes);
    // Omitted fields keep their defaults.
    assert!(settings.redact_properties);
    assert!(settings.redact_content_text);
    assert_eq!(settings.redaction_replacement_template, "[REDACTED {entity_name}]");
    assert_eq!(settings.time_of_redaction_field_name, "TextualRedactionTime");
    Ok(())
}

#[test]
fn load_from_file_reads_property_allow_list() -> Result<()> {
    let yaml_content = r#"
entity_names: [email]
specific_properties:
  - Body
  - Subject
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    let settings = RedactionSettings::load_from_file(file.path())?;

    assert!(settings.has_specific_properties());
    assert!(settings.should_process_property("Body"));
    assert!(!settings.should_process_property("From"));
    Ok(())
}

#[test]
fn load_from_file_rejects_broken_template() -> Result<()> {
    let yaml_content = r#"
entity_names: [email]
redaction_replacement_template: "{entity_name"
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    assert!(RedactionSettings::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn load_from_file_rejects_malformed_yaml() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"entity_names: [unclosed")?;
    assert!(RedactionSettings::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    assert!(RedactionSettings::load_from_file("/nonexistent/settings.yaml").is_err());
}
