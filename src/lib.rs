// casemark/src/lib.rs
//! # Casemark
//!
//! `casemark` provides two independent utilities for items managed by a
//! host e-discovery platform: applying rectangular redaction/highlight
//! annotations to rendered item pages, and producing redacted copies of
//! metadata properties and document text driven by the named entities the
//! platform has already detected.
//!
//! The host's case, item, and markup APIs are external collaborators and
//! are expressed as traits in the [`host`] module; this library never
//! touches the platform directly. All processing is synchronous and
//! single-threaded.
//!
//! ## Modules
//!
//! * `host`: Trait seams over the host case/item/markup-set APIs.
//! * `annotations`: Rectangular page regions and markup application.
//! * `settings`: Configuration for redaction runs, loadable from YAML.
//! * `results`: Mergeable tallies describing what a run touched.
//! * `redactor`: Single-item, batch, and case-scoped redaction.
//! * `query`: Named-entity search query construction.
//! * `profile`: Viewer metadata profile XML generation.
//! * `resolver`: Named-placeholder template resolution.
//! * `errors`: The structured `CasemarkError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use casemark::{ImageAnnotationRegion, RedactionSettings};
//!
//! let mut settings = RedactionSettings::default();
//! settings.add_entity_names(["email", "phone-number"]);
//! assert_eq!(settings.custom_metadata_field_prefix, "R_");
//!
//! let region = ImageAnnotationRegion {
//!     x: 10.0,
//!     y: 20.0,
//!     width: 150.0,
//!     height: 18.0,
//!     text: "jane@example.com".to_string(),
//!     page_number: 1,
//! };
//! assert_eq!(region.page_number, 1);
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return `anyhow::Result`. Failures a caller may want
//! to distinguish (invalid page numbers, out-of-range pages, template
//! problems) are raised as [`CasemarkError`] values inside that error.
//! Per-item failures during batch redaction are caught, reported, and
//! skipped; everything else propagates.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod annotations;
pub mod errors;
pub mod host;
pub mod profile;
pub mod query;
pub mod redactor;
pub mod resolver;
pub mod results;
pub mod settings;

/// Re-exports the rectangular page annotation region.
pub use annotations::ImageAnnotationRegion;

/// Re-exports the custom error type for clear error reporting.
pub use errors::CasemarkError;

/// Re-exports the host platform trait seams.
pub use host::{HostCase, HostItem, MarkupSet, PrintedPage};

/// Re-exports the viewer profile writer.
pub use profile::{render_redaction_profile, save_redaction_profile};

/// Re-exports the named-entity query helper.
pub use query::named_entity_query;

/// Re-exports the redactor and its callback signatures.
pub use redactor::{MessageCallback, NamedEntityRedactor, ProgressCallback};

/// Re-exports the placeholder template resolver.
pub use resolver::PlaceholderResolver;

/// Re-exports the mergeable run tallies.
pub use results::RedactionResults;

/// Re-exports run configuration and the host's built-in entity names.
pub use settings::{RedactionSettings, BUILT_IN_ENTITY_NAMES};
