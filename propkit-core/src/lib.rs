//! Property declaration recognition and rewriting.
//!
//! The engine is a one-way pipeline over plain text:
//!
//! 1. [`text::splitter`] cuts a selection into candidate blocks at blank lines
//! 2. [`classify`] recognizes the declaration idiom of one block and extracts
//!    its type, name, backing field, initializer and dependent properties
//! 3. [`emit`] renders a recognized block as an auto-property, a full
//!    property or an observable field
//!
//! [`commands`] rewrites command constructions in the same text-only way.
//!
//! Nothing here parses a compilation unit or resolves types; patterns are
//! matched textually and anything unrecognized is reported as a value, never
//! as a panic.
//!
//! ```
//! use propkit_core::{classify, emit_batch};
//! use propkit_types::{PropertyKind, Target};
//!
//! assert_eq!(classify("public int Count { get; set; }").kind(), Some(PropertyKind::Auto));
//!
//! let out = emit_batch(Target::Observable, "public int A { get; set; }\n\npublic int B { get; set; }").unwrap();
//! assert_eq!(out, "[ObservableProperty]\nprivate int _a;\n\n[ObservableProperty]\nprivate int _b;");
//! ```

#![warn(missing_docs)]

pub mod classify;
pub mod commands;
pub mod convert;
pub mod emit;
pub mod text;

pub use classify::{classify, Classifier};
pub use commands::{is_command_candidate, rewrite_commands};
pub use convert::{is_convertible, Converter};
pub use emit::{emit, emit_batch, Emitter};
pub use text::splitter::{blocks, split};

pub use propkit_types::{
    ConvertConfig, EmissionSkipped, Property, PropertyDescriptor, PropertyKind, RecognitionFailure,
    Target,
};
