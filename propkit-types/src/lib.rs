//! Core types for the propkit property rewriting engine.
//!
//! This crate holds the data shared between the recognizer, the emitters and
//! any host that drives them:
//!
//! - **Descriptors**: what a classification found ([`PropertyDescriptor`])
//! - **Targets**: which canonical form to emit ([`Target`])
//! - **Errors**: the two ordinary failure outcomes ([`RecognitionFailure`],
//!   [`EmissionSkipped`])
//! - **Configuration**: [`ConvertConfig`]

#![warn(missing_docs)]

use core::fmt;

use smallvec::SmallVec;

/// Names of dependent properties, in order of appearance.
///
/// Setters rarely notify more than a couple of other properties, so two
/// entries are kept inline.
pub type Dependents = SmallVec<[String; 2]>;

/// Message carried by every recognition failure.
pub const NO_MATCH_REASON: &str =
    "No recognizable property pattern found. Please select a valid property (auto, full, or observable).";

/// Declaration idiom recognized in a candidate block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PropertyKind {
    /// `[ObservableProperty] private T _name;`
    Observable = 0,
    /// `public T Name { get; set; }`
    Auto = 1,
    /// Field declaration followed by a property that returns it, or the
    /// expression-bodied `SetProperty(ref field, value)` form.
    FullWithBacking = 2,
    /// Backed property whose setter calls `RaisePropertyChanged()`.
    PrismFullWithBacking = 3,
    /// Backed property whose setter calls `OnPropertyChanged()`.
    NotifyFullWithBacking = 4,
    /// Any other property with a `set { ... }` block.
    Full = 5,
}

impl PropertyKind {
    /// Stable name of the idiom.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PropertyKind::Observable => "Observable",
            PropertyKind::Auto => "Auto",
            PropertyKind::FullWithBacking => "FullWithBacking",
            PropertyKind::PrismFullWithBacking => "PrismFullWithBacking",
            PropertyKind::NotifyFullWithBacking => "NotifyFullWithBacking",
            PropertyKind::Full => "Full",
        }
    }

    /// Whether this idiom stores its value in an explicit or implied field.
    #[must_use]
    pub const fn has_backing_field(self) -> bool {
        !matches!(self, PropertyKind::Auto | PropertyKind::Full)
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical form an emitter renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// `public T Name { get; set; }`
    Auto,
    /// Backing field plus a property calling `SetProperty`.
    Full,
    /// `[ObservableProperty]` annotated field.
    Observable,
}

impl Target {
    /// All targets, in declaration order.
    pub const ALL: [Target; 3] = [Target::Auto, Target::Full, Target::Observable];

    /// Lower-case name, as used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Target::Auto => "auto",
            Target::Full => "full",
            Target::Observable => "observable",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successfully recognized property declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Type expression exactly as written, e.g. `ObservableCollection<string>`.
    pub declared_type: String,
    /// Public member name.
    pub property_name: String,
    /// Explicit or implied storage field, if the idiom has one.
    pub backing_field_name: Option<String>,
    /// Recognized idiom.
    pub kind: PropertyKind,
    /// Other properties notified when this one changes.
    pub dependent_properties: Dependents,
    /// Raw right-hand side of the field initializer.
    pub initial_value: Option<String>,
}

impl Property {
    /// Creates a property with no backing field, dependents or initial value.
    pub fn new(kind: PropertyKind, declared_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            declared_type: declared_type.into(),
            property_name: name.into(),
            backing_field_name: None,
            kind,
            dependent_properties: Dependents::new(),
            initial_value: None,
        }
    }

    /// Sets the backing field name.
    #[must_use]
    pub fn with_backing_field(mut self, field: impl Into<String>) -> Self {
        self.backing_field_name = Some(field.into());
        self
    }

    /// Sets the dependent properties.
    #[must_use]
    pub fn with_dependents(mut self, dependents: Dependents) -> Self {
        self.dependent_properties = dependents;
        self
    }

    /// Sets the initial value.
    #[must_use]
    pub fn with_initial_value(mut self, value: Option<String>) -> Self {
        self.initial_value = value;
        self
    }
}

/// Outcome of classifying one candidate block.
///
/// Either a recognized [`Property`] or a [`RecognitionFailure`], never both.
/// The accessors mirror a flat record: on the failing variant every field
/// reads as absent or empty and only [`no_match_reason`] is set.
///
/// [`no_match_reason`]: PropertyDescriptor::no_match_reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyDescriptor {
    /// The block matched one of the known idioms.
    Recognized(Property),
    /// No idiom matched.
    NoMatch(RecognitionFailure),
}

impl PropertyDescriptor {
    /// Creates the failure descriptor.
    pub const fn no_match() -> Self {
        PropertyDescriptor::NoMatch(RecognitionFailure::new())
    }

    /// Returns `true` if the block was recognized.
    #[inline]
    pub const fn is_match(&self) -> bool {
        matches!(self, PropertyDescriptor::Recognized(_))
    }

    /// Returns the recognized property, if any.
    #[inline]
    pub const fn as_property(&self) -> Option<&Property> {
        match self {
            PropertyDescriptor::Recognized(p) => Some(p),
            PropertyDescriptor::NoMatch(_) => None,
        }
    }

    /// Converts into a `Result`.
    pub fn into_result(self) -> Result<Property, RecognitionFailure> {
        match self {
            PropertyDescriptor::Recognized(p) => Ok(p),
            PropertyDescriptor::NoMatch(f) => Err(f),
        }
    }

    /// Recognized idiom.
    pub fn kind(&self) -> Option<PropertyKind> {
        self.as_property().map(|p| p.kind)
    }

    /// Declared type, empty on failure.
    pub fn declared_type(&self) -> &str {
        self.as_property().map_or("", |p| p.declared_type.as_str())
    }

    /// Property name, empty on failure.
    pub fn property_name(&self) -> &str {
        self.as_property().map_or("", |p| p.property_name.as_str())
    }

    /// Backing field name.
    pub fn backing_field_name(&self) -> Option<&str> {
        self.as_property().and_then(|p| p.backing_field_name.as_deref())
    }

    /// Dependent properties, empty on failure.
    pub fn dependent_properties(&self) -> &[String] {
        self.as_property()
            .map(|p| p.dependent_properties.as_slice())
            .unwrap_or_default()
    }

    /// Field initializer text.
    pub fn initial_value(&self) -> Option<&str> {
        self.as_property().and_then(|p| p.initial_value.as_deref())
    }

    /// Explanation for a failed recognition.
    pub fn no_match_reason(&self) -> Option<&'static str> {
        match self {
            PropertyDescriptor::Recognized(_) => None,
            PropertyDescriptor::NoMatch(f) => Some(f.reason),
        }
    }
}

impl From<Property> for PropertyDescriptor {
    fn from(p: Property) -> Self {
        PropertyDescriptor::Recognized(p)
    }
}

impl From<RecognitionFailure> for PropertyDescriptor {
    fn from(f: RecognitionFailure) -> Self {
        PropertyDescriptor::NoMatch(f)
    }
}

impl fmt::Display for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyDescriptor::Recognized(p) => {
                write!(f, "{} {} {}", p.kind, p.declared_type, p.property_name)?;
                if let Some(field) = &p.backing_field_name {
                    write!(f, " field={}", field)?;
                }
                if let Some(value) = &p.initial_value {
                    write!(f, " init={}", value)?;
                }
                if !p.dependent_properties.is_empty() {
                    write!(f, " notifies=[{}]", p.dependent_properties.join(", "))?;
                }
                Ok(())
            }
            PropertyDescriptor::NoMatch(failure) => write!(f, "no match: {}", failure),
        }
    }
}

/// No known idiom matched the candidate text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct RecognitionFailure {
    /// Fixed explanation, identical for every failure.
    pub reason: &'static str,
}

impl RecognitionFailure {
    /// Creates the failure with the fixed explanation.
    pub const fn new() -> Self {
        Self {
            reason: NO_MATCH_REASON,
        }
    }
}

impl Default for RecognitionFailure {
    fn default() -> Self {
        Self::new()
    }
}

/// An emitter produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmissionSkipped {
    /// The descriptor handed to the emitter was a recognition failure.
    #[error("cannot emit an unrecognized property: {0}")]
    Unrecognized(#[from] RecognitionFailure),
    /// None of the candidate blocks could be converted.
    #[error("nothing converted ({blocks} candidate blocks examined)")]
    NothingConverted {
        /// Number of candidate blocks that were examined.
        blocks: usize,
    },
}

/// Conversion options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Drop repeated dependent property names, keeping the first occurrence.
    /// Default: false (duplicates are preserved in source order)
    pub dedupe_dependents: bool,
    /// Carry field initializers into the emitted declaration.
    /// Default: false
    pub keep_initial_values: bool,
    /// Spaces used for accessor lines inside an emitted full property.
    /// Default: 4
    pub body_indent: u8,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            dedupe_dependents: false,
            keep_initial_values: false,
            body_indent: 4,
        }
    }
}

impl ConvertConfig {
    /// Keeps initial values and collapses duplicate dependents.
    pub const fn preserving() -> Self {
        Self {
            dedupe_dependents: true,
            keep_initial_values: true,
            body_indent: 4,
        }
    }
}
