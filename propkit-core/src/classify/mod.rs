//! Declaration classifier and component extractor.
//!
//! A candidate block is matched against an ordered list of rules (see
//! [`rules`]). The first rule that matches produces the
//! [`PropertyDescriptor`]; if none does, the descriptor carries the fixed
//! no-match explanation.
//!
//! Matching runs on a copy of the block with comments removed. Initializer
//! lookup by field name reads the block as selected.
//!
//! ```
//! use propkit_core::classify::classify;
//! use propkit_types::PropertyKind;
//!
//! let d = classify("public int Count { get; set; }");
//! assert_eq!(d.kind(), Some(PropertyKind::Auto));
//! assert_eq!(d.property_name(), "Count");
//! ```

pub mod extract;
pub(crate) mod patterns;
pub(crate) mod rules;

use memchr::memchr2;
use propkit_types::{ConvertConfig, PropertyDescriptor};
use tracing::{debug, trace};

use crate::text::strip_comments;
use rules::{Candidate, RULES};

/// Stateless classifier. Copy it freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    dedupe_dependents: bool,
}

impl Classifier {
    /// Creates a classifier honouring the extraction settings of `config`.
    pub const fn new(config: &ConvertConfig) -> Self {
        Self {
            dedupe_dependents: config.dedupe_dependents,
        }
    }

    /// Classifies one candidate block.
    pub fn classify(&self, text: &str) -> PropertyDescriptor {
        let stripped = strip_comments(text);
        let multiline = memchr2(b'\n', b'\r', stripped.as_bytes()).is_some();
        let candidate = Candidate {
            stripped: &stripped,
            original: text,
            dedupe: self.dedupe_dependents,
        };

        for rule in RULES.iter() {
            if rule.multiline_only && !multiline {
                continue;
            }
            if let Some(property) = (rule.extract)(&candidate) {
                debug!(
                    rule = rule.name,
                    kind = %property.kind,
                    property = %property.property_name,
                    "classified property block"
                );
                return property.into();
            }
        }

        trace!(len = text.len(), multiline, "no property pattern matched");
        PropertyDescriptor::no_match()
    }
}

/// Classifies one candidate block with the default configuration.
#[inline]
pub fn classify(text: &str) -> PropertyDescriptor {
    Classifier::default().classify(text)
}
