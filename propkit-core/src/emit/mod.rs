//! Canonical emission.
//!
//! [`emit`] renders one classified block; [`emit_batch`] runs the whole
//! split → classify → emit pipeline over a selection:
//!
//! ```text
//! selection ──split──> blocks ──classify──> descriptors ──render──> text
//!                                              │ no match
//!                                              └──> dropped
//! ```
//!
//! Each converted block keeps the indentation it had in the selection and
//! the results are joined with one blank line.

pub mod render;

use propkit_types::{ConvertConfig, EmissionSkipped, PropertyDescriptor, Target};
use tracing::{debug, trace};

use crate::classify::Classifier;
use crate::text::layout::reindent;
use crate::text::splitter::blocks;

/// Renders descriptors into a target form.
#[derive(Debug, Clone, Copy, Default)]
pub struct Emitter {
    config: ConvertConfig,
}

impl Emitter {
    /// Creates an emitter with the given settings.
    pub const fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Renders one descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`EmissionSkipped::Unrecognized`] for a failure descriptor.
    pub fn emit(
        &self,
        target: Target,
        descriptor: &PropertyDescriptor,
    ) -> Result<String, EmissionSkipped> {
        let property = match descriptor {
            PropertyDescriptor::Recognized(p) => p,
            PropertyDescriptor::NoMatch(failure) => return Err((*failure).into()),
        };

        Ok(match target {
            Target::Auto => render::auto(property, &self.config),
            Target::Full => render::full(property, &self.config),
            Target::Observable => render::observable(property, &self.config),
        })
    }

    /// Converts every recognizable block of `text`.
    ///
    /// # Errors
    ///
    /// Returns [`EmissionSkipped::NothingConverted`] when no block could be
    /// classified.
    pub fn emit_batch(&self, target: Target, text: &str) -> Result<String, EmissionSkipped> {
        let classifier = Classifier::new(&self.config);
        let mut outputs = Vec::new();
        let mut examined = 0usize;

        for block in blocks(text) {
            examined += 1;
            let descriptor = classifier.classify(block.text);
            match self.emit(target, &descriptor) {
                Ok(rendered) => outputs.push(reindent(&rendered, block.indent)),
                Err(_) => trace!(index = examined - 1, "skipping unrecognized block"),
            }
        }

        debug!(
            %target,
            converted = outputs.len(),
            skipped = examined - outputs.len(),
            "batch emission finished"
        );

        if outputs.is_empty() {
            return Err(EmissionSkipped::NothingConverted { blocks: examined });
        }
        Ok(outputs.join("\n\n"))
    }
}

/// Renders one descriptor with the default configuration.
///
/// # Errors
///
/// Returns [`EmissionSkipped::Unrecognized`] for a failure descriptor.
#[inline]
pub fn emit(target: Target, descriptor: &PropertyDescriptor) -> Result<String, EmissionSkipped> {
    Emitter::default().emit(target, descriptor)
}

/// Converts every recognizable block of `text` with the default configuration.
///
/// ```
/// use propkit_core::emit::emit_batch;
/// use propkit_types::Target;
///
/// let out = emit_batch(Target::Auto, "[ObservableProperty]\nprivate int _count;").unwrap();
/// assert_eq!(out, "public int Count { get; set; }");
/// ```
///
/// # Errors
///
/// Returns [`EmissionSkipped::NothingConverted`] when no block could be
/// classified.
#[inline]
pub fn emit_batch(target: Target, text: &str) -> Result<String, EmissionSkipped> {
    Emitter::default().emit_batch(target, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    #[test]
    fn failure_descriptor_is_skipped() {
        let d = PropertyDescriptor::no_match();
        for target in Target::ALL {
            assert!(matches!(
                emit(target, &d),
                Err(EmissionSkipped::Unrecognized(_))
            ));
        }
    }

    #[test]
    fn emit_dispatches_on_target() {
        let d = classify("public int Count { get; set; }");
        assert_eq!(emit(Target::Auto, &d).unwrap(), "public int Count { get; set; }");
        assert!(emit(Target::Full, &d).unwrap().starts_with("private int _count;"));
        assert_eq!(
            emit(Target::Observable, &d).unwrap(),
            "[ObservableProperty]\nprivate int _count;"
        );
    }

    #[test]
    fn batch_two_autos_to_observable() {
        let text = "    public int A { get; set; }\n\n    public string B { get; set; }";
        assert_eq!(
            emit_batch(Target::Observable, text).unwrap(),
            "    [ObservableProperty]\n    private int _a;\n\n    [ObservableProperty]\n    private string _b;"
        );
    }

    #[test]
    fn batch_drops_unrecognized_blocks() {
        let text = "public int A { get; set; }\n\nnot a property\n\npublic int B { get; set; }";
        assert_eq!(
            emit_batch(Target::Auto, text).unwrap(),
            "public int A { get; set; }\n\npublic int B { get; set; }"
        );
    }

    #[test]
    fn batch_nothing_converted() {
        assert_eq!(
            emit_batch(Target::Auto, "foo\n\nbar"),
            Err(EmissionSkipped::NothingConverted { blocks: 2 })
        );
        assert_eq!(
            emit_batch(Target::Full, ""),
            Err(EmissionSkipped::NothingConverted { blocks: 0 })
        );
    }

    #[test]
    fn batch_reindents_multi_line_output() {
        let out = emit_batch(Target::Full, "\t\tpublic int Age { get; set; }").unwrap();
        for line in out.lines() {
            assert!(line.starts_with("\t\t"), "{line:?} not indented");
        }
        assert_eq!(out.lines().count(), 6);
    }

    #[test]
    fn batch_honours_config() {
        let text = "private int _age = 3;\npublic int Age\n{\n    get { return _age; }\n    set { _age = value; }\n}";
        let out = Emitter::new(ConvertConfig::preserving())
            .emit_batch(Target::Observable, text)
            .unwrap();
        assert_eq!(out, "[ObservableProperty]\nprivate int _age = 3;");
    }
}
