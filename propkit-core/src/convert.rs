//! Public API: the [`Converter`] facade and the convertibility probes.

use propkit_types::{ConvertConfig, EmissionSkipped, PropertyDescriptor, Target};

use crate::classify::Classifier;
use crate::emit::Emitter;
use crate::text::splitter::{split, Blocks};

/// Split, classify and emit under one configuration.
///
/// Holds no state besides its configuration, so one value can serve any
/// number of threads.
///
/// # Examples
///
/// ```
/// use propkit_core::Converter;
/// use propkit_types::{ConvertConfig, Target};
///
/// let converter = Converter::new(ConvertConfig::preserving());
/// let d = converter.classify("[ObservableProperty]\nprivate int _count = 1;");
/// assert_eq!(
///     converter.emit(Target::Auto, &d).unwrap(),
///     "public int Count { get; set; } = 1;"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    config: ConvertConfig,
    classifier: Classifier,
    emitter: Emitter,
}

impl Converter {
    /// Creates a converter with the given settings.
    pub const fn new(config: ConvertConfig) -> Self {
        Self {
            config,
            classifier: Classifier::new(&config),
            emitter: Emitter::new(config),
        }
    }

    /// Settings in use.
    #[inline]
    pub const fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Splits a selection into trimmed candidate blocks.
    #[inline]
    pub fn split<'t>(&self, text: &'t str) -> Blocks<'t> {
        split(text)
    }

    /// Classifies one candidate block.
    #[inline]
    pub fn classify(&self, text: &str) -> PropertyDescriptor {
        self.classifier.classify(text)
    }

    /// Renders one descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`EmissionSkipped::Unrecognized`] for a failure descriptor.
    #[inline]
    pub fn emit(
        &self,
        target: Target,
        descriptor: &PropertyDescriptor,
    ) -> Result<String, EmissionSkipped> {
        self.emitter.emit(target, descriptor)
    }

    /// Converts every recognizable block of a selection.
    ///
    /// # Errors
    ///
    /// Returns [`EmissionSkipped::NothingConverted`] when no block converts.
    #[inline]
    pub fn emit_batch(&self, target: Target, text: &str) -> Result<String, EmissionSkipped> {
        self.emitter.emit_batch(target, text)
    }

    /// Returns `true` if at least one block of `text` is a recognizable
    /// property.
    pub fn is_convertible(&self, text: &str) -> bool {
        split(text).any(|block| self.classify(block).is_match())
    }
}

/// Returns `true` if at least one block of `text` is a recognizable property.
///
/// Hosts use this to decide whether to offer a conversion at all.
#[inline]
pub fn is_convertible(text: &str) -> bool {
    Converter::default().is_convertible(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convertible_when_any_block_matches() {
        assert!(is_convertible("junk\n\npublic int A { get; set; }"));
        assert!(!is_convertible("junk\n\nmore junk"));
        assert!(!is_convertible(""));
    }

    #[test]
    fn facade_matches_free_functions() {
        let c = Converter::default();
        let text = "public int A { get; set; }\n\npublic int B { get; set; }";
        assert_eq!(
            c.emit_batch(Target::Full, text),
            crate::emit::emit_batch(Target::Full, text)
        );
        assert_eq!(c.split(text).count(), 2);
    }

    #[test]
    fn converter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Converter>();
    }

    #[test]
    fn config_is_exposed() {
        let c = Converter::new(ConvertConfig::preserving());
        assert!(c.config().keep_initial_values);
    }
}
