//! Component extraction: dependent properties and initial values.

use propkit_types::Dependents;
use rustc_hash::FxHashSet;

use super::patterns::{DEPENDENT, FIELD_INIT, NOTIFY_FOR_NAME};

/// Collects the names passed to `OnPropertyChanged(nameof(X))` or
/// `OnPropertyChanged("X")` in `setter`, left to right.
///
/// `own` is never reported. With `dedupe` only the first occurrence of a
/// name is kept.
pub fn notified_dependents(setter: &str, own: &str, dedupe: bool) -> Dependents {
    let names = DEPENDENT
        .captures_iter(setter)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str());
    collect(names, own, dedupe)
}

/// Collects the names in `[NotifyPropertyChangedFor(...)]` annotations.
pub fn annotated_dependents<'t>(
    annotations: impl IntoIterator<Item = &'t str>,
    own: &str,
    dedupe: bool,
) -> Dependents {
    let names = annotations.into_iter().flat_map(|text| {
        NOTIFY_FOR_NAME
            .captures_iter(text)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str())
    });
    collect(names, own, dedupe)
}

fn collect<'t>(names: impl Iterator<Item = &'t str>, own: &str, dedupe: bool) -> Dependents {
    let mut out = Dependents::new();
    let mut seen = FxHashSet::default();

    for name in names {
        if name.is_empty() || name == own {
            continue;
        }
        if dedupe && !seen.insert(name) {
            continue;
        }
        out.push(name.to_owned());
    }
    out
}

/// Finds the initializer of the field declaration named `field`.
///
/// `text` is the original block, comments included. Assignments inside
/// accessors (`_age = value;`) are not declarations and are skipped.
pub fn initial_value(text: &str, field: &str) -> Option<String> {
    FIELD_INIT
        .captures_iter(text)
        .find(|caps| &caps[1] == field)
        .map(|caps| caps[2].trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nameof_and_string_forms() {
        let deps = notified_dependents(
            r#"_a = value; OnPropertyChanged(nameof(B)); OnPropertyChanged("C");"#,
            "A",
            false,
        );
        assert_eq!(deps.as_slice(), ["B", "C"]);
    }

    #[test]
    fn own_name_is_excluded() {
        let deps = notified_dependents(
            "Name = value; OnPropertyChanged(); OnPropertyChanged(nameof(Name)); OnPropertyChanged(nameof(DisplayName));",
            "Name",
            false,
        );
        assert_eq!(deps.as_slice(), ["DisplayName"]);
    }

    #[test]
    fn bare_call_yields_nothing() {
        assert!(notified_dependents("x = value; OnPropertyChanged();", "X", false).is_empty());
    }

    #[test]
    fn duplicates_preserved_by_default() {
        let setter = "OnPropertyChanged(nameof(B)); OnPropertyChanged(nameof(C)); OnPropertyChanged(nameof(B));";
        assert_eq!(notified_dependents(setter, "A", false).as_slice(), ["B", "C", "B"]);
        assert_eq!(notified_dependents(setter, "A", true).as_slice(), ["B", "C"]);
    }

    #[test]
    fn whitespace_inside_call() {
        let deps = notified_dependents("OnPropertyChanged ( nameof ( Total ) );", "A", false);
        assert_eq!(deps.as_slice(), ["Total"]);
    }

    #[test]
    fn other_notification_helpers_ignored() {
        assert!(notified_dependents("RaisePropertyChanged(nameof(B));", "A", false).is_empty());
    }

    #[test]
    fn annotations_in_order() {
        let deps = annotated_dependents(
            [
                "[NotifyPropertyChangedFor(nameof(FullName))]\n",
                "[NotifyPropertyChangedFor(\"Initials\")]",
            ],
            "FirstName",
            false,
        );
        assert_eq!(deps.as_slice(), ["FullName", "Initials"]);
    }

    #[test]
    fn initial_value_from_declaration() {
        let text = "private int _age = 18; // adult\npublic int Age { get => _age; }";
        assert_eq!(initial_value(text, "_age").as_deref(), Some("18"));
    }

    #[test]
    fn initial_value_ignores_setter_assignment() {
        let text = "public int Age\n{\n    get { return _age; }\n    set { _age = value; RaisePropertyChanged(); }\n}";
        assert_eq!(initial_value(text, "_age"), None);
    }

    #[test]
    fn initial_value_matches_exact_name() {
        let text = "private int _ages = 3;\nprivate int _age = 4;";
        assert_eq!(initial_value(text, "_age").as_deref(), Some("4"));
    }

    #[test]
    fn initial_value_with_constructor_call() {
        let text = "private ObservableCollection<string> _items = new ObservableCollection<string>();";
        assert_eq!(
            initial_value(text, "_items").as_deref(),
            Some("new ObservableCollection<string>()")
        );
    }
}
