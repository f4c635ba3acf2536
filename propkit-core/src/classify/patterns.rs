//! Compiled declaration patterns.
//!
//! The `regex` crate has no backreferences. Where a pattern needs two
//! captures to name the same thing (field type vs. property type, getter
//! field vs. setter field) both are captured and compared by the rule.

use std::sync::LazyLock;

use regex::Regex;

/// Type expression as written: `int`, `List<string>`, `int?`, `Foo.Bar[]`.
const TYPE: &str = r"[\w<>,\[\]\.\?]+";

/// Member visibility.
const VIS: &str = r"(?:public|private|protected|internal)";

/// `[NotifyPropertyChangedFor(nameof(X))]` or `[NotifyPropertyChangedFor("X")]`.
const NOTIFY_FOR: &str =
    r#"\[NotifyPropertyChangedFor\s*\(\s*(?:nameof\s*\(\s*\w+\s*\)|"\w+")\s*\)\]"#;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

/// 1: leading dependency annotations, 2: trailing dependency annotations,
/// 3: type, 4: field name without `_`, 5: initializer.
pub(crate) static OBSERVABLE: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?s)((?:{NOTIFY_FOR}\s*)*)\[ObservableProperty\]\s*((?:{NOTIFY_FOR}\s*)*)private\s+({TYPE})\s+_(\w+)\s*(?:=\s*([^;]*?)\s*)?;"
    ))
});

/// Dependent name inside one dependency annotation.
pub(crate) static NOTIFY_FOR_NAME: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r#"\[NotifyPropertyChangedFor\s*\(\s*(?:nameof\s*\(\s*(\w+)\s*\)|"(\w+)")\s*\)\]"#,
    )
});

/// 1: type, 2: name.
pub(crate) static AUTO: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?s){VIS}\s+({TYPE})\s+(\w+)\s*\{{\s*(?:get;\s*set;|set;\s*get;)\s*\}}"
    ))
});

/// 1: field type, 2: field name, 3: initializer, 4: property type,
/// 5: property name, 6: field returned by the getter, 7: setter body.
pub(crate) static BACKED: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?s)({TYPE})\s+(\w+)(?:\s*=\s*([^;]*))?;\s*{VIS}\s+({TYPE})\s+(\w+)\s*\{{[^}}]*get\s*\{{\s*return\s+(\w+);\s*\}}[^}}]*set\s*\{{([^}}]*)\}}\s*\}}"
    ))
});

/// Setter body that only assigns and raises a bare notification.
/// 1: assigned field, 2: notification call.
pub(crate) static SETTER_NOTIFY: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^\s*(\w+)\s*=\s*value;\s*(RaisePropertyChanged|OnPropertyChanged)\s*\(\s*\)\s*;?\s*$",
    )
});

/// 1: type, 2: name, 3: getter field, 4: field passed to `SetProperty`.
pub(crate) static EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?s){VIS}\s+({TYPE})\s+(\w+)\s*\{{\s*get\s*=>\s*(\w+);\s*set\s*=>\s*SetProperty\s*\(\s*ref\s+(\w+)\s*,\s*value\s*\)\s*;\s*\}}"
    ))
});

/// 1: type, 2: name, 3: getter field, 4: setter field, 5: notification call.
pub(crate) static NOTIFY_BACKED: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?s){VIS}\s+({TYPE})\s+(\w+)\s*\{{\s*get\s*\{{\s*return\s+(\w+);\s*\}}\s*set\s*\{{\s*(\w+)\s*=\s*value;\s*(RaisePropertyChanged|OnPropertyChanged)\s*\(\s*\)\s*;?\s*\}}\s*\}}"
    ))
});

/// 1: type, 2: name, 3: setter body.
///
/// The getter may be `get;`, `get => expr;` or a brace block without nested
/// braces.
pub(crate) static FULL: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?s){VIS}\s+({TYPE})\s+(\w+)\s*\{{[^{{}}]*?\bget\s*(?:\{{[^{{}}]*\}}|=>[^;{{}}]*;|;)[^{{}}]*?\bset\s*\{{([^{{}}]*)\}}[^{{}}]*\}}"
    ))
});

/// `OnPropertyChanged(nameof(X))` or `OnPropertyChanged("X")`.
pub(crate) static DEPENDENT: LazyLock<Regex> = LazyLock::new(|| {
    compile(r#"OnPropertyChanged\s*\(\s*(?:nameof\s*\(\s*(\w+)\s*\)|"(\w+)")\s*\)"#)
});

/// Field declaration with initializer. 1: name, 2: value.
///
/// The first value character rules out `==` and `=>`.
pub(crate) static FIELD_INIT: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(r"{TYPE}\s+(\w+)\s*=([^=>;][^;]*);"))
});
