//! Renderers for the three target forms.
//!
//! Renderers see only recognized properties and never indent their output;
//! batch emission applies block indentation afterwards.

use core::fmt::Write;

use propkit_types::{ConvertConfig, Property};

use crate::text::layout::field_name_for;

/// `public <type> <name> { get; set; }`
pub fn auto(p: &Property, config: &ConvertConfig) -> String {
    let mut out = format!("public {} {} {{ get; set; }}", p.declared_type, p.property_name);
    if let Some(value) = initial_value(p, config) {
        let _ = write!(out, " = {};", value);
    }
    out
}

/// Backing field plus a property whose setter calls `SetProperty`.
///
/// Reuses the recognized backing field when there is one.
pub fn full(p: &Property, config: &ConvertConfig) -> String {
    let field = p
        .backing_field_name
        .clone()
        .unwrap_or_else(|| field_name_for(&p.property_name));
    let pad = " ".repeat(config.body_indent as usize);

    let mut out = String::with_capacity(128);
    let _ = write!(out, "private {} {}", p.declared_type, field);
    push_initializer(&mut out, p, config);
    let _ = write!(
        out,
        ";\npublic {ty} {name}\n{{\n{pad}get => {field};\n{pad}set => SetProperty(ref {field}, value);\n}}",
        ty = p.declared_type,
        name = p.property_name,
    );
    out
}

/// `[ObservableProperty]` field, one `[NotifyPropertyChangedFor]` per
/// dependent.
///
/// The field name is always derived from the property name.
pub fn observable(p: &Property, config: &ConvertConfig) -> String {
    let mut out = String::from("[ObservableProperty]\n");
    for dep in &p.dependent_properties {
        let _ = writeln!(out, "[NotifyPropertyChangedFor(nameof({}))]", dep);
    }
    let _ = write!(
        out,
        "private {} {}",
        p.declared_type,
        field_name_for(&p.property_name)
    );
    push_initializer(&mut out, p, config);
    out.push(';');
    out
}

fn initial_value<'p>(p: &'p Property, config: &ConvertConfig) -> Option<&'p str> {
    if config.keep_initial_values {
        p.initial_value.as_deref()
    } else {
        None
    }
}

fn push_initializer(out: &mut String, p: &Property, config: &ConvertConfig) {
    if let Some(value) = initial_value(p, config) {
        out.push_str(" = ");
        out.push_str(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use propkit_types::{Dependents, PropertyKind};

    fn name() -> Property {
        let mut deps = Dependents::new();
        deps.push("DisplayName".to_owned());
        deps.push("Initials".to_owned());
        Property::new(PropertyKind::Full, "string", "Name").with_dependents(deps)
    }

    #[test]
    fn auto_is_always_public() {
        let p = Property::new(PropertyKind::Auto, "int", "Count");
        assert_eq!(auto(&p, &ConvertConfig::default()), "public int Count { get; set; }");
    }

    #[test]
    fn auto_with_initializer() {
        let p = Property::new(PropertyKind::Observable, "int", "Count")
            .with_initial_value(Some("5".to_owned()));
        assert_eq!(auto(&p, &ConvertConfig::default()), "public int Count { get; set; }");
        assert_eq!(
            auto(&p, &ConvertConfig::preserving()),
            "public int Count { get; set; } = 5;"
        );
    }

    #[test]
    fn full_synthesizes_field() {
        let p = Property::new(PropertyKind::Auto, "int", "Age");
        assert_eq!(
            full(&p, &ConvertConfig::default()),
            "private int _age;\npublic int Age\n{\n    get => _age;\n    set => SetProperty(ref _age, value);\n}"
        );
    }

    #[test]
    fn full_keeps_recognized_field() {
        let p = Property::new(PropertyKind::FullWithBacking, "bool", "IsBusy").with_backing_field("isBusy");
        let out = full(&p, &ConvertConfig::default());
        assert!(out.starts_with("private bool isBusy;\n"));
        assert!(out.contains("SetProperty(ref isBusy, value)"));
    }

    #[test]
    fn full_body_indent() {
        let p = Property::new(PropertyKind::Auto, "int", "Age");
        let config = ConvertConfig {
            body_indent: 2,
            ..Default::default()
        };
        assert!(full(&p, &config).contains("\n  get => _age;\n  set =>"));
    }

    #[test]
    fn observable_lists_dependents() {
        assert_eq!(
            observable(&name(), &ConvertConfig::default()),
            "[ObservableProperty]\n[NotifyPropertyChangedFor(nameof(DisplayName))]\n[NotifyPropertyChangedFor(nameof(Initials))]\nprivate string _name;"
        );
    }

    #[test]
    fn observable_normalizes_field_name() {
        let p = Property::new(PropertyKind::FullWithBacking, "int", "Age").with_backing_field("m_age");
        assert_eq!(
            observable(&p, &ConvertConfig::default()),
            "[ObservableProperty]\nprivate int _age;"
        );
    }

    #[test]
    fn observable_with_initializer() {
        let p = Property::new(PropertyKind::FullWithBacking, "int", "Age")
            .with_initial_value(Some("18".to_owned()));
        assert_eq!(
            observable(&p, &ConvertConfig::preserving()),
            "[ObservableProperty]\nprivate int _age = 18;"
        );
    }
}
