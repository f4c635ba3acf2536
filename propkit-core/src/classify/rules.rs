//! Ordered recognition rules.
//!
//! Rules are tried top to bottom and the first one that extracts a property
//! wins. The order is a priority: an observable field with a full property
//! below it is an observable field, a backed property is reported before the
//! generic full-property fallback gets a chance.

use propkit_types::{Dependents, Property, PropertyKind};

use super::extract::{annotated_dependents, initial_value, notified_dependents};
use super::patterns::{AUTO, BACKED, EXPRESSION, FULL, NOTIFY_BACKED, OBSERVABLE, SETTER_NOTIFY};
use crate::text::layout::title_case;

/// Text handed to every rule.
pub(crate) struct Candidate<'a> {
    /// Block with comments removed; all matching runs on this.
    pub stripped: &'a str,
    /// Block as selected, for initializer lookup by field name.
    pub original: &'a str,
    pub dedupe: bool,
}

/// One `(matcher, extractor)` pair.
pub(crate) struct Rule {
    pub name: &'static str,
    /// Only tried when the stripped block spans several lines.
    pub multiline_only: bool,
    pub extract: fn(&Candidate<'_>) -> Option<Property>,
}

pub(crate) static RULES: [Rule; 7] = [
    Rule {
        name: "observable",
        multiline_only: false,
        extract: observable,
    },
    Rule {
        name: "auto",
        multiline_only: false,
        extract: auto,
    },
    Rule {
        name: "field-backed",
        multiline_only: true,
        extract: field_backed,
    },
    Rule {
        name: "expression-bodied",
        multiline_only: true,
        extract: expression_bodied,
    },
    Rule {
        name: "prism",
        multiline_only: true,
        extract: prism,
    },
    Rule {
        name: "notify",
        multiline_only: true,
        extract: notify,
    },
    Rule {
        name: "full",
        multiline_only: true,
        extract: full,
    },
];

fn observable(c: &Candidate<'_>) -> Option<Property> {
    let caps = OBSERVABLE.captures(c.stripped)?;
    let tail = &caps[4];
    let name = title_case(tail);
    let deps = annotated_dependents(
        [caps.get(1), caps.get(2)].into_iter().flatten().map(|m| m.as_str()),
        &name,
        c.dedupe,
    );
    let init = caps
        .get(5)
        .map(|m| m.as_str().trim())
        .filter(|v| !v.is_empty())
        .map(str::to_owned);

    Some(
        Property::new(PropertyKind::Observable, &caps[3], name)
            .with_backing_field(format!("_{tail}"))
            .with_dependents(deps)
            .with_initial_value(init),
    )
}

fn auto(c: &Candidate<'_>) -> Option<Property> {
    let caps = AUTO.captures(c.stripped)?;
    Some(Property::new(PropertyKind::Auto, &caps[1], &caps[2]))
}

fn field_backed(c: &Candidate<'_>) -> Option<Property> {
    // The property must have the field's type; keep looking past mismatches.
    let caps = BACKED
        .captures_iter(c.stripped)
        .find(|caps| caps[1] == caps[4])?;

    let name = &caps[5];
    let field = &caps[6];
    let setter = &caps[7];

    let kind = match SETTER_NOTIFY.captures(setter) {
        Some(s) if &s[1] == field && &s[2] == "RaisePropertyChanged" => {
            PropertyKind::PrismFullWithBacking
        }
        Some(s) if &s[1] == field => PropertyKind::NotifyFullWithBacking,
        _ => PropertyKind::FullWithBacking,
    };
    let init = caps
        .get(3)
        .map(|m| m.as_str().trim())
        .filter(|v| !v.is_empty())
        .map(str::to_owned);

    Some(
        Property::new(kind, &caps[4], name)
            .with_backing_field(field)
            .with_dependents(notified_dependents(setter, name, c.dedupe))
            .with_initial_value(init),
    )
}

fn expression_bodied(c: &Candidate<'_>) -> Option<Property> {
    let caps = EXPRESSION.captures(c.stripped)?;
    let field = &caps[3];

    Some(
        Property::new(PropertyKind::FullWithBacking, &caps[1], &caps[2])
            .with_backing_field(field)
            .with_initial_value(initial_value(c.original, field)),
    )
}

fn prism(c: &Candidate<'_>) -> Option<Property> {
    notifying(c, "RaisePropertyChanged", PropertyKind::PrismFullWithBacking)
}

fn notify(c: &Candidate<'_>) -> Option<Property> {
    notifying(c, "OnPropertyChanged", PropertyKind::NotifyFullWithBacking)
}

/// Getter returns a field, setter assigns the same field and raises `call()`.
fn notifying(c: &Candidate<'_>, call: &str, kind: PropertyKind) -> Option<Property> {
    let caps = NOTIFY_BACKED
        .captures_iter(c.stripped)
        .find(|caps| caps[3] == caps[4] && &caps[5] == call)?;
    let field = &caps[3];

    Some(
        Property::new(kind, &caps[1], &caps[2])
            .with_backing_field(field)
            .with_initial_value(initial_value(c.original, field)),
    )
}

fn full(c: &Candidate<'_>) -> Option<Property> {
    let caps = FULL.captures(c.stripped)?;
    let name = &caps[2];
    let deps: Dependents = notified_dependents(&caps[3], name, c.dedupe);

    Some(Property::new(PropertyKind::Full, &caps[1], name).with_dependents(deps))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(rule: &str, text: &str) -> Option<Property> {
        let rule = RULES
            .iter()
            .find(|r| r.name == rule)
            .expect("known rule");
        (rule.extract)(&Candidate {
            stripped: text,
            original: text,
            dedupe: false,
        })
    }

    #[test]
    fn rule_order_is_fixed() {
        let names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            ["observable", "auto", "field-backed", "expression-bodied", "prism", "notify", "full"]
        );
    }

    #[test]
    fn only_first_two_rules_run_on_single_lines() {
        assert!(!RULES[0].multiline_only);
        assert!(!RULES[1].multiline_only);
        assert!(RULES[2..].iter().all(|r| r.multiline_only));
    }

    #[test]
    fn observable_synthesizes_name() {
        let p = run("observable", "[ObservableProperty]\nprivate string _firstName;").expect("match");
        assert_eq!(p.property_name, "FirstName");
        assert_eq!(p.backing_field_name.as_deref(), Some("_firstName"));
        assert_eq!(p.declared_type, "string");
    }

    #[test]
    fn observable_requires_underscore() {
        assert!(run("observable", "[ObservableProperty]\nprivate string firstName;").is_none());
    }

    #[test]
    fn observable_reads_annotations_and_initializer() {
        let p = run(
            "observable",
            "[ObservableProperty]\n[NotifyPropertyChangedFor(nameof(FullName))]\nprivate string _first = \"Ada\";",
        )
        .expect("match");
        assert_eq!(p.dependent_properties.as_slice(), ["FullName"]);
        assert_eq!(p.initial_value.as_deref(), Some("\"Ada\""));
    }

    #[test]
    fn auto_either_accessor_order() {
        assert!(run("auto", "public int A { get; set; }").is_some());
        assert!(run("auto", "internal int A {set;get;}").is_some());
        assert!(run("auto", "public int A { get; }").is_none());
    }

    #[test]
    fn field_backed_uses_getter_reference() {
        let p = run(
            "field-backed",
            "private int _count = 3;\npublic int Count\n{\n    get { return _count; }\n    set { _count = value; Save(); }\n}",
        )
        .expect("match");
        assert_eq!(p.kind, PropertyKind::FullWithBacking);
        assert_eq!(p.backing_field_name.as_deref(), Some("_count"));
        assert_eq!(p.initial_value.as_deref(), Some("3"));
    }

    #[test]
    fn field_backed_getter_wins_over_declaration() {
        let p = run(
            "field-backed",
            "private int _count;\npublic int Count\n{\n    get { return count; }\n    set { count = value; }\n}",
        )
        .expect("match");
        assert_eq!(p.backing_field_name.as_deref(), Some("count"));
    }

    #[test]
    fn field_backed_requires_same_type() {
        assert!(run(
            "field-backed",
            "private int _count;\npublic long Count\n{\n    get { return _count; }\n    set { _count = value; }\n}",
        )
        .is_none());
    }

    #[test]
    fn field_backed_refines_prism_setter() {
        let p = run(
            "field-backed",
            "private string _title;\npublic string Title\n{\n    get { return _title; }\n    set { _title = value; RaisePropertyChanged(); }\n}",
        )
        .expect("match");
        assert_eq!(p.kind, PropertyKind::PrismFullWithBacking);
    }

    #[test]
    fn notifying_requires_same_field() {
        let text = "public int Age\n{\n    get { return _age; }\n    set { _other = value; OnPropertyChanged(); }\n}";
        assert!(run("notify", text).is_none());
        assert!(run("prism", text).is_none());
    }

    #[test]
    fn prism_and_notify_are_distinct() {
        let text = "public int Age\n{\n    get { return _age; }\n    set { _age = value; RaisePropertyChanged(); }\n}";
        assert!(run("notify", text).is_none());
        assert_eq!(run("prism", text).expect("match").kind, PropertyKind::PrismFullWithBacking);
    }

    #[test]
    fn full_accepts_block_getter() {
        let p = run(
            "full",
            "public string Name\n{\n    get { return _name; }\n    set { _name = value; OnPropertyChanged(nameof(Greeting)); }\n}",
        )
        .expect("match");
        assert_eq!(p.kind, PropertyKind::Full);
        assert_eq!(p.backing_field_name, None);
        assert_eq!(p.dependent_properties.as_slice(), ["Greeting"]);
    }

    #[test]
    fn full_accepts_expression_getter() {
        let p = run(
            "full",
            "public bool Ready\n{\n    get => _ready;\n    private set { _ready = value; }\n}",
        )
        .expect("match");
        assert_eq!(p.property_name, "Ready");
    }
}
