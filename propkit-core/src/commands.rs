//! Command construction rewriting.
//!
//! Turns `new Command(...)` constructions into relay commands and method
//! group arguments into lambdas:
//!
//! | before                                 | after                                              |
//! |----------------------------------------|----------------------------------------------------|
//! | `new Command(Save)`                    | `new RelayCommand(() => Save())`                   |
//! | `new Command<int>(Pick)`               | `new RelayCommand<int>(() => Pick())`              |
//! | `new AsyncRelayCommand(Load)`          | `new AsyncRelayCommand(async () => await Load())`  |
//! | `new AsyncRelayCommand<T>(async => X)` | `new AsyncRelayCommand<T>(async () => X)`          |
//!
//! Arguments that are already lambdas are left alone.

use std::sync::LazyLock;

use propkit_types::EmissionSkipped;
use regex::{Captures, Regex};
use tracing::debug;

static LEGACY_COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"new\s+Command\b(\s*<[^<>()]*>)?").expect("legacy command pattern"));

/// 1: `Async`, 2: generic arguments, 3: method name.
static METHOD_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"new\s+(Async)?RelayCommand(\s*<[^<>()]*>)?\(\s*([A-Za-z_][A-Za-z0-9_]*)\s*\)")
        .expect("method group pattern")
});

static BARE_ASYNC_LAMBDA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"new\s+AsyncRelayCommand(\s*<[^<>()]*>)?\(\s*async\s*=>").expect("async lambda pattern")
});

static ASYNC_PARAM_LAMBDA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"new\s+AsyncRelayCommand(\s*<[^<>()]*>)?\(\s*async\s*\(\s*([^()]*?)\s*\)\s*=>")
        .expect("async parameter pattern")
});

static CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)new\s+(?:(?:Async)?RelayCommand|Command)(?:\s*<.*?>)?\s*\(").expect("candidate pattern")
});

/// Returns `true` when `text` constructs a command that could be rewritten.
pub fn is_command_candidate(text: &str) -> bool {
    CANDIDATE.is_match(text)
}

/// Rewrites command constructions in `text`.
///
/// # Errors
///
/// Returns [`EmissionSkipped::NothingConverted`] when nothing changed.
pub fn rewrite_commands(text: &str) -> Result<String, EmissionSkipped> {
    let step = LEGACY_COMMAND.replace_all(text, "new RelayCommand$1");
    let step = wrap_method_groups(&step);
    let step = BARE_ASYNC_LAMBDA.replace_all(&step, "new AsyncRelayCommand$1(async () =>");
    let result = ASYNC_PARAM_LAMBDA.replace_all(&step, |caps: &Captures<'_>| {
        format!(
            "new AsyncRelayCommand{}(async ({}) =>",
            caps.get(1).map_or("", |m| m.as_str()),
            &caps[2]
        )
    });

    if result == text {
        return Err(EmissionSkipped::NothingConverted { blocks: 1 });
    }
    debug!(before = text.len(), after = result.len(), "rewrote command constructions");
    Ok(result.into_owned())
}

/// `new RelayCommand(Save)` -> `new RelayCommand(() => Save())`, unless the
/// closing parenthesis is followed by `=>`.
fn wrap_method_groups(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;

    for caps in METHOD_GROUP.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if text[whole.end()..].trim_start().starts_with("=>") {
            continue;
        }

        let generic = caps.get(2).map_or("", |m| m.as_str());
        let method = &caps[3];
        out.push_str(&text[last..whole.start()]);
        if caps.get(1).is_some() {
            out.push_str(&format!(
                "new AsyncRelayCommand{generic}(async () => await {method}())"
            ));
        } else {
            out.push_str(&format!("new RelayCommand{generic}(() => {method}())"));
        }
        last = whole.end();
    }

    out.push_str(&text[last..]);
    out
}
