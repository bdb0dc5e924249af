use thiserror::Error;

/// Sample invocations shown when a platform has to be named explicitly.
const EXPLICIT_EXAMPLES: &str = "  ccgate -p production --continue\n  ccgate -p staging chat \"hello\"";

#[derive(Error, Debug)]
pub enum GateError {
    #[error("no platforms configured\nRun 'ccgate add' to add one")]
    NoPlatformsConfigured,

    #[error("{}", not_found_message(.name, .suggestions))]
    PlatformNotFound {
        name: String,
        suggestions: Vec<String>,
    },

    #[error("{}", interaction_required_message(.platform_names, .args))]
    InteractionRequired {
        platform_names: Vec<String>,
        args: Vec<String>,
    },

    #[error("launch cancelled")]
    SelectionCancelled,

    /// Ctrl-C (or an aborted picker) during an interactive step.
    #[error("aborted by user")]
    UserAborted,

    #[error("terminal io error: {0}")]
    Io(#[from] std::io::Error),
}

fn not_found_message(name: &str, suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return format!(
            "platform '{}' not found\nRun 'ccgate list' to see all platforms",
            name
        );
    }
    format!(
        "platform '{}' not found\n\nDid you mean one of these?\n  - {}\n\nRun 'ccgate list' to see all platforms",
        name,
        suggestions.join("\n  - ")
    )
}

fn interaction_required_message(platform_names: &[String], args: &[String]) -> String {
    let listed: Vec<String> = platform_names
        .iter()
        .map(|name| format!("  - {}", name))
        .collect();

    let mut example = String::from("ccgate -p <platform>");
    if !args.is_empty() {
        example.push(' ');
        example.push_str(&args.join(" "));
    }

    format!(
        "{} platforms configured but this session cannot prompt for a choice\n\n\
         Available platforms:\n{}\n\n\
         Name one with -p/--platform:\n  {}\n\n\
         Examples:\n{}",
        platform_names.len(),
        listed.join("\n"),
        example,
        EXPLICIT_EXAMPLES
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_lists_suggestions_in_order() {
        let err = GateError::PlatformNotFound {
            name: "production".into(),
            suggestions: vec!["prod".into(), "staging".into()],
        };
        let msg = err.to_string();
        let prod = msg.find("  - prod").expect("prod listed");
        let staging = msg.find("  - staging").expect("staging listed");
        assert!(prod < staging);
        assert!(msg.contains("ccgate list"));
    }

    #[test]
    fn not_found_without_suggestions_skips_hint_block() {
        let err = GateError::PlatformNotFound {
            name: "x".into(),
            suggestions: vec![],
        };
        assert!(!err.to_string().contains("Did you mean"));
    }

    #[test]
    fn interaction_required_carries_args_in_example() {
        let err = GateError::InteractionRequired {
            platform_names: vec!["a".into(), "b".into()],
            args: vec!["--continue".into()],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("2 platforms configured"));
        assert!(msg.contains("  - a\n  - b"));
        assert!(msg.contains("ccgate -p <platform> --continue"));
    }
}
