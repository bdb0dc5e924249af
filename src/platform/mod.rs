pub mod distance;

pub use distance::suggest_names;

use crate::config::PlatformEntry;

/// First platform whose name equals `name` exactly (case-sensitive).
pub fn find_by_name<'a>(platforms: &'a [PlatformEntry], name: &str) -> Option<&'a PlatformEntry> {
    platforms.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, model: &str) -> PlatformEntry {
        PlatformEntry {
            name: name.into(),
            model: model.into(),
            ..Default::default()
        }
    }

    #[test]
    fn finds_exact_match() {
        let platforms = vec![entry("platform1", "m1"), entry("platform2", "m2")];
        let found = find_by_name(&platforms, "platform2").expect("found");
        assert_eq!(found.model, "m2");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let platforms = vec![entry("Prod", "m1")];
        assert!(find_by_name(&platforms, "prod").is_none());
        assert!(find_by_name(&platforms, "Prod").is_some());
    }

    #[test]
    fn duplicate_names_resolve_to_first() {
        let platforms = vec![entry("prod", "first"), entry("prod", "second")];
        assert_eq!(find_by_name(&platforms, "prod").unwrap().model, "first");
    }

    #[test]
    fn missing_name_is_none() {
        assert!(find_by_name(&[entry("a", "m")], "nonexistent").is_none());
    }
}
