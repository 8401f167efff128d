use serde_yaml::{Mapping, Value};

/// Recursively merge `overrides` onto `base`, returning a new mapping.
///
/// Keys where both sides hold mappings are merged key-by-key; any other
/// collision is won by the override value wholesale, so sequences and scalars
/// are replaced rather than combined. Neither input is mutated.
pub fn deep_merge(base: &Mapping, overrides: &Mapping) -> Mapping {
    let mut merged = base.clone();
    for (key, value) in overrides {
        let resolved = match (merged.get(key), value) {
            (Some(Value::Mapping(existing)), Value::Mapping(incoming)) => {
                Value::Mapping(deep_merge(existing, incoming))
            }
            _ => value.clone(),
        };
        merged.insert(key.clone(), resolved);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn inputs_are_not_mutated() {
        let base = mapping("app:\n  name: demo\n  port: 80\n");
        let overrides = mapping("app:\n  port: 8080\n");
        let base_snapshot = base.clone();
        let overrides_snapshot = overrides.clone();

        let _ = deep_merge(&base, &overrides);

        assert_eq!(base, base_snapshot);
        assert_eq!(overrides, overrides_snapshot);
    }

    #[test]
    fn nested_mappings_merge_recursively() {
        let base = mapping("docker:\n  registry:\n    host: local\n    port: 5000\n");
        let overrides = mapping("docker:\n  registry:\n    port: 5443\n");

        let merged = deep_merge(&base, &overrides);

        let expected =
            mapping("docker:\n  registry:\n    host: local\n    port: 5443\n");
        assert_eq!(merged, expected);
    }

    #[test]
    fn override_wins_for_non_mapping_values() {
        let base = mapping("app:\n  name: demo\nports: [80, 443]\n");
        let overrides = mapping("ports: [8080]\n");

        let merged = deep_merge(&base, &overrides);

        // Sequences are replaced, never concatenated.
        assert_eq!(merged.get("ports"), overrides.get("ports"));
        assert_eq!(merged.get("app"), base.get("app"));
    }

    #[test]
    fn mapping_replaced_by_scalar_override() {
        let base = mapping("installer:\n  steps:\n    count: 3\n");
        let overrides = mapping("installer: disabled\n");

        let merged = deep_merge(&base, &overrides);

        assert_eq!(merged.get("installer"), overrides.get("installer"));
    }

    #[test]
    fn keys_only_in_override_are_added() {
        let base = mapping("app: {}\n");
        let overrides = mapping("extra:\n  enabled: true\n");

        let merged = deep_merge(&base, &overrides);

        assert!(merged.contains_key("app"));
        assert_eq!(merged.get("extra"), overrides.get("extra"));
    }

    #[test]
    fn empty_override_returns_base() {
        let base = mapping("app:\n  name: demo\n");

        let merged = deep_merge(&base, &Mapping::new());

        assert_eq!(merged, base);
    }
}
