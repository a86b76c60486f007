use serde::{Deserialize, Serialize};

/// Knobs for a dissection. Passed by reference into every call, so two dissections with different
/// options can run side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DissectorOptions {
    /// How many structural levels may be entered before the rest is shown as raw bytes.
    pub max_depth: usize,
    /// Whether fields with unrecognized tags get an "Unknown field" item. The diagnostic is
    /// recorded either way.
    pub unknown_as_bytes: bool,
}

impl DissectorOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 32;
}

impl Default for DissectorOptions {
    fn default() -> Self {
        DissectorOptions {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            unknown_as_bytes: true,
        }
    }
}

#[cfg(test)]
mod test_options {
    use super::*;

    #[test]
    fn defaults() {
        let opts = DissectorOptions::default();
        assert_eq!(opts.max_depth, 32);
        assert!(opts.unknown_as_bytes);
    }

    #[test]
    fn missing_keys_take_defaults() {
        let opts: DissectorOptions = serde_json::from_str(r#"{"max_depth": 4}"#).unwrap();
        assert_eq!(opts.max_depth, 4);
        assert!(opts.unknown_as_bytes);

        let opts: DissectorOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, DissectorOptions::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let res = serde_json::from_str::<DissectorOptions>(r#"{"max_dpeth": 4}"#);
        assert!(res.is_err());
    }

    #[test]
    fn serializes_every_knob() {
        let json = serde_json::to_value(DissectorOptions::default()).unwrap();
        assert_eq!(json["max_depth"], 32);
        assert_eq!(json["unknown_as_bytes"], true);
    }
}
