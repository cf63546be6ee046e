use serde::Deserialize;

pub const DEFAULT_KEYED_CLASS: &str = "table table-striped table-bordered table-hover";
pub const DEFAULT_TITLE: &str = "dump";

/// Render settings — parsed from TOML, every field optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// `class` attribute of tables rendered from keyed values.
    pub keyed_class: Option<String>,

    /// `class` attribute of tables rendered from arrays.
    pub rows_class: Option<String>,

    /// Maximum table nesting. `None` = unbounded.
    pub max_depth: Option<usize>,

    /// Indent nested elements, one element per line.
    pub pretty: bool,

    /// `<title>` of full documents.
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            keyed_class: Some(DEFAULT_KEYED_CLASS.to_string()),
            rows_class: None,
            max_depth: None,
            pretty: false,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl RenderOptions {
    /// Options with no table classes at all.
    pub fn plain() -> Self {
        Self {
            keyed_class: None,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let opts: RenderOptions = toml::from_str("").unwrap();
        assert_eq!(opts, RenderOptions::default());
    }

    #[test]
    fn partial_toml_overrides() {
        let opts: RenderOptions = toml::from_str("rows_class = \"grid\"\nmax_depth = 4\npretty = true\n").unwrap();
        assert_eq!(opts.rows_class.as_deref(), Some("grid"));
        assert_eq!(opts.max_depth, Some(4));
        assert!(opts.pretty);
        assert_eq!(opts.keyed_class.as_deref(), Some(DEFAULT_KEYED_CLASS));
        assert_eq!(opts.title, DEFAULT_TITLE);
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(toml::from_str::<RenderOptions>("colour = \"red\"").is_err());
    }
}
