//! Configuration types deserialized from `vhdl.toml`.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// The top-level configuration parsed from `vhdl.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct VhdlConfig {
    /// Text emission settings.
    #[serde(default)]
    pub emit: EmitConfig,
}

/// Settings controlling how the IR is rendered as VHDL text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmitConfig {
    /// Number of spaces written per nesting level.
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
    /// Indent with one tab per level instead of spaces.
    #[serde(default)]
    pub use_tabs: bool,
    /// Comment lines written once at the top of an emitted design.
    ///
    /// Accepts either a single string or a list of strings.
    #[serde(default, deserialize_with = "deserialize_string_or_vec")]
    pub header: Vec<String>,
}

impl EmitConfig {
    /// The largest accepted `indent_width`.
    pub const MAX_INDENT_WIDTH: usize = 16;

    /// Returns the text written for a single indentation level.
    pub fn indent_unit(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.indent_width)
        }
    }
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            use_tabs: false,
            header: Vec::new(),
        }
    }
}

fn default_indent_width() -> usize {
    2
}

/// Deserializes a field that can be either a single string or a list of strings.
///
/// Allows `header = "generated"` as well as `header = ["line 1", "line 2"]`.
fn deserialize_string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(vec![v.to_string()])
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut vec = Vec::new();
            while let Some(val) = seq.next_element::<String>()? {
                vec.push(val);
            }
            Ok(vec)
        }
    }

    deserializer.deserialize_any(StringOrVec)
}
