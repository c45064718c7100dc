// src/layout/remap.rs
// =============================================================================
// Rewrites key codes inside playmap text.
//
// A playmap is an XML property list; key codes appear as
// <integer>N</integer>. We find every such field in a single pass and swap
// N through the substitution table. Doing it in one pass matters: AZERTY
// swaps Q<->A, and replacing pattern by pattern would turn 24 into 0 and
// then straight back into 24.
//
// Only fields whose text is exactly a table key are touched. Everything
// else, including odd spellings like <integer>024</integer>, is copied
// through byte for byte.
// =============================================================================

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use super::mappings::{substitution_table, Layout};

static INTEGER_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<integer>([0-9]+)</integer>").expect("valid integer-field pattern")
});

/// Returns `content` converted from the `from` layout to the `to` layout
pub fn modify_layout(content: &str, from: Layout, to: Layout) -> String {
    let table: HashMap<String, u16> = substitution_table(from, to)
        .into_iter()
        .map(|(original, replacement)| (original.to_string(), replacement))
        .collect();

    if table.is_empty() {
        return content.to_string();
    }

    let mut rewritten = 0usize;
    let result = INTEGER_FIELD.replace_all(content, |caps: &Captures| {
        match table.get(&caps[1]) {
            Some(replacement) => {
                rewritten += 1;
                format!("<integer>{}</integer>", replacement)
            }
            None => caps[0].to_string(),
        }
    });

    debug!(from = %from, to = %to, rewritten, "remapped key codes");
    result.into_owned()
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. What does Regex::replace_all take?
//    - Anything implementing Replacer, including a closure from &Captures to
//      a String. Returning caps[0] unchanged leaves a field alone.
//
// 2. Why a HashMap<String, u16>?
//    - We look fields up by their literal text, so "024" never matches 24
//
// 3. What is LazyLock?
//    - A static initialised on first use; the regex compiles once per process
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Layout; 3] = [Layout::Qwerty, Layout::Azerty, Layout::Qwertz];

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
	<key>buttonModels</key>
	<array>
		<dict>
			<key>keyCode</key>
			<integer>24</integer>
			<key>keyName</key>
			<string>Q</string>
		</dict>
		<dict>
			<key>keyCode</key>
			<integer>0</integer>
		</dict>
		<dict>
			<key>keyCode</key>
			<integer>28</integer>
		</dict>
		<dict>
			<key>keyCode</key>
			<integer>49</integer>
		</dict>
	</array>
</dict>
</plist>
"#;

    #[test]
    fn test_pattern_compiles() {
        assert!(INTEGER_FIELD.is_match("<integer>1</integer>"));
    }

    #[test]
    fn test_qwerty_to_azerty_example() {
        let out = modify_layout(
            "<integer>24</integer><integer>23</integer>",
            Layout::Qwerty,
            Layout::Azerty,
        );
        assert_eq!(out, "<integer>0</integer><integer>11</integer>");
    }

    #[test]
    fn test_swapped_keys_do_not_cancel_out() {
        let out = modify_layout(
            "<integer>24</integer><integer>0</integer>",
            Layout::Qwerty,
            Layout::Azerty,
        );
        assert_eq!(out, "<integer>0</integer><integer>24</integer>");
    }

    #[test]
    fn test_same_layout_is_identity() {
        for layout in ALL {
            assert_eq!(modify_layout(SAMPLE, layout, layout), SAMPLE);
        }
    }

    #[test]
    fn test_content_without_integers_is_unchanged() {
        let text = "<dict><key>keyName</key><string>Q</string></dict>";
        for from in ALL {
            for to in ALL {
                assert_eq!(modify_layout(text, from, to), text);
            }
        }
    }

    #[test]
    fn test_round_trip_through_qwerty() {
        for layout in [Layout::Azerty, Layout::Qwertz] {
            let converted = modify_layout(SAMPLE, Layout::Qwerty, layout);
            assert_ne!(converted, SAMPLE, "{} should change the sample", layout);
            let back = modify_layout(&converted, layout, Layout::Qwerty);
            assert_eq!(back, SAMPLE, "round trip through {}", layout);
        }
    }

    #[test]
    fn test_qwertz_swaps_y_and_z() {
        let out = modify_layout(
            "<integer>28</integer> <integer>44</integer> <integer>24</integer>",
            Layout::Qwerty,
            Layout::Qwertz,
        );
        assert_eq!(out, "<integer>44</integer> <integer>28</integer> <integer>24</integer>");
    }

    #[test]
    fn test_only_exact_literals_are_rewritten() {
        let text = "<integer>024</integer><integer>240</integer><integer>-24</integer><integer> 24</integer>";
        assert_eq!(modify_layout(text, Layout::Qwerty, Layout::Azerty), text);
    }

    #[test]
    fn test_surrounding_bytes_are_preserved() {
        let text = "before\r\n\t<integer>23</integer>\u{00e9}after";
        assert_eq!(
            modify_layout(text, Layout::Qwerty, Layout::Azerty),
            "before\r\n\t<integer>11</integer>\u{00e9}after"
        );
    }
}
