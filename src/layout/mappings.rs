// src/layout/mappings.rs
// =============================================================================
// Keyboard layouts and the key-code tables that translate between them.
//
// Playmap files store macOS virtual key codes. QWERTY is the baseline: a
// keymap written for QWERTY needs a few keys moved for AZERTY and QWERTZ.
// The tables are plain constant slices; nothing ever mutates them.
// =============================================================================

use std::fmt;

use clap::ValueEnum;

/// A keyboard layout a playmap can be written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Layout {
    Qwerty,
    Azerty,
    Qwertz,
}

impl Layout {
    pub fn name(self) -> &'static str {
        match self {
            Layout::Qwerty => "QWERTY",
            Layout::Azerty => "AZERTY",
            Layout::Qwertz => "QWERTZ",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// (QWERTY key code, key code on the target layout)
pub type KeyCodePair = (u16, u16);

const AZERTY_FROM_QWERTY: &[KeyCodePair] = &[
    (24, 0),  // Q -> A
    (23, 11), // W -> Z
    (0, 24),  // A -> Q
    (11, 23), // Z -> W
    (41, 41), // M -> ;
];

const QWERTZ_FROM_QWERTY: &[KeyCodePair] = &[
    (28, 44), // Y -> Z
    (44, 28), // Z -> Y
];

/// Table that converts a QWERTY playmap to `layout`. Empty for QWERTY.
pub fn forward_table(layout: Layout) -> &'static [KeyCodePair] {
    match layout {
        Layout::Qwerty => &[],
        Layout::Azerty => AZERTY_FROM_QWERTY,
        Layout::Qwertz => QWERTZ_FROM_QWERTY,
    }
}

/// Table that converts a `layout` playmap back to QWERTY
pub fn reverse_table(layout: Layout) -> Vec<KeyCodePair> {
    forward_table(layout)
        .iter()
        .map(|&(qwerty, other)| (other, qwerty))
        .collect()
}

/// Picks the pairs to apply when converting `from` -> `to`.
///
/// Converting to QWERTY undoes the source layout; any other target applies
/// that target's forward table.
pub fn substitution_table(from: Layout, to: Layout) -> Vec<KeyCodePair> {
    if from == to {
        Vec::new()
    } else if to == Layout::Qwerty {
        reverse_table(from)
    } else {
        forward_table(to).to_vec()
    }
}
