//! Fixed capability policy for the embedded game frame.
//!
//! The policy is the minimum capability set typical embedded games need
//! while still denying navigation of the parent context. It is the same
//! for every entry.

/// Tokens for the frame's `sandbox` attribute.
pub const SANDBOX_TOKENS: &[&str] = &[
    "allow-scripts",
    "allow-same-origin",
    "allow-forms",
    "allow-popups",
    "allow-pointer-lock",
];

/// Capabilities for the frame's `allow` attribute.
pub const ALLOW_FEATURES: &[&str] = &[
    "accelerometer",
    "autoplay",
    "clipboard-write",
    "encrypted-media",
    "gyroscope",
    "picture-in-picture",
    "fullscreen",
];

/// Value for the frame's `sandbox` attribute.
pub fn sandbox_attr() -> String {
    SANDBOX_TOKENS.join(" ")
}

/// Value for the frame's `allow` attribute.
pub fn allow_attr() -> String {
    ALLOW_FEATURES.join("; ")
}
