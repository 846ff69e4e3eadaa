//! Color constants for the neon-noir palette.

// === BACKGROUND ===
pub const NIGHT: &str = "#08080c";
pub const NIGHT_CARD: &str = "#111118";
pub const NIGHT_BORDER: &str = "#23232e";
pub const NIGHT_INPUT: &str = "#16161f";

// === NEON (Brand accent, links, badges) ===
pub const NEON: &str = "#ff2d78";
pub const NEON_GLOW: &str = "0 0 12px rgba(255, 45, 120, 0.45)";
pub const NEON_GLOW_STRONG: &str = "0 0 24px rgba(255, 45, 120, 0.7)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f2f0f5";
pub const TEXT_MUTED: &str = "rgba(242, 240, 245, 0.55)";
pub const TEXT_ON_NEON: &str = "#08080c";

/// Palette as (custom property, value) pairs, in declaration order
pub const PALETTE: &[(&str, &str)] = &[
    ("--night", NIGHT),
    ("--night-card", NIGHT_CARD),
    ("--night-border", NIGHT_BORDER),
    ("--night-input", NIGHT_INPUT),
    ("--neon", NEON),
    ("--neon-glow", NEON_GLOW),
    ("--neon-glow-strong", NEON_GLOW_STRONG),
    ("--text-primary", TEXT_PRIMARY),
    ("--text-muted", TEXT_MUTED),
    ("--text-on-neon", TEXT_ON_NEON),
];
