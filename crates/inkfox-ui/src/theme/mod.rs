//! Global styling for the InkFox site.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;

/// Complete stylesheet: palette custom properties followed by the rules.
pub fn global_styles() -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in colors::PALETTE {
        css.push_str(&format!("  {}: {};\n", name, value));
    }
    css.push_str("}\n");
    css.push_str(GLOBAL_STYLES);
    css
}
