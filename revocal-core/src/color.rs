//! Color normalization seam for theme output.

/// Turns a user-supplied CSS color into the form the render layer
/// interpolates into its output. Implementations must be pure.
pub trait DisplayColor {
    fn to_display_color(&self, input: &str) -> String;
}

/// Lowercases and trims, and expands `#rgb`/`#rgba` shorthand to full hex.
/// Other syntaxes (`rgb(...)`, named colors) pass through.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssColor;

impl DisplayColor for CssColor {
    fn to_display_color(&self, input: &str) -> String {
        let color = input.trim().to_ascii_lowercase();

        match color.strip_prefix('#') {
            Some(hex) if (hex.len() == 3 || hex.len() == 4) && hex.chars().all(|c| c.is_ascii_hexdigit()) => {
                let mut expanded = String::with_capacity(1 + hex.len() * 2);
                expanded.push('#');
                for c in hex.chars() {
                    expanded.push(c);
                    expanded.push(c);
                }
                expanded
            }
            _ => color,
        }
    }
}

impl<F> DisplayColor for F
where
    F: Fn(&str) -> String,
{
    fn to_display_color(&self, input: &str) -> String {
        self(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expands_shorthand_hex() {
        assert_eq!(CssColor.to_display_color("#ABC"), "#aabbcc");
        assert_eq!(CssColor.to_display_color(" #abcd "), "#aabbccdd");
    }

    #[test]
    fn test_other_syntaxes_pass_through() {
        assert_eq!(CssColor.to_display_color("#4F6995"), "#4f6995");
        assert_eq!(CssColor.to_display_color("Orange"), "orange");
        assert_eq!(CssColor.to_display_color("rgb(1, 2, 3)"), "rgb(1, 2, 3)");
        assert_eq!(CssColor.to_display_color("#xyz"), "#xyz");
    }

    #[test]
    fn test_closures_are_color_formatters() {
        let upper = |s: &str| s.to_uppercase();
        assert_eq!(upper.to_display_color("red"), "RED");
    }
}
