//! Font descriptor for text annotations.

/// Font configuration captured by each text annotation.
///
/// Describes family, point size, weight, and style. The descriptor travels with
/// the annotation so that later font changes never restyle existing text.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Serif", "Pristina")
    pub family: String,

    /// Font size in points
    pub size: f64,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            size: 16.0,
            weight: "normal".to_string(),
            style: "normal".to_string(),
        }
    }
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, size: f64, weight: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            size,
            weight: weight.into(),
            style: style.into(),
        }
    }

    /// Converts this font descriptor to a Pango font description string.
    ///
    /// Format: "Family Style Weight Size", omitting "normal" parts.
    /// Example: "Sans Bold 16" or "Serif Italic 24"
    pub fn to_pango_string(&self) -> String {
        let mut parts = vec![self.family.clone()];

        if !self.style.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.style));
        }

        if !self.weight.eq_ignore_ascii_case("normal") {
            parts.push(capitalize_first(&self.weight));
        }

        parts.push(format!("{}", self.size.round() as i32));

        parts.join(" ")
    }

    /// Builds the Pango description used for measuring and painting.
    pub fn to_pango(&self) -> pango::FontDescription {
        pango::FontDescription::from_string(&self.to_pango_string())
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
