//! SVG markup for the filter catalog
//!
//! The page embeds one zero-size `<svg>` holding every `<filter>`; elements
//! then point at them with `filter: url(#id)`.

use crate::definition::{FilterDefinition, FilterKind};
use crate::registry::FilterRegistry;

/// Alpha of the grain noise before it is clipped to the source graphic
pub const GRAIN_ALPHA: f32 = 0.05;

/// Page-wide grain overlay turbulence
pub const PAGE_GRAIN_FREQUENCY: f32 = 0.65;
pub const PAGE_GRAIN_OCTAVES: u32 = 3;
pub const PAGE_GRAIN_OPACITY: f32 = 0.03;

/// Render the hidden `<svg><defs>` block for every registered filter
pub fn filter_defs(registry: &FilterRegistry) -> String {
    let mut out = String::from("<svg width=\"0\" height=\"0\" class=\"absolute block\">\n  <defs>\n");
    for filter in registry.list() {
        out.push_str(&filter_element(filter));
    }
    out.push_str("  </defs>\n</svg>\n");
    out
}

/// Render a single `<filter>` element
pub fn filter_element(filter: &FilterDefinition) -> String {
    let p = filter.params;

    match filter.kind {
        FilterKind::Grain => format!(
            concat!(
                "    <filter id=\"{id}\" x=\"0%\" y=\"0%\" width=\"100%\" height=\"100%\">\n",
                "      <feTurbulence type=\"fractalNoise\" baseFrequency=\"{freq}\" numOctaves=\"{oct}\" result=\"noise\" />\n",
                "      <feColorMatrix type=\"matrix\" values=\"1 0 0 0 0  0 1 0 0 0  0 0 1 0 0  0 0 0 {alpha} 0\" in=\"noise\" result=\"coloredNoise\" />\n",
                "      <feComposite operator=\"in\" in2=\"SourceGraphic\" result=\"composite\" />\n",
                "    </filter>\n",
            ),
            id = filter.id,
            freq = p.base_frequency,
            oct = p.octaves,
            alpha = GRAIN_ALPHA,
        ),
        FilterKind::StrokeDisplacement => format!(
            concat!(
                "    <filter id=\"{id}\">\n",
                "      <feTurbulence type=\"fractalNoise\" baseFrequency=\"{freq}\" numOctaves=\"{oct}\" result=\"noise\" />\n",
                "      <feDisplacementMap in=\"SourceGraphic\" in2=\"noise\" scale=\"{scale}\" xChannelSelector=\"R\" yChannelSelector=\"G\" />\n",
                "    </filter>\n",
            ),
            id = filter.id,
            freq = p.base_frequency,
            oct = p.octaves,
            scale = p.displacement_scale,
        ),
        FilterKind::TextDisplacement => format!(
            concat!(
                "    <filter id=\"{id}\">\n",
                "      <feTurbulence type=\"fractalNoise\" baseFrequency=\"{freq}\" numOctaves=\"{oct}\" result=\"noise\" />\n",
                "      <feDisplacementMap in=\"SourceGraphic\" in2=\"noise\" scale=\"{scale}\" />\n",
                "    </filter>\n",
            ),
            id = filter.id,
            freq = p.base_frequency,
            oct = p.octaves,
            scale = p.displacement_scale,
        ),
    }
}

/// CSS `background-image` for the fixed full-page grain overlay
pub fn page_grain_css() -> String {
    let svg = format!(
        "<svg viewBox='0 0 200 200' xmlns='http://www.w3.org/2000/svg'>\
<filter id='noiseFilter'><feTurbulence type='fractalNoise' baseFrequency='{}' numOctaves='{}' stitchTiles='stitch'/></filter>\
<rect width='100%' height='100%' filter='url(#noiseFilter)'/></svg>",
        PAGE_GRAIN_FREQUENCY, PAGE_GRAIN_OCTAVES
    );
    format!(
        "background-image: url(\"data:image/svg+xml,{}\"); opacity: {};",
        encode_data_uri(&svg),
        PAGE_GRAIN_OPACITY
    )
}

fn encode_data_uri(svg: &str) -> String {
    let mut out = String::with_capacity(svg.len() * 2);
    for c in svg.chars() {
        match c {
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            '#' => out.push_str("%23"),
            '%' => out.push_str("%25"),
            '"' => out.push_str("%22"),
            c => out.push(c),
        }
    }
    out
}
