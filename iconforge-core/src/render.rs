//! Output Renderer - Stylesheet and Demo Page
//!
//! Pure functions of the result descriptor. Same descriptor, same bytes.

use crate::descriptor::{GlyphRecord, ResultDescriptor, CLASS_PREFIX};

/// Class suffix of the glyph shown in the animation demo.
pub const SPINNER_SUFFIX: &str = "spinner";

const BUZZ_KEYFRAMES: &str = r#"
@keyframes buzz {
  10% {
    transform: translateX(3px) rotate(2deg);
  }

  20% {
    transform: translateX(-3px) rotate(-2deg);
  }

  30% {
    transform: translateX(3px) rotate(2deg);
  }

  40% {
    transform: translateX(-3px) rotate(-2deg);
  }

  50% {
    transform: translateX(2px) rotate(1deg);
  }

  60% {
    transform: translateX(-2px) rotate(-1deg);
  }

  70% {
    transform: translateX(2px) rotate(1deg);
  }

  80% {
    transform: translateX(-2px) rotate(-1deg);
  }

  90% {
    transform: translateX(1px) rotate(0);
  }

  100% {
    transform: translateX(-1px) rotate(0);
  }
}
"#;

const DEMO_STYLES: &str = r#"  <style>
    body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Ubuntu; }
    .wrap { max-width: 900px; margin: 40px auto; padding: 0 16px; }
    .grid { display: flex; flex-wrap: wrap; gap: 8px; }
    .grid span { display: inline-flex; justify-content: center; align-items: center; width: 40px; height: 40px; border: 1px solid #eee; border-radius: 6px; }
    .demo { margin: 24px 0 8px; font-weight: 600; }
    .big { font-size: 48px; display: flex; gap: 16px; align-items: center; }
    .box { display:inline-flex; width:64px; height:64px; align-items:center; justify-content:center; border:1px dashed #ddd; border-radius:8px; }
  </style>
"#;

fn css_preamble(font: &str) -> String {
    format!(
        r#"@font-face {{
  font-family: "{font}";
  src:
    url("{font}.woff2") format("woff2"),
    url("{font}.woff")  format("woff"),
    url("{font}.ttf")   format("truetype");
  font-display: swap;
}}

.{p} {{
  font-family: {font};
  speak: none;
  font-style: normal;
  font-weight: normal;
  font-variant: normal;
  text-transform: none;
  line-height: 1;
  display: inline-block;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}}

.{p}:before {{
  backface-visibility: hidden;
}}

.spin {{
  animation: {p}-spin 2s linear infinite;
  display: inline-block;
}}

.buzz {{
  animation-name: buzz;
  animation-duration: 0.75s;
  animation-timing-function: linear;
  animation-iteration-count: 1;
}}

@keyframes {p}-spin {{
  0%   {{ transform: rotate(0deg); }}
  100% {{ transform: rotate(360deg); }}
}}
{BUZZ_KEYFRAMES}"#,
        p = CLASS_PREFIX,
    )
}

fn css_rule(record: &GlyphRecord) -> String {
    format!(
        "\n.{}:before {{\n  content: \"\\{}\";\n}}\n",
        record.class_name(),
        record.codepoint_hexa
    )
}

/// Render the stylesheet: fixed preamble, then one `:before` rule per glyph.
pub fn render_css(result: &ResultDescriptor) -> String {
    let mut css = css_preamble(&result.font_name);
    for record in result.glyphs_data.records() {
        css.push_str(&css_rule(record));
    }
    css
}

/// One inline gallery element per glyph, in glyph order.
pub fn render_html_tags(result: &ResultDescriptor) -> Vec<String> {
    result.glyphs_data.records().map(render_tag).collect()
}

fn render_tag(record: &GlyphRecord) -> String {
    format!(
        r#"<span title="{}"><i class="{} {}"></i></span>"#,
        escape_attr(&record.name),
        CLASS_PREFIX,
        escape_attr(&record.class_name())
    )
}

/// Wrap gallery tags in a standalone demo page linking `<fontName>.css`.
///
/// The animation example is only emitted when the font has a `spinner` glyph.
pub fn render_html_document(result: &ResultDescriptor, tags: &[String]) -> String {
    let font = escape_attr(&result.font_name);
    let mut html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>{font} demo</title>
  <link rel="stylesheet" href="{font}.css">
"#
    );
    html.push_str(DEMO_STYLES);
    html.push_str(
        r#"</head>
<body>
  <div class="wrap">
    <div class="demo">All icons</div>
    <div class="grid">
"#,
    );
    for tag in tags {
        html.push_str(&format!("      {tag}\n"));
    }
    html.push_str("    </div>\n");

    if has_spinner(result) {
        html.push_str(&format!(
            r#"
    <div class="demo">Animations</div>
    <div class="big">
      <div class="box"><i class="{p} {p}-{SPINNER_SUFFIX} spin"></i></div>
    </div>
"#,
            p = CLASS_PREFIX,
        ));
    }

    html.push_str("  </div>\n</body>\n</html>\n");
    html
}

fn has_spinner(result: &ResultDescriptor) -> bool {
    result
        .glyphs_data
        .records()
        .any(|r| r.class_suffix() == SPINNER_SUFFIX)
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
