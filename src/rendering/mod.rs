//! Output of highlighted ABC notation from the command line

use serde::Serialize;
use std::path::Path;
use tinytemplate::TinyTemplate;
use tracing::info;

use abcheck::language::match_field;

mod terminal;

pub use terminal::Terminal;

static TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body \{ background: #fdfdfd; color: #2e3436; }
pre \{ font-family: "Inconsolata", monospace; font-size: 14px; line-height: 1.5; }
.abc-meta-key \{ color: #75507b; font-weight: bold; }
.abc-meta-value \{ color: #75507b; }
.abc-lyrics-key \{ color: #4e9a06; font-weight: bold; }
.abc-lyrics-value \{ color: #4e9a06; }
.abc-comment \{ color: #999999; font-style: italic; }
.abc-bar \{ color: #cc0000; font-weight: bold; }
.abc-note \{ color: #3465a4; font-weight: bold; }
.abc-accidental \{ color: #ad7fa8; }
.abc-duration \{ color: #8f5902; }
.abc-rest \{ color: #60989a; }
.abc-rest-invisible \{ opacity: 0.6; }
.abc-tie \{ color: #c4a000; }
.abc-ornament, .abc-decoration \{ color: #f57900; }
.abc-tuplet \{ color: #ad7fa8; font-weight: bold; }
.abc-chord, .abc-chord-symbol \{ color: #4e9a06; font-weight: bold; }
.abc-annotation \{ color: #4e9a06; font-style: italic; }
.abc-grace-note \{ color: #729fcf; }
.abc-inline-field, .abc-volta \{ color: #75507b; font-weight: bold; }
.abc-broken-rhythm \{ color: #cc0000; }
.abc-slur-level-0 \{ color: #3465a4; }
.abc-slur-level-1 \{ color: #4e9a06; }
.abc-slur-level-2 \{ color: #f57900; }
.abc-slur-level-3 \{ color: #75507b; }
.abc-slur-level-4 \{ color: #cc0000; }
</style>
</head>
<body>
<pre class="abc">{body | unescaped}</pre>
</body>
</html>
"#;

#[derive(Serialize)]
struct Page<'a> {
    title: String,
    body: &'a str,
}

/// Wrap highlighted markup in a standalone HTML document, titled from the
/// tune's first T: field if it has one.
pub(crate) fn via_html_page(
    filename: &Path,
    source: &str,
    markup: &str,
) -> Result<String, tinytemplate::error::Error> {
    info!("Rendering page for: {}", filename.display());

    let title = source
        .lines()
        .filter_map(match_field)
        .find(|(key, _)| *key == "T:")
        .map(|(_, value)| {
            value
                .trim()
                .to_string()
        })
        .unwrap_or_else(|| {
            filename
                .display()
                .to_string()
        });

    let mut tt = TinyTemplate::new();
    tt.add_template("page", TEMPLATE)?;

    let page = Page {
        title,
        body: markup,
    };

    tt.render("page", &page)
}
