//! Development error page
//!
//! Generates a detailed HTML page for an unhandled error: message, code,
//! source location, stack frames, the request environment, and any named
//! diagnostic tables the error carries. Must only be shown when the
//! process is not running in production.

use faute_exception::AppError;
use serde_json::{Map, Value};

/// Development error page generator
///
/// # Examples
///
/// ```
/// use faute_exception::AppError;
/// use faute_views::DebugPage;
/// use serde_json::Map;
///
/// let page = DebugPage::new().with_page_title("An error occurred!");
/// let error = AppError::new("playlist not found").with_code(404);
///
/// let html = page.render(&error, &Map::new());
/// assert!(html.contains("An error occurred!"));
/// assert!(html.contains("playlist not found"));
/// ```
pub struct DebugPage {
    page_title: String,
    show_stack_trace: bool,
}

impl DebugPage {
    pub fn new() -> Self {
        Self {
            page_title: "An error occurred!".to_string(),
            show_stack_trace: true,
        }
    }

    /// Set the page heading
    pub fn with_page_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = title.into();
        self
    }

    /// Enable or disable the stack trace panel
    pub fn with_stack_trace(mut self, enable: bool) -> Self {
        self.show_stack_trace = enable;
        self
    }

    /// Format an error into an HTML error page
    ///
    /// `request_env` is rendered as its own panel; the error's extra
    /// diagnostic tables follow in the order they were attached.
    pub fn render(&self, error: &AppError, request_env: &Map<String, Value>) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html>\n");
        html.push_str("<head>\n");
        html.push_str("  <meta charset=\"utf-8\">\n");
        html.push_str(&format!(
            "  <title>{}</title>\n",
            escape_html(&self.page_title)
        ));
        html.push_str("  <style>\n");
        html.push_str(&self.page_styles());
        html.push_str("  </style>\n");
        html.push_str("</head>\n");
        html.push_str("<body>\n");

        html.push_str("  <div class=\"error-container\">\n");
        html.push_str(&format!("    <h1>{}</h1>\n", escape_html(&self.page_title)));

        html.push_str("    <div class=\"error-message\">\n");
        html.push_str(&format!(
            "      <p><strong>Error:</strong> {}</p>\n",
            escape_html(error.message())
        ));
        html.push_str(&format!(
            "      <p><strong>Code:</strong> {}</p>\n",
            error.code()
        ));
        html.push_str(&format!(
            "      <p><strong>Source:</strong> {}:{}</p>\n",
            escape_html(error.file()),
            error.line()
        ));
        html.push_str("    </div>\n");

        if self.show_stack_trace && !error.trace().is_empty() {
            html.push_str("    <div class=\"stack-trace\">\n");
            html.push_str("      <h2>Stack Trace</h2>\n");
            html.push_str("      <ol>\n");
            for frame in error.trace() {
                html.push_str(&format!(
                    "        <li><code>{}</code> at {}:{}</li>\n",
                    escape_html(&frame.function),
                    escape_html(&frame.file),
                    frame.line
                ));
            }
            html.push_str("      </ol>\n");
            html.push_str("    </div>\n");
        }

        if !request_env.is_empty() {
            html.push_str(&self.data_table("Request", request_env));
        }

        for (legend, data) in error.extra_data() {
            html.push_str(&self.data_table(legend, data));
        }

        html.push_str("  </div>\n");
        html.push_str("</body>\n");
        html.push_str("</html>\n");

        html
    }

    /// Render one named key/value panel
    fn data_table(&self, legend: &str, data: &Map<String, Value>) -> String {
        let mut html = String::new();

        html.push_str("    <div class=\"data-table\">\n");
        html.push_str(&format!("      <h2>{}</h2>\n", escape_html(legend)));
        html.push_str("      <table>\n");
        for (key, value) in data {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            html.push_str(&format!(
                "        <tr><th>{}</th><td>{}</td></tr>\n",
                escape_html(key),
                escape_html(&rendered)
            ));
        }
        html.push_str("      </table>\n");
        html.push_str("    </div>\n");

        html
    }

    fn page_styles(&self) -> String {
        r#"    body { font-family: sans-serif; margin: 2em; background: #f4f4f4; }
    .error-container { background: #fff; border-radius: 4px; padding: 1.5em; max-width: 60em; margin: 0 auto; }
    h1 { color: #b71c1c; margin-top: 0; }
    h2 { font-size: 1.1em; border-bottom: 1px solid #ddd; padding-bottom: 0.3em; }
    .error-message { background: #ffebee; padding: 1em; border-left: 4px solid #b71c1c; }
    .stack-trace code { background: #eceff1; padding: 0 0.3em; }
    .data-table table { border-collapse: collapse; width: 100%; }
    .data-table th { text-align: left; padding: 0.3em 0.8em 0.3em 0; vertical-align: top; white-space: nowrap; }
    .data-table td { padding: 0.3em 0; word-break: break-all; }
"#
        .to_string()
    }
}

impl Default for DebugPage {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal HTML escaping for text interpolated into the page
fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
