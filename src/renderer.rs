use crate::types::ParkingCheckResult;
use log::debug;

/// The page region a result is rendered into.
pub trait DisplayContainer {
    fn show(&mut self);
    /// Replaces everything inside the container.
    fn replace_contents(&mut self, markup: String);
}

/// In-memory display region. Starts hidden and empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRegion {
    hidden: bool,
    contents: String,
}

impl Default for ResultRegion {
    fn default() -> Self {
        ResultRegion {
            hidden: true,
            contents: String::new(),
        }
    }
}

impl ResultRegion {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[cfg(test)]
    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn to_markup(&self) -> String {
        if self.hidden {
            format!("<div id=\"result\" class=\"hidden\">{}</div>\n", self.contents)
        } else {
            format!("<div id=\"result\">{}</div>\n", self.contents)
        }
    }
}

impl DisplayContainer for ResultRegion {
    fn show(&mut self) {
        self.hidden = false;
    }

    fn replace_contents(&mut self, markup: String) {
        self.contents = markup;
    }
}

pub fn display_result<D: DisplayContainer + ?Sized>(result: &ParkingCheckResult, display: &mut D) {
    display.show();
    display.replace_contents(render_markup(result));
}

pub fn render_markup(result: &ParkingCheckResult) -> String {
    match result {
        ParkingCheckResult::Allowed { message } => {
            debug!("Rendering allowed result");
            format!(
                r#"
    <div class="success">
        <h2>✅ Parking Allowed</h2>
        <p>{}</p>
    </div>
"#,
                escape_html(message)
            )
        }
        ParkingCheckResult::NotAllowed {
            status,
            message,
            alternatives,
        } => {
            debug!(
                "Rendering not-allowed result (status {:?}, {} alternatives)",
                status,
                alternatives.len()
            );
            let items: String = alternatives
                .iter()
                .map(|alt| format!("<li>{}</li>", escape_html(alt)))
                .collect();
            format!(
                r#"
    <div class="error">
        <h2>❌ Parking Not Allowed</h2>
        <p>{}</p>
        <div class="alternatives">
            <h3>Alternative Options:</h3>
            <ul>
                {}
            </ul>
        </div>
    </div>
"#,
                escape_html(message),
                items
            )
        }
    }
}

/// Server text is untrusted; encode it before it lands in markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn denied(alternatives: &[&str]) -> ParkingCheckResult {
        ParkingCheckResult::NotAllowed {
            status: Some("denied".to_string()),
            message: "No spots".to_string(),
            alternatives: alternatives.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn allowed_renders_success_view() {
        let mut region = ResultRegion::new();
        let result = ParkingCheckResult::Allowed {
            message: "OK".to_string(),
        };
        display_result(&result, &mut region);
        assert!(!region.is_hidden());
        assert!(region.contents().contains("<div class=\"success\">"));
        assert!(region.contents().contains("✅ Parking Allowed"));
        assert!(region.contents().contains("<p>OK</p>"));
        assert!(!region.contents().contains("<ul>"));
        assert!(!region.contents().contains("<li>"));
    }

    #[test]
    fn denied_renders_alternatives_in_order() {
        let mut region = ResultRegion::new();
        display_result(&denied(&["Lot B", "Lot C"]), &mut region);
        let contents = region.contents();
        assert!(contents.contains("<div class=\"error\">"));
        assert!(contents.contains("❌ Parking Not Allowed"));
        assert!(contents.contains("<p>No spots</p>"));
        assert!(contents.contains("Alternative Options:"));
        assert_eq!(contents.matches("<li>").count(), 2);
        let b = contents.find("<li>Lot B</li>").unwrap();
        let c = contents.find("<li>Lot C</li>").unwrap();
        assert!(b < c);
    }

    #[test]
    fn empty_alternatives_render_empty_list() {
        let markup = render_markup(&denied(&[]));
        assert!(markup.contains("<ul>"));
        assert_eq!(markup.matches("<li>").count(), 0);
    }

    #[test]
    fn second_render_replaces_first() {
        let mut region = ResultRegion::new();
        let result = denied(&["Lot B"]);
        display_result(&result, &mut region);
        let first = region.clone();
        display_result(&result, &mut region);
        assert_eq!(region, first);

        display_result(
            &ParkingCheckResult::Allowed {
                message: "OK".to_string(),
            },
            &mut region,
        );
        assert!(!region.contents().contains("No spots"));
    }

    #[test]
    fn server_text_is_escaped() {
        let result = ParkingCheckResult::NotAllowed {
            status: None,
            message: "<script>alert('x')</script>".to_string(),
            alternatives: vec!["Lot \"A\" & B".to_string()],
        };
        let markup = render_markup(&result);
        assert!(!markup.contains("<script>"));
        assert!(markup.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(markup.contains("<li>Lot &quot;A&quot; &amp; B</li>"));
    }

    #[test]
    fn region_markup_reflects_visibility() {
        let mut region = ResultRegion::new();
        assert_eq!(region.to_markup(), "<div id=\"result\" class=\"hidden\"></div>\n");
        region.show();
        region.replace_contents("<p>x</p>".to_string());
        assert_eq!(region.to_markup(), "<div id=\"result\"><p>x</p></div>\n");
    }
}
