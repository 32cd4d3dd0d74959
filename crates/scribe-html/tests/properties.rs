//! Property tests for escaping and stack discipline.

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use scribe_html::{Canvas, CanvasError, HtmlWriter, escape_html};

const NAMES: [&str; 4] = ["div", "span", "p", "li"];

/// Undo [`escape_html`].
fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[quickcheck]
fn escaped_text_has_no_markup_characters(text: String) -> bool {
    let escaped = escape_html(&text);
    !escaped.contains(['<', '>', '"', '\''])
}

#[quickcheck]
fn escaping_loses_nothing(text: String) -> bool {
    unescape(&escape_html(&text)) == text
}

#[quickcheck]
fn plain_text_is_unchanged(text: String) -> TestResult {
    if text.contains(['<', '>', '"', '\'', '&']) {
        return TestResult::discard();
    }
    TestResult::from_bool(escape_html(&text) == text)
}

#[quickcheck]
fn canvas_matches_stack_model(ops: Vec<u8>) -> bool {
    let mut html = Canvas::new();
    let mut model: Vec<&str> = Vec::new();
    let mut expected = String::new();

    for op in ops {
        if op % 3 == 0 {
            let closed = html.close_tag();
            match model.pop() {
                Some(name) => {
                    if closed.is_err() {
                        return false;
                    }
                    expected.push_str(&format!("</{name}>"));
                }
                None => {
                    if !matches!(closed, Err(CanvasError::EmptyStack)) {
                        return false;
                    }
                }
            }
        } else {
            let name = NAMES[usize::from(op) % NAMES.len()];
            if html.open_tag(name).is_err() {
                return false;
            }
            model.push(name);
            expected.push_str(&format!("<{name}>"));
        }
    }

    html.depth() == model.len() && html.current_output() == Some(expected.as_str())
}

#[quickcheck]
fn skipped_region_writes_nothing(depth: u8, text: String) -> TestResult {
    let depth = usize::from(depth % 16);
    let mut html = Canvas::new();
    let mut gate = html.if_(false);
    for level in 0..depth {
        if gate.open_tag(NAMES[level % NAMES.len()]).is_err() {
            return TestResult::failed();
        }
        if gate.write_text(text.as_str()).is_err() {
            return TestResult::failed();
        }
    }
    for _ in 0..depth {
        if gate.close_tag().is_err() {
            return TestResult::failed();
        }
    }
    if gate.end_if().is_err() {
        return TestResult::failed();
    }
    TestResult::from_bool(html.current_output() == Some("") && html.is_balanced())
}
