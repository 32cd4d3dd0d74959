//! Integration tests for conditional regions.

use scribe_html::{Attributes, Canvas, CanvasError, HtmlWriter, Result, Tag, from_fn};

#[test]
fn test_true_gate_writes_through() -> Result<()> {
    let mut html = Canvas::new();
    html.if_(true)
        .tag(Tag::Div)?
        .write_text("shown")?
        .end(Tag::Div)?
        .end_if()?
        .tag(Tag::Br)?;
    assert_eq!(html.current_output(), Some("<div>shown</div><br/>"));
    Ok(())
}

#[test]
fn test_false_gate_writes_nothing() -> Result<()> {
    let mut html = Canvas::new();
    html.tag(Tag::Body)?;
    html.if_(false)
        .tag_with(Tag::Div, &Attributes::new().class("admin"))?
        .write_text("hidden")?
        .write_char('!')?
        .tag(Tag::Hr)?
        .end(Tag::Div)?
        .end_if()?
        .end(Tag::Body)?;
    assert_eq!(html.current_output(), Some("<body></body>"));
    assert!(html.is_balanced());
    Ok(())
}

#[test]
fn test_false_gate_leaves_canvas_stack_alone() -> Result<()> {
    let mut html = Canvas::new();
    html.tag(Tag::Ul)?;
    html.if_(false).tag(Tag::Li)?.end(Tag::Li)?.end_if()?;
    assert_eq!(html.depth(), 1);
    html.end(Tag::Ul)?;
    assert_eq!(html.current_output(), Some("<ul></ul>"));
    Ok(())
}

#[test]
fn test_skipped_region_left_open_is_unbalanced() -> Result<()> {
    let mut html = Canvas::new();
    let mut gate = html.if_(false);
    assert!(gate.is_skipping());
    gate.tag(Tag::Div)?.tag(Tag::Span)?.end(Tag::Span)?;
    assert!(matches!(gate.end_if(), Err(CanvasError::UnbalancedGate(1))));
    Ok(())
}

#[test]
fn test_open_element_at_end_if_depends_on_condition() -> Result<()> {
    let mut shown = Canvas::new();
    shown.if_(true).tag(Tag::Div)?.end_if()?;
    assert_eq!(shown.depth(), 1);
    assert_eq!(shown.current_output(), Some("<div>"));

    let mut hidden = Canvas::new();
    let mut gate = hidden.if_(false);
    gate.tag(Tag::Div)?;
    assert!(matches!(gate.end_if(), Err(CanvasError::UnbalancedGate(1))));
    assert_eq!(hidden.depth(), 0);
    assert_eq!(hidden.current_output(), Some(""));
    Ok(())
}

#[test]
fn test_skipped_region_extra_close_fails() {
    let mut html = Canvas::new();
    let mut gate = html.if_(false);
    assert!(matches!(gate.close_tag(), Err(CanvasError::EmptyStack)));
}

#[test]
fn test_skipped_region_rejects_null_tag() {
    let mut html = Canvas::new();
    let mut gate = html.if_(false);
    assert!(matches!(gate.open_tag(""), Err(CanvasError::NullTag)));
}

#[test]
fn test_skipped_raw_block_counts_as_open() -> Result<()> {
    let mut html = Canvas::new();
    html.if_(false).cdata("x")?.close_tag()?.end_if()?;
    assert_eq!(html.current_output(), Some(""));
    Ok(())
}

#[test]
fn test_passing_gate_may_leave_elements_open() -> Result<()> {
    let mut html = Canvas::new();
    html.if_(true).tag(Tag::Main)?.end_if()?;
    assert_eq!(html.depth(), 1);
    html.end(Tag::Main)?;
    Ok(())
}

#[test]
fn test_nested_gates() -> Result<()> {
    let mut html = Canvas::new();
    {
        let mut outer = html.if_(true);
        outer.tag(Tag::Div)?;
        outer.if_(false).write_text("inner hidden")?.end_if()?;
        outer.if_(true).write_text("inner shown")?.end_if()?;
        outer.end(Tag::Div)?;
        outer.end_if()?;
    }
    assert_eq!(html.current_output(), Some("<div>inner shown</div>"));
    Ok(())
}

#[test]
fn test_nested_gate_inside_skip_is_skipped() -> Result<()> {
    let mut html = Canvas::new();
    {
        let mut outer = html.if_(false);
        let mut inner = outer.if_(true);
        assert!(inner.is_skipping());
        inner.write_text("never")?;
        inner.end_if()?;
    }
    assert_eq!(html.current_output(), Some(""));
    Ok(())
}

#[test]
fn test_skipped_render_does_not_run_component() -> Result<()> {
    let mut html = Canvas::new();
    let loud = from_fn(|_html| panic!("component must not run in a skipped region"));
    html.if_(false).render(&loud)?.end_if()?;
    assert_eq!(html.current_output(), Some(""));
    Ok(())
}
