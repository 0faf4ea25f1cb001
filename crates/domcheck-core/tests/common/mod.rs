use domcheck_core::model::{comment, doctype, document, element, text, Node};

/// The `<div>` wrapper used by the diff fixtures: `<div>{children}</div>`
#[allow(dead_code)]
pub fn div(children: Vec<Node>) -> Node {
    element("div", &[], children)
}

/// `<span>{children}</span>`
#[allow(dead_code)]
pub fn span(children: Vec<Node>) -> Node {
    element("span", &[], children)
}

/// `<!DOCTYPE html><html><body>{body}</body></html>` as a document
#[allow(dead_code)]
pub fn html_document(body: Vec<Node>) -> Node {
    document(vec![
        doctype("html"),
        element("html", &[], vec![element("body", &[], body)]),
    ])
}

/// `<div>foo<!--bar--></div>`
#[allow(dead_code)]
pub fn foo_bar_div() -> Node {
    div(vec![text("foo"), comment("bar")])
}

/// An element nested `depth` levels deep: `<div><div>...</div></div>`
#[allow(dead_code)]
pub fn nested_divs(depth: usize) -> Node {
    let mut node = element("div", &[], vec![]);
    for _ in 1..depth {
        node = element("div", &[], vec![node]);
    }
    node
}
