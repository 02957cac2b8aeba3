use docbar::{DomTree, InMemoryDom, NodeId};

/// Append an element with the given class (and optional text) to `parent`.
pub fn element(
    dom: &InMemoryDom,
    parent: NodeId,
    tag: &str,
    class: &str,
    text: Option<&str>,
) -> NodeId {
    let node = docbar::helpers::create_element(dom, tag, class, text)
        .expect("fixture element is valid");
    dom.append_child(&parent, &node)
        .expect("fixture parent accepts children");
    node
}

/// Append an anchor labelled `label` linking to `href`.
pub fn anchor(dom: &InMemoryDom, parent: NodeId, label: &str, href: &str) -> NodeId {
    let a = dom.create_element("a").expect("anchor tag is valid");
    dom.set_attribute(&a, "href", href)
        .expect("anchor accepts attributes");
    let text = dom.create_text(label).expect("text node");
    dom.append_child(&a, &text).expect("anchor accepts text");
    dom.append_child(&parent, &a).expect("parent accepts anchor");
    a
}

/// A generated cross-links bar holding one anchor per `(label, href)` pair,
/// as the documentation generator emits it at the top of the body.
pub fn crosslinks(dom: &InMemoryDom, links: &[(&str, &str)]) -> NodeId {
    let body = dom.body().expect("body");
    let container = element(dom, body, "div", "crosslinks", None);
    for (label, href) in links {
        anchor(dom, container, label, href);
    }
    container
}

/// The standard prev/up/next bar.
pub fn full_crosslinks(dom: &InMemoryDom) -> NodeId {
    crosslinks(
        dom,
        &[
            ("next", "node3.html"),
            ("up", "index.html"),
            ("prev", "node1.html"),
        ],
    )
}

/// A local table of contents listing `entries`.
pub fn menu(dom: &InMemoryDom, entries: &[&str]) -> NodeId {
    let body = dom.body().expect("body");
    let toc = element(dom, body, "ul", "sectionTOCS", None);
    for (i, entry) in entries.iter().enumerate() {
        let li = element(dom, toc, "li", "", None);
        anchor(dom, li, entry, &format!("#sec{}", i + 1));
    }
    toc
}

/// Some page content that the assembler must leave alone.
pub fn content(dom: &InMemoryDom, text: &str) -> NodeId {
    let body = dom.body().expect("body");
    element(dom, body, "p", "content", Some(text))
}
