/// Assert that the serialized subtree of a node contains a snippet
#[macro_export]
macro_rules! assert_html_contains {
    ($dom:expr, $node:expr, $snippet:expr) => {
        let html = $dom.outer_html($node);
        assert!(
            html.contains($snippet),
            "HTML should contain '{}', but was:\n{}",
            $snippet,
            html
        );
    };
}

/// Assert that the serialized subtree of a node does NOT contain a snippet
#[macro_export]
macro_rules! assert_html_not_contains {
    ($dom:expr, $node:expr, $snippet:expr) => {
        let html = $dom.outer_html($node);
        assert!(
            !html.contains($snippet),
            "HTML should NOT contain '{}', but it was found in:\n{}",
            $snippet,
            html
        );
    };
}
