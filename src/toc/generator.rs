use crate::config::defaults::NAV_ARIA_LABEL;
use crate::config::TocConfig;
use crate::toc::types::NodeRef;

/// Work items for the serializer. Closing tags are queued before the
/// children so they come out after the whole subtree.
enum Step<'a> {
    Enter(NodeRef<'a>),
    Close(&'static str),
}

/// Serialize a node and its descendants as nested list markup.
///
/// Renderable nodes become `<li><a href="#slug">text</a>…</li>`; other nodes
/// (the root, or headings missing a slug or text) only contribute the list
/// holding their children.
pub fn render_list(node: NodeRef<'_>, config: &TocConfig) -> String {
    let list_tag = config.list_style.tag();
    let mut html = String::new();
    let mut stack = vec![Step::Enter(node)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Close(tag) => {
                html.push_str("</");
                html.push_str(tag);
                html.push('>');
            }
            Step::Enter(node) => {
                if node.is_renderable() {
                    html.push_str(&format!(
                        "<li><a href=\"#{}\">{}</a>",
                        html_escape::encode_double_quoted_attribute(node.slug().unwrap_or_default()),
                        html_escape::encode_text(node.text())
                    ));
                    stack.push(Step::Close("li"));
                }

                if node.has_children() {
                    html.push('<');
                    html.push_str(list_tag);
                    html.push('>');
                    stack.push(Step::Close(list_tag));
                    stack.extend(node.children().rev().map(Step::Enter));
                }
            }
        }
    }

    html
}

/// Render the complete table of contents block for an outline root.
///
/// Returns an empty string when the root has no children.
pub fn generate_toc(root: NodeRef<'_>, config: &TocConfig) -> String {
    if !root.has_children() {
        return String::new();
    }

    let mut html = String::new();

    if !config.heading_text.is_empty() {
        html.push_str(&format!(
            "<{tag}>{text}</{tag}>\n",
            tag = config.heading_tag,
            text = html_escape::encode_text(&config.heading_text)
        ));
    }

    if config.as_details_summary {
        html.push_str("<details>");
        if let Some(summary) = config.summary_text.as_deref().filter(|s| !s.is_empty()) {
            html.push_str(&format!("<summary>{}</summary>", html_escape::encode_text(summary)));
        }
    }

    let aria_label = if config.wrapper.eq_ignore_ascii_case("nav") {
        format!(" aria-label=\"{}\"", NAV_ARIA_LABEL)
    } else {
        String::new()
    };

    html.push_str(&format!(
        "<{wrapper}{aria} class=\"{class}\">{list}</{wrapper}>",
        wrapper = config.wrapper,
        aria = aria_label,
        class = html_escape::encode_double_quoted_attribute(&config.wrapper_class),
        list = render_list(root, config)
    ));

    if config.as_details_summary {
        html.push_str("</details>");
    }

    html
}
