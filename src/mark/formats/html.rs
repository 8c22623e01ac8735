//! HTML rendering
//!
//! Walks a finished document and emits markup. Each node kind maps to a fixed fragment:
//! wrapper tags come from [`NodeKind::tag_name`], parameterised ones (headers, links,
//! images, codeblocks) are built here.
//!
//! With `pretty` set, every opening tag, text node and closing tag goes on its own line,
//! indented four spaces per level starting at `base_indent`. Without it nothing is added
//! between fragments.

use crate::mark::ast::{Document, Node, NodeKind};
use serde::{Deserialize, Serialize};

const INDENT: &str = "    ";

/// How link targets without a scheme are detected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HrefPolicy {
    /// Prefix `https://` unless the target already has `http://` or `https://`
    #[default]
    Fixed,
    /// Prefix unless the target contains both `http://` and `https://`
    Legacy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub pretty: bool,
    pub base_indent: usize,
    pub href_policy: HrefPolicy,
}

/// Normalize a link target: add the scheme if needed, turn backslashes into slashes
pub fn build_href(href: &str, policy: HrefPolicy) -> String {
    let has_http = href.contains("http://");
    let has_https = href.contains("https://");
    let needs_scheme = match policy {
        HrefPolicy::Fixed => !has_http && !has_https,
        HrefPolicy::Legacy => !has_http || !has_https,
    };

    let href = if needs_scheme {
        format!("https://{}", href)
    } else {
        href.to_string()
    };
    href.replace('\\', "/")
}

/// Escape codeblock content and expand the tab and soft-break markers
fn escape_code(code: &str) -> String {
    code.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\t', "    ")
        .replace('\r', "  ")
}

pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, doc: &Document) -> String {
        self.render_nodes(&doc.blocks)
    }

    pub fn render_nodes(&self, nodes: &[Node]) -> String {
        let mut out = String::new();
        for node in nodes {
            self.render_node(node, self.options.base_indent, &mut out);
        }
        out
    }

    fn pad(&self, depth: usize) -> String {
        if self.options.pretty {
            INDENT.repeat(depth)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &'static str {
        if self.options.pretty {
            "\n"
        } else {
            ""
        }
    }

    /// Emit one fragment on its own line (in pretty mode)
    fn line(&self, depth: usize, fragment: &str, out: &mut String) {
        out.push_str(&self.pad(depth));
        out.push_str(fragment);
        out.push_str(self.newline());
    }

    fn wrap(&self, open: &str, close: &str, node: &Node, depth: usize, out: &mut String) {
        self.line(depth, open, out);
        for child in &node.children {
            self.render_node(child, depth + 1, out);
        }
        self.line(depth, close, out);
    }

    fn render_node(&self, node: &Node, depth: usize, out: &mut String) {
        match &node.kind {
            NodeKind::Text { value } => self.line(depth, value, out),
            NodeKind::Header { level } => {
                let open = format!("<h{}>", level);
                let close = format!("</h{}>", level);
                self.wrap(&open, &close, node, depth, out);
            }
            NodeKind::Link { href } => {
                let open = format!("<a href='{}'>", build_href(href, self.options.href_policy));
                self.wrap(&open, "</a>", node, depth, out);
            }
            NodeKind::Reference => {
                let target = build_href(&node.plain_text(), self.options.href_policy);
                let open = format!("<a href='{}'>", target);
                self.wrap(&open, "</a>", node, depth, out);
            }
            NodeKind::Image { path, alt } => {
                let tag = format!("<img src='{}' alt='{}' title='{}'>", path, alt, alt);
                self.line(depth, &tag, out);
            }
            NodeKind::HorizontalRule => self.line(depth, "<hr/>", out),
            NodeKind::Codeblock { .. } => self.render_codeblock(node, depth, out),
            kind => {
                let tag = kind.tag_name().unwrap_or("div");
                self.wrap(&format!("<{}>", tag), &format!("</{}>", tag), node, depth, out);
            }
        }
    }

    fn render_codeblock(&self, node: &Node, depth: usize, out: &mut String) {
        let code = escape_code(&node.plain_text());
        let pad = self.pad(depth);
        let nl = self.newline();

        self.line(depth, "<pre>", out);
        self.line(depth, "<code>", out);
        let body = code
            .split('\n')
            .map(|line| format!("{}{}", pad, line))
            .collect::<Vec<_>>()
            .join("\n");
        out.push_str(&body);
        out.push_str(nl);
        self.line(depth, "</code>", out);
        self.line(depth, "</pre>", out);
    }
}

/// Render top-level nodes with the default href policy
pub fn to_html(nodes: &[Node], base_indent: usize, pretty: bool) -> String {
    HtmlRenderer::new(RenderOptions {
        pretty,
        base_indent,
        href_policy: HrefPolicy::default(),
    })
    .render_nodes(nodes)
}
