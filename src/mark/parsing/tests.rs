use super::*;
use crate::mark::ast::{Document, Node, NodeKind};
use crate::mark::lexing::{tokenize, TokenKind};
use crate::mark::testing::assert_ast;
use crate::mark::testing::factories::mk_tokens;

fn parse_str(source: &str) -> Document {
    parse(&tokenize(source))
}

#[test]
fn test_header_levels() {
    let doc = parse_str("# One\n### Three\n");
    assert_ast(&doc)
        .block_count(2)
        .block(0, |b| {
            b.assert_header().level(1).child_count(1).text("One");
        })
        .block(1, |b| {
            b.assert_header().level(3).text("Three");
        });
}

#[test]
fn test_header_with_inline_content() {
    let doc = parse_str("## a *b*\n");
    assert_ast(&doc).block(0, |b| {
        b.assert_header()
            .level(2)
            .child_count(2)
            .child(0, |t| {
                t.assert_text().text("a ");
            })
            .child(1, |i| {
                i.assert_italic().text("b");
            });
    });
}

#[test]
fn test_paragraph_absorbs_plain_line_break() {
    let doc = parse_str("first line\nsecond line\n");
    assert_ast(&doc).block_count(1).block(0, |p| {
        p.assert_paragraph()
            .child_count(2)
            .text("first linesecond line");
    });
}

#[test]
fn test_blank_line_separates_paragraphs() {
    let doc = parse_str("one\n\ntwo\n");
    assert_ast(&doc)
        .block_count(2)
        .block(0, |p| {
            p.assert_paragraph().text("one");
        })
        .block(1, |p| {
            p.assert_paragraph().text("two");
        });
}

#[test]
fn test_soft_break_ends_paragraph() {
    let doc = parse_str("one  \ntwo\n");
    assert_ast(&doc)
        .block_count(2)
        .block(0, |p| {
            p.assert_paragraph().text("one");
        })
        .block(1, |p| {
            p.assert_paragraph().text("two");
        });
}

#[test]
fn test_paragraph_stops_before_block_opener() {
    let doc = parse_str("intro\n# Title\n");
    assert_ast(&doc)
        .block_count(2)
        .block(0, |p| {
            p.assert_paragraph().text("intro");
        })
        .block(1, |h| {
            h.assert_header().text("Title");
        });
}

#[test]
fn test_bold_and_italic() {
    let doc = parse_str("**bold** and *it*\n");
    assert_ast(&doc).block(0, |p| {
        p.assert_paragraph()
            .child_count(3)
            .child(0, |b| {
                b.assert_bold().text("bold");
            })
            .child(1, |t| {
                t.assert_text().text(" and ");
            })
            .child(2, |i| {
                i.assert_italic().text("it");
            });
    });
}

#[test]
fn test_bold_with_leading_italic() {
    let doc = parse_str("***a* b**\n");
    assert_ast(&doc).block(0, |p| {
        p.assert_paragraph().child_count(1).child(0, |b| {
            b.assert_bold()
                .child_count(2)
                .child(0, |i| {
                    i.assert_italic().child_count(1).text("a");
                })
                .child(1, |t| {
                    t.assert_text().text(" b");
                });
        });
    });
}

#[test]
fn test_bold_wrapping_only_italic() {
    let doc = parse_str("***a*** after\n");
    assert_ast(&doc).block(0, |p| {
        p.assert_paragraph()
            .child_count(2)
            .child(0, |b| {
                b.assert_bold().child_count(1).child(0, |i| {
                    i.assert_italic().text("a");
                });
            })
            .child(1, |t| {
                t.assert_text().text(" after");
            });
    });
}

#[test]
fn test_link() {
    let doc = parse_str("see [the docs](example.com/docs) now\n");
    assert_ast(&doc).block(0, |p| {
        p.assert_paragraph()
            .child_count(3)
            .child(1, |l| {
                l.assert_link()
                    .href("example.com/docs")
                    .child_count(1)
                    .text("the docs");
            })
            .child(2, |t| {
                t.assert_text().text(" now");
            });
    });
}

#[test]
fn test_link_without_target_is_tolerated() {
    let doc = parse_str("[]()\n");
    assert_ast(&doc).block(0, |p| {
        p.assert_paragraph().child(0, |l| {
            l.assert_link().href("").child_count(0);
        });
    });
}

#[test]
fn test_image() {
    let doc = parse_str("![a cat](cat.png)\n");
    assert_ast(&doc).block(0, |p| {
        p.assert_paragraph().child_count(1).child(0, |img| {
            img.assert_image().image("cat.png", "a cat").child_count(0);
        });
    });
}

#[test]
fn test_backtick_before_non_text_is_not_monospace() {
    let doc = parse_str("use `cargo` then `*x*`\n");
    assert_ast(&doc).block(0, |p| {
        p.assert_paragraph()
            .child_count(4)
            .child(1, |m| {
                m.assert_monospace().text("cargo");
            })
            .child(3, |i| {
                i.assert_italic().text("x");
            })
            .text("use cargo then x");
    });
}

#[test]
fn test_reference() {
    let doc = parse_str("<example.com>\n");
    assert_ast(&doc).block(0, |p| {
        p.assert_paragraph().child_count(1).child(0, |r| {
            r.assert_reference().child_count(1).text("example.com");
        });
    });
}

#[test]
fn test_unmatched_punctuation_is_skipped() {
    let doc = parse_str("a ] b ) c\n");
    assert_ast(&doc).block(0, |p| {
        p.assert_paragraph().child_count(3).text("a  b  c");
    });
}

#[test]
fn test_codeblock_with_language() {
    let doc = parse_str("```rust\nfn main() { *x* }\n```\n");
    assert_ast(&doc).block_count(1).block(0, |c| {
        c.assert_codeblock()
            .language(Some("rust"))
            .child_count(1)
            .child(0, |t| {
                t.assert_text().text("fn main() { *x* }");
            });
    });
}

#[test]
fn test_codeblock_without_language_keeps_lines() {
    let doc = parse_str("```\na\n# b\n```\nafter\n");
    assert_ast(&doc)
        .block_count(2)
        .block(0, |c| {
            c.assert_codeblock().language(None).text("a\n# b");
        })
        .block(1, |p| {
            p.assert_paragraph().text("after");
        });
}

#[test]
fn test_unterminated_codeblock_runs_to_end() {
    let doc = parse_str("```\ncode\n");
    assert_ast(&doc).block_count(1).block(0, |c| {
        c.assert_codeblock().text("code");
    });
}

#[test]
fn test_horizontal_rule() {
    let doc = parse_str("above\n\n---\nbelow\n");
    assert_ast(&doc)
        .block_count(3)
        .block(1, |hr| {
            hr.assert_horizontal_rule().child_count(0);
        })
        .block(2, |p| {
            p.assert_paragraph().text("below");
        });
}

#[test]
fn test_flat_unordered_list() {
    let doc = parse_str("- one\n- two\n- three\n");
    assert_ast(&doc).block_count(1).block(0, |list| {
        list.assert_unordered_list()
            .child_count(3)
            .list_depth(1)
            .child(0, |item| {
                item.assert_list_item().child(0, |p| {
                    p.assert_paragraph().text("one");
                });
            })
            .child(2, |item| {
                item.assert_list_item().text("three");
            });
    });
}

#[test]
fn test_ordered_list() {
    let doc = parse_str("+ first\n+ second\n");
    assert_ast(&doc).block(0, |list| {
        list.assert_ordered_list().child_count(2).child(1, |item| {
            item.assert_list_item().text("second");
        });
    });
}

#[test]
fn test_nested_list_from_spaces() {
    let doc = parse_str("- top\n    - nested\n- next\n");
    assert_ast(&doc).block_count(1).block(0, |list| {
        list.assert_unordered_list()
            .child_count(2)
            .list_depth(2)
            .child(0, |item| {
                item.assert_list_item()
                    .child_count(2)
                    .child(0, |p| {
                        p.assert_paragraph().text("top");
                    })
                    .child(1, |nested| {
                        nested.assert_unordered_list().child_count(1).text("nested");
                    });
            })
            .child(1, |item| {
                item.assert_list_item().text("next");
            });
    });
}

#[test]
fn test_mixed_nested_list_kind() {
    let doc = parse_str("- top\n\t+ first\n\t+ second\n");
    assert_ast(&doc).block(0, |list| {
        list.assert_unordered_list().child(0, |item| {
            item.assert_list_item().child(1, |nested| {
                nested.assert_ordered_list().child_count(2);
            });
        });
    });
}

#[test]
fn test_list_ends_at_blank_line() {
    let doc = parse_str("- a\n- b\n\nafter\n");
    assert_ast(&doc)
        .block_count(2)
        .block(0, |list| {
            list.assert_unordered_list().child_count(2);
        })
        .block(1, |p| {
            p.assert_paragraph().text("after");
        });
}

#[test]
fn test_list_item_with_header() {
    let doc = parse_str("- # Title\n");
    assert_ast(&doc).block(0, |list| {
        list.assert_unordered_list().child(0, |item| {
            item.assert_list_item().child(0, |h| {
                h.assert_header().level(1).text("Title");
            });
        });
    });
}

#[test]
fn test_blockquote_single_line() {
    let doc = parse_str("> quoted\n");
    assert_ast(&doc).block_count(1).block(0, |q| {
        q.assert_blockquote().child_count(1).child(0, |p| {
            p.assert_paragraph().text("quoted");
        });
    });
}

#[test]
fn test_blockquote_continues_on_marker() {
    let doc = parse_str("> one\n> two\n\nafter\n");
    assert_ast(&doc)
        .block_count(2)
        .block(0, |q| {
            q.assert_blockquote()
                .child_count(2)
                .child(0, |p| {
                    p.assert_paragraph().text("one");
                })
                .child(1, |p| {
                    p.assert_paragraph().text("two");
                });
        })
        .block(1, |p| {
            p.assert_paragraph().text("after");
        });
}

#[test]
fn test_blockquote_with_header() {
    let doc = parse_str("> # Quoted title\n");
    assert_ast(&doc).block(0, |q| {
        q.assert_blockquote().child(0, |h| {
            h.assert_header().text("Quoted title");
        });
    });
}

#[test]
fn test_nested_blockquote() {
    let doc = parse_str("> > deep\n");
    assert_ast(&doc).block(0, |q| {
        q.assert_blockquote().child_count(1).child(0, |inner| {
            inner.assert_blockquote().child(0, |p| {
                p.assert_paragraph().text("deep");
            });
        });
    });
}

#[test]
fn test_blockquote_stops_before_nested_list_line() {
    let doc = parse_str("> quote\n\t- item\n");
    assert_ast(&doc).block(0, |q| {
        q.assert_blockquote().child_count(1).text("quote");
    });
}

#[test]
fn test_quoted_list_lines_stay_in_one_quote() {
    let doc = parse_str("> - a\n> - b\n");
    assert_ast(&doc).block_count(1).block(0, |q| {
        q.assert_blockquote()
            .child_count(2)
            .child(0, |list| {
                list.assert_unordered_list()
                    .list_depth(1)
                    .child_count(1)
                    .child(0, |item| {
                        item.assert_list_item().child_count(1).child(0, |p| {
                            p.assert_paragraph().text("a");
                        });
                    });
            })
            .child(1, |list| {
                list.assert_unordered_list()
                    .list_depth(1)
                    .child_count(1)
                    .child(0, |item| {
                        item.assert_list_item().child_count(1).child(0, |p| {
                            p.assert_paragraph().text("b");
                        });
                    });
            });
    });
}

#[test]
fn test_quote_line_ends_a_list() {
    let doc = parse_str("- a\n> b\n");
    assert_ast(&doc)
        .block_count(2)
        .block(0, |list| {
            list.assert_unordered_list().child_count(1).child(0, |item| {
                item.assert_list_item().child_count(1).text("a");
            });
        })
        .block(1, |q| {
            q.assert_blockquote().child_count(1).child(0, |p| {
                p.assert_paragraph().text("b");
            });
        });
}

#[test]
fn test_quote_right_after_marker_is_item_body() {
    let doc = parse_str("- > q\n");
    assert_ast(&doc).block_count(1).block(0, |list| {
        list.assert_unordered_list().child_count(1).child(0, |item| {
            item.assert_list_item().child(0, |q| {
                q.assert_blockquote().child_count(1).child(0, |p| {
                    p.assert_paragraph().text("q");
                });
            });
        });
    });
}

#[test]
fn test_angle_bracket_mid_line_is_not_a_quote() {
    let doc = parse_str("a>b\n");
    assert_ast(&doc).block_count(1).block(0, |p| {
        p.assert_paragraph().text("ab");
    });
}

#[test]
fn test_blank_lines_emit_nothing() {
    let doc = parse_str("\n\n\n");
    assert!(doc.is_empty());
}

#[test]
fn test_parse_block_from_handmade_tokens() {
    let tokens = mk_tokens(&[
        (TokenKind::Hash, "#"),
        (TokenKind::Hash, "#"),
        (TokenKind::Text, " Hi"),
        (TokenKind::Newline, "\n"),
    ]);
    let mut state = ParserState::new(&tokens);
    let block = parse_block(&mut state);
    assert_eq!(
        block,
        Some(Node::new(
            NodeKind::Header { level: 2 },
            vec![Node::text("Hi")]
        ))
    );
    assert_eq!(state.kind(), TokenKind::Newline);
}

#[test]
fn test_parse_inline_stops_on_end_kind() {
    let tokens = mk_tokens(&[
        (TokenKind::Text, "a"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::Text, "b"),
    ]);
    let mut state = ParserState::new(&tokens);
    let nodes = parse_inline(&mut state, TokenKind::CloseParen);
    assert_eq!(nodes, vec![Node::text("a")]);
    assert_eq!(state.position(), 1);
}

#[test]
fn test_no_indent_leaks_into_tree() {
    let doc = parse_str("- a\n\t- b\n\t\t- c\n");
    let json = serde_json::to_string(&doc).unwrap();
    assert!(!json.contains("indent"));
}
