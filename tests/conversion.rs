use mdhtml::{
    BlockType, Error, HtmlNode, LeafNode, ParentNode, SpanKind, TextSpan, markdown_to_html,
    markdown_to_html_node, parse_blocks, render, tokenize,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn heading_and_paragraph_round_trip() {
    let markdown = "# Title\n\nSome **bold** and *italic* text.";

    let blocks: Vec<String> = parse_blocks(markdown).into_iter().map(|(_, b)| b).collect();
    assert_eq!(blocks, vec!["# Title", "Some **bold** and *italic* text."]);

    assert_eq!(
        markdown_to_html(markdown).unwrap(),
        "<div><h1>Title</h1><p>Some <b>bold</b> and <i>italic</i> text.</p></div>"
    );
}

#[test]
fn quote_scenario() {
    assert_eq!(
        markdown_to_html("> quoted\n> line").unwrap(),
        "<div><blockquote>quoted\nline</blockquote></div>"
    );
}

#[test]
fn unclosed_code_span_produces_no_tree() {
    let result = markdown_to_html_node("has `code");
    assert_eq!(
        result,
        Err(Error::UnterminatedDelimiter {
            delimiter: "`".to_string(),
            text: "has `code".to_string(),
        })
    );
}

#[test]
fn tree_can_be_inspected_before_rendering() {
    let node = markdown_to_html_node("[home](/index.html)").unwrap();
    let expected: HtmlNode = ParentNode::new(
        "div",
        vec![
            ParentNode::new(
                "p",
                vec![
                    LeafNode::element("a", "home")
                        .with_attr("href", "/index.html")
                        .into(),
                ],
            )
            .into(),
        ],
    )
    .into();
    assert_eq!(node, expected);
    assert_eq!(
        render(&node).unwrap(),
        r#"<div><p><a href="/index.html">home</a></p></div>"#
    );
}

#[rstest]
#[case("# Title\n\n> quote\nplain", vec![BlockType::Heading(1), BlockType::Paragraph])]
#[case("1. a\n3. b", vec![BlockType::Paragraph])]
#[case("```\ncode\n```\n\n- a\n- b\n\n1. x\n2. y", vec![BlockType::Code, BlockType::UnorderedList, BlockType::OrderedList])]
fn block_types(#[case] markdown: &str, #[case] expected: Vec<BlockType>) {
    let types: Vec<BlockType> = parse_blocks(markdown).into_iter().map(|(t, _)| t).collect();
    assert_eq!(types, expected);
}

#[test]
fn full_document() {
    let markdown = r#"
# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> "I am in fact a Hobbit in all but size."
>
> -- J.R.R. Tolkien

## Reasons I like Tolkien

* You can spend years studying the legendarium
- It's *epic*

1. Gandalf
2. Bilbo
3. Sam

```
func main(){
    fmt.Println("Hello, World!")
}
```

[Back home](/)
"#;

    let expected = concat!(
        "<div>",
        "<h1>Tolkien Fan Club</h1>",
        r#"<p><img src="/images/tolkien.png" alt="JRR Tolkien sitting"></img></p>"#,
        "<p>Here's the deal, <b>I like Tolkien</b>.</p>",
        "<blockquote>\"I am in fact a Hobbit in all but size.\"\n\n-- J.R.R. Tolkien</blockquote>",
        "<h2>Reasons I like Tolkien</h2>",
        "<ul><li>You can spend years studying the legendarium</li><li>It's <i>epic</i></li></ul>",
        "<ol><li>Gandalf</li><li>Bilbo</li><li>Sam</li></ol>",
        "<pre><code>\nfunc main(){\nfmt.Println(\"Hello, World!\")\n}\n</code></pre>",
        r#"<p><a href="/">Back home</a></p>"#,
        "</div>",
    );
    assert_eq!(markdown_to_html(markdown).unwrap(), expected);
}

fn formatted(kind: u8, word: &str) -> (String, SpanKind) {
    match kind % 4 {
        0 => (word.to_string(), SpanKind::Plain),
        1 => (format!("**{word}**"), SpanKind::Bold),
        2 => (format!("*{word}*"), SpanKind::Italic),
        _ => (format!("`{word}`"), SpanKind::Code),
    }
}

proptest! {
    #[test]
    fn plain_text_is_a_single_span(text in "[a-zA-Z0-9 .,;:?'\"-]{1,60}") {
        prop_assert_eq!(tokenize(&text).unwrap(), vec![TextSpan::plain(text.clone())]);
    }

    #[test]
    fn balanced_markup_keeps_its_text(runs in prop::collection::vec((any::<u8>(), "[a-z]{1,8}"), 1..12)) {
        let mut markdown = String::new();
        let mut expected_text = String::new();
        let mut expected_kinds = Vec::new();
        for (kind, word) in &runs {
            let (markup, span_kind) = formatted(*kind, word);
            markdown.push(' ');
            markdown.push_str(&markup);
            expected_text.push(' ');
            expected_text.push_str(word);
            expected_kinds.push(span_kind);
        }

        let spans = tokenize(&markdown).unwrap();
        let text: String = spans.iter().map(|span| span.text.as_str()).collect();
        prop_assert_eq!(text, expected_text);

        let kinds: Vec<SpanKind> = spans
            .iter()
            .map(|span| span.kind)
            .filter(|kind| *kind != SpanKind::Plain)
            .collect();
        let expected_kinds: Vec<SpanKind> = expected_kinds
            .into_iter()
            .filter(|kind| *kind != SpanKind::Plain)
            .collect();
        prop_assert_eq!(kinds, expected_kinds);
    }

    #[test]
    fn odd_bold_delimiters_fail(words in prop::collection::vec("[a-z ]{0,8}", 1..6)) {
        let mut parts = words.clone();
        if parts.len() % 2 == 1 {
            parts.push("tail".to_string());
        }
        // an even number of parts joins with an odd number of delimiters
        let markdown = parts.join("**");
        let is_unterminated = matches!(
            tokenize(&markdown),
            Err(Error::UnterminatedDelimiter { ref delimiter, .. }) if delimiter == "**"
        );
        prop_assert!(is_unterminated);
    }

    #[test]
    fn images_are_never_links(alt in "[a-z ]{0,10}", url in "[a-z./:]{0,20}") {
        let spans = tokenize(&format!("![{alt}]({url})")).unwrap();
        prop_assert_eq!(spans, vec![TextSpan::image(alt.clone(), url.clone())]);
    }
}
