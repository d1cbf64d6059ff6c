use crate::harness::{lex, lex_chunks, TestToken};
use encoding_rs::UTF_8;
use tagsoup::*;

fn start(name: &str, attributes: &[(&str, Option<&str>)], line: usize) -> TestToken {
    TestToken::StartTag {
        name: name.into(),
        attributes: attributes
            .iter()
            .map(|(n, v)| (n.to_string(), v.map(String::from)))
            .collect(),
        line,
    }
}

fn end(name: &str, style: CloseStyle, line: usize) -> TestToken {
    TestToken::EndTag {
        name: name.into(),
        style,
        line,
    }
}

fn text(text: &str) -> TestToken {
    TestToken::Text(text.into())
}

#[test]
fn lines() {
    let result = lex("<div\nid=a>\n<!--\nc-->\n<br>\n</div>");

    assert_eq!(
        result.tokens,
        [
            start("div", &[("id", Some("a"))], 1),
            text("\n"),
            TestToken::Comment("\nc".into(), 3),
            text("\n"),
            start("br", &[], 5),
            end("br", CloseStyle::Implicit, 5),
            text("\n"),
            end("div", CloseStyle::Explicit, 6),
        ]
    );
}

#[test]
fn markup_tokens() {
    let result = lex("<!DOCTYPE html><!--x--><!--[if IE]>y<![endif]--><![CDATA[z]]>");

    assert_eq!(
        result.tokens,
        [
            TestToken::Directive("DOCTYPE html".into(), 1),
            TestToken::Comment("x".into(), 1),
            TestToken::IeDirective("[if IE]>y<![endif]".into(), 1),
            TestToken::Cdata("z".into(), 1),
        ]
    );
}

#[test]
fn raw_bytes() {
    let mut raws = Vec::new();

    let lexer_input = "<A HREF = 'x'>t</a ><br><!-- c --></p>";

    let mut lexer = Lexer::new(
        |token: &Token<'_>| raws.push(token.raw().as_string(UTF_8)),
        IgnoreDiagnostics,
    );

    lexer.write(lexer_input.as_bytes());
    lexer.end();

    assert_eq!(
        raws,
        ["<A HREF = 'x'>", "t", "</a >", "<br>", "", "<!-- c -->", "</p>"]
    );
}

#[test]
fn start_tag_accessors() {
    let mut checked = false;

    let mut lexer = Lexer::new(
        |token: &Token<'_>| {
            if let Token::StartTag(tag) = token {
                assert_eq!(tag.keyword(), Keyword::Img);
                assert_eq!(tag.name().as_string(UTF_8), "IMG");

                let src = tag.attribute("src").unwrap();

                assert_eq!(src.keyword(), Keyword::Src);
                assert_eq!(src.quote(), QuoteStyle::Double);
                assert_eq!(src.value().unwrap().as_string(UTF_8), "a&amp;b.png");
                assert_eq!(src.decoded_value().as_deref(), Some(&b"a&b.png"[..]));

                let alt = tag.attribute("ALT").unwrap();

                assert_eq!(alt.quote(), QuoteStyle::Single);
                assert_eq!(alt.value().unwrap().as_string(UTF_8), "");

                let async_attr = tag.attribute("async").unwrap();

                assert_eq!(async_attr.quote(), QuoteStyle::None);
                assert!(async_attr.value().is_none());

                assert!(tag.attribute("title").is_none());

                checked = true;
            }
        },
        IgnoreDiagnostics,
    );

    lexer.write(b"<IMG Src=\"a&amp;b.png\" alt='' async>");
    lexer.end();

    assert!(checked);
}

#[test]
fn end_tag_keywords_and_names() {
    let mut ends = Vec::new();

    let mut lexer = Lexer::new(
        |token: &Token<'_>| {
            if let Token::EndTag(tag) = token {
                ends.push((tag.name().as_string(UTF_8), tag.keyword(), tag.style()));
            }
        },
        IgnoreDiagnostics,
    );

    lexer.write(b"<Table><TR><td></TABLE><x-custom/>");
    lexer.end();

    assert_eq!(
        ends,
        [
            ("td".to_string(), Keyword::Td, CloseStyle::Unclosed),
            ("TR".to_string(), Keyword::Tr, CloseStyle::Unclosed),
            ("Table".to_string(), Keyword::Table, CloseStyle::Explicit),
            ("x-custom".to_string(), Keyword::NotAKeyword, CloseStyle::Brief),
        ]
    );
}

#[test]
fn doctype_detection() {
    assert_eq!(lex("<p>").doctype, DocType::Unknown);
    assert_eq!(lex("<!doctype html>").doctype, DocType::Html5);
    assert_eq!(lex("<!foo bar>").doctype, DocType::Unknown);

    let xhtml = lex_chunks(
        &["<!DOCTYPE html>"],
        Settings {
            content_type: "application/xhtml+xml",
            ..Settings::default()
        },
    );

    assert_eq!(xhtml.doctype, DocType::Xhtml5);

    let strict = lex(
        "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \
         \"http://www.w3.org/TR/html4/strict.dtd\">",
    );

    assert_eq!(strict.doctype, DocType::Html4Strict);

    // NOTE: the last doctype wins.
    assert_eq!(lex("<!doctype html><!doctype foo>").doctype, DocType::Other);
}

#[test]
fn closes_at_end_of_input() {
    let result = lex("<html><body><p>text");

    assert_eq!(
        result.tokens,
        [
            start("html", &[], 1),
            start("body", &[], 1),
            start("p", &[], 1),
            text("text"),
            end("p", CloseStyle::Unclosed, 1),
            end("body", CloseStyle::Unclosed, 1),
            end("html", CloseStyle::Unclosed, 1),
        ]
    );
}
