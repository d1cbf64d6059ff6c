use crate::harness::{lex, lex_chunks, ChunkedInput};
use itertools::Itertools;
use tagsoup::Settings;

const INPUTS: &[&str] = &[
    "<!DOCTYPE html>\n<html><head><title>a < b</title>\n\
     <script><!--<script>x</script>--></script ignored=\"1\">\
     <style>p { color: red }</STYLE></head>\n\
     <body class=main id='x' hidden><p>one<p>two<br/><img src=a.png>\
     <!--[if IE]>ie<![endif]--><!-- comment --><![CDATA[ c]]d ]]>\
     <table><tr><td>1<td>2</tr></table></body></html>",
    "<a href=\"x&amp;y\" title=x/ b>t</a><?pi?></ bogus><!x y>< p>",
    "<div\n  a\n  =\n  'b'\n>\n</div\n>",
];

#[test]
fn every_split_point() {
    for input in INPUTS {
        let expected = lex(input);

        for chunks in ChunkedInput::from(*input).splits() {
            let actual = lex_chunks(&chunks, Settings::default());

            assert_eq!(actual.tokens, expected.tokens, "chunks: {chunks:?}");
            assert_eq!(actual.diagnostics, expected.diagnostics, "chunks: {chunks:?}");
            assert_eq!(actual.raw, input.as_bytes());
        }
    }
}

#[test]
fn byte_by_byte() {
    for input in INPUTS {
        let expected = lex(input);
        let actual = lex_chunks(&ChunkedInput::from(*input).bytes(), Settings::default());

        assert_eq!(actual.tokens, expected.tokens);
        assert_eq!(actual.diagnostics, expected.diagnostics);
        assert_eq!(actual.doctype, expected.doctype);
    }
}

#[test]
fn empty_chunks_are_ignored() {
    let input = INPUTS[0];
    let expected = lex(input);

    let chunks = input
        .as_bytes()
        .chunks(7)
        .interleave(std::iter::repeat(&b""[..]).take(input.len()))
        .collect::<Vec<_>>();

    let actual = lex_chunks(&chunks, Settings::default());

    assert_eq!(actual.tokens, expected.tokens);
    assert_eq!(actual.raw, input.as_bytes());
}
