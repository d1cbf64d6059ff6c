use crate::harness::{lex_chunks, Annotator, ChunkedInput};
use tagsoup::{Diagnostic, IgnoreDiagnostics, Lexer, MemorySettings, Settings};

const INPUT: &str = "<html>\
                     <input type=\"text\"/>\
                     <script type=\"text/javascript\">alert('123');</script>\
                     <!--[if IE]>...<![endif]-->\
                     <table><tr><td>blah</td></tr></table>\
                     </html>";

fn settings(size_limit: usize) -> Settings<'static> {
    Settings {
        memory_settings: MemorySettings {
            size_limit: Some(size_limit),
            ..MemorySettings::default()
        },
        ..Settings::default()
    }
}

fn annotate_with_limit(chunks: &[&[u8]], size_limit: usize) -> String {
    let mut lexer =
        Lexer::try_new(settings(size_limit), Annotator::default(), IgnoreDiagnostics).unwrap();

    for chunk in chunks {
        lexer.write(chunk);
    }

    lexer.end().0.finish()
}

#[test]
fn single_chunk_input() {
    assert_eq!(INPUT.len(), 150);

    for size_limit in 0..INPUT.len() {
        assert_eq!(
            annotate_with_limit(&[INPUT.as_bytes()], size_limit),
            "+html -html(e)",
            "Size limit: {size_limit}"
        );
    }
}

#[test]
fn byte_by_byte_input() {
    let input = ChunkedInput::from(INPUT);
    let chunks = input.bytes();

    let cases = [
        (0..6, "+html -html(e)"),
        (6..26, "+html +input:type=\"text\" -input(b) -html(e)"),
        (
            26..57,
            "+html +input:type=\"text\" -input(b) +script:type=\"text/javascript\" -script(e) \
             -html(e)",
        ),
        (
            57..79,
            "+html +input:type=\"text\" -input(b) +script:type=\"text/javascript\" \
             'alert('123');' -script(e) -html(e)",
        ),
        (
            79..113,
            "+html +input:type=\"text\" -input(b) +script:type=\"text/javascript\" \
             'alert('123');' -script(e) [ie:[if IE]>...<![endif]] +table -table(e) -html(e)",
        ),
        (
            113..117,
            "+html +input:type=\"text\" -input(b) +script:type=\"text/javascript\" \
             'alert('123');' -script(e) [ie:[if IE]>...<![endif]] +table +tr -tr(e) \
             -table(e) -html(e)",
        ),
        (
            117..121,
            "+html +input:type=\"text\" -input(b) +script:type=\"text/javascript\" \
             'alert('123');' -script(e) [ie:[if IE]>...<![endif]] +table +tr +td -td(e) \
             -tr(e) -table(e) -html(e)",
        ),
        (
            121..160,
            "+html +input:type=\"text\" -input(b) +script:type=\"text/javascript\" \
             'alert('123');' -script(e) [ie:[if IE]>...<![endif]] +table +tr +td 'blah' \
             -td(e) -tr(e) -table(e) -html(e)",
        ),
    ];

    for (range, expected) in cases {
        for size_limit in range {
            assert_eq!(
                annotate_with_limit(&chunks, size_limit),
                expected,
                "Size limit: {size_limit}"
            );
        }
    }
}

#[test]
fn exceeding_is_reported_once() {
    let chunks = ["<p>", "abc", "<b>", "def"];
    let result = lex_chunks(&chunks, settings(4));

    assert!(result.size_limit_exceeded);

    assert_eq!(
        result.diagnostics,
        [(
            1,
            Diagnostic::SizeLimitExceeded(tagsoup::BudgetExceededError {
                current_usage: 6,
                max: 4
            })
        )]
    );
}

#[test]
fn no_limit() {
    let result = lex_chunks(&[INPUT], Settings::default());

    assert!(!result.size_limit_exceeded);
    assert_eq!(result.raw, INPUT.as_bytes());
}
