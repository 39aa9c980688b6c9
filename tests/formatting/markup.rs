#[cfg(test)]
mod examples {
    use abcheck::highlight;

    #[test]
    fn simple_note_sequence() {
        let result = highlight("C D E F");
        assert!(result.contains(r#"<span class="abc-note">C</span>"#));
        assert!(result.contains(r#"<span class="abc-note">D</span>"#));
        assert!(result.contains(r#"<span class="abc-note">E</span>"#));
        assert!(result.contains(r#"<span class="abc-note">F</span>"#));
    }

    #[test]
    fn notes_with_durations() {
        let result = highlight("C2 D/2 E3/2");
        assert!(result.contains(
            r#"<span class="abc-note">C</span><span class="abc-duration abc-duration-long">2</span>"#
        ));
        assert!(result.contains(
            r#"<span class="abc-note">D</span><span class="abc-duration abc-duration-short">/2</span>"#
        ));
        assert!(result.contains(
            r#"<span class="abc-note">E</span><span class="abc-duration abc-duration-fraction">3/2</span>"#
        ));
    }

    #[test]
    fn accidentals() {
        let result = highlight("^C _D =E");
        assert!(result.contains(r#"<span class="abc-accidental">^</span>"#));
        assert!(result.contains(r#"<span class="abc-accidental">_</span>"#));
        assert!(result.contains(r#"<span class="abc-accidental">=</span>"#));
    }

    #[test]
    fn bar_lines() {
        let result = highlight("C | D || E |: F :| G");
        assert!(result.contains(r#"<span class="abc-bar">|</span>"#));
        assert!(result.contains(r#"<span class="abc-bar">||</span>"#));
        assert!(result.contains(r#"<span class="abc-bar">|:</span>"#));
        assert!(result.contains(r#"<span class="abc-bar">:|</span>"#));
    }

    #[test]
    fn tuplets_distinct_from_slurs() {
        let result = highlight("(3CDE (FG)");
        assert!(result.contains(r#"<span class="abc-tuplet">(3</span>"#));
        assert!(result.contains(r#"<span class="abc-slur abc-slur-level-0">(</span>"#));
        assert!(result.contains(r#"<span class="abc-slur abc-slur-level-0">)</span>"#));
    }

    #[test]
    fn slur_followed_by_tuplet() {
        let result = highlight("((3CDE)");
        assert!(result.contains(r#"<span class="abc-slur abc-slur-level-0">(</span>"#));
        assert!(result.contains(r#"<span class="abc-tuplet">(3</span>"#));
        assert!(result.contains(r#"<span class="abc-slur abc-slur-level-0">)</span>"#));
    }

    #[test]
    fn consecutive_tuplets() {
        let result = highlight("(3CDE (3FGA");
        let count = result
            .matches(r#"<span class="abc-tuplet">(3</span>"#)
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn tuplet_with_nested_slurs() {
        let result = highlight("(3(AB))");
        let count = result
            .matches(r#"abc-slur-level-0">)</span>"#)
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn chord_brackets() {
        let result = highlight("[CEG]");
        assert!(result.contains(r#"<span class="abc-chord">[</span>"#));
        assert!(result.contains(r#"<span class="abc-chord">]</span>"#));
    }

    #[test]
    fn complex_music_line() {
        let result = highlight("^C2 D/2 | [CEG] (3DEF | (AB) |");
        for class in [
            "abc-accidental",
            "abc-duration-long",
            "abc-duration-short",
            "abc-bar",
            "abc-chord",
            "abc-tuplet",
            "abc-slur",
        ] {
            assert!(result.contains(class), "missing {}", class);
        }
    }

    #[test]
    fn meta_fields() {
        let result = highlight("X:1\nT:Test\nM:4/4\nK:C");
        assert!(result.contains(r#"<span class="abc-meta-key">X:</span>"#));
        assert!(result.contains(r#"<span class="abc-meta-value">1</span>"#));
        assert!(result.contains(r#"<span class="abc-meta-key">T:</span>"#));
        assert!(result.contains(r#"<span class="abc-meta-value">Test</span>"#));
    }

    #[test]
    fn lyrics_fields() {
        let result = highlight("w:doh re mi");
        assert!(result.contains(r#"<span class="abc-lyrics-key">w:</span>"#));
        assert!(result.contains(r#"<span class="abc-lyrics-value">doh re mi</span>"#));
    }

    #[test]
    fn comment_lines() {
        let result = highlight("% This is a comment");
        assert_eq!(
            result,
            r#"<span class="abc-comment">% This is a comment</span>"#
        );
    }

    #[test]
    fn multiple_lines() {
        let result = highlight("X:1\nT:Test\n% Comment\nC D E F |");
        assert!(result.contains("abc-meta-key"));
        assert!(result.contains("abc-comment"));
        assert!(result.contains("abc-note"));
        assert!(result.contains("abc-bar"));
    }

    #[test]
    fn preserves_line_breaks() {
        let result = highlight("C D\nE F");
        assert_eq!(
            result
                .split('\n')
                .count(),
            2
        );
    }

    #[test]
    fn escapes_markup() {
        let result = highlight("T:Rock & Roll\nA>B \"<i>\"c");
        assert!(result.contains(r#"<span class="abc-meta-value">Rock &amp; Roll</span>"#));
        assert!(result.contains(r#"<span class="abc-broken-rhythm">&gt;</span>"#));
        assert!(result.contains(r#"<span class="abc-annotation">&quot;&lt;i&gt;&quot;</span>"#));
    }
}
