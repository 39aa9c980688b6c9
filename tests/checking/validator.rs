#[cfg(test)]
mod verify {
    use abcheck::validate;

    fn tune(music: &str) -> String {
        format!("X:1\nM:4/4\nL:1/4\nK:C\n{}", music)
    }

    #[test]
    fn valid_measure() {
        assert!(validate(&tune("C D E F |")).is_empty());
    }

    #[test]
    fn incomplete_measure() {
        let errors = validate(&tune("C D E |"));
        assert_eq!(errors.len(), 1);

        let error = &errors[0];
        assert_eq!(error.line, 4);
        assert_eq!(error.measure, 0);
        assert_eq!(error.start, 0);
        assert_eq!(error.end, 5);
        assert_eq!(error.expected, 4);
        assert_eq!(error.actual, 3.0);
        assert_eq!(error.message, "Expected 4 beats, got 3.00");
    }

    #[test]
    fn overfilled_measure() {
        let errors = validate(&tune("C D E F G |"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].expected, 4);
        assert_eq!(errors[0].actual, 5.0);
    }

    #[test]
    fn enormous_note_lengths() {
        let errors = validate(&tune("C4294967296 D E F |"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].actual, 4294967299.0);
    }

    #[test]
    fn duration_shorthand() {
        assert!(validate(&tune("C/ D/ E F G |")).is_empty());
        assert!(validate(&tune("C// D// E// F// E F G |")).is_empty());
        assert!(validate(&tune("C/>D/ E F G |")).is_empty());
    }

    #[test]
    fn tuplets() {
        assert!(validate(&tune("(3C D E F G |")).is_empty());
        assert!(validate(&tune("(3C/2 D/2 E/2 F G A |")).is_empty());
        assert!(validate(&tune("(5C D E F G A B |")).is_empty());
        assert!(validate(&tune("(3:2:3C D E F2 |")).is_empty());
    }

    #[test]
    fn line_continuation() {
        assert!(validate(&tune("C D\\ E F |")).is_empty());
    }

    #[test]
    fn rests() {
        assert!(validate(&tune("z C D E |")).is_empty());
        assert!(validate(&tune("z/ z/ C D E |")).is_empty());
    }

    #[test]
    fn chords() {
        assert!(validate(&tune("[CEG] D E F |")).is_empty());
        assert!(validate(&tune("[CEG]2 E F |")).is_empty());
    }

    #[test]
    fn complex_measures() {
        assert!(validate(&tune("z/2 (3C/2 C/2 C/2 G/>A/ A A/2 |")).is_empty());

        let errors = validate(&tune("z/2 (3C/2 C/2 C/2 G/>A/ A A A A B |"));
        assert_eq!(errors.len(), 1);
        assert!((errors[0].actual - 7.5).abs() < 0.05);
    }

    #[test]
    fn tolerance_boundary() {
        // 1004 thousandths of a whole note is 4.016 quarter note beats; 1001
        // is 4.004
        let text = "X:1\nM:4/4\nL:1/1000\nK:C\nC1001 |\nC1004 |";
        let errors = validate(text);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 5);
    }

    #[test]
    fn header_fields_override() {
        let text = "X:1\nM:4/4\nL:1/8\nK:D\nM:3/4\nL:1/4\nA B c |";
        assert!(validate(text).is_empty());
    }

    #[test]
    fn defaults_without_header() {
        // 4/4 with eighth notes
        assert!(validate("CDEF GABc | cBAG FEDC |").is_empty());
        assert_eq!(validate("CDEF GAB |").len(), 1);
    }

    #[test]
    fn common_and_cut_time() {
        assert!(validate("M:C\nL:1/4\nC D E F |").is_empty());
        assert!(validate("M:C|\nL:1/2\nC D |").is_empty());
    }

    #[test]
    fn six_eight() {
        assert!(validate("M:6/8\nL:1/8\nK:G\nGAB cde | d3 B3 |").is_empty());
    }

    #[test]
    fn comments_and_fields_skipped() {
        let text = "X:1\nM:4/4\nL:1/4\n% C D |\nw:la la | la\nK:C\nC D E F |";
        assert!(validate(text).is_empty());
    }

    #[test]
    fn measure_index_counts_evaluated_measures_only() {
        let errors = validate(&tune("|: C D E F :|[1 G2 :| C D E | F |"));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].measure, 0);
        assert_eq!(errors[1].measure, 1);
    }

    #[test]
    fn final_bar() {
        assert!(validate(&tune("C D E F | G A B c |]")).is_empty());
        assert!(validate(&tune("C D E F |] G A B c |")).is_empty());
    }

    #[test]
    fn errors_on_every_line() {
        let errors = validate(&tune("C D E |\nC D E F |\nC |"));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].line, 4);
        assert_eq!(errors[1].line, 6);
        assert_eq!(errors[1].actual, 1.0);
    }

    #[test]
    fn decorations_do_not_count() {
        assert!(validate(&tune("!fermata!C \"Am\"D \"^slowly\"E {ag}F |")).is_empty());
    }

    #[test]
    fn idempotent() {
        let text = tune("C D E | (3CDE F2 G |");
        assert_eq!(validate(&text), validate(&text));
    }
}
