use opd_export::layout::wrap_text;

#[test]
fn short_lines_are_untouched() {
    assert_eq!(wrap_text("RX:\n\n1. ORS", 10), "RX:\n\n1. ORS");
}

#[test]
fn long_lines_break_at_spaces() {
    assert_eq!(
        wrap_text("TAB. PARACETAMOL 650mg after food", 16),
        "TAB. PARACETAMOL\n650mg after food"
    );
}

#[test]
fn overlong_words_are_split() {
    assert_eq!(wrap_text("ACECLOFENAC", 4), "ACEC\nLOFE\nNAC");
    assert_eq!(wrap_text("a ACECLOFENAC b", 5), "a\nACECL\nOFENA\nC b");
}

#[test]
fn zero_width_disables_wrapping() {
    let text = "a very long line that would otherwise wrap";
    assert_eq!(wrap_text(text, 0), text);
}
