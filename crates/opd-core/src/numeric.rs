//! Lenient numeric parsing for hand-typed desk fields.
//!
//! Vitals and ages arrive as whatever the receptionist typed: `"98.6F"`,
//! `"28 yrs"`, `"AFEBRILE"`. Parsing never fails; text without digits reads
//! as `0.0`.

/// Parse the longest run of digits (with at most one decimal point) found
/// anywhere in `text`. Returns `0.0` when there is no digit at all.
///
/// Ties between equally long runs go to the first one.
/// Length counts the decimal point, and a point may start a run, so in
/// `"99.9.9.9999"` the run `.9999` beats `99.9` and the result is `0.9999`.
pub fn parse_lenient(text: &str) -> f64 {
    let mut best = "";
    let mut start: Option<usize> = None;
    let mut seen_dot = false;

    for (i, c) in text.char_indices() {
        match c {
            '0'..='9' => {
                if start.is_none() {
                    start = Some(i);
                    seen_dot = false;
                }
            }
            '.' => match start {
                Some(s) if seen_dot => {
                    // A second point ends this run and begins the next one.
                    keep_longer(text, s, i, &mut best);
                    start = Some(i);
                }
                Some(_) => seen_dot = true,
                None => {
                    start = Some(i);
                    seen_dot = true;
                }
            },
            _ => {
                if let Some(s) = start.take() {
                    keep_longer(text, s, i, &mut best);
                }
            }
        }
    }
    if let Some(s) = start {
        keep_longer(text, s, text.len(), &mut best);
    }

    best.trim_end_matches('.').parse().unwrap_or(0.0)
}

fn keep_longer<'a>(text: &'a str, start: usize, end: usize, best: &mut &'a str) {
    let run = &text[start..end];
    if run.bytes().any(|b| b.is_ascii_digit()) && run.len() > best.len() {
        *best = run;
    }
}

/// Split a `"systolic/diastolic"` reading. Without a `/` both halves are
/// `0.0`; a missing or garbled half reads as `0.0` on its own.
pub fn parse_blood_pressure(text: &str) -> (f64, f64) {
    match text.split_once('/') {
        Some((systolic, diastolic)) => (parse_lenient(systolic), parse_lenient(diastolic)),
        None => (0.0, 0.0),
    }
}
