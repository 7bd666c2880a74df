//! Golden-string tests for the notation formatters.
//!
//! Formatter output is an external text contract (HTML snippets, the
//! JoePass header format), so these assert byte-exact strings.

use prechac_core::Pattern;

#[test]
fn local_siteswap_two_jugglers() {
    let p = Pattern::new(2, "633").unwrap();
    assert_eq!(
        p.local_siteswap(),
        "< 1.5d 3 1.5d 1.5b 3 1.5b | 1.5a 1.5c 3 1.5c 1.5a 3 >"
    );
}

#[test]
fn local_siteswap_three_jugglers() {
    let p = Pattern::new(3, "522").unwrap();
    assert_eq!(
        p.local_siteswap(),
        "< 1.67f 1.67c | 0.67d 0.67a | 0.67e 0.67b >"
    );
}

#[test]
fn prechac_two_jugglers() {
    let p = Pattern::new(2, "633").unwrap();
    assert_eq!(
        p.prechac(),
        "< 1.5pB 3 1.5pB 1.5pB 3 1.5pB | 1.5pxA 1.5pxA 3 1.5pxA 1.5pxA 3 >"
    );
}

#[test]
fn prechac_three_jugglers() {
    let p = Pattern::new(3, "522").unwrap();
    assert_eq!(
        p.prechac(),
        "< 1.67pC 1.67pC | 0.67pA 0.67pA | 0.67pB 0.67pB >"
    );
}

#[test]
fn prechac_ultimates_carry_cross_signs() {
    let p = Pattern::new(2, "5").unwrap();
    assert_eq!(p.prechac(), "< 2.5pxB 2.5pxB | 2.5pxA 2.5pxA >");
}

#[test]
fn joepass_two_jugglers() {
    let p = Pattern::new(2, "633").unwrap();
    assert_eq!(
        p.joepass("\n"),
        "#sx\n\
         #objectCount 4\n\
         #jugglerDelay 2 0.5\n\
         #D -\n\
         <1.5p2|1.5p1x><3|1.5p1x><1.5p2|3><1.5p2|1.5p1x><3|1.5p1x><1.5p2|3>\n"
    );
}

#[test]
fn joepass_three_juggler_delays() {
    let p = Pattern::new(3, "522").unwrap();
    assert_eq!(
        p.joepass("\n"),
        "#sx\n\
         #objectCount 3\n\
         #jugglerDelay 2 0.33\n\
         #jugglerDelay 3 0.67\n\
         #D -\n\
         <1.67p3|0.67p1|0.67p2><1.67p3|0.67p1|0.67p2>\n"
    );
}

#[test]
fn joepass_honors_caller_line_terminator() {
    let p = Pattern::new(2, "633").unwrap();
    let out = p.joepass("<br/>");
    assert!(out.starts_with("#sx<br/>#objectCount 4<br/>"));
    assert!(out.ends_with("<br/>"));
    assert!(!out.contains('\n'));
}

#[test]
fn describe_two_jugglers() {
    let p = Pattern::new(2, "633").unwrap();
    assert_eq!(
        p.describe("\n"),
        "Juggler A: zap (straight pass to B), double (self), \
         zap (straight pass to B), zap (straight pass to B), \
         double (self), zap (straight pass to B)\n\
         Juggler B: zap (diagonal pass to A), zap (diagonal pass to A), \
         double (self), zap (diagonal pass to A), zap (diagonal pass to A), \
         double (self)\n"
    );
}

#[test]
fn describe_three_jugglers() {
    let p = Pattern::new(3, "522").unwrap();
    assert_eq!(
        p.describe("<br/>"),
        "Juggler A: double hef (straight pass to C), double hef (straight pass to C)<br/>\
         Juggler B: hold (diagonal pass to A), hold (diagonal pass to A)<br/>\
         Juggler C: hold (diagonal pass to B), hold (diagonal pass to B)<br/>"
    );
}
