//! Notation formatters: read-only projections of a constructed pattern.
//!
//! Output is a byte-exact external contract. The local-siteswap string keeps
//! the literal `<`/`>`/`|` markers of the original HTML pages, and the
//! JoePass header targets that tool's parser, so separators and header
//! prefixes must be reproduced exactly.

use super::core::Pattern;
use crate::types::throw::{ratio_str, Throw};
use num_rational::Ratio;

/// Letter naming a juggler: `A` for juggler 0, `B` for juggler 1, ...
fn juggler_letter(juggler: usize) -> char {
    (b'A' + juggler as u8) as char
}

/// Plain-language name of a throw, by global height.
fn throw_name(global: u32) -> &'static str {
    match global {
        0 => "empty",
        1 => "zip",
        2 => "hold",
        3 => "zap",
        4 => "pass",
        5 => "double hef",
        6 => "double",
        7 => "triple",
        _ => "quad or higher",
    }
}

impl Pattern {
    /// Local throws of a single juggler: every `num_jugglers`-th entry of
    /// the local sequence, starting at the juggler's own index.
    fn juggler_throws(&self, juggler: usize) -> impl Iterator<Item = &Throw> {
        self.local_throws()
            .iter()
            .skip(juggler)
            .step_by(self.num_jugglers())
    }

    /// Local siteswap string for inclusion in an HTML document:
    /// `< 1.5d 3 ... | ... >`, one `|`-separated section per juggler, each
    /// throw labeled with its destination hand letter when it is a pass.
    pub fn local_siteswap(&self) -> String {
        let mut out = String::from("< ");
        for juggler in 0..self.num_jugglers() {
            for throw in self.juggler_throws(juggler) {
                out.push_str(&throw.to_string());
                out.push(' ');
            }
            if juggler + 1 < self.num_jugglers() {
                out.push_str("| ");
            }
        }
        out.push('>');
        out
    }

    /// Prechac-style string: per-juggler sequences with `p`/`x` pass and
    /// cross markers and the destination juggler's letter.
    pub fn prechac(&self) -> String {
        let jugglers: Vec<String> = (0..self.num_jugglers())
            .map(|juggler| {
                self.juggler_throws(juggler)
                    .map(prechac_throw)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        format!("< {} >", jugglers.join(" | "))
    }

    /// JoePass-compatible rendering: header lines declaring the object
    /// count and per-juggler throw delays, then one `<..|..>` block per
    /// beat listing every juggler's throw. Each header line and the body
    /// line end with the caller-selected terminator.
    pub fn joepass(&self, line_end: &str) -> String {
        let jugglers = self.num_jugglers();
        let mut out = String::new();

        out.push_str("#sx");
        out.push_str(line_end);
        out.push_str(&format!("#objectCount {}", self.num_props()));
        out.push_str(line_end);
        for juggler in 1..jugglers {
            let delay = Ratio::new(juggler as i64, jugglers as i64);
            out.push_str(&format!(
                "#jugglerDelay {} {}",
                juggler + 1,
                ratio_str(delay)
            ));
            out.push_str(line_end);
        }
        out.push_str("#D -");
        out.push_str(line_end);

        for beat in self.local_throws().chunks(jugglers) {
            let block: Vec<String> = beat.iter().map(joepass_throw).collect();
            out.push('<');
            out.push_str(&block.join("|"));
            out.push('>');
        }
        out.push_str(line_end);

        out
    }

    /// Plain-language description, one line per juggler, throws classified
    /// by height and self/straight/diagonal.
    pub fn describe(&self, line_end: &str) -> String {
        let mut out = String::new();
        for juggler in 0..self.num_jugglers() {
            let throws: Vec<String> = self
                .juggler_throws(juggler)
                .map(describe_throw)
                .collect();
            out.push_str(&format!(
                "Juggler {}: {}",
                juggler_letter(juggler),
                throws.join(", ")
            ));
            out.push_str(line_end);
        }
        out
    }
}

fn prechac_throw(throw: &Throw) -> String {
    let mut s = throw.swap_str();
    if throw.is_pass {
        s.push('p');
        if throw.requires_cross_sign() {
            s.push('x');
        }
        s.push(juggler_letter(throw.destination_juggler));
    }
    s
}

fn joepass_throw(throw: &Throw) -> String {
    let mut s = throw.swap_str();
    if throw.is_pass {
        s.push('p');
        s.push_str(&(throw.destination_juggler + 1).to_string());
        if throw.requires_cross_sign() {
            s.push('x');
        }
    }
    s
}

fn describe_throw(throw: &Throw) -> String {
    let name = throw_name(throw.global);
    if throw.is_pass {
        let direction = if throw.is_diagonal {
            "diagonal"
        } else {
            "straight"
        };
        format!(
            "{} ({} pass to {})",
            name,
            direction,
            juggler_letter(throw.destination_juggler)
        )
    } else {
        format!("{} (self)", name)
    }
}
