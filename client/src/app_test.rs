use super::*;

const STYLESHEET: &str = include_str!("../style/portfolio.css");

/// Declarations of the top-level rule for `selector`.
fn rule(selector: &str) -> &'static str {
    let open = format!("\n{selector} {{");
    let start = STYLESHEET.find(&open).unwrap_or_else(|| panic!("{selector} rule missing")) + open.len();
    let end = start + STYLESHEET[start..].find('}').unwrap();
    &STYLESHEET[start..end]
}

fn declaration<'a>(body: &'a str, property: &str) -> &'a str {
    body.lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(property).and_then(|rest| rest.strip_prefix(':')))
        .unwrap_or_else(|| panic!("{property} missing"))
        .trim()
        .trim_end_matches(';')
}

fn z_index(selector: &str) -> i32 {
    declaration(rule(selector), "z-index").parse().unwrap()
}

// =============================================================
// Stylesheet stacking
// =============================================================

#[test]
fn cursor_stacks_above_everything() {
    let cursor = z_index(".cursor");
    for layer in [".splash", ".nav-bar"] {
        assert!(cursor > z_index(layer), "cursor below {layer}");
    }
}

#[test]
fn splash_covers_navigation() {
    assert!(z_index(".splash") > z_index(".nav-bar"));
}

#[test]
fn splash_exit_fades_while_scaling_up() {
    let exit = rule(".splash--exit");
    assert_eq!(declaration(exit, "opacity"), "0");
    assert_eq!(declaration(exit, "transform"), "scale(1.1)");
}

#[test]
fn splash_exit_transition_matches_timer() {
    let transition = declaration(rule(".splash"), "transition");
    let secs = crate::state::splash::SPLASH_EXIT.as_secs_f64();
    assert!(transition.contains(&format!("opacity {secs}s")), "{transition}");
}

// =============================================================
// No-script fallback
// =============================================================

#[test]
fn noscript_css_unhides_revealed_content() {
    assert!(NOSCRIPT_REVEAL_CSS.contains(".reveal,.skill-card{opacity:1!important;transform:none!important}"));
    assert!(NOSCRIPT_REVEAL_CSS.contains(".splash,.cursor{display:none}"));
}
