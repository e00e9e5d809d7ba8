use super::*;

#[test]
fn hero_sequence_is_strictly_increasing() {
    for pair in HERO_SEQUENCE.windows(2) {
        assert!(pair[0].1 < pair[1].1, "{:?} should enter before {:?}", pair[0].0, pair[1].0);
    }
}

#[test]
fn hero_starts_after_nav_bar() {
    assert!(HERO_SEQUENCE.iter().all(|(_, delay)| *delay > NAV_ENTRANCE_DELAY_SECS));
}

#[test]
fn every_step_has_a_delay() {
    for step in [HeroStep::Avatar, HeroStep::Name, HeroStep::Headline, HeroStep::Actions] {
        assert!(entrance_delay(step) > 0.0, "{step:?}");
    }
    assert_eq!(entrance_delay(HeroStep::Actions), 2.0);
}

#[test]
fn entrance_style_uses_step_delay() {
    assert_eq!(entrance_style(HeroStep::Name), "animation-delay:1.4s");
}
