use super::*;

#[test]
fn splash_starts_loading_with_overlay() {
    let state = SplashState::default();
    assert!(state.is_loading());
    assert!(state.overlay_mounted());
    assert_eq!(state.overlay_class(), "splash");
}

#[test]
fn finish_transitions_exactly_once() {
    let mut state = SplashState::default();
    assert!(state.finish());
    assert!(!state.is_loading());
    assert!(!state.finish());
    assert!(!state.finish());
    assert_eq!(state, SplashState::Exiting);
}

#[test]
fn overlay_stays_mounted_during_exit() {
    let mut state = SplashState::default();
    state.finish();
    assert!(state.overlay_mounted());
    assert_eq!(state.overlay_class(), "splash splash--exit");
}

#[test]
fn retire_requires_finish_first() {
    let mut state = SplashState::default();
    assert!(!state.retire());
    assert_eq!(state, SplashState::Loading);
}

#[test]
fn loaded_is_terminal() {
    let mut state = SplashState::default();
    state.finish();
    assert!(state.retire());
    assert_eq!(state, SplashState::Done);
    assert!(!state.overlay_mounted());

    assert!(!state.finish());
    assert!(!state.retire());
    assert!(!state.is_loading());
}

#[test]
fn splash_timings_are_fixed() {
    assert_eq!(SPLASH_DELAY.as_millis(), 800);
    assert!(SPLASH_EXIT > Duration::ZERO);
}
