use super::*;

#[test]
fn arrows_map_to_horizontal_navigation() {
    assert_eq!(
        action_for_key(&Key::Named(NamedKey::ArrowLeft)),
        Some(Action::Left)
    );
    assert_eq!(
        action_for_key(&Key::Named(NamedKey::ArrowRight)),
        Some(Action::Right)
    );
}

#[test]
fn enter_and_space_accept() {
    assert_eq!(
        action_for_key(&Key::Named(NamedKey::Enter)),
        Some(Action::Accept)
    );
    assert_eq!(
        action_for_key(&Key::Named(NamedKey::Space)),
        Some(Action::Accept)
    );
}

#[test]
fn escape_cancels() {
    assert_eq!(
        action_for_key(&Key::Named(NamedKey::Escape)),
        Some(Action::Cancel)
    );
}

#[test]
fn unrelated_keys_are_ignored() {
    assert_eq!(action_for_key(&Key::Named(NamedKey::ArrowUp)), None);
    assert_eq!(action_for_key(&Key::Named(NamedKey::Tab)), None);
    assert_eq!(
        action_for_key(&Key::Character(winit::keyboard::SmolStr::new("a"))),
        None
    );
}
