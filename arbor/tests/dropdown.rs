use arbor::prelude::*;

fn fruit() -> Vec<Item> {
    vec![Item::leaf("Apple"), Item::leaf("Banana"), Item::leaf("Avocado")]
}

fn press(dropdown: &mut Dropdown<Item>, key: Key) -> EventResult {
    dropdown.on_key(&KeyCombo::key(key))
}

fn type_text(dropdown: &mut Dropdown<Item>, text: &str) {
    for c in text.chars() {
        press(dropdown, Key::Char(c));
    }
}

#[test]
fn test_open_keys() {
    for key in [Key::Enter, Key::Char(' '), Key::Down] {
        let mut dropdown = Dropdown::new(ControllerConfig::new(fruit()));
        assert_eq!(press(&mut dropdown, key), EventResult::Consumed);
        assert!(dropdown.is_open());
    }

    let mut dropdown = Dropdown::new(ControllerConfig::new(fruit()));
    assert_eq!(press(&mut dropdown, Key::Up), EventResult::Ignored);
    assert_eq!(press(&mut dropdown, Key::Char('a')), EventResult::Ignored);
    assert!(!dropdown.is_open());
}

#[test]
fn test_type_navigate_and_pick_single() {
    let mut dropdown = Dropdown::new(ControllerConfig::new(fruit()));
    press(&mut dropdown, Key::Enter);
    type_text(&mut dropdown, "av");
    assert_eq!(dropdown.query(), "av");
    assert_eq!(dropdown.list().visible_len(), 1);

    press(&mut dropdown, Key::Down);
    assert_eq!(dropdown.list().focused_id(), Some("Avocado"));

    press(&mut dropdown, Key::Enter);
    assert!(!dropdown.is_open());
    assert_eq!(dropdown.selected_labels(), vec!["Avocado"]);
    assert_eq!(dropdown.query(), "");
    assert_eq!(dropdown.list().visible_len(), 3);
    assert_eq!(dropdown.list().focused_id(), None);
}

#[test]
fn test_multi_select_stays_open() {
    let mut dropdown = Dropdown::new(ControllerConfig::new(fruit()).multi_select());
    dropdown.open();
    dropdown.activate_item("Banana");
    dropdown.activate_item("Apple");
    assert!(dropdown.is_open());
    assert_eq!(dropdown.selected_labels(), vec!["Apple", "Banana"]);
}

#[test]
fn test_escape_closes_without_selecting() {
    let mut dropdown = Dropdown::new(ControllerConfig::new(fruit()));
    dropdown.open();
    press(&mut dropdown, Key::Down);
    assert_eq!(press(&mut dropdown, Key::Escape), EventResult::Consumed);
    assert!(!dropdown.is_open());
    assert!(dropdown.selected_labels().is_empty());
}

#[test]
fn test_backspace_widens_results() {
    let mut dropdown = Dropdown::new(ControllerConfig::new(fruit()));
    dropdown.open();
    type_text(&mut dropdown, "avx");
    assert_eq!(dropdown.list().visible_len(), 0);
    press(&mut dropdown, Key::Backspace);
    assert_eq!(dropdown.list().visible_len(), 1);
    press(&mut dropdown, Key::Backspace);
    press(&mut dropdown, Key::Backspace);
    assert_eq!(dropdown.query(), "");
    // Backspace on an empty query does nothing.
    press(&mut dropdown, Key::Backspace);
    assert_eq!(dropdown.list().visible_len(), 3);
}

#[test]
fn test_open_focuses_selected_option() {
    let mut dropdown = Dropdown::new(ControllerConfig::new(fruit()).selected(["Banana"]));
    dropdown.open();
    assert_eq!(dropdown.list().focused_id(), Some("Banana"));
}

#[test]
fn test_event_order_on_pick() {
    let mut dropdown = Dropdown::new(ControllerConfig::new(fruit()));
    dropdown.open();
    dropdown.activate_item("Apple");

    let events = dropdown.drain_events();
    assert_eq!(events.first(), Some(&DropdownEvent::Opened));
    assert_eq!(events.last(), Some(&DropdownEvent::Closed));
    assert!(events.contains(&DropdownEvent::List(ControllerEvent::ItemActivated(
        Item::leaf("Apple")
    ))));
}

#[test]
fn test_modified_keys_ignored() {
    let mut dropdown = Dropdown::new(ControllerConfig::new(fruit()));
    assert_eq!(
        dropdown.on_key(&KeyCombo::key(Key::Enter).ctrl()),
        EventResult::Ignored
    );
    assert!(!dropdown.is_open());
}

#[test]
fn test_with_list_forwards_events() {
    let mut dropdown = Dropdown::new(ControllerConfig::new(fruit()).multi_select());
    dropdown.with_list(|list| list.select_all());
    let events = dropdown.drain_events();
    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0],
        DropdownEvent::List(ControllerEvent::SelectionChanged(items)) if items.len() == 3
    ));
}

#[test]
fn test_toggle_open() {
    let mut dropdown = Dropdown::new(ControllerConfig::new(fruit()));
    dropdown.toggle_open();
    assert!(dropdown.is_open());
    dropdown.toggle_open();
    assert!(!dropdown.is_open());
}
