use selector::{
    find_element, hit_test, hit_test_any, hit_test_focusable, layout, Buffer, Element, KeyListeners,
    LayoutResult, Part, Props, Rect, SelectOption, Selection, Selector, Theme,
};

const ID: &str = "letters";
const WIDTH: u16 = 30;

fn abc() -> Vec<SelectOption> {
    vec![
        SelectOption::new("A", 1),
        SelectOption::new("B", 2),
        SelectOption::new("C", 3),
    ]
}

fn open_selector() -> (Selector, KeyListeners) {
    let listeners = KeyListeners::new();
    let mut select = Selector::new(ID);
    select.mount(&listeners);
    select.open();
    (select, listeners)
}

fn draw(root: &Element, theme: &Theme) -> (LayoutResult, Buffer) {
    let layout = layout(root, Rect::from_size(WIDTH, 10));
    let mut buf = Buffer::new(WIDTH, 10);
    selector::render::render_to_buffer(root, &layout, theme, &mut buf);
    (layout, buf)
}

// ============================================================================
// Element tree
// ============================================================================

#[test]
fn test_empty_single_shows_placeholder() {
    let options = abc();
    let value = Selection::single();
    let root = Selector::new(ID).render(&Props::new(&options, &value));

    let placeholder = find_element(&root, &Part::Placeholder.id(ID)).unwrap();
    assert_eq!(placeholder.text_content(), Some("Choose an Option"));

    let clear = find_element(&root, &Part::Clear.id(ID)).unwrap();
    assert!(!clear.visible);

    let list = find_element(&root, &Part::Options.id(ID)).unwrap();
    assert!(!list.visible);
}

#[test]
fn test_custom_placeholder() {
    let options = abc();
    let value = Selection::multiple();
    let root = Selector::new(ID)
        .placeholder("Pick letters")
        .render(&Props::new(&options, &value));

    let placeholder = find_element(&root, &Part::Placeholder.id(ID)).unwrap();
    assert_eq!(placeholder.text_content(), Some("Pick letters"));
}

#[test]
fn test_multiple_renders_badges_in_selection_order() {
    let options = abc();
    let value = Selection::Multiple(vec![SelectOption::new("C", 3), SelectOption::new("A", 1)]);
    let root = Selector::new(ID).render(&Props::new(&options, &value));

    assert!(find_element(&root, &Part::Placeholder.id(ID)).is_none());

    let first = find_element(&root, &Part::Badge(0).id(ID)).unwrap();
    assert_eq!(first.child_elements()[0].text_content(), Some("C"));
    let second = find_element(&root, &Part::Badge(1).id(ID)).unwrap();
    assert_eq!(second.child_elements()[0].text_content(), Some("A"));

    assert!(find_element(&root, &Part::Remove(1).id(ID)).is_some());
    assert!(find_element(&root, &Part::Clear.id(ID)).unwrap().visible);
}

#[test]
fn test_option_rows_mark_selected_and_highlighted() {
    let options = abc();
    let value = Selection::Single(Some(SelectOption::new("B", 2)));
    let (select, _listeners) = open_selector();
    let root = select.render(&Props::new(&options, &value));

    let rows: Vec<&Element> = (0..3)
        .map(|i| find_element(&root, &Part::Option(i).id(ID)).unwrap())
        .collect();
    assert!(rows[0].highlighted && !rows[0].selected);
    assert!(rows[1].selected && !rows[1].highlighted);
    assert!(!rows[2].selected && !rows[2].highlighted);
}

#[test]
fn test_disabled_container_is_not_interactive() {
    let options = abc();
    let value = Selection::single();
    let root = Selector::new(ID).disabled().render(&Props::new(&options, &value));
    assert!(root.disabled);
    assert!(!root.clickable);
    assert!(!root.focusable);
}

// ============================================================================
// Painting
// ============================================================================

#[test]
fn test_closed_header_paints_placeholder_and_caret() {
    let options = abc();
    let value = Selection::single();
    let root = Selector::new(ID).render(&Props::new(&options, &value));
    let (_, buf) = draw(&root, &Theme::plain());

    let header = buf.row_text(0);
    assert!(header.starts_with("Choose an Option"));
    assert!(header.trim_end().ends_with("│ ▼"));
    assert_eq!(buf.row_text(1).trim(), "");
}

#[test]
fn test_open_list_paints_rows_below_header() {
    let options = abc();
    let value = Selection::Multiple(vec![SelectOption::new("A", 1)]);
    let (select, _listeners) = open_selector();
    let root = select.render(&Props::new(&options, &value));
    let (_, buf) = draw(&root, &Theme::plain());

    let header = buf.row_text(0);
    assert!(header.starts_with("A ×"));
    assert!(header.trim_end().ends_with("× │ ▲"));
    assert_eq!(buf.row_text(1).trim(), "A");
    assert_eq!(buf.row_text(2).trim(), "B");
    assert_eq!(buf.row_text(3).trim(), "C");
}

#[test]
fn test_highlighted_row_uses_highlight_background() {
    let options = abc();
    let value = Selection::single();
    let (select, _listeners) = open_selector();
    let root = select.render(&Props::new(&options, &value));
    let theme = Theme::default();
    let (_, buf) = draw(&root, &theme);

    let accent = theme.highlighted.background.unwrap().to_rgb();
    assert_eq!(buf.get(0, 1).unwrap().bg, accent);
    assert_eq!(buf.get(WIDTH - 1, 1).unwrap().bg, accent);
    assert_ne!(buf.get(0, 2).unwrap().bg, accent);
}

#[test]
fn test_fixed_width_limits_container() {
    let options = abc();
    let value = Selection::single();
    let root = Selector::new(ID).width(20).render(&Props::new(&options, &value));
    let layout = layout(&root, Rect::from_size(WIDTH, 10));

    assert_eq!(layout.get(ID).unwrap().width, 20);
    let caret = layout.get(&Part::Caret.id(ID)).unwrap();
    assert_eq!(caret.x, 19);
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_plain_parts_bubble_to_container() {
    let options = abc();
    let value = Selection::single();
    let root = Selector::new(ID).render(&Props::new(&options, &value));
    let layout = layout(&root, Rect::from_size(WIDTH, 10));

    // Placeholder text and caret are not clickable themselves.
    assert_eq!(hit_test(&layout, &root, 2, 0), Some(ID.to_string()));
    assert_eq!(hit_test(&layout, &root, WIDTH - 1, 0), Some(ID.to_string()));
    assert_eq!(
        hit_test_any(&layout, &root, WIDTH - 1, 0),
        Some(Part::Caret.id(ID))
    );
}

#[test]
fn test_remove_marker_wins_over_badge() {
    let options = abc();
    let value = Selection::Multiple(vec![SelectOption::new("A", 1)]);
    let root = Selector::new(ID).render(&Props::new(&options, &value));
    let layout = layout(&root, Rect::from_size(WIDTH, 10));

    assert_eq!(hit_test(&layout, &root, 0, 0), Some(Part::Badge(0).id(ID)));
    assert_eq!(hit_test(&layout, &root, 2, 0), Some(Part::Remove(0).id(ID)));
    assert_eq!(
        hit_test_focusable(&layout, &root, 2, 0),
        Some(Part::Badge(0).id(ID))
    );
}

#[test]
fn test_closed_list_is_not_hit() {
    let options = abc();
    let value = Selection::single();
    let root = Selector::new(ID).render(&Props::new(&options, &value));
    let layout = layout(&root, Rect::from_size(WIDTH, 10));

    assert!(layout.get(&Part::Option(0).id(ID)).is_none());
    assert_eq!(hit_test(&layout, &root, 0, 1), None);
}

#[test]
fn test_open_rows_are_hit() {
    let options = abc();
    let value = Selection::single();
    let (select, _listeners) = open_selector();
    let root = select.render(&Props::new(&options, &value));
    let layout = layout(&root, Rect::from_size(WIDTH, 10));

    assert_eq!(hit_test(&layout, &root, 5, 2), Some(Part::Option(1).id(ID)));
    assert_eq!(hit_test_focusable(&layout, &root, 5, 2), Some(ID.to_string()));
}
