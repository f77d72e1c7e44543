use super::*;
use crate::draw::{BLUE, Color, FontDescriptor, RED};
use crate::error::AnnotationError;
use std::cell::Cell;
use std::rc::Rc;

fn store_with_counter() -> (AnnotationStore, Rc<Cell<usize>>) {
    let mut store = AnnotationStore::default();
    let count = Rc::new(Cell::new(0));
    let hook_count = Rc::clone(&count);
    store.set_repaint_hook(Box::new(move || hook_count.set(hook_count.get() + 1)));
    (store, count)
}

#[test]
fn stroke_point_without_begin_is_invalid() {
    let mut store = AnnotationStore::default();
    assert!(matches!(
        store.add_stroke_point(Point::new(1, 1)),
        Err(AnnotationError::InvalidState(_))
    ));
    assert!(store.end_stroke().is_err());
    assert!(store.strokes().is_empty());
}

#[test]
fn begin_stroke_twice_is_invalid() {
    let mut store = AnnotationStore::default();
    store.begin_stroke().unwrap();
    assert!(store.begin_stroke().is_err());
}

#[test]
fn end_stroke_appends_break_marker() {
    let mut store = AnnotationStore::default();
    store.begin_stroke().unwrap();
    store.add_stroke_point(Point::new(0, 0)).unwrap();
    store.add_stroke_point(Point::new(5, 5)).unwrap();
    store.end_stroke().unwrap();

    assert_eq!(
        store.strokes().entries(),
        &[Some(Point::new(0, 0)), Some(Point::new(5, 5)), None]
    );
    assert!(!store.strokes().is_open());
}

#[test]
fn segments_never_cross_a_break() {
    let mut store = AnnotationStore::default();
    for stroke in [[(0, 0), (10, 0), (10, 10)], [(50, 50), (60, 50), (70, 50)]] {
        store.begin_stroke().unwrap();
        for (x, y) in stroke {
            store.add_stroke_point(Point::new(x, y)).unwrap();
        }
        store.end_stroke().unwrap();
    }

    let segments: Vec<_> = store
        .strokes()
        .segments()
        .map(|s| (s.from, s.to))
        .collect();
    assert_eq!(segments.len(), 4);
    assert!(
        !segments.contains(&(Point::new(10, 10), Point::new(50, 50))),
        "segment spans a pen-up break"
    );
}

#[test]
fn segments_connect_exactly_present_neighbours() {
    let mut store = AnnotationStore::default();
    // Single-point stroke, empty stroke, then a two-point stroke.
    store.begin_stroke().unwrap();
    store.add_stroke_point(Point::new(1, 1)).unwrap();
    store.end_stroke().unwrap();
    store.begin_stroke().unwrap();
    store.end_stroke().unwrap();
    store.begin_stroke().unwrap();
    store.add_stroke_point(Point::new(2, 2)).unwrap();
    store.add_stroke_point(Point::new(3, 3)).unwrap();
    store.end_stroke().unwrap();

    let entries = store.strokes().entries();
    let expected = entries
        .windows(2)
        .filter(|pair| pair[0].is_some() && pair[1].is_some())
        .count();
    assert_eq!(store.strokes().segments().count(), expected);
    assert_eq!(expected, 1);
}

#[test]
fn each_stroke_keeps_the_color_it_started_with() {
    let mut store = AnnotationStore::default();
    store.set_draw_color(RED);
    store.begin_stroke().unwrap();
    store.add_stroke_point(Point::new(0, 0)).unwrap();
    store.add_stroke_point(Point::new(1, 0)).unwrap();
    store.end_stroke().unwrap();

    store.set_draw_color(BLUE);
    store.begin_stroke().unwrap();
    store.add_stroke_point(Point::new(0, 5)).unwrap();
    store.add_stroke_point(Point::new(1, 5)).unwrap();
    store.end_stroke().unwrap();

    let colors: Vec<Color> = store.strokes().segments().map(|s| s.style.color).collect();
    assert_eq!(colors, vec![RED, BLUE]);
}

#[test]
fn append_char_requires_open_block() {
    let mut store = AnnotationStore::default();
    assert_eq!(
        store.append_char('x'),
        Err(AnnotationError::InvalidState("no open text block"))
    );
}

#[test]
fn begin_text_block_twice_is_invalid() {
    let mut store = AnnotationStore::default();
    store.begin_text_block(Point::new(1, 1)).unwrap();
    assert!(store.begin_text_block(Point::new(2, 2)).is_err());
    assert_eq!(store.text_annotations().len(), 1);
}

#[test]
fn end_text_block_is_idempotent() {
    let (mut store, repaints) = store_with_counter();
    store.end_text_block();
    assert_eq!(repaints.get(), 0);

    store.begin_text_block(Point::new(0, 0)).unwrap();
    store.end_text_block();
    store.end_text_block();
    assert!(store.open_text_block().is_none());
    assert_eq!(repaints.get(), 2);
}

#[test]
fn text_blocks_are_independent_records() {
    let mut store = AnnotationStore::default();
    store.begin_text_block(Point::new(10, 10)).unwrap();
    for c in "a+b".chars() {
        store.append_char(c).unwrap();
    }
    store.end_text_block();
    // Reusing the same anchor still yields a distinct record.
    store.begin_text_block(Point::new(10, 10)).unwrap();
    store.append_char('+').unwrap();
    store.end_text_block();

    let texts: Vec<&str> = store
        .text_annotations()
        .iter()
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(texts, vec!["a+b", "+"]);
}

#[test]
fn attribute_changes_do_not_restyle_existing_text() {
    let mut store = AnnotationStore::default();
    store.begin_text_block(Point::new(0, 0)).unwrap();
    store.append_char('a').unwrap();
    store.end_text_block();

    store.set_draw_color(RED);
    store.set_draw_font(FontDescriptor::new("Serif", 30.0, "bold", "normal"));
    store.begin_text_block(Point::new(0, 40)).unwrap();

    let [first, second] = store.text_annotations() else {
        panic!("expected two text records");
    };
    assert_eq!(first.color, Color::default());
    assert_eq!(first.font, FontDescriptor::default());
    assert_eq!(second.color, RED);
    assert_eq!(second.font.family, "Serif");
}

#[test]
fn every_mutation_requests_one_repaint() {
    let (mut store, repaints) = store_with_counter();
    store.begin_stroke().unwrap();
    store.add_stroke_point(Point::new(0, 0)).unwrap();
    store.end_stroke().unwrap();
    store.begin_text_block(Point::new(0, 0)).unwrap();
    store.append_char('x').unwrap();
    store.end_text_block();
    store.set_draw_color(RED);
    store.set_draw_font(FontDescriptor::default());
    assert_eq!(repaints.get(), 8);

    // Rejected operations leave no trace.
    let _ = store.append_char('y');
    assert_eq!(repaints.get(), 8);
}
