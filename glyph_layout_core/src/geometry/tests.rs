use super::{Dimension, Point, Rect};

#[test]
fn rect_size() {
    let rect = Rect::from_origin(10, 20, 30, 40);
    assert_eq!(rect, Rect::new(10, 20, 40, 60));
    assert_eq!(rect.width(), 30);
    assert_eq!(rect.height(), 40);
    assert!(!rect.is_empty());
    assert!(Rect::default().is_empty());
}

#[test]
fn clipped_intersects() {
    let rect = Rect::new(0, 0, 100, 50);
    let clip = Rect::new(50, 25, 200, 200);
    assert_eq!(rect.clipped(&clip), Rect::new(50, 25, 100, 50));
}

#[test]
fn disjoint_clip_is_empty() {
    let rect = Rect::new(0, 0, 10, 10);
    let clip = Rect::new(20, 20, 30, 30);
    assert!(rect.clipped(&clip).is_empty());
}

#[test]
fn dimension_rounds_up_past_a_tenth() {
    assert_eq!(Dimension::new(10.0, 20.0).to_pixels(), (10, 20));
    assert_eq!(Dimension::new(10.2, 19.05).to_pixels(), (11, 19));
    assert_eq!(Dimension::new(-3.0, 0.0).to_pixels(), (0, 0));
}

#[test]
fn point_new() {
    let p = Point::new(1.5, -2.0);
    assert_eq!(p.x, 1.5);
    assert_eq!(p.y, -2.0);
}
