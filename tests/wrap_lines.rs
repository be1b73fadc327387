//! Multi-line behavior: wrapping, wrap-reverse, and align-content

use flexlayout::style::Dimension;
use flexlayout::{
  calculate_layout, AlignContent, FlexBoxStyle, FlexItemStyle, FlexWrap, LayoutOutput,
};

fn fixed(width: f32, height: f32) -> FlexItemStyle<()> {
  FlexItemStyle {
    width: Dimension::points(width),
    height: Dimension::points(height),
    ..FlexItemStyle::default()
  }
}

fn wrap_container(align_content: AlignContent) -> FlexBoxStyle {
  FlexBoxStyle {
    flex_wrap: FlexWrap::Wrap,
    align_content,
    ..FlexBoxStyle::default()
  }
}

fn tops<R>(output: &LayoutOutput<R>) -> Vec<f32> {
  output.children.iter().map(|c| c.top).collect()
}

/// Two lines of height 50 inside a 200-tall container leave 100 free.
fn two_line_children() -> Vec<FlexItemStyle<()>> {
  vec![fixed(120.0, 50.0), fixed(120.0, 50.0)]
}

#[test]
fn lines_stack_from_the_cross_start() {
  let container = wrap_container(AlignContent::FlexStart);
  let output = calculate_layout(
    &container,
    &two_line_children(),
    200.0,
    200.0,
    200.0,
    200.0,
    f32::NAN,
  )
  .unwrap();
  assert_eq!(tops(&output), vec![0.0, 50.0]);
}

#[test]
fn align_content_flex_end_packs_lines_down() {
  let container = wrap_container(AlignContent::FlexEnd);
  let output = calculate_layout(
    &container,
    &two_line_children(),
    200.0,
    200.0,
    200.0,
    200.0,
    f32::NAN,
  )
  .unwrap();
  assert_eq!(tops(&output), vec![100.0, 150.0]);
}

#[test]
fn align_content_center_centers_the_block_of_lines() {
  let container = wrap_container(AlignContent::Center);
  let output = calculate_layout(
    &container,
    &two_line_children(),
    200.0,
    200.0,
    200.0,
    200.0,
    f32::NAN,
  )
  .unwrap();
  assert_eq!(tops(&output), vec![50.0, 100.0]);
}

#[test]
fn align_content_space_between_separates_lines() {
  let container = wrap_container(AlignContent::SpaceBetween);
  let output = calculate_layout(
    &container,
    &two_line_children(),
    200.0,
    200.0,
    200.0,
    200.0,
    f32::NAN,
  )
  .unwrap();
  assert_eq!(tops(&output), vec![0.0, 150.0]);
}

#[test]
fn align_content_space_around_pads_each_line() {
  let container = wrap_container(AlignContent::SpaceAround);
  let output = calculate_layout(
    &container,
    &two_line_children(),
    200.0,
    200.0,
    200.0,
    200.0,
    f32::NAN,
  )
  .unwrap();
  assert_eq!(tops(&output), vec![25.0, 125.0]);
}

#[test]
fn align_content_space_evenly_equalizes_gaps() {
  let container = wrap_container(AlignContent::SpaceEvenly);
  let output = calculate_layout(
    &container,
    &two_line_children(),
    200.0,
    200.0,
    200.0,
    200.0,
    f32::NAN,
  )
  .unwrap();
  let expected = 100.0 / 3.0;
  let tops = tops(&output);
  assert!((tops[0] - expected).abs() < 0.001);
  assert!((tops[1] - (expected * 2.0 + 50.0)).abs() < 0.001);
}

#[test]
fn align_content_stretch_grows_the_lines() {
  let container = wrap_container(AlignContent::Stretch);
  let children = vec![
    // Definite heights keep the items themselves from stretching; only the
    // lines grow.
    fixed(120.0, 50.0),
    fixed(120.0, 50.0),
  ];
  let output =
    calculate_layout(&container, &children, 200.0, 200.0, 200.0, 200.0, f32::NAN).unwrap();
  // Each line grows from 50 to 100; items sit at their line starts.
  assert_eq!(tops(&output), vec![0.0, 100.0]);
}

#[test]
fn wrap_reverse_flips_line_order() {
  let container = FlexBoxStyle {
    flex_wrap: FlexWrap::WrapReverse,
    ..FlexBoxStyle::default()
  };
  let output = calculate_layout(
    &container,
    &two_line_children(),
    200.0,
    200.0,
    200.0,
    200.0,
    f32::NAN,
  )
  .unwrap();
  // The first line sits at the cross end.
  assert_eq!(tops(&output), vec![150.0, 100.0]);
}

#[test]
fn items_stretch_to_their_line() {
  let container = FlexBoxStyle {
    flex_wrap: FlexWrap::Wrap,
    ..FlexBoxStyle::default()
  };
  let children = vec![
    fixed(120.0, 60.0),
    // No height: stretches to its line's cross size.
    FlexItemStyle {
      width: Dimension::points(60.0),
      ..FlexItemStyle::default()
    },
    fixed(150.0, 30.0),
  ];
  let output = calculate_layout(
    &container,
    &children,
    200.0,
    200.0,
    f32::NEG_INFINITY,
    f32::INFINITY,
    f32::NAN,
  )
  .unwrap();

  // Line 0 holds children 0 and 1 (120 + 60 fits in 200); its height is 60.
  assert_eq!(output.children[1].height, 60.0);
  // Line 1 holds child 2.
  assert_eq!(output.children[2].top, 60.0);
  assert_eq!(output.height, 90.0);
}
