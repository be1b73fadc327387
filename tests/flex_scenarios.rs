//! End-to-end layout scenarios
//!
//! Each test drives `calculate_layout` with literal inputs and checks the
//! resulting child rectangles.

use flexlayout::style::Dimension;
use flexlayout::{
  calculate_layout, AlignItems, FlexBoxStyle, FlexDirection, FlexItemStyle, FlexWrap,
  JustifyContent, LayoutOutput,
};

fn rect<R>(output: &LayoutOutput<R>, index: usize) -> (f32, f32, f32, f32) {
  let child = &output.children[index];
  (child.left, child.top, child.width, child.height)
}

fn fixed(width: f32, height: f32) -> FlexItemStyle<()> {
  FlexItemStyle {
    width: Dimension::points(width),
    height: Dimension::points(height),
    ..FlexItemStyle::default()
  }
}

fn grower() -> FlexItemStyle<()> {
  FlexItemStyle {
    flex_grow: 1.0,
    flex_basis: Dimension::points(0.0),
    ..FlexItemStyle::default()
  }
}

#[test]
fn equal_grow_splits_the_container() {
  let container = FlexBoxStyle::default();
  let children = vec![grower(), grower()];
  let output =
    calculate_layout(&container, &children, 300.0, 300.0, 100.0, 100.0, f32::NAN).unwrap();

  assert_eq!(rect(&output, 0), (0.0, 0.0, 150.0, 100.0));
  assert_eq!(rect(&output, 1), (150.0, 0.0, 150.0, 100.0));
}

#[test]
fn fixed_plus_flex_fills_the_remainder() {
  let container = FlexBoxStyle::default();
  let children = vec![
    FlexItemStyle {
      width: Dimension::points(100.0),
      ..FlexItemStyle::default()
    },
    grower(),
  ];
  let output =
    calculate_layout(&container, &children, 400.0, 400.0, 100.0, 100.0, f32::NAN).unwrap();

  assert_eq!(rect(&output, 0), (0.0, 0.0, 100.0, 100.0));
  assert_eq!(rect(&output, 1), (100.0, 0.0, 300.0, 100.0));
}

#[test]
fn wrap_breaks_into_lines() {
  let container = FlexBoxStyle {
    flex_wrap: FlexWrap::Wrap,
    ..FlexBoxStyle::default()
  };
  let children = vec![fixed(120.0, 50.0), fixed(120.0, 50.0), fixed(120.0, 50.0)];
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

  assert_eq!(rect(&output, 0), (0.0, 0.0, 120.0, 50.0));
  assert_eq!(rect(&output, 1), (0.0, 50.0, 120.0, 50.0));
  assert_eq!(rect(&output, 2), (0.0, 100.0, 120.0, 50.0));
  assert_eq!(output.height, 150.0);
}

#[test]
fn space_between_distributes_the_gap() {
  let container = FlexBoxStyle {
    justify_content: JustifyContent::SpaceBetween,
    ..FlexBoxStyle::default()
  };
  let children = vec![fixed(60.0, 40.0), fixed(60.0, 40.0), fixed(60.0, 40.0)];
  let output =
    calculate_layout(&container, &children, 300.0, 300.0, 40.0, 40.0, f32::NAN).unwrap();

  let lefts: Vec<f32> = output.children.iter().map(|c| c.left).collect();
  assert_eq!(lefts, vec![0.0, 120.0, 240.0]);
}

#[test]
fn align_items_center_centers_on_the_cross_axis() {
  let container = FlexBoxStyle {
    align_items: AlignItems::Center,
    ..FlexBoxStyle::default()
  };
  let children = vec![fixed(40.0, 40.0)];
  let output =
    calculate_layout(&container, &children, 200.0, 200.0, 100.0, 100.0, f32::NAN).unwrap();

  assert_eq!(rect(&output, 0), (0.0, 30.0, 40.0, 40.0));
}

#[test]
fn aspect_ratio_derives_the_cross_size() {
  let container = FlexBoxStyle {
    flex_direction: FlexDirection::Column,
    ..FlexBoxStyle::default()
  };
  let children = vec![FlexItemStyle::<()> {
    height: Dimension::points(50.0),
    aspect_ratio: 2.0,
    ..FlexItemStyle::default()
  }];
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

  assert_eq!(output.children[0].width, 100.0);
  assert_eq!(output.children[0].height, 50.0);
}

#[test]
fn row_reverse_mirrors_positions() {
  let ltr = FlexBoxStyle::default();
  let rtl = FlexBoxStyle {
    flex_direction: FlexDirection::RowReverse,
    ..FlexBoxStyle::default()
  };
  let children = vec![fixed(100.0, 50.0), fixed(80.0, 50.0)];

  let forward =
    calculate_layout(&ltr, &children, 300.0, 300.0, 50.0, 50.0, f32::NAN).unwrap();
  let reversed =
    calculate_layout(&rtl, &children, 300.0, 300.0, 50.0, 50.0, f32::NAN).unwrap();

  // Widths agree; positions mirror across the container.
  assert_eq!(forward.children[0].width, reversed.children[0].width);
  assert_eq!(forward.children[1].width, reversed.children[1].width);
  assert_eq!(reversed.children[0].left, 200.0);
  assert_eq!(reversed.children[1].left, 120.0);
}

#[test]
fn empty_container_sizes_to_bounds() {
  let container = FlexBoxStyle::default();
  let children: Vec<FlexItemStyle<()>> = Vec::new();
  let output = calculate_layout(
    &container,
    &children,
    50.0,
    f32::INFINITY,
    f32::NEG_INFINITY,
    40.0,
    f32::NAN,
  )
  .unwrap();

  assert_eq!(output.width, 50.0);
  assert_eq!(output.height, 0.0);
}

#[test]
fn column_direction_stacks_vertically() {
  let container = FlexBoxStyle {
    flex_direction: FlexDirection::Column,
    ..FlexBoxStyle::default()
  };
  let children = vec![fixed(50.0, 30.0), fixed(50.0, 30.0)];
  let output = calculate_layout(
    &container,
    &children,
    100.0,
    100.0,
    f32::NEG_INFINITY,
    f32::INFINITY,
    f32::NAN,
  )
  .unwrap();

  assert_eq!(rect(&output, 0), (0.0, 0.0, 50.0, 30.0));
  assert_eq!(rect(&output, 1), (0.0, 30.0, 50.0, 30.0));
  assert_eq!(output.height, 60.0);
}

#[test]
fn padding_offsets_content() {
  let container = FlexBoxStyle {
    padding: flexlayout::style::EdgeValues::all(Dimension::points(10.0)),
    ..FlexBoxStyle::default()
  };
  let children = vec![grower()];
  let output =
    calculate_layout(&container, &children, 300.0, 300.0, 100.0, 100.0, f32::NAN).unwrap();

  assert_eq!(rect(&output, 0), (10.0, 10.0, 280.0, 80.0));
}

#[test]
fn percent_width_resolves_against_the_container() {
  let container = FlexBoxStyle::default();
  let children = vec![FlexItemStyle::<()> {
    width: Dimension::percent(50.0),
    height: Dimension::points(20.0),
    ..FlexItemStyle::default()
  }];
  let output =
    calculate_layout(&container, &children, 400.0, 400.0, 50.0, 50.0, f32::NAN).unwrap();

  assert_eq!(output.children[0].width, 200.0);
}

#[test]
fn percent_flex_basis_resolves_against_the_main_axis() {
  let container = FlexBoxStyle::default();
  let children = vec![FlexItemStyle::<()> {
    flex_basis: Dimension::percent(25.0),
    height: Dimension::points(20.0),
    ..FlexItemStyle::default()
  }];
  let output =
    calculate_layout(&container, &children, 400.0, 400.0, 50.0, 50.0, f32::NAN).unwrap();

  assert_eq!(output.children[0].width, 100.0);
}

#[test]
fn shrink_resolves_overflow_proportionally() {
  let container = FlexBoxStyle::default();
  let children = vec![fixed(200.0, 50.0), fixed(100.0, 50.0)];
  let output =
    calculate_layout(&container, &children, 150.0, 150.0, 50.0, 50.0, f32::NAN).unwrap();

  // Shrink is weighted by basis: deficits of 100 and 50.
  assert_eq!(output.children[0].width, 100.0);
  assert_eq!(output.children[1].width, 50.0);
  assert_eq!(output.children[1].left, 100.0);
}

#[test]
fn min_and_max_bounds_clamp_children() {
  let container = FlexBoxStyle::default();
  let children = vec![
    FlexItemStyle::<()> {
      flex_grow: 1.0,
      max_width: Dimension::points(80.0),
      height: Dimension::points(20.0),
      ..FlexItemStyle::default()
    },
    FlexItemStyle::<()> {
      flex_grow: 1.0,
      height: Dimension::points(20.0),
      ..FlexItemStyle::default()
    },
  ];
  let output =
    calculate_layout(&container, &children, 300.0, 300.0, 20.0, 20.0, f32::NAN).unwrap();

  assert_eq!(output.children[0].width, 80.0);
  assert_eq!(output.children[1].width, 220.0);
}

#[test]
fn no_gaps_when_flex_consumes_all_space() {
  let container = FlexBoxStyle::default();
  let children = vec![
    FlexItemStyle::<()> {
      flex_grow: 1.0,
      ..FlexItemStyle::default()
    },
    fixed(37.3, 20.0),
    FlexItemStyle::<()> {
      flex_grow: 2.0,
      ..FlexItemStyle::default()
    },
  ];
  let output =
    calculate_layout(&container, &children, 313.0, 313.0, 20.0, 20.0, f32::NAN).unwrap();

  let total: f32 = output.children.iter().map(|c| c.width).sum();
  assert!((total - 313.0).abs() <= 0.5);
}

#[test]
fn identical_inputs_produce_identical_outputs() {
  let container = FlexBoxStyle {
    flex_wrap: FlexWrap::Wrap,
    justify_content: JustifyContent::SpaceAround,
    ..FlexBoxStyle::default()
  };
  let children: Vec<FlexItemStyle<()>> = (0..5)
    .map(|i| fixed(40.0 + i as f32 * 13.7, 21.3))
    .collect();

  let first =
    calculate_layout(&container, &children, 180.0, 180.0, 0.0, 500.0, f32::NAN).unwrap();
  let second =
    calculate_layout(&container, &children, 180.0, 180.0, 0.0, 500.0, f32::NAN).unwrap();

  let a = flexlayout::LayoutSnapshot::capture(&first);
  let b = flexlayout::LayoutSnapshot::capture(&second);
  assert_eq!(a, b);

  // Snapshots also survive a serde round-trip unchanged.
  let json = serde_json::to_string(&a).unwrap();
  let back: flexlayout::LayoutSnapshot = serde_json::from_str(&json).unwrap();
  assert_eq!(a, back);
}
