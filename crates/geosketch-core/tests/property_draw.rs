use geo::{Point, point};
use geosketch_core::{
    AREA_KM_THRESHOLD_M2, DrawMode, DrawState, Geometry, LENGTH_KM_THRESHOLD_M, MeasureTooltips,
    SketchEvent, TooltipStyle, format_area, format_length,
};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    SetMode { mode: u8 },
    Click { x: i16, y: i16 },
    DoubleClick { x: i16, y: i16 },
    Move { x: i16, y: i16 },
    Cancel,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..=4u8).prop_map(|mode| Op::SetMode { mode }),
        (any::<i16>(), any::<i16>()).prop_map(|(x, y)| Op::Click { x, y }),
        (any::<i16>(), any::<i16>()).prop_map(|(x, y)| Op::DoubleClick { x, y }),
        (any::<i16>(), any::<i16>()).prop_map(|(x, y)| Op::Move { x, y }),
        Just(Op::Cancel),
    ]
}

fn mode_from_index(index: u8) -> DrawMode {
    DrawMode::ALL[index as usize % DrawMode::ALL.len()]
}

fn position(x: i16, y: i16) -> Point {
    // Keep coordinates on the globe
    point! { x: (x as f64 / i16::MAX as f64) * 179.0, y: (y as f64 / i16::MAX as f64) * 85.0 }
}

fn geometry_matches_mode(geometry: &Geometry, mode: DrawMode) -> bool {
    matches!(
        (geometry, mode),
        (Geometry::Point(_), DrawMode::Point)
            | (Geometry::Line(_), DrawMode::Line)
            | (Geometry::Polygon(_), DrawMode::Polygon)
            | (Geometry::Circle { .. }, DrawMode::Circle)
    )
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 1_000, .. ProptestConfig::default() })]

    /// Two decimal places and the right unit suffix, on both sides of the
    /// 100 m threshold.
    #[test]
    fn prop_format_length_suffix_and_precision(meters in 0.0f64..1.0e9) {
        let formatted = format_length(meters);
        if meters > LENGTH_KM_THRESHOLD_M {
            let value: f64 = formatted.strip_suffix(" km").unwrap().parse().unwrap();
            prop_assert!((value - meters / 1_000.0).abs() <= 0.005 + 1e-9);
        } else {
            let value: f64 = formatted.strip_suffix(" m").unwrap().parse().unwrap();
            prop_assert!((value - meters).abs() <= 0.005 + 1e-9);
        }
        let decimals = formatted.split('.').nth(1).unwrap();
        prop_assert_eq!(decimals.chars().take_while(|c| c.is_ascii_digit()).count(), 2);
    }

    /// Same for areas around the 10 000 m² threshold.
    #[test]
    fn prop_format_area_suffix_and_precision(square_meters in 0.0f64..1.0e12) {
        let formatted = format_area(square_meters);
        if square_meters > AREA_KM_THRESHOLD_M2 {
            let value: f64 = formatted.strip_suffix(" km²").unwrap().parse().unwrap();
            prop_assert!((value - square_meters / 1_000_000.0).abs() <= 0.005 + 1e-9);
        } else {
            let value: f64 = formatted.strip_suffix(" m²").unwrap().parse().unwrap();
            prop_assert!((value - square_meters).abs() <= 0.005 + 1e-9);
        }
    }

    /// Any input sequence keeps the draw interaction's invariants: at most
    /// one sketch, the sketch's mode is the selected mode, finished
    /// geometries match the mode that produced them, and the tooltip
    /// lifecycle retires exactly one static tooltip per finished gesture.
    #[test]
    fn prop_draw_state_invariants(ops in proptest::collection::vec(op_strategy(), 1..200)) {
        let mut draw = DrawState::default();
        let mut tooltips = MeasureTooltips::new();
        let mut finished = 0usize;

        for op in ops {
            let events = match op {
                Op::SetMode { mode } => {
                    draw.set_mode(mode_from_index(mode)).into_iter().collect()
                }
                Op::Click { x, y } => draw.click(position(x, y)),
                Op::DoubleClick { x, y } => draw.double_click(position(x, y)),
                Op::Move { x, y } => draw.pointer_moved(position(x, y)).into_iter().collect(),
                Op::Cancel => draw.cancel().into_iter().collect(),
            };

            for event in &events {
                if let SketchEvent::Finished(geometry) = event {
                    prop_assert!(geometry_matches_mode(geometry, draw.mode()));
                    finished += 1;
                }
                tooltips.on_event(event);
                if let Some(sketch) = draw.sketch() {
                    if let (Some(anchor), Some(measurement)) =
                        (sketch.anchor(), sketch.measurement())
                    {
                        tooltips.on_sketch_change(anchor, measurement.to_string());
                    }
                }
            }

            // No interaction armed means no sketch can exist
            if !draw.mode().is_drawing() {
                prop_assert!(draw.sketch().is_none());
            }
            if let Some(sketch) = draw.sketch() {
                prop_assert_eq!(sketch.mode(), draw.mode());
            }
            prop_assert!(tooltips.retired().len() <= finished);
            prop_assert!(
                tooltips
                    .retired()
                    .iter()
                    .all(|t| t.style == TooltipStyle::Static && t.position.is_some())
            );
            prop_assert_eq!(tooltips.active().style, TooltipStyle::Tracking);
        }
    }
}
