use screenmatch::{
    find_matches, find_matches_checked, MatchOptions, PixelView, ScreenMatchError,
};
use std::time::{Duration, Instant};

fn gray(v: u32) -> u32 {
    (v << 16) | (v << 8) | v
}

fn procedural(width: usize, height: usize) -> Vec<u32> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            data.push(gray(((x * 13) ^ (y * 7) ^ (x * y)) as u32 & 0xFF));
        }
    }
    data
}

#[test]
fn oversized_template_yields_empty_result() {
    let small = procedural(10, 10);
    let large = procedural(20, 20);
    let source = PixelView::from_slice(&small, 10, 10).unwrap();
    let template = PixelView::from_slice(&large, 20, 20).unwrap();

    assert!(find_matches(source, template, &MatchOptions::default()).is_empty());
    assert_eq!(
        find_matches_checked(source, template, &MatchOptions::default()).unwrap(),
        vec![]
    );

    // Exceeding in a single axis is enough.
    let wide = procedural(20, 5);
    let template = PixelView::from_slice(&wide, 20, 5).unwrap();
    assert!(find_matches(source, template, &MatchOptions::default()).is_empty());
}

#[test]
fn impossible_threshold_matches_nothing() {
    let data = procedural(40, 40);
    let tpl_data = procedural(8, 8);
    let source = PixelView::from_slice(&data, 40, 40).unwrap();
    let template = PixelView::from_slice(&tpl_data, 8, 8).unwrap();

    let matches = find_matches(
        source,
        template,
        &MatchOptions {
            threshold: 1.5,
            ..MatchOptions::default()
        },
    );
    assert!(matches.is_empty());
}

#[test]
fn flat_inputs_never_divide_by_zero() {
    let flat = vec![gray(128); 40 * 40];
    let textured = procedural(8, 8);
    let flat_tpl = vec![gray(128); 8 * 8];

    let flat_source = PixelView::from_slice(&flat, 40, 40).unwrap();
    let textured_tpl = PixelView::from_slice(&textured, 8, 8).unwrap();
    let flat_template = PixelView::from_slice(&flat_tpl, 8, 8).unwrap();

    // Default threshold: flat windows are forced to zero and filtered out.
    assert!(find_matches(flat_source, textured_tpl, &MatchOptions::default()).is_empty());
    assert!(find_matches(flat_source, flat_template, &MatchOptions::default()).is_empty());

    // A zero threshold admits the forced-zero windows; the cap and
    // non-overlap rules still apply.
    let matches = find_matches(
        flat_source,
        flat_template,
        &MatchOptions {
            threshold: 0.0,
            max_matches: 10,
            deadline: None,
        },
    );
    assert!(!matches.is_empty());
    assert!(matches.len() <= 10);
    assert!(matches.iter().all(|m| m.confidence == 0.0));
}

#[test]
fn expired_deadline_maps_to_empty_result() {
    let data = procedural(60, 60);
    let tpl_data = procedural(8, 8);
    let source = PixelView::from_slice(&data, 60, 60).unwrap();
    let template = PixelView::from_slice(&tpl_data, 8, 8).unwrap();

    let options = MatchOptions {
        deadline: Some(Instant::now() - Duration::from_secs(1)),
        ..MatchOptions::default()
    };
    assert!(find_matches(source, template, &options).is_empty());
    assert_eq!(
        find_matches_checked(source, template, &options).unwrap_err(),
        ScreenMatchError::DeadlineExceeded
    );
}

#[test]
fn future_deadline_does_not_change_the_result() {
    let data = procedural(30, 30);
    let tpl_data = procedural(6, 6);
    let source = PixelView::from_slice(&data, 30, 30).unwrap();
    let template = PixelView::from_slice(&tpl_data, 6, 6).unwrap();

    let unbounded = find_matches(source, template, &MatchOptions::default());
    let bounded = find_matches(
        source,
        template,
        &MatchOptions {
            deadline: Some(Instant::now() + Duration::from_secs(60)),
            ..MatchOptions::default()
        },
    );
    assert_eq!(unbounded, bounded);
}
