use digit_pulse::analysis::{last_digit, DigitStats, TickWindow};
use digit_pulse::model::{Strategy, Tick};

fn window_from_quotes(quotes: &[f64]) -> TickWindow {
    let mut window = TickWindow::new(100);
    for (i, &quote) in quotes.iter().enumerate() {
        window.push(Tick::new(quote, last_digit(quote, 5), i as u64));
    }
    window
}

fn window_of(digits: &[u8]) -> TickWindow {
    let mut window = TickWindow::new(200);
    for (i, &digit) in digits.iter().enumerate() {
        window.push(Tick::new(f64::from(digit), digit, i as u64));
    }
    window
}

#[test]
fn even_odd_from_live_looking_quotes() {
    // Digits: 2, 7, 0, 5 -> two even, two odd.
    let window = window_from_quotes(&[9087.16542, 9087.16547, 9087.16550, 9087.16555]);
    match DigitStats::compute(&window, Strategy::EvenOdd) {
        DigitStats::EvenOdd { even_pct, odd_pct } => {
            assert!((even_pct - 50.0).abs() < f64::EPSILON);
            assert!((odd_pct - 50.0).abs() < f64::EPSILON);
        }
        other => panic!("expected EvenOdd stats, got {:?}", other),
    }
}

/// Verifies the even/odd pair stays complementary after one-decimal
/// rounding, across window sizes that do not divide evenly.
#[test]
fn even_odd_pair_always_sums_to_hundred() {
    for n in 1..60usize {
        for evens in 0..=n {
            let mut digits = vec![0u8; evens];
            digits.extend(std::iter::repeat(1).take(n - evens));
            match DigitStats::compute(&window_of(&digits), Strategy::EvenOdd) {
                DigitStats::EvenOdd { even_pct, odd_pct } => {
                    assert!(
                        (even_pct + odd_pct - 100.0).abs() < 0.1,
                        "pair {} + {} drifted for n={} evens={}",
                        even_pct,
                        odd_pct,
                        n,
                        evens
                    );
                }
                other => panic!("expected EvenOdd stats, got {:?}", other),
            }
        }
    }
}

#[test]
fn matches_differs_follows_the_stream() {
    let mut window = window_of(&[3, 3, 5]);
    match DigitStats::compute(&window, Strategy::MatchesDiffers) {
        DigitStats::MatchesDiffers { target, match_pct, .. } => {
            assert_eq!(target, 5);
            assert!((match_pct - 33.3).abs() < 1e-9);
        }
        other => panic!("expected MatchesDiffers stats, got {:?}", other),
    }

    // Another 3 arrives; the target snaps back to 3.
    window.push(Tick::new(3.0, 3, 10));
    match DigitStats::compute(&window, Strategy::MatchesDiffers) {
        DigitStats::MatchesDiffers { target, match_pct, differ_pct } => {
            assert_eq!(target, 3);
            assert!((match_pct - 75.0).abs() < f64::EPSILON);
            assert!((differ_pct - 25.0).abs() < f64::EPSILON);
        }
        other => panic!("expected MatchesDiffers stats, got {:?}", other),
    }
}

#[test]
fn over_under_splits_at_five() {
    // 0-4 under, 5-9 over; one of each digit gives an even split.
    let digits: Vec<u8> = (0..10).collect();
    match DigitStats::compute(&window_of(&digits), Strategy::OverUnder) {
        DigitStats::OverUnder { over_pct, under_pct } => {
            assert!((over_pct - 50.0).abs() < f64::EPSILON);
            assert!((under_pct - 50.0).abs() < f64::EPSILON);
        }
        other => panic!("expected OverUnder stats, got {:?}", other),
    }
}

#[test]
fn strategy_selection_changes_the_shape_not_the_window() {
    let window = window_of(&[1, 2, 3, 4, 5, 6]);
    assert!(matches!(
        DigitStats::compute(&window, Strategy::EvenOdd),
        DigitStats::EvenOdd { .. }
    ));
    assert!(matches!(
        DigitStats::compute(&window, Strategy::MatchesDiffers),
        DigitStats::MatchesDiffers { .. }
    ));
    assert!(matches!(
        DigitStats::compute(&window, Strategy::OverUnder),
        DigitStats::OverUnder { .. }
    ));
}

#[test]
fn empty_window_is_reported_not_computed() {
    let window = window_of(&[]);
    for strategy in Strategy::ALL {
        let stats = DigitStats::compute(&window, strategy);
        assert!(stats.is_empty(), "expected Empty for {:?}, got {:?}", strategy, stats);
    }
}
