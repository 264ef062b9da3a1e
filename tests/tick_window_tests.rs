use digit_pulse::analysis::TickWindow;
use digit_pulse::model::Tick;

fn tick(seq: u32) -> Tick {
    Tick::new(1000.0 + f64::from(seq) / 100_000.0, (seq % 10) as u8, u64::from(seq))
}

#[test]
fn window_tracks_the_last_hundred_ticks() {
    let mut window = TickWindow::new(100);
    for seq in 0..250u32 {
        window.push(tick(seq));
    }
    assert_eq!(window.len(), 100);
    assert!(window.is_full());

    let epochs: Vec<u64> = window.iter().map(|t| t.epoch).collect();
    let expected: Vec<u64> = (150..250).collect();
    assert_eq!(epochs, expected);
}

#[test]
fn short_stream_keeps_everything() {
    let mut window = TickWindow::new(100);
    for seq in 0..37u32 {
        window.push(tick(seq));
    }
    assert_eq!(window.len(), 37);
    assert!(!window.is_full());
    assert_eq!(window.last_digit(), Some(6));
}

/// Verifies a cleared window refills from scratch without remembering
/// evicted history.
#[test]
fn clear_then_refill_starts_fresh() {
    let mut window = TickWindow::new(10);
    for seq in 0..25u32 {
        window.push(tick(seq));
    }
    window.clear();
    assert!(window.is_empty());

    window.push(tick(900));
    assert_eq!(window.len(), 1);
    assert_eq!(window.iter().next().map(|t| t.epoch), Some(900));
}

#[test]
fn digits_iterator_matches_tick_order() {
    let mut window = TickWindow::new(5);
    for seq in [11u32, 24, 38, 47] {
        window.push(tick(seq));
    }
    let digits: Vec<u8> = window.digits().collect();
    assert_eq!(digits, vec![1, 4, 8, 7]);
    assert_eq!(window.to_vec().len(), 4);
}
