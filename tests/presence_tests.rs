// Host-side tests for the presence debouncer.

use orb_core::{DebounceParams, PresenceDebouncer, OFF_FRAMES, ON_FRAMES};

fn feed(d: &mut PresenceDebouncer, seq: &[bool]) -> Vec<bool> {
    seq.iter().map(|&s| d.observe(s)).collect()
}

#[test]
fn starts_absent_with_zero_counters() {
    let d = PresenceDebouncer::default();
    assert!(!d.presence());
    assert_eq!(d.present_count(), 0);
    assert_eq!(d.absent_count(), 0);
    assert_eq!(d.params, DebounceParams { on_frames: 6, off_frames: 12 });
}

#[test]
fn interrupted_run_does_not_turn_on() {
    // 5 hits, a miss, then 6 hits: only the 6th hit of the last run turns on
    let mut d = PresenceDebouncer::default();
    let mut seq = vec![true; 5];
    seq.push(false);
    seq.extend(vec![true; 6]);
    let out = feed(&mut d, &seq);
    assert!(out[..11].iter().all(|p| !p), "presence too early: {out:?}");
    assert!(out[11]);
}

#[test]
fn turns_on_exactly_at_on_frames() {
    let mut d = PresenceDebouncer::default();
    for i in 1..ON_FRAMES {
        assert!(!d.observe(true), "on after {i} hits");
    }
    assert!(d.observe(true));
}

#[test]
fn turns_off_only_after_off_frames_misses() {
    let mut d = PresenceDebouncer::default();
    feed(&mut d, &vec![true; ON_FRAMES as usize]);
    assert!(d.presence());

    // 11 misses, one hit, 11 misses: still present
    feed(&mut d, &vec![false; OFF_FRAMES as usize - 1]);
    assert!(d.presence());
    d.observe(true);
    feed(&mut d, &vec![false; OFF_FRAMES as usize - 1]);
    assert!(d.presence());

    assert!(!d.observe(false));
}

#[test]
fn counters_are_mutually_exclusive() {
    let mut d = PresenceDebouncer::default();
    let seq = [true, true, false, true, false, false, false, true, true, true];
    for s in seq {
        d.observe(s);
        assert!(
            d.present_count() == 0 || d.absent_count() == 0,
            "both counters nonzero: {} / {}",
            d.present_count(),
            d.absent_count()
        );
    }
}

#[test]
fn hysteresis_holds_for_pseudo_random_sequences() {
    // Reference model: flip only when the current run reaches the threshold
    let mut state: u32 = 0x1234_5678;
    for _ in 0..50 {
        let mut d = PresenceDebouncer::default();
        let mut presence = false;
        let mut run_value = false;
        let mut run_len = 0u32;
        for _ in 0..400 {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            // bias towards longer runs so both transitions happen
            let s = if state % 10 < 8 { run_value } else { !run_value };
            if s == run_value {
                run_len += 1;
            } else {
                run_value = s;
                run_len = 1;
            }
            if s && !presence && run_len >= ON_FRAMES {
                presence = true;
            }
            if !s && presence && run_len >= OFF_FRAMES {
                presence = false;
            }
            assert_eq!(d.observe(s), presence);
        }
    }
}

#[test]
fn custom_thresholds_are_respected() {
    let mut d = PresenceDebouncer::new(DebounceParams { on_frames: 1, off_frames: 2 });
    assert!(d.observe(true));
    assert!(d.observe(false));
    assert!(!d.observe(false));
}

#[test]
fn reset_counters_keeps_flag_and_reset_clears_it() {
    let mut d = PresenceDebouncer::default();
    feed(&mut d, &vec![true; 8]);
    d.reset_counters();
    assert!(d.presence());
    assert_eq!(d.present_count(), 0);

    // a stale run from before the reset does not count
    feed(&mut d, &vec![false; OFF_FRAMES as usize - 1]);
    d.reset_counters();
    assert!(d.observe(false));

    d.reset();
    assert!(!d.presence());
    assert_eq!(d.absent_count(), 0);
}

#[test]
fn force_absent_drops_presence_immediately() {
    let mut d = PresenceDebouncer::default();
    feed(&mut d, &vec![true; 10]);
    d.force_absent();
    assert!(!d.presence());
    assert_eq!(d.present_count(), 0);
}
