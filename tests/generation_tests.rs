use std::{sync::Mutex, time};

use tripwise::{oracle, prelude::*};

fn day(start: (u32, u32)) -> Vec<Stop> {
    vec![
        Stop::new(1u64, 1, 1)
            .at(Time::from_hm(9, 0))
            .staying(Duration::from_minutes(30))
            .located((14.5995, 120.9842)),
        Stop::new(2u64, 1, 2)
            .at(Time::from_hm(start.0, start.1))
            .located((14.5547, 121.0244)),
    ]
}

#[test]
fn only_the_newest_generation_is_current() {
    let generations = Generations::new();
    let first = generations.begin();
    assert!(generations.is_current(first));

    let second = generations.begin();
    assert!(second > first);
    assert!(!generations.is_current(first));
    assert!(generations.is_current(second));
    assert_eq!(generations.current(), second);
}

#[test]
fn stale_results_are_dropped() {
    let generations = Generations::new();
    let mut latest = Latest::new();

    let first = generations.begin();
    let second = generations.begin();

    // Second pass resolves first.
    assert!(latest.apply(&generations, second, "second"));
    assert!(!latest.apply(&generations, first, "first"));
    assert_eq!(latest.get(), Some(&"second"));
    assert_eq!(latest.generation(), Some(second));
}

#[tokio::test]
async fn slow_stale_pass_does_not_overwrite_newer_one() {
    let slow = oracle::from_fn(|_, _| async {
        tokio::time::sleep(time::Duration::from_millis(50)).await;
        Ok::<_, oracle::Error>(Duration::from_minutes(20))
    });
    let fast = oracle::from_fn(|_, _| async { Ok::<_, oracle::Error>(Duration::from_minutes(20)) });

    let generations = Generations::new();
    let latest: Mutex<Latest<WarningMap>> = Mutex::new(Latest::new());

    // Before the edit the second stop is at 09:40, 10 minutes for a 20 minute drive.
    let before = day((9, 40));
    // After the edit it is at 10:30, which leaves enough time.
    let after = day((10, 30));

    let first = async {
        let generation = generations.begin();
        let warnings = validate(&before, &slow).await;
        latest.lock().unwrap().apply(&generations, generation, warnings)
    };
    let second = async {
        tokio::time::sleep(time::Duration::from_millis(5)).await;
        let generation = generations.begin();
        let warnings = validate(&after, &fast).await;
        latest.lock().unwrap().apply(&generations, generation, warnings)
    };

    let (first_applied, second_applied) = tokio::join!(first, second);
    assert!(!first_applied);
    assert!(second_applied);
    assert!(latest.lock().unwrap().get().unwrap().is_empty());
}
