use tripwise::prelude::*;

fn day() -> Vec<Stop> {
    vec![
        Stop::new(10u64, 1, 1),
        Stop::new(20u64, 1, 2),
        Stop::new(30u64, 1, 3),
    ]
}

#[test]
fn middle_moves_up() {
    let stops = day();
    let moved = move_adjacent(&stops, &StopId::from(20), Direction::Up).unwrap();
    assert_eq!(
        moved,
        Move::Swap {
            a: OrderUpdate {
                id: StopId::from(20),
                order: 1
            },
            b: OrderUpdate {
                id: StopId::from(10),
                order: 2
            },
        }
    );
}

#[test]
fn middle_moves_down() {
    let stops = day();
    let moved = move_adjacent(&stops, &StopId::from(20), Direction::Down).unwrap();
    let updates = moved.updates();
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0].order, 3);
    assert_eq!(updates[1].id, StopId::from(30));
    assert_eq!(updates[1].order, 2);
}

#[test]
fn edges_are_noops() {
    let stops = day();
    assert_eq!(
        move_adjacent(&stops, &StopId::from(10), Direction::Up),
        Ok(Move::NoOp)
    );
    assert_eq!(
        move_adjacent(&stops, &StopId::from(30), Direction::Down),
        Ok(Move::NoOp)
    );
    assert!(Move::NoOp.updates().is_empty());
}

#[test]
fn unknown_stop_is_an_error() {
    let stops = day();
    assert!(move_adjacent(&stops, &StopId::from(99), Direction::Up).is_err());
}

#[test]
fn sparse_orders_swap_values_only() {
    let stops = vec![
        Stop::new(1u64, 2, 40),
        Stop::new(2u64, 2, 5),
        Stop::new(3u64, 2, 100),
    ];
    // Traversal is 2 (5), 1 (40), 3 (100), moving 3 up trades with 1.
    let moved = move_adjacent(&stops, &StopId::from(3), Direction::Up).unwrap();
    assert_eq!(
        moved.updates(),
        vec![
            OrderUpdate {
                id: StopId::from(3),
                order: 40
            },
            OrderUpdate {
                id: StopId::from(1),
                order: 100
            },
        ]
    );
}

#[test]
fn up_then_down_restores_orders() {
    let mut itinerary = Itinerary::new(day());
    let id = StopId::from(30);

    let up = move_adjacent(itinerary.day(1), &id, Direction::Up).unwrap();
    up.updates().iter().for_each(|update| {
        assert!(itinerary.apply(update));
    });
    let orders: Vec<_> = itinerary.day(1).iter().map(|stop| stop.id.clone()).collect();
    assert_eq!(
        orders,
        vec![StopId::from(10), StopId::from(30), StopId::from(20)]
    );

    let down = move_adjacent(itinerary.day(1), &id, Direction::Down).unwrap();
    down.updates().iter().for_each(|update| {
        assert!(itinerary.apply(update));
    });
    let orders: Vec<_> = itinerary.stops().iter().map(|stop| stop.order).collect();
    assert_eq!(orders, vec![1, 2, 3]);
}
