//! End-to-end drags through the built-in maze via screen-space pointer events

use drag_maze::sim::{CLASSIC_ROUTE as ROUTE, GameEvent, GameStatus, Level};
use drag_maze::{Controller, PointerEvent, PointerPhase};
use glam::Vec2;

/// Where the canvas sits on the page
const ORIGIN: Vec2 = Vec2::new(40.0, 120.0);

fn mouse(phase: PointerPhase, field: Vec2) -> PointerEvent {
    let screen = field + ORIGIN;
    PointerEvent::mouse(phase, screen.x, screen.y)
}

fn touch(phase: PointerPhase, field: Vec2) -> PointerEvent {
    let screen = field + ORIGIN;
    PointerEvent::touch(phase, Some((screen.x, screen.y))).unwrap()
}

/// Every 4 units along the route, stopping at the first event that ends the run
fn drag_route(
    ctl: &mut Controller,
    make: fn(PointerPhase, Vec2) -> PointerEvent,
    waypoints: &[(f32, f32)],
) -> Vec<GameEvent> {
    let points: Vec<Vec2> = waypoints.iter().map(|&(x, y)| Vec2::new(x, y)).collect();
    let mut events = vec![ctl.handle(make(PointerPhase::Down, points[0]), ORIGIN).event];

    for pair in points.windows(2) {
        let samples = ((pair[1] - pair[0]).length() / 4.0).ceil() as u32;
        for i in 1..=samples {
            let pos = pair[0].lerp(pair[1], i as f32 / samples as f32);
            let event = ctl.handle(make(PointerPhase::Move, pos), ORIGIN).event;
            events.push(event);
            if matches!(event, GameEvent::Collided | GameEvent::Won) {
                return events;
            }
        }
    }
    events
}

#[test]
fn mouse_drag_reaches_goal() {
    let mut ctl = Controller::new(Level::classic());
    let events = drag_route(&mut ctl, mouse, &ROUTE);

    assert_eq!(events.last(), Some(&GameEvent::Won));
    assert!(!events.contains(&GameEvent::Collided));
    assert_eq!(ctl.state().status, GameStatus::Won);
    let frozen = ctl.state().token;
    assert!(ctl.level().reaches_goal(frozen));

    // Releasing on the goal keeps the win
    let step = ctl.handle(mouse(PointerPhase::Up, frozen), ORIGIN);
    assert_eq!(step.event, GameEvent::Released);
    assert_eq!(ctl.state().status, GameStatus::Won);
    assert_eq!(ctl.state().token, frozen);

    // New drags are refused until restart
    let step = ctl.handle(mouse(PointerPhase::Down, Vec2::new(31.0, 500.0)), ORIGIN);
    assert_eq!(step.event, GameEvent::Ignored);
    assert_eq!(ctl.state().token, frozen);

    let step = ctl.restart();
    assert!(step.redraw);
    assert_eq!(ctl.state().status, GameStatus::Playing);
    assert_eq!(ctl.state().token, ctl.level().start());
}

#[test]
fn touch_drag_reaches_goal() {
    let mut ctl = Controller::new(Level::classic());
    let events = drag_route(&mut ctl, touch, &ROUTE);
    assert_eq!(events.last(), Some(&GameEvent::Won));
}

#[test]
fn cutting_a_corner_sends_token_home() {
    let mut ctl = Controller::new(Level::classic());
    // Straight line from the start toward the goal crosses interior walls
    let events = drag_route(&mut ctl, mouse, &[(29.0, 571.0), (353.0, 47.0)]);

    assert_eq!(events.last(), Some(&GameEvent::Collided));
    assert_eq!(ctl.state().token, ctl.level().start());
    assert_eq!(ctl.state().status, GameStatus::Playing);
    assert!(ctl.state().dragging);
}

#[test]
fn letting_go_halfway_resets() {
    let mut ctl = Controller::new(Level::classic());
    let events = drag_route(&mut ctl, mouse, &ROUTE[..6]);
    assert!(events.iter().all(|e| *e == GameEvent::Moved));
    assert_eq!(ctl.state().token, Vec2::new(231.0, 530.0));

    let step = ctl.handle(
        PointerEvent::touch(PointerPhase::Up, None).unwrap(),
        ORIGIN,
    );
    assert_eq!(step.event, GameEvent::ReleasedOffGoal);
    assert_eq!(ctl.state().token, ctl.level().start());
}

#[test]
fn pointer_outside_canvas_is_clamped() {
    let mut ctl = Controller::new(Level::classic());
    // Far below and left of the canvas: clamps to the bottom-left corner,
    // which touches the boundary walls
    let step = ctl.handle(
        PointerEvent::mouse(PointerPhase::Down, -100.0, 2000.0),
        ORIGIN,
    );
    assert_eq!(step.event, GameEvent::Collided);
    assert_eq!(ctl.state().token, ctl.level().start());
}
