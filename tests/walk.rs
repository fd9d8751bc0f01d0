use walkabout::{
    app::{App, Flow},
    config::Config,
    direction::{Direction, PerDirection},
    event::Input,
    frames::FrameSet,
    state::GameState,
};

#[test]
fn walk_to_the_right_edge() {
    let config = Config::default();
    let mut state = GameState::new(&config);
    assert_eq!(state.direction(), Some(Direction::Right));
    assert_eq!(state.position(), (5, 300));

    state.advance();
    assert_eq!(state.position(), (15, 300));
    assert_eq!(state.frame_index(Direction::Right), 1);

    for i in 0..79 {
        state.advance();
        assert_eq!(state.frame_index(Direction::Right), (i + 2) % 3);
    }
    assert_eq!(state.position(), (800 - 80, 300));
    assert_eq!(state.frame_index(Direction::Right), 80 % 3);
}

#[test]
fn turn_around_at_the_edge() {
    let mut state = GameState::new(&Config::default().with_start(720, 300));
    state.advance();
    let right = state.frame_index(Direction::Right);
    let left = state.frame_index(Direction::Left);

    state.set_direction(Direction::Left);
    state.advance();
    assert_eq!(state.position(), (710, 300));
    assert_eq!(state.frame_index(Direction::Left), left + 1);
    assert_eq!(state.frame_index(Direction::Right), right);
}

#[test]
fn frames_cycle_and_position_stays_on_canvas() {
    let config = Config::default();
    let mut state = GameState::new(&config);
    for direction in [
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Right,
    ] {
        state.set_direction(direction);
        let mut seen = Vec::new();
        for _ in 0..100 {
            state.advance();
            let frame = state.frame_index(direction);
            assert!(frame < state.frame_count(direction));
            seen.push(frame);
            let (x, y) = state.position();
            assert!(x <= config.max_x() && y <= config.max_y());
        }
        // wraps back to zero after the last frame
        assert!(seen.windows(2).all(|w| w[1] == (w[0] + 1) % 3));
    }
    assert_eq!(state.position(), (720, 0));
}

#[test]
fn only_the_new_direction_changes() {
    let mut state = GameState::new(&Config::default().with_start(300, 300));
    for direction in Direction::ALL {
        let before = state.snapshot();
        state.set_direction(direction);
        let after = state.advance().expect("something moved");

        for other in Direction::ALL.into_iter().filter(|&d| d != direction) {
            assert_eq!(after.frame(other), before.frame(other));
        }
        assert_eq!(after.frame(direction), (before.frame(direction) + 1) % 3);
        match direction {
            Direction::Left | Direction::Right => assert_eq!(after.y, before.y),
            Direction::Up | Direction::Down => assert_eq!(after.x, before.x),
        }
    }
}

#[test]
fn unknown_direction_freezes_everything() {
    let mut state = GameState::new(&Config::default());
    state.advance();
    state.set_direction("northwest".parse::<Direction>().ok());
    let frozen = state.snapshot();
    for _ in 0..10 {
        assert_eq!(state.advance(), None);
    }
    assert_eq!(state.snapshot(), frozen);

    // recovers once a real direction comes back
    state.set_direction("up".parse::<Direction>().ok());
    assert!(state.advance().is_some());
}

#[test]
fn app_inputs_drive_the_state() {
    let mut counts = PerDirection::splat(3);
    counts[Direction::Up] = 4;
    let config = Config::default().with_frame_counts(counts);
    let frames = FrameSet::builtin(&config);
    assert_eq!(frames.frame_count(Direction::Up), 4);

    let mut app = App::with_frames(config, frames);
    assert_eq!(app.handle(Input::Steer(Direction::Up)), Flow::Redraw);
    assert_eq!(app.state().direction(), Some(Direction::Up));
    assert_eq!(app.handle(Input::Quit), Flow::Quit);
}
