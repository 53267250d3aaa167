use std::sync::{Arc, Mutex};
use std::time::Duration;

use game_core::{
    Action, AddPlayerAction, AttackAction, Available, Class, GameState, MoveAction, Player,
    PlayerId, Weapon,
};
use runtime::{RunOutcome, Runtime, RuntimeError, Store, TurnDriver, TurnListener};

const DELAY: Duration = Duration::from_millis(200);

fn catalog() -> Available {
    Available::new(vec![Class::new("warrior")], vec![Weapon::new("sword", 10)])
}

/// Players 1 (hp 30) and 2 (hp 5), both holding a sword.
fn duel() -> GameState {
    let mut state = GameState::new(catalog());
    state.world.player_list = vec![
        Player::new(PlayerId(1), "warrior", "sword", 30, 0, 0),
        Player::new(PlayerId(2), "warrior", "sword", 5, 1, 1),
    ];
    state
}

/// Records the last action seen by every notification.
fn record(store: &mut Store) -> Arc<Mutex<Vec<Option<Action>>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    store.subscribe(move |state| sink.lock().unwrap().push(state.last_action.clone()));
    log
}

#[derive(Default)]
struct Progress {
    turns: Vec<usize>,
    outcomes: Vec<RunOutcome>,
}

impl TurnListener for Progress {
    fn turn_started(&mut self, index: usize) {
        self.turns.push(index);
    }

    fn finished(&mut self, outcome: &RunOutcome) {
        self.outcomes.push(*outcome);
    }
}

#[tokio::test(start_paused = true)]
async fn lethal_attack_synthesizes_game_over_and_stops() {
    let mut store = Store::new(duel());
    let log = record(&mut store);
    let attack: Action = AttackAction::new(PlayerId(1), PlayerId(2)).into();
    let script = vec![
        vec![attack.clone(), MoveAction::new(PlayerId(1), 3, 3).into()],
        vec![MoveAction::new(PlayerId(1), 4, 4).into()],
    ];

    let outcome = TurnDriver::new(DELAY).run(&mut store, &script).await;

    assert_eq!(
        outcome,
        RunOutcome::GameOver {
            winner: PlayerId(1),
            turn: 0
        }
    );
    assert_eq!(store.state().winner, Some(PlayerId(1)));
    assert_eq!(store.state().player(PlayerId(2)).map(|p| p.hp), Some(-5));

    // Nothing scripted after the kill reached the store.
    let player = store.state().player(PlayerId(1)).unwrap();
    assert_eq!((player.x, player.y), (0, 0));
    assert_eq!(
        *log.lock().unwrap(),
        vec![Some(attack), Some(Action::game_over(PlayerId(1)))]
    );
}

#[tokio::test(start_paused = true)]
async fn script_without_decisive_state_is_exhausted() {
    let mut store = Store::new(GameState::new(catalog()));
    let script: Vec<Vec<Action>> = vec![
        vec![
            AddPlayerAction::new(PlayerId(1), "warrior", "sword", 0, 0).into(),
            AddPlayerAction::new(PlayerId(2), "warrior", "sword", 2, 2).into(),
        ],
        vec![AttackAction::new(PlayerId(1), PlayerId(2)).into()],
        vec![MoveAction::new(PlayerId(2), 5, 5).into()],
    ];
    let mut progress = Progress::default();

    let outcome = TurnDriver::new(DELAY)
        .run_with(&mut store, &script, &mut progress)
        .await;

    assert_eq!(outcome, RunOutcome::Exhausted { turns: 3 });
    assert!(!outcome.stopped_early());
    assert_eq!(progress.turns, vec![0, 1, 2]);
    assert_eq!(progress.outcomes, vec![outcome]);
    assert_eq!(store.state().winner, None);
    assert_eq!(store.state().census().alive, 2);
}

#[tokio::test(start_paused = true)]
async fn every_turn_waits_for_the_delay() {
    let mut store = Store::new(duel());
    let script: Vec<Vec<Action>> = vec![
        vec![MoveAction::new(PlayerId(1), 1, 0).into()],
        vec![MoveAction::new(PlayerId(1), 2, 0).into()],
        vec![MoveAction::new(PlayerId(1), 3, 0).into()],
    ];

    let started = tokio::time::Instant::now();
    TurnDriver::new(DELAY).run(&mut store, &script).await;
    let elapsed = started.elapsed();

    assert!(elapsed >= DELAY * 3, "elapsed {:?}", elapsed);
    assert!(elapsed < DELAY * 4, "elapsed {:?}", elapsed);
}

#[tokio::test(start_paused = true)]
async fn early_stop_skips_remaining_delays() {
    let mut store = Store::new(duel());
    let script: Vec<Vec<Action>> = vec![
        vec![AttackAction::new(PlayerId(1), PlayerId(2)).into()],
        vec![MoveAction::new(PlayerId(1), 2, 0).into()],
        vec![MoveAction::new(PlayerId(1), 3, 0).into()],
    ];

    let started = tokio::time::Instant::now();
    let outcome = TurnDriver::new(DELAY).run(&mut store, &script).await;

    assert!(outcome.stopped_early());
    assert!(started.elapsed() < DELAY * 2);
}

#[tokio::test(start_paused = true)]
async fn invalid_actions_do_not_interrupt_the_replay() {
    let mut store = Store::new(duel());
    let log = record(&mut store);
    let script: Vec<Vec<Action>> = vec![vec![
        MoveAction::new(PlayerId(1), -1, 0).into(),
        AttackAction::new(PlayerId(1), PlayerId(99)).into(),
        Action::Unknown,
    ]];

    let outcome = TurnDriver::new(DELAY).run(&mut store, &script).await;

    assert_eq!(outcome, RunOutcome::Exhausted { turns: 1 });
    assert_eq!(store.state(), &duel());
    assert_eq!(*log.lock().unwrap(), vec![None, None, None]);
}

#[tokio::test(start_paused = true)]
async fn embedded_skirmish_ends_with_the_warrior_standing() {
    let state = game_content::StateLoader::embedded().unwrap();
    let script = game_content::ScriptLoader::embedded().unwrap();
    let mut runtime = Runtime::builder()
        .initial_state(state)
        .script(script)
        .build()
        .unwrap();
    let game_overs = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&game_overs);
    runtime.subscribe(move |state| {
        if matches!(state.last_action, Some(Action::GameOver(_))) {
            *counter.lock().unwrap() += 1;
        }
    });
    let mut progress = Progress::default();

    let outcome = runtime.run(&mut progress).await;

    assert_eq!(
        outcome,
        RunOutcome::GameOver {
            winner: PlayerId(1),
            turn: 6
        }
    );
    assert_eq!(progress.turns, vec![0, 1, 2, 3, 4, 5, 6]);

    let state = runtime.into_state();
    assert_eq!(state.winner, Some(PlayerId(1)));
    assert_eq!(state.players().len(), 4);
    assert_eq!(state.census().alive, 1);
    assert_eq!(state.player(PlayerId(1)).map(|p| p.hp), Some(15));
    // The bard never joined and the archer never left the arena edge.
    assert!(state.player(PlayerId(5)).is_none());
    let archer = state.player(PlayerId(4)).unwrap();
    assert_eq!((archer.x, archer.y), (9, 1));
    // The move scripted after the final blow never ran.
    let warrior = state.player(PlayerId(1)).unwrap();
    assert_eq!((warrior.x, warrior.y), (1, 1));
    assert_eq!(*game_overs.lock().unwrap(), 1);
}

#[tokio::test(start_paused = true)]
async fn unsubscribed_callbacks_miss_the_replay() {
    let script: Vec<Vec<Action>> = vec![vec![MoveAction::new(PlayerId(1), 2, 2).into()]];
    let mut runtime = Runtime::builder()
        .initial_state(duel())
        .script(script)
        .build()
        .unwrap();

    let calls = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&calls);
    let kept = runtime.subscribe(move |_| *counter.lock().unwrap() += 1);
    let dropped = runtime.subscribe(|_| panic!("unsubscribed callback ran"));
    assert!(runtime.unsubscribe(dropped));
    assert!(!runtime.unsubscribe(dropped));

    runtime.run(&mut Progress::default()).await;

    assert_eq!(*calls.lock().unwrap(), 1);
    assert!(runtime.unsubscribe(kept));
}

#[test]
fn builder_requires_state_and_script() {
    assert!(matches!(
        Runtime::builder().script(Vec::new()).build(),
        Err(RuntimeError::MissingInitialState)
    ));
    assert!(matches!(
        Runtime::builder().initial_state(duel()).build(),
        Err(RuntimeError::MissingScript)
    ));

    let mut finished = duel();
    finished.winner = Some(PlayerId(2));
    assert!(matches!(
        Runtime::builder()
            .initial_state(finished)
            .script(Vec::new())
            .build(),
        Err(RuntimeError::AlreadyFinished { .. })
    ));
}
