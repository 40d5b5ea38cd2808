mod common;

use common::{CountingClock, DrawCall, RecordingRenderer, ScriptedInput};
use pixel_raiders::constants::{BANNER_Y, WIDTH};
use pixel_raiders::frontend::{Align, FrameInput, Frontend, MenuEvent};
use pixel_raiders::menu::{run_menu, MenuExit, TITLE};
use pixel_raiders::Assets;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn frontend(
    menu: Vec<MenuEvent>,
    frames: Vec<FrameInput>,
) -> Frontend<RecordingRenderer, ScriptedInput, CountingClock> {
    Frontend::new(
        RecordingRenderer::default(),
        ScriptedInput {
            frames: frames.into(),
            menu: menu.into(),
        },
        CountingClock::default(),
    )
}

fn quit() -> FrameInput {
    FrameInput {
        quit: true,
        ..FrameInput::default()
    }
}

#[test]
fn quit_from_title_screen() {
    let assets = Assets::builtin();
    let mut fe = frontend(vec![MenuEvent::None, MenuEvent::Quit], Vec::new());

    let result = run_menu(&mut fe, &assets, &mut StdRng::seed_from_u64(1)).unwrap();

    assert_eq!(result, (MenuExit::Closed, 0));
    assert_eq!(fe.clock.ticks, 2);
    assert_eq!(fe.renderer.presents(), 2);
    assert!(fe.renderer.calls.contains(&DrawCall::Text(
        TITLE.to_string(),
        WIDTH / 2,
        BANNER_Y,
        Align::Center
    )));
}

#[test]
fn start_runs_a_session_and_in_game_quit_exits() {
    let assets = Assets::builtin();
    let frames = vec![FrameInput::default(), FrameInput::default(), quit()];
    let mut fe = frontend(vec![MenuEvent::Start], frames);

    let result = run_menu(&mut fe, &assets, &mut StdRng::seed_from_u64(1)).unwrap();

    assert_eq!(result, (MenuExit::QuitInGame, 1));
    // One title frame, then three game frames.
    assert_eq!(fe.clock.ticks, 4);
    let texts = fe.renderer.texts();
    assert_eq!(texts[0], TITLE);
    assert!(texts.contains(&"Level : 1"));
}

#[test]
fn each_start_gets_a_fresh_session() {
    let assets = Assets::builtin();
    // With no input at all the player never shoots, so every enemy either
    // rams the ship or breaches; both sessions end in a loss on their own.
    let mut fe = frontend(
        vec![MenuEvent::Start, MenuEvent::Start, MenuEvent::Quit],
        Vec::new(),
    );

    let result = run_menu(&mut fe, &assets, &mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(result, (MenuExit::Closed, 2));

    let texts = fe.renderer.texts();
    let titles: Vec<usize> = texts
        .iter()
        .enumerate()
        .filter(|(_, t)| **t == TITLE)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(titles.len(), 3);

    // The first HUD after each start shows a brand-new session.
    for &start in &titles[..2] {
        assert_eq!(texts[start + 1], "Lives : 5");
        assert_eq!(texts[start + 2], "Level : 0");
    }
    // The loss banner was shown before returning to the title.
    assert_eq!(texts[titles[1] - 1], "You Lost!!");
}
