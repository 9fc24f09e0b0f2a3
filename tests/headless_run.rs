use bounce_arenas::Settings;
use bounce_arenas::platform::{self, Demo, ManualClock, QuitAfter};
use bounce_arenas::renderer::{CommandRecorder, MeshRenderer};

#[test]
fn every_demo_runs_headless() {
    let demos = Demo::all(&Settings::default().with_seed(7)).expect("default settings");
    let mut renderer = MeshRenderer::new();
    for mut demo in demos {
        let frames = platform::run(
            &mut demo,
            &mut renderer,
            &mut ManualClock::default(),
            &mut QuitAfter::new(120),
        );
        assert_eq!(frames, 120);
        assert_eq!(demo.frame(), 120);
        assert!(!renderer.vertices().is_empty(), "{} drew nothing", demo.name());
    }
    assert_eq!(renderer.frames(), 360);
}

#[test]
fn recorded_frames_match_between_identical_runs() {
    let settings = Settings::default().with_seed(99);
    let record = || {
        let mut recorders = Vec::new();
        for mut demo in Demo::all(&settings).expect("default settings") {
            let mut recorder = CommandRecorder::new();
            platform::run(
                &mut demo,
                &mut recorder,
                &mut ManualClock::default(),
                &mut QuitAfter::new(300),
            );
            recorders.push(recorder.last_frame);
        }
        recorders
    };
    assert_eq!(record(), record());
}

#[test]
fn settings_file_drives_the_demos() {
    let path = std::env::temp_dir().join(format!("bounce-arenas-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{ "arena": { "ball_count": 3, "seed": 11 }, "rings": { "gravity": 0.0 } }"#,
    )
    .expect("write settings");
    let settings = Settings::load(&path).expect("load settings");
    std::fs::remove_file(&path).ok();

    let demos = Demo::all(&settings).expect("valid settings");
    match &demos[0] {
        Demo::Arena(state) => assert_eq!(state.fighters.len(), 3),
        other => panic!("expected the arena first, got {}", other.name()),
    }
    match &demos[2] {
        Demo::Rings(state) => assert_eq!(state.gravity, 0.0),
        other => panic!("expected the rings last, got {}", other.name()),
    }
}
