//! End-to-end scenario: wrap, configure, then drive the facade.
use remote_env_core::dummy::DummyRemoteEnv;
use remote_env_core::{ControlEvent, Observation, Options};
use remote_env_retro::util::test::NullRuntime;
use remote_env_retro::{Retro, RetroConfig};
use serde_json::json;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn wrap_then_configure_yields_a_working_facade() {
    init();
    let (runtime, trace) = NullRuntime::new();
    let retro = Retro::build(&RetroConfig::default().enabled(true), runtime);

    let obs = vec![Observation::Array(
        ndarray::array![[0.0f32, 1.0]].into_dyn(),
    )];
    let env = Box::new(DummyRemoteEnv::new(obs.clone()));

    let env = retro.wrap(env, "Vision", &Options::new()).unwrap();
    let mut env = retro.configure(env, &Options::new()).unwrap();

    // Wrapping happened before configuration, and the runtime adapters
    // were composed blocking-first.
    assert_eq!(
        *trace.borrow(),
        vec!["new:Vision", "new:BlockingReset", "new:Unvectorize"]
    );

    // reset delegates through the whole chain, outermost adapter first,
    // and returns the observation untouched.
    trace.borrow_mut().clear();
    assert_eq!(env.reset().unwrap(), obs);
    assert_eq!(
        *trace.borrow(),
        vec!["reset:Unvectorize", "reset:BlockingReset", "reset:Vision"]
    );

    let action = vec![vec![ControlEvent::Key(1, 2), ControlEvent::Key(3, 4)]];
    let jsonable = env.action_space().to_jsonable(&action);
    assert_eq!(jsonable, json!([[[1, 2], [3, 4]]]));

    // The facade passes the native action through unmodified.
    let restored = env.action_space().from_jsonable(&jsonable).unwrap();
    assert_eq!(restored, action);
    let step = env.step(&restored).unwrap();
    assert_eq!(step.obs, obs);
    assert_eq!(step.reward, vec![0.0]);
    assert_eq!(step.is_done, vec![0]);
}

#[test]
fn observations_survive_the_json_conversion_structurally() {
    init();
    let (runtime, _trace) = NullRuntime::new();
    let retro = Retro::build(&RetroConfig::default().enabled(true), runtime);

    let obs = vec![Observation::Dict(vec![
        (
            "vision".to_string(),
            Observation::Array(ndarray::array![[1.0f32], [2.0]].into_dyn()),
        ),
        ("text".to_string(), Observation::Value(json!(["hello"]))),
    ])];
    let env = Box::new(DummyRemoteEnv::new(obs));
    let mut env = retro.configure(env, &Options::new()).unwrap();

    let obs = env.reset().unwrap();
    assert_eq!(
        env.observation_space().to_jsonable(&obs),
        json!([{"vision": [[1.0], [2.0]], "text": ["hello"]}])
    );
}

#[test]
fn configure_forwards_options_to_the_environment() {
    init();
    let (runtime, _trace) = NullRuntime::new();
    let retro = Retro::build(&RetroConfig::default().enabled(true), runtime);

    let env = Box::new(DummyRemoteEnv::new(vec![]));
    let options = Options::new().set("fps", 30);
    // DummyRemoteEnv accepts `fps`; a rejection would surface as
    // `InvalidOptions` here.
    let _env = retro.configure(env, &options).unwrap();
}
