//! Calls on generated instances: recording, answers and the control surface.

use crate::fixtures;
use mockforge::stubber::{AnswerError, Invocation};
use mockforge::{
    Call, CallRecorder, CallbackAnswer, InvocationError, Invoke, MockClassGenerator, MockControl,
    MockError, MockObject, StaticAnswer, StubMapper, ThrowAnswer, Value,
};
use std::sync::Arc;

fn instance(name: &str, target: &str) -> (MockObject, Arc<CallRecorder>, Arc<StubMapper>) {
    let generator = MockClassGenerator::new(fixtures::catalog());
    generator.generate(name, target).expect("generation succeeds");

    let recorder = CallRecorder::shared();
    let stubs = StubMapper::shared();
    let mock = generator
        .instantiate(name, Arc::clone(&recorder), Arc::clone(&stubs))
        .unwrap();
    (mock, recorder, stubs)
}

#[test]
fn test_call_recorder_is_the_bound_one() {
    let (mock, recorder, _) = instance("DispRecorder__Mock", "Repository");

    assert!(Arc::ptr_eq(&mock.call_recorder(), &recorder));
    assert!(Arc::ptr_eq(&mock.call_recorder(), &mock.call_recorder()));
}

#[test]
fn test_call_is_recorded() {
    let (mock, recorder, _) = instance("DispRecords__Mock", "Repository");

    assert_eq!(mock.invoke("count", vec![]).unwrap(), Value::Null);

    assert_eq!(recorder.len(), 1);
    let calls: Vec<Call> = recorder.calls_to("count", mock.id()).collect();
    assert_eq!(calls, vec![Call::new(mock.id(), "count")]);
}

#[test]
fn test_recorded_arguments_and_order() {
    let (mock, recorder, _) = instance("DispOrder__Mock", "Repository");

    mock.invoke("find", vec![Value::Int(1)]).unwrap();
    mock.invoke("save", vec![mock.as_value()]).unwrap();
    mock.invoke("find", vec![Value::Int(2), Value::from("extra")]).unwrap();

    let finds: Vec<Call> = recorder.calls_to("find", mock.id()).collect();
    assert_eq!(finds.len(), 2);
    assert_eq!(finds[0].arguments(), &[Value::Int(1)]);
    assert_eq!(finds[1].arguments(), &[Value::Int(2), Value::from("extra")]);

    let all = recorder.all_calls();
    let methods: Vec<&str> = all.iter().map(|c| c.method()).collect();
    assert_eq!(methods, vec!["find", "save", "find"]);
    assert_eq!(all[1].arguments(), &[Value::Object(mock.id())]);
}

#[test]
fn test_stubbed_answer_is_returned() {
    let (mock, recorder, _) = instance("DispStubbed__Mock", "Repository");

    mock.add_answer(Arc::new(StaticAnswer::new(42)), "count");

    assert_eq!(mock.invoke("count", vec![]).unwrap(), Value::Int(42));
    assert_eq!(recorder.count_calls_to("count", mock.id()), 1);
}

#[test]
fn test_add_answer_delegates_to_stub_map() {
    let (mock, _, stubs) = instance("DispDelegates__Mock", "Repository");

    assert!(!stubs.has_stub("find"));
    mock.add_answer(Arc::new(StaticAnswer::new("row")), "find");
    assert!(stubs.has_stub("find"));
    assert_eq!(stubs.answers_for("find").len(), 1);
}

#[test]
fn test_last_answer_wins() {
    let (mock, _, _) = instance("DispLastWins__Mock", "Repository");

    mock.add_answer(Arc::new(StaticAnswer::new(1)), "count");
    mock.add_answer(Arc::new(StaticAnswer::new(2)), "count");

    assert_eq!(mock.invoke("count", vec![]).unwrap(), Value::Int(2));
}

#[test]
fn test_callback_sees_the_invocation() {
    let (mock, _, _) = instance("DispCallback__Mock", "UserRepository");
    let id = mock.id();

    mock.add_answer(
        Arc::new(CallbackAnswer::new(move |invocation: &Invocation<'_>| {
            assert_eq!(invocation.receiver, id);
            let email = invocation.arguments[0]
                .as_str()
                .ok_or_else(|| AnswerError::Failed("email must be a string".to_string()))?;
            Ok(Value::from(format!("user:{}", email)))
        })),
        "findByEmail",
    );

    assert_eq!(
        mock.invoke("findByEmail", vec![Value::from("a@b.c")]).unwrap(),
        Value::from("user:a@b.c")
    );
    assert_eq!(
        mock.invoke("findByEmail", vec![Value::Int(3)]).unwrap_err(),
        InvocationError::Answer(AnswerError::Failed("email must be a string".to_string()))
    );
}

#[test]
fn test_thrown_error_propagates_and_call_is_recorded() {
    let (mock, recorder, _) = instance("DispThrows__Mock", "Repository");

    mock.add_answer(Arc::new(ThrowAnswer::new("connection lost")), "save");

    let err = mock.invoke("save", vec![Value::Int(7)]).unwrap_err();
    assert_eq!(
        err,
        InvocationError::Answer(AnswerError::Thrown {
            message: "connection lost".to_string()
        })
    );
    assert_eq!(err.to_string(), "connection lost");
    assert_eq!(recorder.count_calls_to("save", mock.id()), 1);
}

#[test]
fn test_void_method_discards_answer_value() {
    let (mock, recorder, _) = instance("DispVoid__Mock", "Repository");

    mock.add_answer(Arc::new(StaticAnswer::new(true)), "save");

    assert_eq!(mock.invoke("save", vec![Value::Int(1)]).unwrap(), Value::Null);
    assert_eq!(recorder.len(), 1);
}

#[test]
fn test_undefined_method_is_not_recorded() {
    let (mock, recorder, _) = instance("DispUndefined__Mock", "Repository");

    for method in ["missing", "__construct", "connection", "create"] {
        assert!(matches!(
            mock.invoke(method, vec![]),
            Err(InvocationError::UndefinedMethod { .. })
        ));
    }
    assert!(recorder.is_empty());
}

#[test]
fn test_missing_arguments_are_not_recorded() {
    let (mock, recorder, _) = instance("DispMissingArgs__Mock", "Repository");

    assert_eq!(
        mock.invoke("find", vec![]).unwrap_err(),
        InvocationError::MissingArguments {
            class: "DispMissingArgs__Mock".to_string(),
            method: "find".to_string(),
            required: 1,
            given: 0,
        }
    );
    assert!(recorder.is_empty());
}

#[test]
fn test_protected_and_variadic_methods() {
    let (mock, recorder, _) = instance("DispProtected__Mock", "Repository");

    mock.invoke("log", vec![]).unwrap();
    mock.invoke("log", vec![Value::from("a"), Value::from("b"), Value::from("c")])
        .unwrap();

    let logs: Vec<Call> = recorder.calls_to("log", mock.id()).collect();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[1].arguments().len(), 3);
}

#[test]
fn test_recorder_and_stub_map_bind_to_one_instance() {
    let generator = MockClassGenerator::new(fixtures::catalog());
    generator.generate("DispExclusive__Mock", "Repository").unwrap();

    let recorder = CallRecorder::shared();
    let stubs = StubMapper::shared();
    let first = generator
        .instantiate("DispExclusive__Mock", Arc::clone(&recorder), Arc::clone(&stubs))
        .unwrap();

    assert_eq!(
        generator
            .instantiate("DispExclusive__Mock", Arc::clone(&recorder), StubMapper::shared())
            .unwrap_err(),
        MockError::AlreadyBound("call recorder")
    );

    // A rejected stub map leaves the fresh recorder free for another instance.
    let spare = CallRecorder::shared();
    assert_eq!(
        generator
            .instantiate("DispExclusive__Mock", Arc::clone(&spare), Arc::clone(&stubs))
            .unwrap_err(),
        MockError::AlreadyBound("stub map")
    );
    let second = generator
        .instantiate("DispExclusive__Mock", spare, StubMapper::shared())
        .unwrap();

    first.invoke("count", vec![]).unwrap();
    assert_eq!(recorder.len(), 1);
    assert!(second.call_recorder().is_empty());
    assert_ne!(first.id(), second.id());
}

#[test]
fn test_call_query_is_lazy_and_restartable() {
    let (mock, recorder, _) = instance("DispLazyQuery__Mock", "Repository");

    let mut query = recorder.calls_to("count", mock.id());
    mock.invoke("count", vec![]).unwrap();
    assert!(query.next().is_some());
    assert!(query.next().is_none());

    mock.invoke("count", vec![]).unwrap();
    assert!(query.next().is_some());

    query.restart();
    assert_eq!(query.count(), 2);
}
