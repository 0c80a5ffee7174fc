use crate::utils::{catalog, value};
use mockforge::{
    CallRecorder, Invoke, MockClassGenerator, MockControl, MockTypeRegistry, StaticAnswer,
    StubMapper,
};
use proptest::prelude::*;
use std::sync::Arc;

proptest! {
    #[test]
    fn test_last_registered_answer_wins(answers in prop::collection::vec(value(), 1..8)) {
        let generator = MockClassGenerator::with_registry(
            Arc::new(catalog()),
            Arc::new(MockTypeRegistry::new()),
        );
        generator.generate("ServiceMock", "Service").unwrap();
        let stubs = StubMapper::shared();
        let mock = generator
            .instantiate("ServiceMock", CallRecorder::shared(), Arc::clone(&stubs))
            .unwrap();

        for answer in &answers {
            mock.add_answer(Arc::new(StaticAnswer::new(answer.clone())), "find");
        }

        prop_assert_eq!(stubs.answers_for("find").len(), answers.len());
        prop_assert_eq!(mock.invoke("find", vec![]).unwrap(), answers.last().cloned().unwrap());
        prop_assert_eq!(mock.invoke("count", vec![]).unwrap(), mockforge::Value::Null);
    }
}
