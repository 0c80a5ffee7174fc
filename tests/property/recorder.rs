use crate::utils::{call, catalog};
use mockforge::{
    CallRecorder, Invoke, MockClassGenerator, MockControl, MockTypeRegistry, StubMapper,
};
use proptest::prelude::*;
use std::sync::Arc;

proptest! {
    #[test]
    fn test_recorder_preserves_call_order(calls in prop::collection::vec(call(), 0..20)) {
        let generator = MockClassGenerator::with_registry(
            Arc::new(catalog()),
            Arc::new(MockTypeRegistry::new()),
        );
        generator.generate("ServiceMock", "Service").unwrap();
        let mock = generator
            .instantiate("ServiceMock", CallRecorder::shared(), StubMapper::shared())
            .unwrap();

        for (method, arguments) in &calls {
            mock.invoke(method, arguments.clone()).unwrap();
        }

        let recorded = mock.call_recorder().all_calls();
        prop_assert_eq!(recorded.len(), calls.len());
        for (call, (method, arguments)) in recorded.iter().zip(&calls) {
            prop_assert_eq!(call.receiver(), mock.id());
            prop_assert_eq!(call.method(), *method);
            prop_assert_eq!(call.arguments(), arguments.as_slice());
        }

        for method in crate::utils::METHODS {
            let expected = calls.iter().filter(|(m, _)| *m == method).count();
            prop_assert_eq!(mock.call_recorder().calls_to(method, mock.id()).count(), expected);
        }
    }
}
