//! ベンチマークオーケストレーター
//!
//! 1回の実行は一方向の状態遷移として進む:
//! Idle → TypesGenerated → ModuleBuilt → ContainerCreated
//!      → RegistrationTimed → ResolutionTimed → Done
//! 途中で失敗した場合、部分的な計測値は破棄され結果は構築されない。
//! オーケストレーターは使い捨てで、再実行には新しいインスタンスが必要。

use crate::core::error::{BenchResult, BenchmarkError};
use crate::core::traits::ContainerAbstraction;
use crate::core::types::{BenchmarkResult, CompiledTypePair, TypeHandle};
use crate::dispatch::{bind, invoke, resolve_operation, GenericOperationHandle, OperationDescriptor};
use crate::typegen::{DynamicModuleBuilder, TypePairGenerator};
use std::time::{Duration, Instant};

/// デフォルトで生成する型ペア数
pub const DEFAULT_NUMBER_OF_TYPE_PAIRS: usize = 2000;

/// 1回の実行の進行状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    TypesGenerated,
    ModuleBuilt,
    ContainerCreated,
    RegistrationTimed,
    ResolutionTimed,
    Done,
}

/// コンテナ抽象のベンチマークを統率する使い捨てオーケストレーター
pub struct ContainerBenchmarker {
    state: RunState,
}

impl ContainerBenchmarker {
    pub fn new() -> Self {
        Self {
            state: RunState::Idle,
        }
    }

    /// 現在の進行状態
    pub fn state(&self) -> RunState {
        self.state
    }

    /// 供給されたコンテナ抽象をベンチマークする
    ///
    /// 両方の計測フェーズが完走した場合にのみ `BenchmarkResult` を返す。
    /// いずれかの段階での失敗は実行全体を中断させる。
    pub fn run(
        &mut self,
        container: &mut dyn ContainerAbstraction,
        pair_count: usize,
    ) -> BenchResult<BenchmarkResult> {
        if self.state != RunState::Idle {
            return Err(BenchmarkError::invalid_operation(
                "このベンチマーカーは既に使用されています。再実行には新しいインスタンスが必要です",
            ));
        }

        // 型ペア定義の生成
        let generator = TypePairGenerator::new();
        let specs = generator.generate(pair_count)?;
        self.state = RunState::TypesGenerated;

        // 定義を一括コンパイルして実行時ハンドルへ解決
        let builder = DynamicModuleBuilder::new();
        let pairs = builder.build(&specs)?;
        self.state = RunState::ModuleBuilt;

        // コンテナの作成 (二重作成の検出は抽象側に委譲)
        container
            .create_container()
            .map_err(|source| BenchmarkError::container_operation("create_container", source))?;
        self.state = RunState::ContainerCreated;

        // 操作ハンドルの解決は計測ループの外で一度だけ行う
        let register_transient =
            resolve_operation(&OperationDescriptor::new("register_transient", 2))?;
        let get_instance = resolve_operation(&OperationDescriptor::new("get_instance", 1))?;

        // 登録フェーズ: 全ペアをインターフェース経由でtransient登録
        let time_to_register_transient_by_interface = Self::run_timed_phase(
            container,
            &pairs,
            &register_transient,
            registration_type_arguments,
        )?;
        self.state = RunState::RegistrationTimed;

        // 取得フェーズ: 全ペアをインターフェース経由で解決
        let time_to_get_instances =
            Self::run_timed_phase(container, &pairs, &get_instance, resolution_type_arguments)?;
        self.state = RunState::ResolutionTimed;

        let result = BenchmarkResult::new(
            pairs.len(),
            time_to_register_transient_by_interface,
            time_to_get_instances,
        );
        self.state = RunState::Done;

        Ok(result)
    }

    /// 1フェーズを計測する
    ///
    /// タイマーは全ペアに対するループだけを覆う。ペアごとのバインドは
    /// 計測対象に含める (コンテナの登録APIは具象型ごとにジェネリックであり、
    /// このコストは測定対象の一部)。
    fn run_timed_phase(
        container: &mut dyn ContainerAbstraction,
        pairs: &[CompiledTypePair],
        handle: &GenericOperationHandle,
        type_arguments_for: fn(&CompiledTypePair) -> Vec<&TypeHandle>,
    ) -> BenchResult<Duration> {
        let started = Instant::now();
        for pair in pairs {
            let bound = bind(handle, &type_arguments_for(pair))?;
            invoke(&bound, container)?;
        }
        Ok(started.elapsed())
    }
}

fn registration_type_arguments(pair: &CompiledTypePair) -> Vec<&TypeHandle> {
    vec![pair.interface(), pair.implementation()]
}

fn resolution_type_arguments(pair: &CompiledTypePair) -> Vec<&TypeHandle> {
    vec![pair.interface()]
}

impl Default for ContainerBenchmarker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::{BTreeMapContainer, HashMapContainer, LifecycleContainer};
    use crate::core::error::ContainerError;
    use crate::core::traits::MockContainerAbstraction;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_run_completes_in_done_state() {
        let mut container = LifecycleContainer::new(HashMapContainer::new());
        let mut benchmarker = ContainerBenchmarker::new();

        let result = benchmarker.run(&mut container, 50).unwrap();

        assert_eq!(benchmarker.state(), RunState::Done);
        assert_eq!(result.number_of_types_created, 50);
    }

    #[test]
    fn test_run_works_for_both_backends() {
        let mut hash_container = LifecycleContainer::new(HashMapContainer::new());
        let mut btree_container = LifecycleContainer::new(BTreeMapContainer::new());

        let hash_result = ContainerBenchmarker::new()
            .run(&mut hash_container, 20)
            .unwrap();
        let btree_result = ContainerBenchmarker::new()
            .run(&mut btree_container, 20)
            .unwrap();

        assert_eq!(hash_result.number_of_types_created, 20);
        assert_eq!(btree_result.number_of_types_created, 20);
    }

    #[test]
    fn test_run_single_pair() {
        let mut container = LifecycleContainer::new(HashMapContainer::new());
        let mut benchmarker = ContainerBenchmarker::new();

        let result = benchmarker.run(&mut container, 1).unwrap();

        assert_eq!(result.number_of_types_created, 1);
    }

    #[test]
    fn test_benchmarker_is_single_use() {
        let mut container = LifecycleContainer::new(HashMapContainer::new());
        let mut benchmarker = ContainerBenchmarker::new();
        benchmarker.run(&mut container, 5).unwrap();

        let mut second_container = LifecycleContainer::new(HashMapContainer::new());
        let result = benchmarker.run(&mut second_container, 5);

        assert!(matches!(
            result,
            Err(BenchmarkError::InvalidOperation { .. })
        ));
        // 状態は完了のまま変化しない
        assert_eq!(benchmarker.state(), RunState::Done);
    }

    #[test]
    fn test_zero_pairs_fails_before_any_transition() {
        let mut container = LifecycleContainer::new(HashMapContainer::new());
        let mut benchmarker = ContainerBenchmarker::new();

        let result = benchmarker.run(&mut container, 0);

        assert!(matches!(
            result,
            Err(BenchmarkError::InvalidArgument { .. })
        ));
        assert_eq!(benchmarker.state(), RunState::Idle);
    }

    #[test]
    fn test_precreated_container_aborts_the_run() {
        let mut container = LifecycleContainer::new(HashMapContainer::new());
        container.create_container().unwrap();

        let mut benchmarker = ContainerBenchmarker::new();
        let result = benchmarker.run(&mut container, 5);

        match result {
            Err(BenchmarkError::ContainerOperation { operation, source }) => {
                assert_eq!(operation, "create_container");
                assert_eq!(source, ContainerError::AlreadyCreated);
            }
            other => panic!("ContainerOperation error expected, got {other:?}"),
        }
        assert_eq!(benchmarker.state(), RunState::ModuleBuilt);
    }

    #[test]
    fn test_registration_failure_aborts_without_result() {
        let mut mock = MockContainerAbstraction::new();
        mock.expect_create_container().times(1).returning(|| Ok(()));

        // 3件目の登録で失敗させる
        let calls = AtomicUsize::new(0);
        mock.expect_register_transient_as().returning(move |_, _| {
            if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                Ok(())
            } else {
                Err(ContainerError::not_registered("BenchInterface_00003"))
            }
        });
        // 登録フェーズが中断するため get_instance には到達しない
        mock.expect_get_instance().times(0);

        let mut benchmarker = ContainerBenchmarker::new();
        let result = benchmarker.run(&mut mock, 10);

        assert!(matches!(
            result,
            Err(BenchmarkError::ContainerOperation { .. })
        ));
        assert_eq!(benchmarker.state(), RunState::ContainerCreated);
    }

    #[test]
    fn test_resolution_failure_aborts_without_result() {
        let mut mock = MockContainerAbstraction::new();
        mock.expect_create_container().times(1).returning(|| Ok(()));
        mock.expect_register_transient_as()
            .times(4)
            .returning(|_, _| Ok(()));
        mock.expect_get_instance()
            .times(1)
            .returning(|service| Err(ContainerError::not_registered(service.name())));

        let mut benchmarker = ContainerBenchmarker::new();
        let result = benchmarker.run(&mut mock, 4);

        assert!(matches!(
            result,
            Err(BenchmarkError::ContainerOperation { .. })
        ));
        assert_eq!(benchmarker.state(), RunState::RegistrationTimed);
    }
}
