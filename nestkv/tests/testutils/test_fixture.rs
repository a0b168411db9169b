//! Test fixture for NestKV integration tests

#![allow(dead_code)]

use nestkv::{EngineConfig, StepOutcome, Store, TransactionEngine};

/// Engine wrapper with helpers for driving command transcripts
pub struct TestFixture {
    engine: TransactionEngine,
}

impl TestFixture {
    /// Fixture over an empty store with the default configuration
    pub fn new() -> Self {
        Self {
            engine: TransactionEngine::new(),
        }
    }

    /// Fixture with a custom engine configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: TransactionEngine::with_config(config),
        }
    }

    /// Fixture whose base store is pre-populated with `pairs`
    pub fn with_data(pairs: &[(&str, &str)]) -> Self {
        let base: Store = pairs.iter().copied().collect();
        Self {
            engine: TransactionEngine::with_store(EngineConfig::default(), base),
        }
    }

    /// Run one line and return its outcome
    pub fn run(&mut self, line: &str) -> StepOutcome {
        self.engine.step(line)
    }

    /// Run every line in order, collecting outcomes
    pub fn run_script(&mut self, lines: &[&str]) -> Vec<StepOutcome> {
        lines.iter().map(|line| self.engine.step(line)).collect()
    }

    /// Run lines that must all execute silently
    pub fn run_silent(&mut self, lines: &[&str]) {
        for line in lines {
            let outcome = self.engine.step(line);
            assert_eq!(
                outcome,
                StepOutcome::Silent,
                "Expected '{}' to be silent, got {:?}",
                line,
                outcome
            );
        }
    }

    /// Run a line that must print, returning the printed text
    pub fn printed(&mut self, line: &str) -> String {
        match self.engine.step(line) {
            StepOutcome::Printed(text) => text,
            other => panic!("Expected '{}' to print, got {:?}", line, other),
        }
    }

    /// Shorthand for the printed result of `GET key`
    pub fn get(&mut self, key: &str) -> String {
        self.printed(&format!("GET {}", key))
    }

    pub fn depth(&self) -> usize {
        self.engine.depth()
    }

    pub fn store(&self) -> &Store {
        self.engine.current()
    }

    pub fn engine(&self) -> &TransactionEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut TransactionEngine {
        &mut self.engine
    }
}
