// ABOUTME: Analytics facade bundling the summarizer, load model, and classifier behind one config
// ABOUTME: Converts domain failures into AppError for callers such as the CLI
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use trainlog_core::errors::AppResult;
use trainlog_core::models::{
    CompletedActivity, CompletedRecord, Pair, PlannedWorkout, SessionSummary,
};
use trainlog_intelligence::estimation::{
    completed_if, completed_stress, planned_if, planned_stress,
};
use trainlog_intelligence::{
    classify, AnalyticsConfig, ComplianceResult, DailyStressMap, LoadSnapshot, SessionInput,
    SessionSummarizer, TrainingLoadCalculator,
};

use crate::stress_map::DailyTotals;
use crate::weekly::{weekly_rollup, WeeklyRollup};

/// Intensity and stress of a plan next to its completion
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanComparison {
    /// Planned effective stress
    pub planned_tss: f64,
    /// Planned intensity factor
    pub planned_if: Option<f64>,
    /// Completed effective stress, absent when nothing was completed
    pub completed_tss: Option<f64>,
    /// Completed intensity factor
    pub completed_if: Option<f64>,
}

/// Entry point for every analytics computation under one configuration
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsEngine {
    config: AnalyticsConfig,
    summarizer: SessionSummarizer,
    load: TrainingLoadCalculator,
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::new(AnalyticsConfig::default())
    }
}

impl AnalyticsEngine {
    /// Engine for `config`
    #[must_use]
    pub const fn new(config: AnalyticsConfig) -> Self {
        Self {
            config,
            summarizer: SessionSummarizer::from_config(&config),
            load: TrainingLoadCalculator::from_config(&config.load),
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Summarize one session
    ///
    /// # Errors
    ///
    /// Returns `NoSamples` if no sample has a timestamp
    pub fn summarize(&self, input: &SessionInput) -> AppResult<SessionSummary> {
        Ok(self.summarizer.summarize_input(input)?)
    }

    /// Summarize many sessions in parallel, in input order
    #[must_use]
    pub fn summarize_batch(&self, inputs: &[SessionInput]) -> Vec<AppResult<SessionSummary>> {
        self.summarizer
            .summarize_batch(inputs)
            .into_iter()
            .map(|result| result.map_err(Into::into))
            .collect()
    }

    /// Daily totals from the athlete's collections
    #[must_use]
    pub fn daily_totals(
        &self,
        activities: &[CompletedActivity],
        workouts: &[PlannedWorkout],
        pairs: &[Pair],
    ) -> DailyTotals {
        DailyTotals::build(activities, workouts, pairs, &self.config.ftp)
    }

    /// Load state at `query_date`, ignoring stress after `today`
    #[must_use]
    pub fn load_snapshot(
        &self,
        stress: &DailyStressMap,
        query_date: NaiveDate,
        today: NaiveDate,
    ) -> LoadSnapshot {
        self.load.calculate(stress, query_date, today)
    }

    /// Roll up a run of days
    #[must_use]
    pub fn weekly_rollup(
        &self,
        days: &[NaiveDate],
        totals: &DailyTotals,
        today: NaiveDate,
    ) -> WeeklyRollup {
        weekly_rollup(days, totals, &self.load, today)
    }

    /// Compliance of a planned workout against its completion
    ///
    /// Without a paired activity the workout's manually entered completion is
    /// used, if any.
    #[must_use]
    pub fn classify(
        &self,
        planned: Option<&PlannedWorkout>,
        completed: Option<&CompletedRecord>,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Option<ComplianceResult> {
        let manual = fallback_completion(planned, completed);
        classify(
            planned,
            completed.or(manual.as_ref()),
            date,
            today,
            &self.config.ftp,
        )
    }

    /// Planned and completed intensity and stress, with the same manual
    /// completion fallback as [`AnalyticsEngine::classify`]
    #[must_use]
    pub fn compare(
        &self,
        planned: &PlannedWorkout,
        completed: Option<&CompletedRecord>,
    ) -> PlanComparison {
        let manual = fallback_completion(Some(planned), completed);
        let completed = completed.or(manual.as_ref());
        PlanComparison {
            planned_tss: planned_stress(planned),
            planned_if: planned_if(planned),
            completed_tss: completed.map(|record| completed_stress(record, &self.config.ftp)),
            completed_if: completed.and_then(|record| completed_if(record, &self.config.ftp)),
        }
    }
}

fn fallback_completion(
    planned: Option<&PlannedWorkout>,
    completed: Option<&CompletedRecord>,
) -> Option<CompletedRecord> {
    match completed {
        Some(_) => None,
        None => planned.and_then(PlannedWorkout::manual_completion_record),
    }
}
