//! Mock V3 Aggregator
//!
//! Local price feed speaking the same interface FundMe reads from a
//! production aggregator. Used by tests and by local deployments.

use odra::prelude::*;
use crate::errors::FundMeError;
use crate::types::RoundData;

/// Interface version reported by the mock
pub const MOCK_VERSION: u64 = 0;

/// Mock aggregator contract
#[odra::module]
pub struct MockV3Aggregator {
    /// Decimal places of every answer
    decimals: Var<u8>,
    /// Most recent answer
    latest_answer: Var<i64>,
    /// Timestamp of the most recent answer
    latest_timestamp: Var<u64>,
    /// Most recent round id
    latest_round: Var<u64>,
    /// Answers by round
    answers: Mapping<u64, i64>,
    /// Update timestamps by round
    timestamps: Mapping<u64, u64>,
    /// Start timestamps by round
    started_ats: Mapping<u64, u64>,
}

#[odra::module]
impl MockV3Aggregator {
    /// Initialize with decimals and the first answer (round 1)
    pub fn init(&mut self, decimals: u8, initial_answer: i64) {
        self.decimals.set(decimals);
        self.latest_round.set(0);
        self.update_answer(initial_answer);
    }

    /// Publish a new answer in the next round
    pub fn update_answer(&mut self, answer: i64) {
        let round_id = match self.latest_round.get().unwrap_or(0).checked_add(1) {
            Some(round_id) => round_id,
            None => self.env().revert(FundMeError::InvalidConfig),
        };
        let now = self.env().get_block_time();

        self.latest_answer.set(answer);
        self.latest_timestamp.set(now);
        self.latest_round.set(round_id);
        self.answers.set(&round_id, answer);
        self.timestamps.set(&round_id, now);
        self.started_ats.set(&round_id, now);
    }

    /// Overwrite a round and make it the latest
    pub fn update_round_data(&mut self, round_id: u64, answer: i64, timestamp: u64, started_at: u64) {
        self.latest_round.set(round_id);
        self.latest_answer.set(answer);
        self.latest_timestamp.set(timestamp);
        self.answers.set(&round_id, answer);
        self.timestamps.set(&round_id, timestamp);
        self.started_ats.set(&round_id, started_at);
    }

    // ========== Feed Interface ==========

    /// Decimal places of answers
    pub fn decimals(&self) -> u8 {
        self.decimals.get().unwrap_or(0)
    }

    /// Latest answer
    pub fn latest_answer(&self) -> i64 {
        self.latest_answer.get().unwrap_or(0)
    }

    /// Latest round id
    pub fn latest_round(&self) -> u64 {
        self.latest_round.get().unwrap_or(0)
    }

    /// Timestamp of the latest answer
    pub fn latest_timestamp(&self) -> u64 {
        self.latest_timestamp.get().unwrap_or(0)
    }

    /// Data for a given round. Reverts for an unknown round.
    pub fn get_round_data(&self, round_id: u64) -> RoundData {
        match self.answers.get(&round_id) {
            Some(answer) => RoundData {
                round_id,
                answer,
                started_at: self.started_ats.get(&round_id).unwrap_or(0),
                updated_at: self.timestamps.get(&round_id).unwrap_or(0),
                answered_in_round: round_id,
            },
            None => self.env().revert(FundMeError::OracleUnavailable),
        }
    }

    /// Data for the latest round
    pub fn latest_round_data(&self) -> RoundData {
        let round_id = self.latest_round();
        RoundData {
            round_id,
            answer: self.latest_answer(),
            started_at: self.started_ats.get(&round_id).unwrap_or(0),
            updated_at: self.latest_timestamp(),
            answered_in_round: round_id,
        }
    }

    pub fn version(&self) -> u64 {
        MOCK_VERSION
    }

    pub fn description(&self) -> String {
        String::from("MockV3Aggregator")
    }
}
