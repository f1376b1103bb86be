//! The match state machine.
//!
//! One `MatchState` owns everything mutable for a match: phase, scores,
//! both hands, ready flags, the current status message, and the RNG
//! streams. The host mutates it exclusively through the methods here -
//! student actions synchronously, timer-driven transitions by firing the
//! `TimerRequest`s these methods hand back.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::ai;
use crate::cards::{deal_hand, CardId, CardIdAllocator, CardLocation, Hand};
use crate::core::{ActionError, BoardConfig, ConfigError, GameRng, GameRngState, Side, SideMap};
use crate::judge::{decide_winner, RoundResult, Winner};
use crate::value::{expanded_notation, hand_value, number_words, slot_labels};

use super::messages;
use super::phase::Phase;
use super::timer::{
    EngineEvent, TimerEvent, TimerOutcome, TimerRequest, AI_MOVE_DELAY_MS, COMPLETION_DELAY,
    INTRO_DELAY, NEXT_ROUND_DELAY, SHUFFLE_DELAY,
};

/// Complete mutable state of one match.
pub struct MatchState {
    config: BoardConfig,
    phase: Phase,
    round_number: u32,
    scores: SideMap<u32>,
    hands: SideMap<Hand>,
    ready: SideMap<bool>,
    last_round_result: Option<RoundResult>,
    selected_card: Option<CardId>,
    status_message: String,
    deal_rng: GameRng,
    ai_rng: GameRng,
}

impl MatchState {
    /// Create a match in the `Dealing` phase with scores 0/0.
    ///
    /// Validates the configuration first; an invalid `BoardConfig` never
    /// produces a match. Returns the initial timer requests (round 1
    /// begins after the introductory delay).
    pub fn new(config: BoardConfig, seed: u64) -> Result<(Self, Vec<TimerRequest>), ConfigError> {
        config.validate()?;

        let rng = GameRng::new(seed);
        let status_message = messages::welcome(&config);
        debug!("match created: {} slots, seed {}", config.total_slots(), seed);

        let state = Self {
            config,
            phase: Phase::Dealing,
            round_number: 0,
            scores: SideMap::with_value(0),
            hands: SideMap::with_value(Hand::default()),
            ready: SideMap::with_value(false),
            last_round_result: None,
            selected_card: None,
            status_message,
            deal_rng: rng.for_context("deal"),
            ai_rng: rng.for_context("ai"),
        };

        let intro = TimerRequest {
            delay: INTRO_DELAY,
            event: TimerEvent::BeginRound,
            round: 0,
        };
        Ok((state, vec![intro]))
    }

    // === Timer-driven transitions ===

    /// Apply a due timer.
    ///
    /// A request from a superseded round, or one whose phase precondition
    /// no longer holds, is ignored: the outcome is empty and state is
    /// untouched.
    pub fn fire_timer(&mut self, request: &TimerRequest) -> TimerOutcome {
        if request.round != self.round_number {
            trace!(
                "stale timer {:?} for round {} ignored (current round {})",
                request.event,
                request.round,
                self.round_number
            );
            return TimerOutcome::none();
        }

        match request.event {
            TimerEvent::BeginRound if self.phase == Phase::Dealing => self.begin_round(),
            TimerEvent::StartArranging if self.phase == Phase::Dealing && self.round_number > 0 => {
                self.start_arranging()
            }
            TimerEvent::AiMove if self.phase == Phase::Arranging && !self.ready[Side::Ai] => {
                self.ai_move()
            }
            TimerEvent::ReportCompletion if self.phase == Phase::GameComplete => {
                TimerOutcome {
                    requests: Vec::new(),
                    event: Some(EngineEvent::ReportCompletion {
                        final_student_score: self.scores[Side::Student],
                    }),
                }
            }
            event => {
                trace!("timer {:?} ignored in phase {}", event, self.phase);
                TimerOutcome::none()
            }
        }
    }

    /// Start the next round: fresh hands, cleared flags, shuffle message.
    fn begin_round(&mut self) -> TimerOutcome {
        self.round_number += 1;

        let mut ids = CardIdAllocator::new();
        for side in Side::both() {
            self.hands[side] = deal_hand(&self.config, &mut ids, &mut self.deal_rng);
            self.ready[side] = false;
        }
        self.last_round_result = None;
        self.selected_card = None;
        self.status_message = messages::shuffling(self.round_number);
        debug!("round {} dealt", self.round_number);

        TimerOutcome::requesting(TimerRequest {
            delay: SHUFFLE_DELAY,
            event: TimerEvent::StartArranging,
            round: self.round_number,
        })
    }

    /// Open the arranging phase and schedule the AI's move.
    fn start_arranging(&mut self) -> TimerOutcome {
        self.phase = Phase::Arranging;
        self.status_message = messages::instruction(&self.config);

        let thinking_ms = self.ai_rng.gen_range_u64(AI_MOVE_DELAY_MS);
        debug!(
            "round {} arranging; ai moves in {}ms",
            self.round_number, thinking_ms
        );

        TimerOutcome::requesting(TimerRequest {
            delay: std::time::Duration::from_millis(thinking_ms),
            event: TimerEvent::AiMove,
            round: self.round_number,
        })
    }

    /// The AI arranges its hand and becomes ready.
    fn ai_move(&mut self) -> TimerOutcome {
        ai::arrange(self.hands.get_mut(Side::Ai), &self.config, &mut self.ai_rng);
        self.ready[Side::Ai] = true;
        self.maybe_reveal();
        TimerOutcome::none()
    }

    // === Student actions ===

    /// Select an unplaced card from the student's pool.
    ///
    /// Selecting a different card replaces the previous selection.
    pub fn select_card(&mut self, card_id: CardId) -> Result<(), ActionError> {
        self.require_phase(Phase::Arranging)?;

        let card = self.hands[Side::Student]
            .card(card_id)
            .ok_or(ActionError::UnknownCard(card_id))?;
        if !card.is_unplaced() {
            return Err(ActionError::CardAlreadyPlaced(card_id));
        }

        self.selected_card = Some(card_id);
        Ok(())
    }

    /// Place the selected card into an empty slot.
    ///
    /// Completing the hand marks the student ready; if the AI is already
    /// ready the reveal happens in this same call.
    pub fn select_slot(&mut self, slot: usize) -> Result<(), ActionError> {
        self.require_phase(Phase::Arranging)?;

        let total = self.config.total_slots();
        if slot >= total {
            return Err(ActionError::SlotOutOfRange { got: slot, total });
        }

        let card_id = self.selected_card.ok_or(ActionError::NoCardSelected)?;
        if self.hands[Side::Student].card_in_slot(slot).is_some() {
            return Err(ActionError::SlotOccupied(slot));
        }

        // Cannot fail: selection is validated on select and cleared on
        // placement and on every deal.
        let placed = self.hands.get_mut(Side::Student).place(card_id, slot);
        debug_assert!(placed);
        self.selected_card = None;

        if self.hands[Side::Student].is_complete(total) {
            self.ready[Side::Student] = true;
            self.maybe_reveal();
        }
        Ok(())
    }

    /// Return a slotted student card to the pool.
    ///
    /// Clears the student's ready flag. Returning a card already in the
    /// pool is an accepted no-op with no state change at all.
    pub fn return_card_to_pool(&mut self, card_id: CardId) -> Result<(), ActionError> {
        self.require_phase(Phase::Arranging)?;

        let card = self.hands[Side::Student]
            .card(card_id)
            .ok_or(ActionError::UnknownCard(card_id))?;
        if card.location == CardLocation::Unplaced {
            return Ok(());
        }

        self.hands.get_mut(Side::Student).unplace(card_id);
        self.ready[Side::Student] = false;
        Ok(())
    }

    /// Score the revealed round and either loop back to dealing or end
    /// the match. Valid only in `Revealing`.
    ///
    /// The winner of the round takes one point (none on a tie). If the
    /// leader has reached the winning score the match completes; were
    /// both sides ever to reach it together, the strictly higher score
    /// wins and an equal score keeps the match going.
    pub fn advance_to_next_round(&mut self) -> Result<TimerOutcome, ActionError> {
        self.require_phase(Phase::Revealing)?;

        let result = self
            .last_round_result
            .expect("revealing phase always has a round result");
        match result.winner {
            Winner::Student => self.scores[Side::Student] += 1,
            Winner::Ai => self.scores[Side::Ai] += 1,
            Winner::Tie => {}
        }

        let student = self.scores[Side::Student];
        let ai = self.scores[Side::Ai];
        debug!(
            "round {} scored: student {}, ai {}",
            self.round_number, student, ai
        );

        let threshold = self.config.winning_score;
        if (student >= threshold || ai >= threshold) && student != ai {
            let winner = if student > ai {
                Winner::Student
            } else {
                Winner::Ai
            };
            self.phase = Phase::GameComplete;
            self.status_message = messages::match_over(&self.config, winner);
            debug!("match complete: {:?} wins", winner);

            return Ok(TimerOutcome::requesting(TimerRequest {
                delay: COMPLETION_DELAY,
                event: TimerEvent::ReportCompletion,
                round: self.round_number,
            }));
        }

        self.phase = Phase::Dealing;
        Ok(TimerOutcome::requesting(TimerRequest {
            delay: NEXT_ROUND_DELAY,
            event: TimerEvent::BeginRound,
            round: self.round_number,
        }))
    }

    /// Reveal once both sides are ready, whichever became ready last.
    fn maybe_reveal(&mut self) {
        if !(self.ready[Side::Student] && self.ready[Side::Ai]) {
            return;
        }

        let student_value = hand_value(&self.hands[Side::Student], &self.config);
        let ai_value = hand_value(&self.hands[Side::Ai], &self.config);
        let winner = decide_winner(student_value, ai_value, self.config.objective);
        let result = RoundResult {
            student_value,
            ai_value,
            winner,
        };

        self.last_round_result = Some(result);
        self.status_message = messages::reveal(&self.config, &result);
        self.phase = Phase::Revealing;
        debug!(
            "round {} revealed: student {}, ai {}, winner {:?}",
            self.round_number, student_value, ai_value, winner
        );
    }

    fn require_phase(&self, expected: Phase) -> Result<(), ActionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(ActionError::WrongPhase {
                phase: self.phase.name(),
            })
        }
    }

    // === Accessors for the host ===

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        self.scores[side]
    }

    #[must_use]
    pub fn hand(&self, side: Side) -> &Hand {
        &self.hands[side]
    }

    #[must_use]
    pub fn is_ready(&self, side: Side) -> bool {
        self.ready[side]
    }

    #[must_use]
    pub fn selected_card(&self) -> Option<CardId> {
        self.selected_card
    }

    #[must_use]
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    #[must_use]
    pub fn last_round_result(&self) -> Option<&RoundResult> {
        self.last_round_result.as_ref()
    }

    /// AI cards stay hidden while arranging and become visible at reveal.
    #[must_use]
    pub fn ai_hand_visible(&self) -> bool {
        matches!(self.phase, Phase::Revealing | Phase::GameComplete)
    }

    /// Place-name label for each slot, for the host to render.
    #[must_use]
    pub fn slot_labels(&self) -> Vec<&'static str> {
        slot_labels(&self.config)
    }

    /// Expanded notation for a side's current slot assignment.
    #[must_use]
    pub fn notation(&self, side: Side) -> String {
        expanded_notation(&self.hands[side], &self.config)
    }

    /// A side's current value in English words.
    #[must_use]
    pub fn value_words(&self, side: Side) -> String {
        number_words(hand_value(&self.hands[side], &self.config), &self.config)
    }

    // === Snapshots ===

    /// Capture a serializable snapshot of the whole match.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            config: self.config.clone(),
            phase: self.phase,
            round_number: self.round_number,
            scores: self.scores.clone(),
            hands: self.hands.clone(),
            ready: self.ready.clone(),
            last_round_result: self.last_round_result,
            selected_card: self.selected_card,
            status_message: self.status_message.clone(),
            deal_rng: self.deal_rng.state(),
            ai_rng: self.ai_rng.state(),
        }
    }

    /// Restore a match from a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: MatchSnapshot) -> Self {
        Self {
            config: snapshot.config,
            phase: snapshot.phase,
            round_number: snapshot.round_number,
            scores: snapshot.scores,
            hands: snapshot.hands,
            ready: snapshot.ready,
            last_round_result: snapshot.last_round_result,
            selected_card: snapshot.selected_card,
            status_message: snapshot.status_message,
            deal_rng: GameRng::from_state(&snapshot.deal_rng),
            ai_rng: GameRng::from_state(&snapshot.ai_rng),
        }
    }
}

/// Serializable snapshot of a match, including both RNG streams, so a
/// host can persist and resume mid-round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub config: BoardConfig,
    pub phase: Phase,
    pub round_number: u32,
    pub scores: SideMap<u32>,
    pub hands: SideMap<Hand>,
    pub ready: SideMap<bool>,
    pub last_round_result: Option<RoundResult>,
    pub selected_card: Option<CardId>,
    pub status_message: String,
    pub deal_rng: GameRngState,
    pub ai_rng: GameRngState,
}
