//! Weekly routine planner state machine
//!
//! Drives the per-day routine form: toggling a day on opens a blank form,
//! submitting emits a save action for the persistence gateway, toggling off
//! removes the day locally and emits a delete for any server record.
//!
//! Mutations are two-phase: a submitted form sits in `PendingSave` until the
//! gateway confirms or rejects it. Removal is the exception - toggling a day
//! off is applied locally before the delete resolves, and a failed delete is
//! only surfaced, never rolled back.

use crate::errors::ValidationError;
use crate::routine::{ExerciseKind, RoutineDayRecord, RoutineEntry, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Lifecycle of one weekday in the planner
#[derive(Debug, Clone, PartialEq)]
pub enum DayState {
    /// Day is not part of the routine
    Unselected,
    /// Form open, not yet submitted
    Editing { entry: RoutineEntry },
    /// Submitted, awaiting gateway confirmation. `prior` carries the server
    /// identity when this is an update rather than a create.
    PendingSave {
        entry: RoutineEntry,
        prior: Option<(Uuid, i64)>,
    },
    /// Confirmed by the gateway
    Saved {
        id: Uuid,
        revision: i64,
        entry: RoutineEntry,
    },
}

impl DayState {
    fn name(&self) -> &'static str {
        match self {
            DayState::Unselected => "unselected",
            DayState::Editing { .. } => "editing",
            DayState::PendingSave { .. } => "pending_save",
            DayState::Saved { .. } => "saved",
        }
    }
}

/// Persistence call the caller must issue after a submit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SaveAction {
    Create {
        day: Weekday,
        entry: RoutineEntry,
    },
    Update {
        id: Uuid,
        /// Expected revision; the gateway rejects stale updates
        revision: i64,
        day: Weekday,
        entry: RoutineEntry,
    },
}

/// Persistence call the caller must issue after a toggle-off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAction {
    pub id: Uuid,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    #[error("cannot {operation} {day} while {state}")]
    InvalidTransition {
        day: Weekday,
        state: &'static str,
        operation: &'static str,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Per-user weekly planner: seven day slots plus the owning session
#[derive(Debug, Clone)]
pub struct WeekPlanner {
    user_id: Uuid,
    days: [DayState; 7],
    /// Last confirmed server identity per day; survives re-editing so a
    /// resubmission updates instead of creating a duplicate
    priors: [Option<(Uuid, i64)>; 7],
}

impl WeekPlanner {
    /// Empty planner for a session
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            days: std::array::from_fn(|_| DayState::Unselected),
            priors: [None; 7],
        }
    }

    /// Hydrate from the gateway's record list. Later records for the same
    /// day overwrite earlier ones.
    pub fn load(user_id: Uuid, records: Vec<RoutineDayRecord>) -> Self {
        let mut planner = Self::new(user_id);
        for record in records {
            planner.priors[record.day.index()] = Some((record.id, record.revision));
            planner.days[record.day.index()] = DayState::Saved {
                id: record.id,
                revision: record.revision,
                entry: record.entry,
            };
        }
        planner
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn state(&self, day: Weekday) -> &DayState {
        &self.days[day.index()]
    }

    /// Days currently part of the routine, in week order
    pub fn selected_days(&self) -> Vec<Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(|d| !matches!(self.state(*d), DayState::Unselected))
            .collect()
    }

    /// Toggle a day on: opens a blank running form
    pub fn toggle_on(&mut self, day: Weekday) -> Result<(), PlannerError> {
        match self.state(day) {
            DayState::Unselected => {
                self.days[day.index()] = DayState::Editing {
                    entry: RoutineEntry::blank(ExerciseKind::default()),
                };
                Ok(())
            }
            other => Err(PlannerError::InvalidTransition {
                day,
                state: other.name(),
                operation: "toggle on",
            }),
        }
    }

    /// Replace the day's form content; reopens a saved day for editing
    pub fn edit(&mut self, day: Weekday, entry: RoutineEntry) -> Result<(), PlannerError> {
        match self.state(day).clone() {
            DayState::Editing { .. } => {
                self.days[day.index()] = DayState::Editing { entry };
                Ok(())
            }
            DayState::Saved { id, revision, .. } => {
                // Re-editing keeps the server identity so submit updates
                self.priors[day.index()] = Some((id, revision));
                self.days[day.index()] = DayState::Editing { entry };
                Ok(())
            }
            other => Err(PlannerError::InvalidTransition {
                day,
                state: other.name(),
                operation: "edit",
            }),
        }
    }

    /// Submit the open form. Validates the entry, then emits the gateway
    /// call to run: create when the day has no server record, update with
    /// the expected revision otherwise.
    pub fn submit(&mut self, day: Weekday) -> Result<SaveAction, PlannerError> {
        match self.state(day).clone() {
            DayState::Editing { entry } => {
                entry.validate()?;
                let prior = self.priors[day.index()];
                self.days[day.index()] = DayState::PendingSave {
                    entry: entry.clone(),
                    prior,
                };
                Ok(match prior {
                    None => SaveAction::Create { day, entry },
                    Some((id, revision)) => SaveAction::Update {
                        id,
                        revision,
                        day,
                        entry,
                    },
                })
            }
            other => Err(PlannerError::InvalidTransition {
                day,
                state: other.name(),
                operation: "submit",
            }),
        }
    }

    /// Gateway confirmed the save with the record's identity
    pub fn confirm_save(
        &mut self,
        day: Weekday,
        id: Uuid,
        revision: i64,
    ) -> Result<(), PlannerError> {
        match self.state(day).clone() {
            DayState::PendingSave { entry, .. } => {
                self.days[day.index()] = DayState::Saved { id, revision, entry };
                self.priors[day.index()] = Some((id, revision));
                Ok(())
            }
            other => Err(PlannerError::InvalidTransition {
                day,
                state: other.name(),
                operation: "confirm save",
            }),
        }
    }

    /// Gateway rejected the save; the form reopens with its content intact
    pub fn reject_save(&mut self, day: Weekday) -> Result<(), PlannerError> {
        match self.state(day).clone() {
            DayState::PendingSave { entry, .. } => {
                self.days[day.index()] = DayState::Editing { entry };
                Ok(())
            }
            other => Err(PlannerError::InvalidTransition {
                day,
                state: other.name(),
                operation: "reject save",
            }),
        }
    }

    /// Toggle a day off. The local record is removed immediately; when a
    /// server record exists its delete action is returned and must be
    /// issued, but a failed delete does not restore the day.
    pub fn toggle_off(&mut self, day: Weekday) -> Result<Option<DeleteAction>, PlannerError> {
        let action = match self.state(day) {
            DayState::Unselected => {
                return Err(PlannerError::InvalidTransition {
                    day,
                    state: "unselected",
                    operation: "toggle off",
                })
            }
            DayState::Saved { id, .. } => Some(DeleteAction { id: *id }),
            DayState::Editing { .. } | DayState::PendingSave { .. } => {
                self.priors[day.index()].map(|(id, _)| DeleteAction { id })
            }
        };
        self.days[day.index()] = DayState::Unselected;
        self.priors[day.index()] = None;
        Ok(action)
    }
}
