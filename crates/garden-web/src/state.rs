//! Application state for the web server.
//!
//! The session lives on a dedicated thread and every request is a command
//! sent to it, so there is exactly one mutation path. Events drained after
//! each command are broadcast to WebSocket subscribers, and the status frame
//! is published to the LED mirror task when one is running. The mirror only
//! ever sees the latest frame; frames published while the strip is busy
//! replace each other.

use crate::error::ApiError;
use garden::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::{mpsc, Arc};
use std::thread;
use tokio::sync::{broadcast, oneshot, watch};
use tracing::{debug, info, warn};

/// Commands sent to the session worker thread.
enum SessionCommand {
    GetSnapshot(oneshot::Sender<BoardSnapshot>),
    GetPlants(oneshot::Sender<Vec<PlantDefinition>>),
    GetCell {
        row: usize,
        col: usize,
        response: oneshot::Sender<Option<CellView>>,
    },
    Place {
        plant: String,
        row: usize,
        col: usize,
        response: oneshot::Sender<Result<PlaceResult, GardenError>>,
    },
    PlaceTag {
        uid: TagUid,
        row: usize,
        col: usize,
        response: oneshot::Sender<Result<PlaceResult, GardenError>>,
    },
    Remove {
        plant: String,
        response: oneshot::Sender<bool>,
    },
    Evaluate {
        plant: String,
        response: oneshot::Sender<Evaluation>,
    },
    EvaluateAll(oneshot::Sender<Vec<PlantReport>>),
    GetMode(oneshot::Sender<ModeView>),
    CycleMode(oneshot::Sender<ModeView>),
    LoadLayout {
        layout: Layout,
        response: oneshot::Sender<Result<(), GardenError>>,
    },
}

/// Result of a placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceResult {
    pub plant: String,
    pub position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moved_from: Option<Position>,
    /// Key of the plant pushed off the destination cell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evicted: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeView {
    pub mode: GameMode,
    pub label: &'static str,
}

impl ModeView {
    fn of(session: &GardenSession) -> Self {
        Self {
            mode: session.mode(),
            label: session.mode_label(),
        }
    }
}

/// Latest status frame, as positions of placed plants and their statuses.
type Frame = Vec<(Position, Status)>;

/// Where status frames go after each mutation.
struct Mirror {
    frame_tx: watch::Sender<Frame>,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Channel to send commands to the session worker.
    cmd_tx: mpsc::Sender<SessionCommand>,
    /// Broadcast channel for session events.
    pub event_tx: broadcast::Sender<SessionEvent>,
}

impl AppState {
    /// Serve `session` without LED mirroring.
    pub fn new(session: GardenSession) -> Self {
        Self::spawn(session, None)
    }

    /// Serve `session` and mirror every change through `notifier`.
    ///
    /// Must be called from within a Tokio runtime; the mirror runs as a
    /// task on it. A disabled notifier is accepted and never called.
    pub fn with_notifier(session: GardenSession, notifier: Arc<dyn LedNotifier>) -> Self {
        if !notifier.config().enabled {
            debug!("LED notifier {} is disabled", notifier.name());
            return Self::spawn(session, None);
        }
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!("No async runtime available; LED mirroring is off");
                return Self::spawn(session, None);
            }
        };

        let map = SegmentMap::new(
            session.grid().rows(),
            session.grid().cols(),
            notifier.config().leds_per_cell,
        );
        let (frame_tx, mut frame_rx) = watch::channel(Frame::new());
        handle.spawn(async move {
            while frame_rx.changed().await.is_ok() {
                let frame = frame_rx.borrow_and_update().clone();
                mirror(notifier.as_ref(), &map, &frame).await;
            }
        });
        Self::spawn(session, Some(Mirror { frame_tx }))
    }

    fn spawn(mut session: GardenSession, mirror: Option<Mirror>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, _) = broadcast::channel(1000);
        let event_tx_clone = event_tx.clone();

        info!("Session {} ready", session.id());

        // Spawn dedicated thread for session operations
        thread::spawn(move || {
            while let Ok(cmd) = cmd_rx.recv() {
                let mutated = handle_command(&mut session, cmd);
                if !mutated {
                    continue;
                }
                for event in session.drain_events() {
                    let _ = event_tx_clone.send(event);
                }
                if let Some(mirror) = &mirror {
                    if mirror.frame_tx.send(session.status_frame()).is_err() {
                        warn!("LED mirror task has stopped");
                    }
                }
            }
            debug!("Session {} worker stopped", session.id());
        });

        Self { cmd_tx, event_tx }
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> SessionCommand,
    ) -> Result<T, ApiError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(command(tx))
            .map_err(|_| ApiError::WorkerGone)?;
        rx.await.map_err(|_| ApiError::WorkerGone)
    }

    pub async fn snapshot(&self) -> Result<BoardSnapshot, ApiError> {
        self.request(SessionCommand::GetSnapshot).await
    }

    pub async fn plants(&self) -> Result<Vec<PlantDefinition>, ApiError> {
        self.request(SessionCommand::GetPlants).await
    }

    pub async fn cell(&self, row: usize, col: usize) -> Result<CellView, ApiError> {
        self.request(|response| SessionCommand::GetCell { row, col, response })
            .await?
            .ok_or(ApiError::NoSuchCell { row, col })
    }

    pub async fn place(&self, plant: String, row: usize, col: usize) -> Result<PlaceResult, ApiError> {
        let result = self
            .request(|response| SessionCommand::Place {
                plant,
                row,
                col,
                response,
            })
            .await?;
        Ok(result?)
    }

    pub async fn place_tag(&self, uid: TagUid, row: usize, col: usize) -> Result<PlaceResult, ApiError> {
        let result = self
            .request(|response| SessionCommand::PlaceTag {
                uid,
                row,
                col,
                response,
            })
            .await?;
        Ok(result?)
    }

    pub async fn remove(&self, plant: String) -> Result<bool, ApiError> {
        self.request(|response| SessionCommand::Remove { plant, response })
            .await
    }

    pub async fn evaluate(&self, plant: String) -> Result<Evaluation, ApiError> {
        self.request(|response| SessionCommand::Evaluate { plant, response })
            .await
    }

    pub async fn evaluate_all(&self) -> Result<Vec<PlantReport>, ApiError> {
        self.request(SessionCommand::EvaluateAll).await
    }

    pub async fn mode(&self) -> Result<ModeView, ApiError> {
        self.request(SessionCommand::GetMode).await
    }

    pub async fn cycle_mode(&self) -> Result<ModeView, ApiError> {
        self.request(SessionCommand::CycleMode).await
    }

    pub async fn load_layout(&self, layout: Layout) -> Result<(), ApiError> {
        let result = self
            .request(|response| SessionCommand::LoadLayout { layout, response })
            .await?;
        Ok(result?)
    }

    /// Subscribe to events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_tx.subscribe()
    }
}

fn place_result(session: &GardenSession, plant: String, position: Position, outcome: PlacementOutcome) -> PlaceResult {
    PlaceResult {
        plant,
        position,
        moved_from: outcome.moved_from,
        evicted: outcome
            .evicted
            .and_then(|id| session.catalog().get(id))
            .map(|p| p.key.clone()),
    }
}

/// Run one command. Returns whether the board may have changed.
fn handle_command(session: &mut GardenSession, cmd: SessionCommand) -> bool {
    match cmd {
        SessionCommand::GetSnapshot(response) => {
            let _ = response.send(session.snapshot());
            false
        }
        SessionCommand::GetPlants(response) => {
            let _ = response.send(session.catalog().plants().cloned().collect());
            false
        }
        SessionCommand::GetCell { row, col, response } => {
            let _ = response.send(session.cell_view(row, col));
            false
        }
        SessionCommand::Place {
            plant,
            row,
            col,
            response,
        } => {
            let result = match session.place_plant(&plant, row, col) {
                Ok(outcome) => Ok(place_result(session, plant, Position::new(row, col), outcome)),
                Err(e) => Err(e),
            };
            let ok = result.is_ok();
            let _ = response.send(result);
            ok
        }
        SessionCommand::PlaceTag {
            uid,
            row,
            col,
            response,
        } => {
            let result = match session.place_tag(uid, row, col) {
                Ok(outcome) => {
                    let key = session
                        .identify_tag(uid)
                        .map(|p| p.key.clone())
                        .unwrap_or_default();
                    Ok(place_result(session, key, Position::new(row, col), outcome))
                }
                Err(e) => Err(e),
            };
            let ok = result.is_ok();
            let _ = response.send(result);
            ok
        }
        SessionCommand::Remove { plant, response } => {
            let removed = session.remove_plant(&plant);
            let _ = response.send(removed);
            removed
        }
        SessionCommand::Evaluate { plant, response } => {
            let _ = response.send(session.evaluate(&plant));
            false
        }
        SessionCommand::EvaluateAll(response) => {
            let _ = response.send(session.evaluate_all());
            false
        }
        SessionCommand::GetMode(response) => {
            let _ = response.send(ModeView::of(session));
            false
        }
        SessionCommand::CycleMode(response) => {
            session.cycle_mode();
            let _ = response.send(ModeView::of(session));
            true
        }
        SessionCommand::LoadLayout { layout, response } => {
            let result = session.load_layout(&layout);
            let ok = result.is_ok();
            let _ = response.send(result);
            ok
        }
    }
}
