//! Scripted gestures: a board layout plus a pointer event sequence, replayed
//! through the connect tool exactly as live input would be.

use dragline_core::board::EndpointBoard;
use dragline_core::connection::Connection;
use dragline_core::endpoint::{Endpoint, INTRINSIC_SIZE};
use dragline_core::error::DragError;
use dragline_core::id::EndpointId;
use dragline_editor::coordinator::DropOutcome;
use dragline_editor::input::InputEvent;
use dragline_editor::tool::ConnectTool;
use dragline_render::overlay::OverlayLayer;
use kurbo::{Point, Rect};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("cannot read script {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid script: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptEndpoint {
    pub id: EndpointId,
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
}

fn default_width() -> f64 {
    INTRINSIC_SIZE.width
}

fn default_height() -> f64 {
    INTRINSIC_SIZE.height
}

#[derive(Debug, Clone, Deserialize)]
pub struct GestureScript {
    pub endpoints: Vec<ScriptEndpoint>,
    pub events: Vec<InputEvent>,
}

impl GestureScript {
    pub fn from_json(text: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn board(&self) -> EndpointBoard {
        let mut board = EndpointBoard::new();
        for ep in &self.endpoints {
            let frame = Rect::from_origin_size(Point::new(ep.x, ep.y), (ep.width, ep.height));
            board.add(Endpoint::new(ep.id, frame));
        }
        board
    }
}

/// Final state after replaying a script.
#[derive(Debug)]
pub struct Replay {
    pub board: EndpointBoard,
    pub connections: Vec<Connection>,
    pub outcomes: Vec<DropOutcome>,
    pub errors: Vec<DragError>,
    pub overlay: OverlayLayer,
}

/// Feed every event through a fresh connect tool.
///
/// Drag errors are logged and collected; replay continues with the next event.
pub fn replay(script: &GestureScript) -> Replay {
    let mut board = script.board();
    let mut tool = ConnectTool::new(OverlayLayer::new());
    let mut connections: Vec<Connection> = Vec::new();
    let mut outcomes = Vec::new();
    let mut errors = Vec::new();

    for event in &script.events {
        match tool.handle_on_board(event, &mut board, &mut connections) {
            Ok(Some(outcome)) => outcomes.push(outcome),
            Ok(None) => {}
            Err(err) => {
                log::warn!("{event:?}: {err}");
                errors.push(err);
            }
        }
    }

    let overlay = tool.coordinator.surface().clone();
    Replay {
        board,
        connections,
        outcomes,
        errors,
        overlay,
    }
}
