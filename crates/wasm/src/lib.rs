//! klotski-wasm - WebAssembly entry points and bindings for browser execution.

pub mod drag;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use klotski_core::{Board, Coord};
use klotski_engine::{
    legal_destinations, ConfigError, GameSession, PuzzleConfig, SessionEvent, SessionState,
};

pub use drag::{DragConfig, DragTracker};

#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Event shape handed to JavaScript, one variant per `SessionEvent`.
#[derive(Serialize, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum JsEvent {
    PositionChanged {
        piece: String,
        col: i8,
        row: i8,
    },
    MoveCountChanged {
        count: u32,
    },
    Won {
        #[serde(rename = "finalCount")]
        final_count: u32,
    },
    Reverted {
        piece: String,
        col: i8,
        row: i8,
        reason: String,
    },
}

impl JsEvent {
    pub fn from_event(board: &Board, event: &SessionEvent) -> Self {
        match event {
            SessionEvent::PositionChanged { piece, position } => JsEvent::PositionChanged {
                piece: board.name_of(*piece).to_string(),
                col: position.col,
                row: position.row,
            },
            SessionEvent::MoveCountChanged(count) => JsEvent::MoveCountChanged { count: *count },
            SessionEvent::Won { moves } => JsEvent::Won {
                final_count: *moves,
            },
            SessionEvent::Reverted {
                piece,
                position,
                reason,
            } => JsEvent::Reverted {
                piece: board.name_of(*piece).to_string(),
                col: position.col,
                row: position.row,
                reason: reason.tag().to_string(),
            },
        }
    }
}

#[derive(Serialize)]
struct JsCell {
    col: i8,
    row: i8,
}

impl From<Coord> for JsCell {
    fn from(c: Coord) -> Self {
        Self {
            col: c.col,
            row: c.row,
        }
    }
}

#[wasm_bindgen]
pub struct JsSession {
    inner: GameSession,
}

#[wasm_bindgen]
impl JsSession {
    /// Classic Hakoiri Musume puzzle.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: GameSession::classic(),
        }
    }

    /// Custom puzzle from a JSON `PuzzleConfig`.
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<JsSession, JsValue> {
        let config = PuzzleConfig::from_json(json).map_err(config_error)?;
        let inner = GameSession::new(config).map_err(config_error)?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(js_name = beginMove)]
    pub fn begin_move(&mut self, piece: &str) -> bool {
        self.inner.on_move_begin_named(piece)
    }

    #[wasm_bindgen(js_name = endMove)]
    pub fn end_move(&mut self, col: i8, row: i8) -> JsValue {
        let events = self.inner.on_move_end(Coord::new(col, row));
        self.events_to_js(&events)
    }

    pub fn reset(&mut self) -> JsValue {
        let events = self.inner.on_reset();
        self.events_to_js(&events)
    }

    #[wasm_bindgen(getter, js_name = moveCount)]
    pub fn move_count(&self) -> u32 {
        self.inner.move_count()
    }

    #[wasm_bindgen(getter, js_name = isSolved)]
    pub fn is_solved(&self) -> bool {
        self.inner.is_solved()
    }

    #[wasm_bindgen(getter, js_name = isMoving)]
    pub fn is_moving(&self) -> bool {
        self.inner.state() != SessionState::Idle
    }

    /// Every piece with name, position and size.
    pub fn positions(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.board()).unwrap_or_else(|_| JsValue::NULL)
    }

    /// Cells the named piece could be dropped on right now.
    #[wasm_bindgen(js_name = legalDestinations)]
    pub fn legal_destinations(&self, piece: &str) -> JsValue {
        let board = self.inner.board();
        let Some(id) = board.id_of(piece) else {
            return JsValue::NULL;
        };
        let cells: Vec<JsCell> = legal_destinations(board, id)
            .into_iter()
            .map(JsCell::from)
            .collect();
        serde_wasm_bindgen::to_value(&cells).unwrap_or_else(|_| JsValue::NULL)
    }

    /// Text rendering of the board, one glyph per cell.
    pub fn render(&self) -> String {
        self.inner.board().to_string()
    }
}

impl JsSession {
    fn events_to_js(&self, events: &[SessionEvent]) -> JsValue {
        let board = self.inner.board();
        let out: Vec<JsEvent> = events
            .iter()
            .map(|e| JsEvent::from_event(board, e))
            .collect();
        serde_wasm_bindgen::to_value(&out).unwrap_or_else(|_| JsValue::NULL)
    }
}

impl Default for JsSession {
    fn default() -> Self {
        Self::new()
    }
}

fn config_error(e: ConfigError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// ============================================================================
// Pointer Drag Bindings
// ============================================================================

#[wasm_bindgen]
pub struct JsDragTracker {
    inner: DragTracker,
}

#[wasm_bindgen]
impl JsDragTracker {
    #[wasm_bindgen(constructor)]
    pub fn new(cell_size_px: f64, dominance: f64) -> Self {
        Self {
            inner: DragTracker::new(DragConfig {
                cell_size_px,
                dominance,
            }),
        }
    }

    /// 80px cells, larger displacement wins.
    #[wasm_bindgen(js_name = withDefaults)]
    pub fn with_defaults() -> Self {
        Self {
            inner: DragTracker::default(),
        }
    }

    pub fn begin(&mut self, pointer_x: f64, pointer_y: f64, left_px: f64, top_px: f64) {
        self.inner.begin((pointer_x, pointer_y), (left_px, top_px));
    }

    /// `[left, top]` for the dragged piece, or an empty array when idle.
    #[wasm_bindgen(js_name = dragTo)]
    pub fn drag_to(&self, pointer_x: f64, pointer_y: f64) -> Vec<f64> {
        match self.inner.offset((pointer_x, pointer_y)) {
            Some((left, top)) => vec![left, top],
            None => Vec::new(),
        }
    }

    /// `[col, row]` of the drop cell, or an empty array when idle.
    pub fn release(&mut self, pointer_x: f64, pointer_y: f64) -> Vec<i8> {
        match self.inner.release((pointer_x, pointer_y)) {
            Some(cell) => vec![cell.col, cell.row],
            None => Vec::new(),
        }
    }

    pub fn cancel(&mut self) {
        self.inner.cancel();
    }
}
