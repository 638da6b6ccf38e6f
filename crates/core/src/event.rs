use crate::dataset::Cut;
use crate::state::ReferenceTab;

/// All messages (events) that can flow through the dashboard.
///
/// Sources:
/// - Timer subscription → `Tick`
/// - Sidebar inputs     → `CutToggled`, `BinCountInput`, `CaratChanged`
/// - Reference tabs     → `TabSelected`
#[derive(Debug, Clone)]
pub enum Message {
    // ── Live feed ─────────────────────────────────────────────────────────────
    /// Interval elapsed: produce one reading and append it to the history.
    Tick,

    // ── Sidebar ───────────────────────────────────────────────────────────────
    /// A cut checkbox was (un)checked.
    CutToggled(Cut, bool),
    /// Raw text of the bin-count field; parsed and clamped on update.
    BinCountInput(String),
    /// Carat slider moved.
    CaratChanged(f32),

    // ── Reference view ────────────────────────────────────────────────────────
    /// Switch between the compact table and the full grid.
    TabSelected(ReferenceTab),
}
