//! Screen controllers for the resource CRUD screens
//!
//! Every screen follows the same workflow: fetch the collection on mount,
//! render it as a table, open a dialog to add or edit, call the backend,
//! refetch. [`ScreenController`] is that workflow as a plain state machine,
//! one instantiation per resource screen, with no UI types in it so the
//! whole flow is unit-testable.
//!
//! The in-memory collection is a pure cache of the last successful fetch:
//! after any mutation the controller discards it entirely and the screen
//! re-runs the list call. Individual rows are never patched in place.
//!
//! Edit and delete target the last-fetched snapshot. The controller holds
//! no version or ETag, so a concurrent external modification of the same
//! identifier is invisible until the next refetch; last write wins.

use std::collections::HashMap;

use console_core::ConsoleResult;
use console_model::{Resource, ResourceDraft};
use tracing::{debug, warn};

// ============================================================================
// Controller State Types
// ============================================================================

/// Load lifecycle of a screen's primary collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// List rendered, no fetch in flight
    #[default]
    Idle,
    /// Initial or refresh fetch in flight
    Loading,
}

/// Dialog lifecycle, independent of the load state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogMode {
    #[default]
    Closed,
    /// Creating a new entity from an empty draft
    Create,
    /// Editing an existing entity, draft seeded from the cached row
    Edit,
}

/// Alert raised by a screen action
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenAlert {
    pub message: String,
    pub kind: AlertKind,
}

/// What kind of alert is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// Client-side validation failed; nothing was sent
    Validation,
    /// The operation failed; repeating the action is the only recovery
    Retryable,
}

/// The network action produced by a successful submit
#[derive(Debug, Clone, PartialEq)]
pub enum SaveAction<R> {
    Create(R),
    Update { id: String, entity: R },
}

// ============================================================================
// Screen Controller
// ============================================================================

/// State machine behind one resource CRUD screen
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenController<R: Resource> {
    items: Vec<R>,
    load_state: LoadState,
    load_error: Option<String>,
    dialog: DialogMode,
    draft: R::Draft,
    edit_id: Option<String>,
    alert: Option<ScreenAlert>,
    pending_delete: Option<String>,
    saving: bool,
    /// Dialog session counter. Bumped whenever the dialog opens or
    /// closes, so an in-flight save result from a session that has since
    /// ended is ignored instead of mutating the draft or dialog flag.
    epoch: u64,
}

impl<R: Resource> Default for ScreenController<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            load_state: LoadState::Idle,
            load_error: None,
            dialog: DialogMode::Closed,
            draft: R::Draft::default(),
            edit_id: None,
            alert: None,
            pending_delete: None,
            saving: false,
            epoch: 0,
        }
    }
}

impl<R: Resource> ScreenController<R> {
    /// Create a new controller with an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The cached collection from the last successful fetch
    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// Whether a fetch is in flight
    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// The inline load-failure message, if the last fetch failed
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Current dialog mode
    pub fn dialog(&self) -> DialogMode {
        self.dialog
    }

    /// Whether the dialog is open (create or edit)
    pub fn dialog_open(&self) -> bool {
        self.dialog != DialogMode::Closed
    }

    /// The dialog's working draft
    pub fn draft(&self) -> &R::Draft {
        &self.draft
    }

    /// Mutable access to the draft, for field handlers
    pub fn draft_mut(&mut self) -> &mut R::Draft {
        &mut self.draft
    }

    /// The active alert, if any
    pub fn alert(&self) -> Option<&ScreenAlert> {
        self.alert.as_ref()
    }

    /// Identifier awaiting delete confirmation
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Whether a save is in flight
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    // ========================================================================
    // Load
    // ========================================================================

    /// Enter the loading state for an initial or refresh fetch
    pub fn begin_load(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// Apply the outcome of a list fetch
    ///
    /// Success replaces the entire cached collection and clears the
    /// inline error. Failure leaves an empty collection and an inline
    /// message; the screen stays usable either way.
    pub fn finish_load(&mut self, result: ConsoleResult<Vec<R>>) {
        self.load_state = LoadState::Idle;
        match result {
            Ok(items) => {
                debug!("loaded {} {}", items.len(), R::NOUN_PLURAL);
                self.items = items;
                self.load_error = None;
            }
            Err(e) => {
                warn!("loading {} failed: {}", R::NOUN_PLURAL, e);
                self.items.clear();
                self.load_error = Some(e.user_message());
            }
        }
    }

    // ========================================================================
    // Dialog
    // ========================================================================

    /// Open the dialog with an empty draft for a new entity
    pub fn open_create(&mut self) {
        self.draft = R::Draft::default();
        self.edit_id = None;
        self.alert = None;
        self.dialog = DialogMode::Create;
        self.epoch += 1;
    }

    /// Open the dialog seeded from the cached row with this identifier
    ///
    /// Returns `false` without opening anything when the identifier is no
    /// longer present in the cached collection (a stale row).
    pub fn open_edit(&mut self, id: &str) -> bool {
        let Some(entity) = self.items.iter().find(|item| item.id() == id) else {
            debug!("edit ignored, {} '{}' no longer in list", R::NOUN, id);
            return false;
        };
        self.draft = R::Draft::from_entity(entity);
        self.edit_id = Some(id.to_string());
        self.alert = None;
        self.dialog = DialogMode::Edit;
        self.epoch += 1;
        true
    }

    /// Discard the draft and close the dialog
    pub fn cancel_dialog(&mut self) {
        self.draft = R::Draft::default();
        self.edit_id = None;
        self.alert = None;
        self.dialog = DialogMode::Closed;
        self.saving = false;
        self.epoch += 1;
    }

    // ========================================================================
    // Save
    // ========================================================================

    /// Validate the draft and produce the network action
    ///
    /// On validation failure this records a blocking alert and returns
    /// `None`, and no network call may be issued. On success the caller runs
    /// the returned action and reports back via
    /// [`finish_save`](Self::finish_save) with the epoch token.
    pub fn submit(&mut self) -> Option<(u64, SaveAction<R>)> {
        if self.dialog == DialogMode::Closed {
            return None;
        }

        let entity = match self.draft.build() {
            Ok(entity) => entity,
            Err(errors) => {
                self.alert = Some(ScreenAlert {
                    message: errors.join("\n"),
                    kind: AlertKind::Validation,
                });
                return None;
            }
        };

        self.alert = None;
        self.saving = true;

        let action = match self.dialog {
            DialogMode::Edit => SaveAction::Update {
                id: self
                    .edit_id
                    .clone()
                    .unwrap_or_else(|| entity.id().to_string()),
                entity,
            },
            _ => SaveAction::Create(entity),
        };

        Some((self.epoch, action))
    }

    /// Apply the outcome of a create/update call
    ///
    /// Returns `true` when the save succeeded and the caller should
    /// refetch the collection. A result from a stale dialog session
    /// (mismatched epoch, or the dialog already closed) is dropped
    /// wholesale: it must not touch the draft or the dialog flag.
    pub fn finish_save(&mut self, epoch: u64, result: ConsoleResult<()>) -> bool {
        if epoch != self.epoch || self.dialog == DialogMode::Closed {
            debug!("stale save result for {} ignored", R::NOUN);
            return false;
        }

        self.saving = false;
        match result {
            Ok(()) => {
                self.draft = R::Draft::default();
                self.edit_id = None;
                self.alert = None;
                self.dialog = DialogMode::Closed;
                self.epoch += 1;
                true
            }
            Err(e) => {
                warn!("saving {} failed: {}", R::NOUN, e);
                self.alert = Some(ScreenAlert {
                    message: e.user_message(),
                    kind: AlertKind::Retryable,
                });
                false
            }
        }
    }

    // ========================================================================
    // Delete
    // ========================================================================

    /// Ask for confirmation before deleting this identifier
    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.pending_delete = Some(id.into());
    }

    /// The confirmation question, naming the identifier
    pub fn delete_prompt(&self) -> Option<String> {
        self.pending_delete.as_ref().map(|id| {
            format!(
                "Are you sure you want to delete {} with ID: {}?",
                R::NOUN,
                id
            )
        })
    }

    /// Confirm the pending delete, handing the identifier to the caller
    /// for the network call
    pub fn confirm_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    /// Dismiss the pending delete without doing anything
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Apply the outcome of a delete call
    ///
    /// Returns `true` when the caller should refetch. Failure leaves the
    /// cached list untouched and records a retryable alert.
    pub fn finish_delete(&mut self, result: ConsoleResult<()>) -> bool {
        match result {
            Ok(()) => {
                self.alert = None;
                true
            }
            Err(e) => {
                warn!("deleting {} failed: {}", R::NOUN, e);
                self.alert = Some(ScreenAlert {
                    message: e.user_message(),
                    kind: AlertKind::Retryable,
                });
                false
            }
        }
    }

    /// Dismiss the active alert
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}

// ============================================================================
// Topping Board
// ============================================================================

/// Per-pizza topping names, resolved by independent lookups
///
/// After the pizza list loads, one lookup runs per pizza identifier with
/// no mutual ordering. Each completion writes only its own key, so results
/// may land in any order without lost updates. `begin` replaces the whole
/// mapping with pending cells for exactly the current identifiers; a
/// resolution arriving for an identifier outside the current batch is
/// dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToppingBoard {
    cells: HashMap<String, ToppingCell>,
}

/// One pizza's topping column
#[derive(Debug, Clone, PartialEq)]
pub enum ToppingCell {
    /// Lookup still in flight
    Pending,
    /// Topping names, possibly empty
    Ready(Vec<String>),
}

impl ToppingBoard {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new lookup batch, replacing any prior mapping
    pub fn begin(&mut self, ids: impl IntoIterator<Item = String>) {
        self.cells = ids
            .into_iter()
            .map(|id| (id, ToppingCell::Pending))
            .collect();
    }

    /// Record one pizza's topping names
    pub fn resolve(&mut self, id: &str, names: Vec<String>) {
        if let Some(cell) = self.cells.get_mut(id) {
            *cell = ToppingCell::Ready(names);
        } else {
            debug!("topping lookup for '{}' resolved after batch was replaced", id);
        }
    }

    /// Get one pizza's cell
    pub fn get(&self, id: &str) -> Option<&ToppingCell> {
        self.cells.get(id)
    }

    /// The topping column text for one pizza row
    pub fn display(&self, id: &str) -> String {
        match self.cells.get(id) {
            Some(ToppingCell::Ready(names)) => names.join(", "),
            _ => "Loading...".to_string(),
        }
    }

    /// Whether every lookup in the current batch has resolved
    pub fn is_settled(&self) -> bool {
        self.cells
            .values()
            .all(|cell| matches!(cell, ToppingCell::Ready(_)))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use console_core::ConsoleError;
    use console_model::{Topping, ToppingDraft};
    use pretty_assertions::assert_eq;

    fn loaded_controller() -> ScreenController<Topping> {
        let mut controller = ScreenController::new();
        controller.begin_load();
        controller.finish_load(Ok(vec![
            Topping::new("T1", "Cheese", 1.5),
            Topping::new("T2", "Olives", 0.75),
        ]));
        controller
    }

    fn valid_draft() -> ToppingDraft {
        ToppingDraft {
            topping_id: "T3".to_string(),
            name: "Basil".to_string(),
            price: "0.50".to_string(),
        }
    }

    #[test]
    fn test_load_success() {
        let controller = loaded_controller();
        assert!(!controller.is_loading());
        assert_eq!(controller.items().len(), 2);
        assert!(controller.load_error().is_none());
    }

    #[test]
    fn test_load_failure_degrades_to_empty_list() {
        let mut controller = loaded_controller();
        controller.begin_load();
        assert!(controller.is_loading());

        controller.finish_load(Err(ConsoleError::fetch("toppings", "connection refused")));
        assert!(!controller.is_loading());
        assert!(controller.items().is_empty());
        assert_eq!(
            controller.load_error(),
            Some("Failed to load toppings. Please try again later.")
        );
    }

    #[test]
    fn test_reload_clears_previous_error() {
        let mut controller = ScreenController::<Topping>::new();
        controller.finish_load(Err(ConsoleError::fetch("toppings", "boom")));
        assert!(controller.load_error().is_some());

        controller.finish_load(Ok(vec![Topping::new("T1", "Cheese", 1.5)]));
        assert!(controller.load_error().is_none());
        assert_eq!(controller.items().len(), 1);
    }

    #[test]
    fn test_open_create_resets_draft() {
        let mut controller = loaded_controller();
        controller.draft_mut().name = "leftover".to_string();

        controller.open_create();
        assert_eq!(controller.dialog(), DialogMode::Create);
        assert_eq!(controller.draft(), &ToppingDraft::default());
    }

    #[test]
    fn test_open_edit_seeds_draft() {
        let mut controller = loaded_controller();
        assert!(controller.open_edit("T2"));
        assert_eq!(controller.dialog(), DialogMode::Edit);
        assert_eq!(controller.draft().topping_id, "T2");
        assert_eq!(controller.draft().name, "Olives");
    }

    #[test]
    fn test_open_edit_stale_id_is_noop() {
        let mut controller = loaded_controller();
        assert!(!controller.open_edit("ghost"));
        assert_eq!(controller.dialog(), DialogMode::Closed);
    }

    #[test]
    fn test_submit_closed_dialog_is_noop() {
        let mut controller = loaded_controller();
        assert!(controller.submit().is_none());
    }

    #[test]
    fn test_submit_invalid_draft_blocks_network() {
        let mut controller = loaded_controller();
        controller.open_create();
        controller.draft_mut().price = "not a number".to_string();

        assert!(controller.submit().is_none());
        let alert = controller.alert().expect("validation alert");
        assert_eq!(alert.kind, AlertKind::Validation);
        // dialog stays open with the draft intact
        assert!(controller.dialog_open());
        assert_eq!(controller.draft().price, "not a number");
    }

    #[test]
    fn test_submit_create_then_success_closes_dialog() {
        let mut controller = loaded_controller();
        controller.open_create();
        *controller.draft_mut() = valid_draft();

        let (epoch, action) = controller.submit().expect("save action");
        assert!(controller.is_saving());
        match action {
            SaveAction::Create(entity) => assert_eq!(entity.topping_id, "T3"),
            other => panic!("expected create, got {:?}", other),
        }

        assert!(controller.finish_save(epoch, Ok(())));
        assert_eq!(controller.dialog(), DialogMode::Closed);
        assert!(!controller.is_saving());
    }

    #[test]
    fn test_submit_edit_targets_original_id() {
        let mut controller = loaded_controller();
        assert!(controller.open_edit("T1"));
        controller.draft_mut().name = "Extra Cheese".to_string();

        let (_, action) = controller.submit().expect("save action");
        match action {
            SaveAction::Update { id, entity } => {
                assert_eq!(id, "T1");
                assert_eq!(entity.name, "Extra Cheese");
            }
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn test_save_failure_keeps_dialog_and_draft() {
        let mut controller = loaded_controller();
        controller.open_create();
        *controller.draft_mut() = valid_draft();

        let (epoch, _) = controller.submit().expect("save action");
        assert!(!controller.finish_save(epoch, Err(ConsoleError::save_status("topping", 500))));

        assert!(controller.dialog_open());
        assert_eq!(controller.draft(), &valid_draft());
        let alert = controller.alert().expect("retryable alert");
        assert_eq!(alert.kind, AlertKind::Retryable);
    }

    #[test]
    fn test_stale_save_result_is_dropped() {
        let mut controller = loaded_controller();
        controller.open_create();
        *controller.draft_mut() = valid_draft();
        let (epoch, _) = controller.submit().expect("save action");

        // Dialog closes before the response lands
        controller.cancel_dialog();
        controller.open_create();
        controller.draft_mut().name = "fresh draft".to_string();

        assert!(!controller.finish_save(epoch, Ok(())));
        // the new dialog session is untouched
        assert!(controller.dialog_open());
        assert_eq!(controller.draft().name, "fresh draft");
    }

    #[test]
    fn test_second_save_press_while_pending() {
        let mut controller = loaded_controller();
        controller.open_create();
        *controller.draft_mut() = valid_draft();

        let (epoch_a, _) = controller.submit().expect("first press");
        let (epoch_b, _) = controller.submit().expect("second press");
        assert_eq!(epoch_a, epoch_b);

        // First response closes the dialog; the duplicate is then stale
        assert!(controller.finish_save(epoch_a, Ok(())));
        assert!(!controller.finish_save(epoch_b, Ok(())));
        assert_eq!(controller.dialog(), DialogMode::Closed);
    }

    #[test]
    fn test_delete_confirmation_flow() {
        let mut controller = loaded_controller();
        controller.request_delete("T1");
        assert_eq!(controller.pending_delete(), Some("T1"));
        assert_eq!(
            controller.delete_prompt().as_deref(),
            Some("Are you sure you want to delete topping with ID: T1?")
        );

        assert_eq!(controller.confirm_delete().as_deref(), Some("T1"));
        assert!(controller.pending_delete().is_none());
        assert!(controller.finish_delete(Ok(())));
    }

    #[test]
    fn test_delete_cancelled() {
        let mut controller = loaded_controller();
        controller.request_delete("T1");
        controller.cancel_delete();
        assert!(controller.pending_delete().is_none());
        assert!(controller.confirm_delete().is_none());
    }

    #[test]
    fn test_delete_failure_leaves_list_unchanged() {
        let mut controller = loaded_controller();
        let before = controller.items().to_vec();

        controller.request_delete("T1");
        controller.confirm_delete();
        let refetch = controller.finish_delete(Err(ConsoleError::delete(
            "topping",
            "T1",
            "server returned status 500",
        )));

        assert!(!refetch);
        assert_eq!(controller.items(), &before[..]);
        assert_eq!(
            controller.alert().map(|a| a.kind),
            Some(AlertKind::Retryable)
        );
    }

    // ========================================================================
    // ToppingBoard
    // ========================================================================

    #[test]
    fn test_board_out_of_order_resolution() {
        let mut board = ToppingBoard::new();
        board.begin(vec!["P1".to_string(), "P2".to_string()]);
        assert_eq!(board.display("P1"), "Loading...");
        assert_eq!(board.display("P2"), "Loading...");
        assert!(!board.is_settled());

        // P2 resolves before P1
        board.resolve("P2", vec!["Mushrooms".to_string()]);
        board.resolve("P1", vec!["Cheese".to_string(), "Olives".to_string()]);

        assert_eq!(board.display("P1"), "Cheese, Olives");
        assert_eq!(board.display("P2"), "Mushrooms");
        assert!(board.is_settled());
    }

    #[test]
    fn test_board_failed_lookup_is_empty_for_that_pizza_only() {
        let mut board = ToppingBoard::new();
        board.begin(vec!["P1".to_string(), "P2".to_string()]);

        board.resolve("P1", Vec::new());
        board.resolve("P2", vec!["Peppers".to_string()]);

        assert_eq!(board.display("P1"), "");
        assert_eq!(board.display("P2"), "Peppers");
    }

    #[test]
    fn test_board_begin_replaces_prior_mapping() {
        let mut board = ToppingBoard::new();
        board.begin(vec!["P1".to_string()]);
        board.resolve("P1", vec!["Cheese".to_string()]);

        board.begin(vec!["P2".to_string()]);
        assert!(board.get("P1").is_none());
        assert_eq!(board.display("P2"), "Loading...");
    }

    #[test]
    fn test_board_stale_resolution_dropped() {
        let mut board = ToppingBoard::new();
        board.begin(vec!["P1".to_string()]);
        board.begin(vec!["P2".to_string()]);

        // lookup from the superseded batch lands late
        board.resolve("P1", vec!["Cheese".to_string()]);
        assert!(board.get("P1").is_none());
    }
}
