//! Admin add/edit form state machine.
//!
//! ```text
//! Idle --start_add--> Adding --submit--> Idle      (store.add)
//! Idle --start_edit--> Editing(id) --submit--> Idle (store.update)
//! *    --cancel--> Idle                            (no store mutation)
//! ```
//!
//! At most one form is open: opening "add" while editing (or the reverse) is
//! refused with [`DomainError::Conflict`].

use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, ProductId};

use crate::form::ProductForm;
use crate::product::Product;
use crate::store::ProductStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "id", rename_all = "lowercase")]
pub enum EditorState {
    #[default]
    Idle,
    Adding,
    Editing(ProductId),
}

impl EditorState {
    pub fn is_open(self) -> bool {
        !matches!(self, EditorState::Idle)
    }
}

/// UI-owned editing session: current mode plus the pending form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminEditor {
    state: EditorState,
    form: ProductForm,
}

impl AdminEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProductForm {
        &mut self.form
    }

    /// Whether the "new product" action is available.
    pub fn can_start_new(&self) -> bool {
        !self.state.is_open()
    }

    pub fn start_add(&mut self) -> DomainResult<()> {
        match self.state {
            EditorState::Idle => {
                self.form.clear();
                self.state = EditorState::Adding;
                Ok(())
            }
            EditorState::Adding => Ok(()),
            EditorState::Editing(id) => Err(DomainError::conflict(format!(
                "cannot add a product while product {id} is being edited"
            ))),
        }
    }

    /// Open the edit form for `product`, pre-filled with its current values.
    ///
    /// Switching directly from editing one product to another is allowed.
    pub fn start_edit(&mut self, product: &Product) -> DomainResult<()> {
        if self.state == EditorState::Adding {
            return Err(DomainError::conflict(
                "cannot edit a product while a new product is being added",
            ));
        }
        self.form = ProductForm::from_product(product);
        self.state = EditorState::Editing(product.id());
        Ok(())
    }

    /// Close any open form, discarding its contents.
    pub fn cancel(&mut self) {
        self.form.clear();
        self.state = EditorState::Idle;
    }

    /// Validate the form and apply it to `store`.
    ///
    /// On a validation error nothing changes: the form stays open with the
    /// user's input so it can be corrected.
    pub fn submit(&mut self, store: &mut ProductStore) -> DomainResult<Product> {
        let saved = match self.state {
            EditorState::Idle => return Err(DomainError::invariant("no form is open")),
            EditorState::Adding => {
                let data = self.form.validate()?;
                let product = store.add(data)?;
                tracing::info!(product_id = %product.id(), "product created from admin form");
                product
            }
            EditorState::Editing(id) => {
                let data = self.form.validate()?;
                let product = Product::new(id, data);
                store.update(product.clone());
                tracing::info!(product_id = %id, "product updated from admin form");
                product
            }
        };

        self.cancel();
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Category;

    fn fill(editor: &mut AdminEditor) {
        let form = editor.form_mut();
        form.name = "Desk Lamp".to_string();
        form.category = "Home".to_string();
        form.price = "19.99".to_string();
        form.date = "2024-04-01".to_string();
    }

    #[test]
    fn add_flow_creates_product_and_returns_to_idle() {
        let mut store = ProductStore::with_sample_data();
        let mut editor = AdminEditor::new();
        assert!(editor.can_start_new());

        editor.start_add().unwrap();
        assert_eq!(editor.state(), EditorState::Adding);
        assert!(!editor.can_start_new());

        fill(&mut editor);
        let product = editor.submit(&mut store).unwrap();

        assert_eq!(product.id(), ProductId::new(6));
        assert_eq!(store.len(), 6);
        assert_eq!(editor.state(), EditorState::Idle);
        assert_eq!(editor.form(), &ProductForm::default());
    }

    #[test]
    fn edit_flow_updates_in_place() {
        let mut store = ProductStore::with_sample_data();
        let mut editor = AdminEditor::new();
        let target = store.get(ProductId::new(4)).unwrap().clone();

        editor.start_edit(&target).unwrap();
        assert_eq!(editor.state(), EditorState::Editing(ProductId::new(4)));
        assert_eq!(editor.form().name, "Coffee Maker");

        editor.form_mut().name = "Espresso Maker".to_string();
        editor.form_mut().category = "Electronics".to_string();
        let saved = editor.submit(&mut store).unwrap();

        assert_eq!(saved.id(), ProductId::new(4));
        assert_eq!(store.len(), 5);
        assert_eq!(store.list()[3].name(), "Espresso Maker");
        assert_eq!(store.list()[3].category(), Category::Electronics);
        assert_eq!(editor.state(), EditorState::Idle);
    }

    #[test]
    fn cancel_never_touches_store() {
        let mut store = ProductStore::with_sample_data();
        let before = store.clone();
        let mut editor = AdminEditor::new();

        editor.start_add().unwrap();
        fill(&mut editor);
        editor.cancel();
        assert_eq!(editor.state(), EditorState::Idle);
        assert_eq!(editor.form(), &ProductForm::default());

        let target = store.get(ProductId::new(1)).unwrap().clone();
        editor.start_edit(&target).unwrap();
        editor.form_mut().name = "Changed".to_string();
        editor.cancel();

        assert_eq!(store, before);
        // Submitting after cancel is refused and still leaves the store alone.
        assert!(matches!(
            editor.submit(&mut store),
            Err(DomainError::InvariantViolation(_))
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn add_while_editing_is_a_conflict() {
        let store = ProductStore::with_sample_data();
        let mut editor = AdminEditor::new();
        editor.start_edit(&store.list()[0]).unwrap();

        match editor.start_add() {
            Err(DomainError::Conflict(_)) => {}
            other => panic!("Expected Conflict, got {other:?}"),
        }
        assert_eq!(editor.state(), EditorState::Editing(ProductId::new(1)));
    }

    #[test]
    fn edit_while_adding_is_a_conflict() {
        let store = ProductStore::with_sample_data();
        let mut editor = AdminEditor::new();
        editor.start_add().unwrap();
        fill(&mut editor);

        match editor.start_edit(&store.list()[0]) {
            Err(DomainError::Conflict(_)) => {}
            other => panic!("Expected Conflict, got {other:?}"),
        }
        assert_eq!(editor.state(), EditorState::Adding);
        assert_eq!(editor.form().name, "Desk Lamp");
    }

    #[test]
    fn editing_can_switch_to_another_product() {
        let store = ProductStore::with_sample_data();
        let mut editor = AdminEditor::new();
        editor.start_edit(&store.list()[0]).unwrap();
        editor.start_edit(&store.list()[2]).unwrap();
        assert_eq!(editor.state(), EditorState::Editing(ProductId::new(3)));
        assert_eq!(editor.form().name, "Running Shoes");
    }

    #[test]
    fn invalid_submit_keeps_form_open() {
        let mut store = ProductStore::with_sample_data();
        let mut editor = AdminEditor::new();
        editor.start_add().unwrap();
        fill(&mut editor);
        editor.form_mut().price = "free".to_string();

        assert!(matches!(editor.submit(&mut store), Err(DomainError::Validation(_))));
        assert_eq!(editor.state(), EditorState::Adding);
        assert_eq!(editor.form().price, "free");
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn editing_a_product_deleted_meanwhile_is_silently_dropped() {
        let mut store = ProductStore::with_sample_data();
        let mut editor = AdminEditor::new();
        let target = store.get(ProductId::new(2)).unwrap().clone();
        editor.start_edit(&target).unwrap();

        store.delete(ProductId::new(2));
        let before = store.clone();
        editor.submit(&mut store).unwrap();

        assert_eq!(store, before);
        assert_eq!(editor.state(), EditorState::Idle);
    }

    #[test]
    fn start_add_twice_is_harmless() {
        let mut editor = AdminEditor::new();
        editor.start_add().unwrap();
        fill(&mut editor);
        editor.start_add().unwrap();
        assert_eq!(editor.state(), EditorState::Adding);
        assert_eq!(editor.form().name, "Desk Lamp");
    }

    #[test]
    fn state_serializes_as_tagged_variant() {
        let json = serde_json::to_value(EditorState::Editing(ProductId::new(3))).unwrap();
        assert_eq!(json, serde_json::json!({"mode": "editing", "id": 3}));
        let json = serde_json::to_value(EditorState::Idle).unwrap();
        assert_eq!(json, serde_json::json!({"mode": "idle"}));
    }
}
