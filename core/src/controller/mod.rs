//! The catalogue controller: translates user intents into record-store
//! operations and pushes the resulting view state back to the presentation
//! surface. Every failure is converted to a notification at this boundary;
//! nothing panics and no mutation is partially applied.

use crate::error::ValidationError;
use crate::store::DataStore;
use crate::types::{Field, Filter, Treasure};

/// The presentation-surface contract. The controller pushes view state
/// through it; the surface never touches the store or owns persistence.
pub trait Surface {
    /// Replace the rendered record list.
    fn show_entries(&mut self, entries: &[Treasure]);
    /// Populate the category and country filter selectors.
    fn show_filters(&mut self, categories: &[String], countries: &[String]);
    /// Show one record's detail fields, or clear them.
    fn focus(&mut self, entry: Option<&Treasure>);
    /// Deliver a user-facing message.
    fn notify(&mut self, message: &str);
}

/// A user intent emitted by the presentation surface.
#[derive(Debug, Clone)]
pub enum Action {
    /// Select an entry by its position in the last rendered list.
    Select(Option<usize>),
    SetCategoryFilter(Option<Field>),
    SetCountryFilter(Option<Field>),
    ClearFilters,
    SearchByName(String),
    SearchByNumber(String),
    Create(EntryDraft),
    Update(EntryDraft),
    Delete,
    Undo,
    Save,
}

/// Raw field values read back from the surface's input fields.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub catalogue_number: String,
    pub name: String,
    pub image_path: String,
    pub category: String,
    pub country: String,
}

impl EntryDraft {
    pub fn build(&self) -> Result<Treasure, ValidationError> {
        Treasure::new(
            &self.catalogue_number,
            &self.name,
            &self.image_path,
            &self.category,
            &self.country,
        )
    }
}

pub struct Controller<S: Surface> {
    store: DataStore,
    surface: S,
    filter: Filter,
    selection: Option<Treasure>,
    visible: Vec<Treasure>,
}

impl<S: Surface> Controller<S> {
    /// Takes ownership of an already-loaded store and the surface.
    pub fn new(store: DataStore, surface: S) -> Self {
        Self {
            store,
            surface,
            filter: Filter::default(),
            selection: None,
            visible: Vec::new(),
        }
    }

    /// Pushes the initial filter selectors and the full entry list.
    pub fn start(&mut self) {
        self.surface
            .show_filters(&self.store.categories(), &self.store.countries());
        self.refresh();
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn selection(&self) -> Option<&Treasure> {
        self.selection.as_ref()
    }

    /// Re-renders the entry list under the current filter.
    pub fn refresh(&mut self) {
        self.visible = self
            .store
            .filtered(&self.filter)
            .into_iter()
            .cloned()
            .collect();
        self.surface.show_entries(&self.visible);
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Select(None) => {
                self.selection = None;
                self.surface.focus(None);
            }
            Action::Select(Some(index)) => match self.visible.get(index) {
                Some(entry) => {
                    self.selection = Some(entry.clone());
                    self.surface.focus(self.selection.as_ref());
                }
                None => self.surface.notify("No such entry in the current list"),
            },

            Action::SetCategoryFilter(category) => {
                self.filter.category = category;
                self.selection = None;
                self.refresh();
                self.surface.focus(None);
            }
            Action::SetCountryFilter(country) => {
                self.filter.country = country;
                self.selection = None;
                self.refresh();
                self.surface.focus(None);
            }
            Action::ClearFilters => {
                if self.filter.is_empty() {
                    self.surface.notify("No filters are set");
                    return;
                }
                self.filter.clear();
                self.selection = None;
                self.refresh();
                self.surface.focus(None);
            }

            Action::SearchByName(query) => {
                if query.is_empty() {
                    self.surface.notify("No query given for search!");
                    return;
                }
                match self.store.find_by_name(&query).cloned() {
                    Some(found) => {
                        self.selection = Some(found);
                        self.surface.focus(self.selection.as_ref());
                    }
                    None => self
                        .surface
                        .notify(&format!("No matching name found for {query}")),
                }
            }
            Action::SearchByNumber(query) => {
                if query.is_empty() {
                    self.surface.notify("No query given for search!");
                    return;
                }
                match self.store.find_by_number(&query).cloned() {
                    Some(found) => {
                        self.selection = Some(found);
                        self.surface.focus(self.selection.as_ref());
                    }
                    None => self
                        .surface
                        .notify(&format!("No matching number found for {query}")),
                }
            }

            Action::Create(draft) => match draft.build() {
                Ok(treasure) => {
                    self.store.create(treasure.clone());
                    self.selection = Some(treasure);
                    self.refresh();
                    self.surface.focus(self.selection.as_ref());
                }
                Err(err) => self.surface.notify(&format!("Cannot create: {err}")),
            },
            Action::Update(draft) => {
                let Some(old) = self.selection.clone() else {
                    self.surface
                        .notify("Select an entry before attempting to update it");
                    return;
                };
                match draft.build() {
                    Ok(new) => {
                        self.store.update(&old, new.clone());
                        self.selection = Some(new);
                        self.refresh();
                        self.surface.focus(self.selection.as_ref());
                    }
                    Err(err) => self.surface.notify(&format!("Cannot update: {err}")),
                }
            }
            Action::Delete => {
                let Some(selected) = self.selection.take() else {
                    self.surface
                        .notify("Select an entry before attempting to delete it!");
                    return;
                };
                self.store.delete(&selected);
                self.refresh();
                self.surface.focus(None);
            }
            Action::Undo => match self.store.undo() {
                Some(restored) => {
                    self.selection = Some(restored);
                    self.refresh();
                    self.surface.focus(self.selection.as_ref());
                }
                None => self.surface.notify("Cannot undo: No undo history left!"),
            },

            Action::Save => match self.store.save() {
                Ok(()) => self.surface.notify(&format!(
                    "Saved {} entries to {}",
                    self.store.len(),
                    self.store.path().display()
                )),
                Err(err) => {
                    tracing::error!(error = %err, "save failed");
                    self.surface.notify(&format!("Cannot save: {err}"));
                }
            },
        }
    }
}
