//! # Session Controller
//!
//! A [`Session`] owns the transient UI state (page, search text, sort key, the
//! create/edit form) and wires user actions to the API. The state is an explicit
//! [`SessionState`] value; the recompute chain (query → paginate → present)
//! only ever reads it.
//!
//! Transitions:
//!
//! | action            | state change                       | then      |
//! |-------------------|------------------------------------|-----------|
//! | `set_search`      | search := text, page := 1          | recompute |
//! | `set_sort`        | sort := key                        | recompute |
//! | `go_to_page`      | page := n (clamped on recompute)   | recompute |
//! | `open_new`        | form := empty                      |           |
//! | `open_edit`       | form := product's values           |           |
//! | `save`            | validate, upsert, form closed      | recompute |
//! | `cancel`          | form closed                        |           |
//! | `delete`          | confirm, delete                    | recompute |
//! | `export`          | last_export := now                 |           |
//! | `import`          | replace collection                 | recompute |
//!
//! Nothing here is persisted except through the API.

use crate::api::{CmdMessage, CmdResult, StockroomApi};
use crate::commands::list::ListQuery;
use crate::error::{Result, StockroomError};
use crate::ids::new_id;
use crate::model::{timestamp_now, Product, ProductForm};
use crate::presenter::{present, TableView};
use crate::sort::SortKey;
use crate::store::KeyValueStore;
use chrono::{DateTime, Utc};
use std::io::Write;
use tracing::debug;

/// The create/edit form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Creating(ProductForm),
    Editing(ProductForm),
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    pub fn form(&self) -> Option<&ProductForm> {
        match self {
            Modal::Closed => None,
            Modal::Creating(form) | Modal::Editing(form) => Some(form),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub page: usize,
    pub page_size: usize,
    pub search: String,
    pub sort: SortKey,
    pub modal: Modal,
    /// When the collection was last exported. Informational only.
    pub last_export: Option<DateTime<Utc>>,
}

impl SessionState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            search: String::new(),
            sort: SortKey::default(),
            modal: Modal::Closed,
            last_export: None,
        }
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            search: self.search.clone(),
            sort: self.sort,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

pub struct Session<S: KeyValueStore> {
    api: StockroomApi<S>,
    state: SessionState,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(api: StockroomApi<S>) -> Self {
        let state = SessionState::new(api.page_size());
        Self { api, state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn api(&self) -> &StockroomApi<S> {
        &self.api
    }

    /// Reloads the collection and recomputes the visible page.
    /// A page past the end is clamped, and the clamped value is kept.
    pub fn render(&mut self) -> Result<TableView> {
        let page = crate::commands::list::page(self.api.store(), &self.state.query());
        if page.number != self.state.page {
            debug!(requested = self.state.page, page = page.number, "page clamped");
            self.state.page = page.number;
        }
        Ok(present(&page, &self.api.money_format()))
    }

    pub fn set_search(&mut self, text: &str) -> Result<TableView> {
        self.state.search = text.to_string();
        self.state.page = 1;
        self.render()
    }

    pub fn set_sort(&mut self, sort: SortKey) -> Result<TableView> {
        self.state.sort = sort;
        self.render()
    }

    pub fn go_to_page(&mut self, page: usize) -> Result<TableView> {
        self.state.page = page.max(1);
        self.render()
    }

    pub fn open_new(&mut self) -> &ProductForm {
        self.state.modal = Modal::Creating(ProductForm::default());
        self.current_form()
    }

    pub fn open_edit(&mut self, id: &str) -> Result<&ProductForm> {
        let product = self
            .api
            .find(id)
            .ok_or_else(|| StockroomError::ProductNotFound(id.to_string()))?;
        self.state.modal = Modal::Editing(ProductForm::from_product(&product));
        Ok(self.current_form())
    }

    fn current_form(&self) -> &ProductForm {
        static EMPTY: ProductForm = ProductForm {
            id: String::new(),
            name: String::new(),
            category: String::new(),
            price: String::new(),
            stock: String::new(),
        };
        self.state.modal.form().unwrap_or(&EMPTY)
    }

    /// Validates and stores the form.
    ///
    /// On a validation error the form stays open holding the submitted values
    /// and nothing is written. On success the form closes and the returned
    /// result carries the re-rendered table.
    pub fn save(&mut self, form: ProductForm) -> Result<CmdResult> {
        let valid = match form.validate() {
            Ok(valid) => valid,
            Err(e) => {
                debug!(error = %e, "form rejected");
                self.state.modal = if form.is_edit() {
                    Modal::Editing(form)
                } else {
                    Modal::Creating(form)
                };
                return Err(e.into());
            }
        };

        let now = timestamp_now();
        let (id, created_at) = match valid.id {
            Some(id) => {
                let created_at = self.api.find(&id).map(|p| p.created_at).unwrap_or(now);
                (id, created_at)
            }
            None => (new_id(now), now),
        };
        let product = Product::new(
            id,
            valid.name,
            valid.category,
            valid.price,
            valid.stock,
            created_at,
        );

        let result = self.api.upsert(product)?;
        self.state.modal = Modal::Closed;
        Ok(result.with_table(self.render()?))
    }

    pub fn cancel(&mut self) {
        self.state.modal = Modal::Closed;
    }

    /// Deletes after `confirm` agrees. Declining leaves everything untouched.
    pub fn delete<F>(&mut self, id: &str, confirm: F) -> Result<CmdResult>
    where
        F: FnOnce(&Product) -> bool,
    {
        let product = self
            .api
            .find(id)
            .ok_or_else(|| StockroomError::ProductNotFound(id.to_string()))?;

        if !confirm(&product) {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info("Nothing deleted."));
            return Ok(result);
        }

        let result = self.api.delete(id)?;
        Ok(result.with_table(self.render()?))
    }

    pub fn export<W: Write>(&mut self, writer: W) -> Result<CmdResult> {
        let result = self.api.export(writer)?;
        self.state.last_export = Some(timestamp_now());
        Ok(result)
    }

    pub fn import(&mut self, text: &str) -> Result<CmdResult> {
        let result = self.api.import(text)?;
        Ok(result.with_table(self.render()?))
    }
}
