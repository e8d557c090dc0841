//! Runtime state of the supplier screen.

use std::collections::HashMap;

use common::model::group::SupplierGroup;
use common::model::person::Person;
use common::model::unit::Unit;
use common::model::RecordId;
use common::session::EditSession;

use crate::api::HttpSupplierApi;

/// The unit detail dialog, when shown.
pub enum UnitDetail {
    Loading(RecordId),
    Ready(Unit),
}

/// Fields are `pub` because they are read by `view` and written by `update`.
pub struct SupplierManagement {
    pub api: HttpSupplierApi,

    /// Catalog as last loaded, groups with units and their certificates.
    pub groups: Vec<SupplierGroup>,
    pub loading: bool,
    /// Set when the catalog could not be loaded; replaces the list.
    pub load_error: Option<String>,

    pub search: String,
    /// Per-card unit search, keyed by supplier id.
    pub unit_search: HashMap<RecordId, String>,

    pub unit_detail: Option<UnitDetail>,

    /// Editor dialog lifecycle.
    pub session: EditSession,
    pub persons: Vec<Person>,
    pub persons_loading: bool,

    /// Supplier waiting for delete confirmation.
    pub pending_delete: Option<RecordId>,
    pub deleting: bool,
}

impl SupplierManagement {
    pub fn new(api: HttpSupplierApi) -> Self {
        Self {
            api,
            groups: Vec::new(),
            loading: true,
            load_error: None,
            search: String::new(),
            unit_search: HashMap::new(),
            unit_detail: None,
            session: EditSession::default(),
            persons: Vec::new(),
            persons_loading: false,
            pending_delete: None,
            deleting: false,
        }
    }

    pub fn group(&self, supplier_id: RecordId) -> Option<&SupplierGroup> {
        self.groups
            .iter()
            .find(|group| group.supplier_id == Some(supplier_id))
    }

    pub fn unit_search_term(&self, supplier_id: RecordId) -> &str {
        self.unit_search
            .get(&supplier_id)
            .map(String::as_str)
            .unwrap_or("")
    }
}
