use common::editor::AggregateEditor;
use common::error::{ApiResult, SyncError};
use common::model::certificate::CertificateField;
use common::model::group::{GroupField, SupplierGroup};
use common::model::person::{Person, ResponsibleField};
use common::model::unit::{Unit, UnitField, UnitFlag};
use common::model::RecordId;
use common::session::Ticket;

pub enum Msg {
    LoadCatalog,
    CatalogLoaded(ApiResult<Vec<SupplierGroup>>),
    SetSearch(String),
    SetUnitSearch(RecordId, String),

    ViewUnit(RecordId),
    UnitLoaded(RecordId, ApiResult<Unit>),
    CloseUnitDetail,

    OpenCreate,
    OpenEdit(RecordId),
    EditorLoaded(Ticket, ApiResult<AggregateEditor>),
    PersonsLoaded(ApiResult<Vec<Person>>),
    Edit(EditMsg),
    Submit,
    Submitted(Ticket, Result<RecordId, SyncError>),
    DismissError,
    CloseEditor,

    ConfirmDelete(RecordId),
    CancelDelete,
    Delete,
    Deleted(RecordId, Result<(), String>),
}

/// Edits applied to the open aggregate. Indices are positions in the form.
pub enum EditMsg {
    SetGroupField(GroupField, String),
    AddUnit,
    RemoveUnit(usize),
    SetUnitField(usize, UnitField, String),
    SetUnitFlag(usize, UnitFlag, bool),
    SetResponsible(usize, ResponsibleField, String),
    SelectPerson(usize, Option<RecordId>),
    AddCertificate(usize),
    RemoveCertificate(usize, usize),
    SetCertificateField(usize, usize, CertificateField, String),
}
