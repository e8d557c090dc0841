use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SupplierManagementProps {
    /// Base URL of the supplier REST API, without a trailing slash.
    pub api_base_url: String,
}
