//! Units (sites) of a supplier.
//!
//! A unit carries a large flat set of optional attributes. They are declared
//! once in `unit_details!` which generates the record struct together with
//! the `UnitField`/`UnitFlag` selectors used by the editor and the views.

use serde::{Deserialize, Serialize};

use crate::model::RecordId;
use crate::model::certificate::Certificate;
use crate::model::lenient;
use crate::model::person::ResponsiblePerson;

macro_rules! unit_details {
    (
        text { $($tv:ident => $tf:ident, $tlabel:literal;)* }
        flags { $($fv:ident => $ff:ident, $flabel:literal;)* }
    ) => {
        /// Flat descriptive attributes of a unit, sent as-is in unit payloads.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct UnitDetails {
            $(
                #[serde(
                    default,
                    deserialize_with = "lenient::text",
                    serialize_with = "lenient::empty_as_null"
                )]
                pub $tf: String,
            )*
            $(
                #[serde(default, deserialize_with = "lenient::flag")]
                pub $ff: bool,
            )*
        }

        /// Text attributes of a unit.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum UnitField {
            $($tv,)*
        }

        impl UnitField {
            pub const ALL: &'static [UnitField] = &[$(UnitField::$tv,)*];

            /// Wire name of the field.
            pub fn key(self) -> &'static str {
                match self {
                    $(UnitField::$tv => stringify!($tf).trim_start_matches("r#"),)*
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $(UnitField::$tv => $tlabel,)*
                }
            }
        }

        /// Boolean attributes of a unit.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum UnitFlag {
            $($fv,)*
        }

        impl UnitFlag {
            pub const ALL: &'static [UnitFlag] = &[$(UnitFlag::$fv,)*];

            pub fn key(self) -> &'static str {
                match self {
                    $(UnitFlag::$fv => stringify!($ff),)*
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $(UnitFlag::$fv => $flabel,)*
                }
            }
        }

        impl UnitDetails {
            pub fn text(&self, field: UnitField) -> &str {
                match field {
                    $(UnitField::$tv => &self.$tf,)*
                }
            }

            pub fn text_mut(&mut self, field: UnitField) -> &mut String {
                match field {
                    $(UnitField::$tv => &mut self.$tf,)*
                }
            }

            pub fn flag(&self, flag: UnitFlag) -> bool {
                match flag {
                    $(UnitFlag::$fv => self.$ff,)*
                }
            }

            pub fn flag_mut(&mut self, flag: UnitFlag) -> &mut bool {
                match flag {
                    $(UnitFlag::$fv => &mut self.$ff,)*
                }
            }
        }
    };
}

unit_details! {
    text {
        UnitName => unit_name, "Unit Name";
        City => city, "City";
        Country => country, "Country";
        ZoneName => zone_name, "Zone";
        AccountName => account_name, "Account Name";
        ParentAccount => parent_account, "Parent Account";
        KeyAccountManager => ke_account_manager, "Key Account Manager";
        MainContact => avo_carbon_main_contact, "AVO Carbon Main Contact";
        TechLead => avo_carbon_tech_lead, "AVO Carbon Tech Lead";
        Type => r#type, "Type";
        Industry => industry, "Industry";
        AccountOwner => account_owner, "Account Owner";
        Phone => phone, "Phone";
        Website => website, "Website";
        Employees => employees, "Employees";
        UsefulInformation => useful_information, "Useful Information";
        BillingAccountNumber => billing_account_number, "Billing Account Number";
        ProductFamily => product_family, "Product Family";
        AccountCurrency => account_currency, "Account Currency";
        StartYear => start_year, "Start Year";
        SolventCustomer => solvent_customer, "Solvent Customer";
        SolvencyInfo => solvency_info, "Solvency Info";
        Budget => budget_avo_carbon, "Budget AVO Carbon";
        PotentialBusiness => avo_carbon_potential_buisness, "AVO Carbon Potential Business";
        BillingAddressSearch => billing_address_search, "Billing Address Search";
        BillingStreet => billing_street, "Billing Street";
        BillingCity => billing_city, "Billing City";
        BillingState => billing_state, "Billing State/Province";
        BillingZip => billing_zip, "Billing Zip/Postal Code";
        BillingCountry => billing_country, "Billing Country";
        ShippingAddressSearch => shippping_address_search, "Shipping Address Search";
        ShippingStreet => shipping_street, "Shipping Street";
        ShippingCity => shipping_city, "Shipping City";
        ShippingState => shipping_state, "Shipping State/Province";
        ShippingZip => shipping_zip, "Shipping Zip/Postal Code";
        ShippingCountry => shipping_country, "Shipping Country";
        TermsOfPurchase => terms_purshase, "Terms of Purchase";
        PaymentConditions => payment_conditions, "Payment Conditions";
        TechKeyAccount => tech_key_account, "Tech Key Account";
    }
    flags {
        KeyAccount => key_account, "Key Account";
        CopyBilling => copy_billing, "Copy Billing to Shipping";
        ConfidentialityAgreement => confidentiality_agreement, "Confidentiality Agreement";
        QualityAgreement => quality_agreement, "Quality Agreement";
        LogisticsAgreement => logistics_agreement, "Logistics Agreement";
    }
}

/// Sections the unit attributes are grouped into by the form and the
/// detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSection {
    General,
    Account,
    Company,
    Billing,
    Shipping,
    Agreements,
}

impl UnitSection {
    pub const ALL: [UnitSection; 6] = [
        UnitSection::General,
        UnitSection::Account,
        UnitSection::Company,
        UnitSection::Billing,
        UnitSection::Shipping,
        UnitSection::Agreements,
    ];

    pub fn title(self) -> &'static str {
        match self {
            UnitSection::General => "General Information",
            UnitSection::Account => "Account Information",
            UnitSection::Company => "Company Information",
            UnitSection::Billing => "Billing Address",
            UnitSection::Shipping => "Shipping Address",
            UnitSection::Agreements => "Agreements",
        }
    }

    pub fn fields(self) -> &'static [UnitField] {
        use UnitField::*;
        match self {
            UnitSection::General => &[UnitName, City, Country, ZoneName],
            UnitSection::Account => &[
                AccountName,
                ParentAccount,
                KeyAccountManager,
                MainContact,
                TechLead,
                Type,
                Industry,
                AccountOwner,
                Phone,
                Website,
                Employees,
                UsefulInformation,
                BillingAccountNumber,
                ProductFamily,
                AccountCurrency,
            ],
            UnitSection::Company => &[
                StartYear,
                SolventCustomer,
                SolvencyInfo,
                Budget,
                PotentialBusiness,
            ],
            UnitSection::Billing => &[
                BillingAddressSearch,
                BillingStreet,
                BillingCity,
                BillingState,
                BillingZip,
                BillingCountry,
            ],
            UnitSection::Shipping => &[
                ShippingAddressSearch,
                ShippingStreet,
                ShippingCity,
                ShippingState,
                ShippingZip,
                ShippingCountry,
            ],
            UnitSection::Agreements => &[TermsOfPurchase, PaymentConditions, TechKeyAccount],
        }
    }

    pub fn flags(self) -> &'static [UnitFlag] {
        use UnitFlag::*;
        match self {
            UnitSection::Account => &[KeyAccount],
            UnitSection::Shipping => &[CopyBilling],
            UnitSection::Agreements => {
                &[ConfidentialityAgreement, QualityAgreement, LogisticsAgreement]
            }
            _ => &[],
        }
    }
}

/// An organizational site belonging to one supplier group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    #[serde(default, deserialize_with = "lenient::id")]
    pub unit_id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient::id")]
    pub supplier_id: Option<RecordId>,
    /// Owning group's name; only filled by the single-unit endpoint.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing)]
    pub supplier_name: String,
    #[serde(flatten)]
    pub details: UnitDetails,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing)]
    pub responsible: ResponsiblePerson,
    /// Absent on the wire means no certificates.
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing)]
    pub certificates: Vec<Certificate>,
}

impl Unit {
    pub fn name(&self) -> &str {
        &self.details.unit_name
    }

    /// Whether the unit name contains `term`, ignoring case.
    pub fn matches(&self, term: &str) -> bool {
        self.details
            .unit_name
            .to_lowercase()
            .contains(&term.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_unit_from_list_endpoint_decodes() {
        let unit: Unit =
            serde_json::from_str(r#"{"unit_id": 4, "unit_name": "Plant A", "city": null}"#)
                .unwrap();
        assert_eq!(unit.unit_id, Some(4));
        assert_eq!(unit.name(), "Plant A");
        assert_eq!(unit.details.city, "");
        assert!(unit.certificates.is_empty());
        assert!(!unit.responsible.is_assigned());
    }

    #[test]
    fn full_unit_decodes_nested_records() {
        let unit: Unit = serde_json::from_str(
            r#"{
                "unit_id": 9,
                "supplier_id": 2,
                "unit_name": "Plant B",
                "type": "Distributor",
                "employees": 120,
                "key_account": true,
                "responsible": {"Person_id": 5, "first_name": "Ada", "role": null},
                "certificates": [{"certificat_id": 1, "Type": "UL", "validity_date": "2027-01-01"}]
            }"#,
        )
        .unwrap();
        assert_eq!(unit.details.r#type, "Distributor");
        assert_eq!(unit.details.employees, "120");
        assert!(unit.details.key_account);
        assert_eq!(unit.responsible.person_id, Some(5));
        assert_eq!(unit.responsible.role, "Contact");
        assert_eq!(unit.certificates.len(), 1);
    }

    #[test]
    fn null_responsible_is_the_empty_snapshot() {
        let unit: Unit = serde_json::from_str(r#"{"unit_name": "X", "responsible": null}"#).unwrap();
        assert_eq!(unit.responsible, ResponsiblePerson::default());
    }

    #[test]
    fn field_keys_match_the_wire_names() {
        assert_eq!(UnitField::Type.key(), "type");
        assert_eq!(UnitField::PotentialBusiness.key(), "avo_carbon_potential_buisness");
        assert_eq!(UnitFlag::CopyBilling.key(), "copy_billing");
    }

    #[test]
    fn every_field_belongs_to_exactly_one_section() {
        for field in UnitField::ALL {
            let owners = UnitSection::ALL
                .iter()
                .filter(|s| s.fields().contains(field))
                .count();
            assert_eq!(owners, 1, "{:?}", field);
        }
        for flag in UnitFlag::ALL {
            let owners = UnitSection::ALL
                .iter()
                .filter(|s| s.flags().contains(flag))
                .count();
            assert_eq!(owners, 1, "{:?}", flag);
        }
    }
}
