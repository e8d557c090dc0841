//! Per-unit certificate diff.

use std::collections::HashSet;

use crate::model::RecordId;
use crate::model::certificate::Certificate;
use crate::requests::CertificatePayload;

/// One remote write needed to align a unit's certificates with the form.
#[derive(Debug, Clone, PartialEq)]
pub enum CertificateOp {
    Create(CertificatePayload),
    Update(RecordId, CertificatePayload),
    Delete(RecordId),
}

/// Diffs the certificates persisted for `unit_id` against the submitted
/// ones. Persisted ids missing from the submission are deleted; submitted
/// entries are updated when they carry an id and created otherwise.
///
/// Deletes come first in the returned list, but callers may run the
/// operations in any order.
pub fn plan_certificates(
    unit_id: RecordId,
    persisted: &[Certificate],
    submitted: &[Certificate],
) -> Vec<CertificateOp> {
    let kept: HashSet<RecordId> = submitted.iter().filter_map(|c| c.certificat_id).collect();

    let deletes = persisted
        .iter()
        .filter_map(|c| c.certificat_id)
        .filter(|id| !kept.contains(id))
        .collect::<HashSet<_>>()
        .into_iter()
        .map(CertificateOp::Delete);

    let writes = submitted.iter().map(|cert| {
        let payload = CertificatePayload::new(unit_id, cert);
        match cert.certificat_id {
            Some(id) => CertificateOp::Update(id, payload),
            None => CertificateOp::Create(payload),
        }
    });

    deletes.chain(writes).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persisted(id: RecordId) -> Certificate {
        Certificate {
            certificat_id: Some(id),
            cert_type: "UL".into(),
            validity_date: "2026-01-01".into(),
            ..Default::default()
        }
    }

    #[test]
    fn removed_kept_and_new_certificates() {
        let submitted = vec![
            persisted(2),
            Certificate {
                cert_type: "ISO 9001".into(),
                validity_date: "2025-01-01".into(),
                ..Default::default()
            },
        ];
        let ops = plan_certificates(5, &[persisted(1), persisted(2)], &submitted);

        assert_eq!(ops.len(), 3);
        assert!(ops.contains(&CertificateOp::Delete(1)));
        assert!(ops.iter().any(|op| matches!(op, CertificateOp::Update(2, p) if p.unit_id == 5)));
        assert!(ops.iter().any(
            |op| matches!(op, CertificateOp::Create(p) if p.cert_type == "ISO 9001" && p.unit_id == 5)
        ));
    }

    #[test]
    fn nothing_persisted_nothing_submitted() {
        assert!(plan_certificates(1, &[], &[]).is_empty());
    }

    #[test]
    fn persisted_rows_without_id_are_never_deleted() {
        let orphan = Certificate::default();
        assert!(plan_certificates(1, &[orphan], &[]).is_empty());
    }
}
